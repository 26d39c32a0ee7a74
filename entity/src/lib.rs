//! SeaORM entity models for the mirror bot database schema.

pub mod channel_webhook;
pub mod mirror_guild;
pub mod prelude;
