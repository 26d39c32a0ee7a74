//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these domain models at the
//! data-layer boundary so business logic never handles entities directly.

pub mod channel_webhook;
pub mod mirror_guild;
