//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory module
//! with both a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let mirror = factory::mirror_guild::create_mirror_guild(&db).await?;
//!
//! // Customize via the builder
//! let webhook = factory::channel_webhook::ChannelWebhookFactory::new(&db)
//!     .channel_id("123456789")
//!     .position(1)
//!     .build()
//!     .await?;
//! ```

pub mod channel_webhook;
pub mod helpers;
pub mod mirror_guild;

// Re-export commonly used factory functions for concise usage
pub use channel_webhook::create_channel_webhook;
pub use mirror_guild::create_mirror_guild;
