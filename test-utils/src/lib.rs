//! Shared test tooling for the mirror bot workspace.
//!
//! Tests get an in-memory SQLite database through `TestBuilder`, prepopulated
//! rows through the `factory` modules, and gateway-shaped serenity values
//! through the `serenity` mocks.
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ChannelWebhook;
//!
//! #[tokio::test]
//! async fn test_webhook_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ChannelWebhook)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
