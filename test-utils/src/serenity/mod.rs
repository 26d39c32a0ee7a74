//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, Role) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_role};
//!
//! let role = create_test_role(111111111, "Moderators");
//! let message = create_test_message(222, 111, 555, "someone", "hello");
//! ```

pub mod message;
pub mod role;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use role::create_test_role;
