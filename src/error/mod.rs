//! Application error hierarchy.
//!
//! `AppError` is the top-level error wrapping the domain-specific kinds.
//! Repositories and services propagate it with `?`; event handlers are the
//! outermost consumers and log it rather than returning it to serenity.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Most variants convert automatically via `#[from]`; serenity's error is the
/// exception, boxed through a manual impl.
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment configuration could not be loaded at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Invariant violation inside the codebase, such as a stored snowflake
    /// that no longer parses.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A looked-up resource does not exist.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Boxes serenity errors on conversion. `serenity::Error` is large enough to
/// widen every `Result` carrying `AppError` if stored inline.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
