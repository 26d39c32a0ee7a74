use std::num::ParseIntError;
use thiserror::Error;

/// Unexpected conditions that indicate a bug rather than a user or
/// environment problem.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A snowflake persisted as a string failed to parse back into a u64.
    ///
    /// Guild, channel, and webhook ids are stored as strings; a row that no
    /// longer parses means the table was written by something else.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The stored value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
