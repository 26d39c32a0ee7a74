use crate::error::{internal::InternalError, AppError};

/// Parses a stored snowflake string back into a `u64`.
///
/// # Arguments
/// - `value` - The String to parse
///
/// # Returns
/// - `Ok(u64)` - The parsed snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored value is not a
///   valid u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(e) => Err(InternalError::ParseStringId { value, source: e }.into()),
    }
}
