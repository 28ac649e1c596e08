use crate::server::error::AppError;

/// Parses a record ID taken from a request path
///
/// # Arguments
/// - `value` - The path segment to parse
///
/// # Returns
/// - `Ok(i32)` - Positive record ID
/// - `Err(AppError::BadRequest)` - Value is not a positive integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("'{}' is not a valid id", value))),
    }
}
