use serde_json::Value;

use crate::errors::QuizError;

/// Parses the span from the first `{` to the last `}` of `raw`.
///
/// This is a greedy span match, not a brace-balancing scanner: two separate
/// objects in one reply, or stray braces in surrounding prose, produce a span
/// that fails to parse.
pub fn extract_json_object(raw: &str) -> Result<Value, QuizError> {
    let start = raw.find('{').ok_or(QuizError::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(QuizError::NoJsonObject)?;

    if end < start {
        return Err(QuizError::NoJsonObject);
    }

    let value = serde_json::from_str(&raw[start..=end])?;
    Ok(value)
}
