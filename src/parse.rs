use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in completion")]
    NoObject,

    #[error("embedded JSON object is invalid: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Parse a model completion into JSON.
///
/// Any valid JSON document is returned as-is. Models often wrap their object
/// in prose or markdown fences, so on failure the span from the first `{` to
/// the last `}` is parsed instead.
pub fn extract_json(text: &str) -> Result<Value, ParseError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let span = outermost_braces(text).ok_or(ParseError::NoObject)?;
    Ok(serde_json::from_str(span)?)
}

fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
