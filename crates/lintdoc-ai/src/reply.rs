//! Cleanup of free-form model replies

use serde_json::{Map, Value};

/// Remove a Markdown code fence wrapping the whole reply
///
/// ```` ```json\n{...}\n``` ```` becomes `{...}`; anything else is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // drop the info string (`json`, `markdown`, ...) on the opening line
    match body.split_once('\n') {
        Some((info, inner)) if !info.trim().contains(' ') => inner.trim(),
        _ => body.trim(),
    }
}

/// Parse a reply that should be a JSON object
///
/// Tolerates a surrounding code fence and prose around the object. Returns a
/// description of the problem when no object can be found.
pub fn parse_json_object(text: &str) -> std::result::Result<Map<String, Value>, String> {
    let body = strip_code_fence(text);
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(err) => match (body.find('{'), body.rfind('}')) {
            (Some(start), Some(end)) if start < end => serde_json::from_str(&body[start..=end])
                .map_err(|_| format!("reply is not valid JSON: {err}"))?,
            _ => return Err(format!("reply is not valid JSON: {err}")),
        },
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected a JSON object, got {}", kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
