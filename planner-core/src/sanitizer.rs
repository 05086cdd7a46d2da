use crate::error::FormatError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static FENCED_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("fence pattern is valid")
});

/// Unwrap a fenced code block if there is one, otherwise return the input
pub fn strip_code_fence(text: &str) -> &str {
    FENCED_JSON_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

/// Turn a raw model reply into a JSON object.
///
/// Only checks that the reply is an object; field-level checks happen when
/// the object is coerced into a [`crate::raw::RawPlan`].
pub fn parse_plan_reply(reply: &str) -> Result<Map<String, Value>, FormatError> {
    let text = strip_code_fence(reply.trim()).trim();

    if !text.starts_with('{') {
        return Err(FormatError::NotJson {
            text: text.to_string(),
        });
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FormatError::Malformed {
            message: "expected a JSON object".to_string(),
            text: text.to_string(),
        }),
        Err(e) => Err(FormatError::Malformed {
            message: e.to_string(),
            text: text.to_string(),
        }),
    }
}
