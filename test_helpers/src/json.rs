//! JSON literals captured from feature files and test tables.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::text::unquote;

/// Parses a JSON literal, tolerating one layer of surrounding quotes.
///
/// Step placeholders often arrive wrapped in single quotes so that the JSON
/// inside may use double quotes freely.
///
/// # Errors
///
/// Fails with the offending text in the message when it is not valid JSON.
pub fn parse_json(text: &str) -> Result<Value> {
    let literal = unquote(text);
    serde_json::from_str(literal).with_context(|| format!("invalid JSON literal: {literal}"))
}

/// Parses a JSON literal that must be an object.
///
/// # Errors
///
/// Fails when the text is not valid JSON or is not an object.
///
/// # Examples
///
/// ```
/// use object_patch_test_helpers::json::parse_json_object;
///
/// let object = parse_json_object(r#"'{"a": {"b": 1}}'"#)?;
/// assert!(object.contains_key("a"));
/// assert!(parse_json_object("[1]").is_err());
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn parse_json_object(text: &str) -> Result<Map<String, Value>> {
    match parse_json(text)? {
        Value::Object(map) => Ok(map),
        other => bail!("expected a JSON object, found {other}"),
    }
}
