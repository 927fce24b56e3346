//! Placeholder normalisation for behavioural step arguments.

use anyhow::{Result, bail};

/// Strips one layer of matching single or double quotes, after trimming.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(stripped) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return stripped;
        }
    }
    trimmed
}

/// Trims and unquotes a scalar placeholder into an owned string.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Interprets a switch placeholder such as `enabled` or `off`.
///
/// # Errors
///
/// Fails when the word is not a recognised switch state.
///
/// # Examples
///
/// ```
/// use object_patch_test_helpers::text::parse_switch;
///
/// assert!(parse_switch("\"enabled\"").is_ok_and(|on| on));
/// assert!(parse_switch("off").is_ok_and(|on| !on));
/// assert!(parse_switch("maybe").is_err());
/// ```
pub fn parse_switch(value: &str) -> Result<bool> {
    match normalize_scalar(value).to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "enabled" => Ok(true),
        "off" | "false" | "no" | "disabled" => Ok(false),
        other => bail!("unrecognised switch state '{other}'"),
    }
}
