//! Dotted path encoding.
//!
//! A dotted path such as `"a.b.c"` names a nested location as an ordered
//! sequence of keys. Segments are never trimmed or collapsed: a leading,
//! trailing or doubled separator produces empty-string segments, and the
//! empty path decodes to a single empty segment.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Joins `keys` into a dotted path.
///
/// # Examples
///
/// ```rust
/// use object_patch::path::encode_path;
///
/// assert_eq!(encode_path(["a", "b", "c"]), "a.b.c");
/// assert_eq!(encode_path(Vec::<String>::new()), "");
/// ```
#[must_use]
pub fn encode_path<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut path = String::new();
    for (index, key) in keys.into_iter().enumerate() {
        if index > 0 {
            path.push(PATH_SEPARATOR);
        }
        path.push_str(key.as_ref());
    }
    path
}

/// Splits a dotted path into its segments.
///
/// # Examples
///
/// ```rust
/// use object_patch::path::decode_path;
///
/// assert_eq!(decode_path("a.b"), vec!["a", "b"]);
/// assert_eq!(decode_path("a..b."), vec!["a", "", "b", ""]);
/// ```
#[must_use]
pub fn decode_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}

/// Appends `key` to an optional parent path.
///
/// `None` denotes the root, so `join_path(None, "a")` is `"a"` while
/// `join_path(Some(""), "a")` is `".a"`.
#[must_use]
pub fn join_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(prefix) => {
            let mut path = String::with_capacity(prefix.len() + key.len() + 1);
            path.push_str(prefix);
            path.push(PATH_SEPARATOR);
            path.push_str(key);
            path
        }
        None => key.to_owned(),
    }
}

/// Returns `true` when `key` contains the path separator.
#[must_use]
pub fn is_dotted(key: &str) -> bool {
    key.contains(PATH_SEPARATOR)
}
