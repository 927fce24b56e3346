//! Minimal differences between two objects.

use serde::Deserialize;

use crate::{DELETION_PREFIX, DynamicValue, ObjectMap};

/// Options for [`diff_object`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DiffOptions {
    /// Restrict the diff to keys `original` already has.
    pub inner: bool,
    /// Keep `-=` keys from `other` whose target exists in `original`.
    pub deletion_keys: bool,
}

impl DiffOptions {
    /// Both switches off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: false,
            deletion_keys: false,
        }
    }

    /// Set [`DiffOptions::inner`].
    #[must_use]
    pub const fn with_inner(mut self, inner: bool) -> Self {
        self.inner = inner;
        self
    }

    /// Set [`DiffOptions::deletion_keys`].
    #[must_use]
    pub const fn with_deletion_keys(mut self, deletion_keys: bool) -> Self {
        self.deletion_keys = deletion_keys;
        self
    }
}

/// Returns the entries of `other` that differ from `original`.
///
/// Shared keys holding objects on both sides are compared key by key and
/// only the differing sub-keys are emitted; a shared object with no
/// differences is omitted. When exactly one side of such a pair is empty the
/// value from `other` is emitted whole, even under [`DiffOptions::inner`].
/// Any other differing value, arrays included, is
/// emitted whole. Keys missing from `original` count as differences unless
/// [`DiffOptions::inner`] is set. Keys of `original` missing from `other` are
/// ignored.
///
/// Comparison is structural, and `NaN` never equals itself.
///
/// # Examples
///
/// ```rust
/// use object_patch::{DiffOptions, diff_object, object_from_json_str};
///
/// let original = object_from_json_str(r#"{"a": {"x": 1, "y": 2}, "b": [1]}"#)?;
/// let other = object_from_json_str(r#"{"a": {"x": 1, "y": 3}, "b": [1], "c": true}"#)?;
///
/// let diff = diff_object(&original, &other, DiffOptions::default());
/// assert_eq!(diff, object_from_json_str(r#"{"a": {"y": 3}, "c": true}"#)?);
///
/// let inner = diff_object(&original, &other, DiffOptions::new().with_inner(true));
/// assert_eq!(inner, object_from_json_str(r#"{"a": {"y": 3}}"#)?);
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
#[must_use]
pub fn diff_object(original: &ObjectMap, other: &ObjectMap, options: DiffOptions) -> ObjectMap {
    let mut diff = ObjectMap::new();
    for (key, incoming) in other {
        if options.deletion_keys
            && let Some(target) = key.strip_prefix(DELETION_PREFIX)
        {
            if original.contains_key(target) {
                diff.insert(key.clone(), incoming.clone());
            }
            continue;
        }
        match (original.get(key), incoming) {
            (None, _) => {
                if !options.inner {
                    diff.insert(key.clone(), incoming.clone());
                }
            }
            (Some(DynamicValue::Object(current)), DynamicValue::Object(incoming_map))
                if current.is_empty() != incoming_map.is_empty() =>
            {
                diff.insert(key.clone(), incoming.clone());
            }
            (Some(DynamicValue::Object(current)), DynamicValue::Object(incoming_map)) => {
                let nested = diff_object(current, incoming_map, options);
                if !nested.is_empty() {
                    diff.insert(key.clone(), DynamicValue::Object(nested));
                }
            }
            (Some(current), _) => {
                if current != incoming {
                    diff.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
    diff
}
