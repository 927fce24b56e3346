//! Value-to-key inversion of flat objects.

use crate::{DynamicValue, ObjectMap};

/// Swaps the keys and values of `map`.
///
/// Each value becomes a key mapping to its original key as a string. Strings
/// are used verbatim, numbers use their shortest decimal form (`1.0` becomes
/// `"1"`), and every other value uses its compact JSON text. When several
/// entries share a value the last one in iteration order wins, so the
/// inversion is lossy in general.
///
/// # Examples
///
/// ```rust
/// use object_patch::{DynamicValue, invert_object, object_from_json_str};
///
/// let map = object_from_json_str(r#"{"a": "x", "b": 2, "c": "x"}"#)?;
/// let inverted = invert_object(&map);
/// assert_eq!(inverted.get("x"), Some(&DynamicValue::from("c")));
/// assert_eq!(inverted.get("2"), Some(&DynamicValue::from("b")));
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
#[must_use]
pub fn invert_object(map: &ObjectMap) -> ObjectMap {
    let mut inverted = ObjectMap::with_capacity(map.len());
    for (key, value) in map {
        // A repeated value keeps its first slot but takes the later key.
        inverted.insert(key_text(value), DynamicValue::String(key.clone()));
    }
    inverted
}

fn key_text(value: &DynamicValue) -> String {
    match value {
        DynamicValue::String(text) => text.clone(),
        DynamicValue::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
