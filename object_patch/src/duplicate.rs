//! Deep copies, optionally scrubbed of JSON-unrepresentable numbers.

use crate::{DynamicValue, ObjectMap};

/// Deep-copies `value`, replacing `NaN` and infinite numbers with `null`.
///
/// The copy is always representable as JSON.
///
/// # Examples
///
/// ```rust
/// use object_patch::{DynamicValue, duplicate};
///
/// let original = DynamicValue::Array(vec![DynamicValue::from(f64::NAN), DynamicValue::from(1)]);
/// let copy = duplicate(&original);
/// assert_eq!(copy, DynamicValue::Array(vec![DynamicValue::Null, DynamicValue::from(1)]));
/// ```
#[must_use]
pub fn duplicate(value: &DynamicValue) -> DynamicValue {
    match value {
        DynamicValue::Number(number) if !number.is_finite() => DynamicValue::Null,
        DynamicValue::Array(items) => DynamicValue::Array(items.iter().map(duplicate).collect()),
        DynamicValue::Object(map) => DynamicValue::Object(duplicate_object(map)),
        other => other.clone(),
    }
}

/// Deep-copies `value` unchanged, non-finite numbers included.
#[must_use]
pub fn duplicate_lenient(value: &DynamicValue) -> DynamicValue {
    value.clone()
}

/// Applies [`duplicate`] to every entry of `map`.
#[must_use]
pub fn duplicate_object(map: &ObjectMap) -> ObjectMap {
    map.iter()
        .map(|(key, inner)| (key.clone(), duplicate(inner)))
        .collect()
}
