//! Fixture builders shared by unit tests.

use crate::{DynamicValue, ObjectMap};

/// Converts a `json!` literal that must be an object.
pub(crate) fn object(value: serde_json::Value) -> ObjectMap {
    match DynamicValue::from(value) {
        DynamicValue::Object(map) => map,
        other => panic!("fixture must be an object, got {other:?}"),
    }
}

/// Converts any `json!` literal.
pub(crate) fn value(value: serde_json::Value) -> DynamicValue {
    DynamicValue::from(value)
}
