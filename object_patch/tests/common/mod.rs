//! Shared fixtures for the integration tests.
//!
//! Each integration test is its own crate, so helpers live here and are
//! pulled in with `mod common;`.

use anyhow::{Result, bail};
use object_patch::{DynamicValue, ObjectMap};

/// Converts a `json!` literal into an object document.
pub fn doc(value: serde_json::Value) -> Result<ObjectMap> {
    match DynamicValue::from(value) {
        DynamicValue::Object(map) => Ok(map),
        other => bail!("fixture must be an object, got {}", other.coarse_type()),
    }
}

/// A document whose keys nest `levels` objects deep around a leaf.
#[must_use]
pub fn nested(levels: usize) -> ObjectMap {
    let mut value = DynamicValue::from(true);
    for _ in 0..levels {
        value = [("n", value)].into_iter().collect();
    }
    value.as_object().cloned().unwrap_or_default()
}
