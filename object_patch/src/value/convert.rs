//! Conversions between [`DynamicValue`] and `serde_json` values or JSON text.

use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::path::join_path;
use crate::result_ext::PatchResultExt;
use crate::{PatchError, PatchResult};

use super::{DynamicValue, ObjectMap};

/// Largest magnitude below which every integer is exactly representable as
/// an `f64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Returns `number` as an `i64` when it is integral and exactly representable.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is integral and within the exactly representable range"
)]
pub(super) fn exact_integer(number: f64) -> Option<i64> {
    (number.fract() == 0.0 && number.abs() <= EXACT_INTEGER_LIMIT).then(|| number as i64)
}

impl From<Value> for DynamicValue {
    /// Converts a decoded JSON value. Integers outside the exactly
    /// representable `f64` range lose precision.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, inner)| (key, Self::from(inner)))
                    .collect(),
            ),
        }
    }
}

impl DynamicValue {
    /// Parses JSON text into a value.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::Json`] when the text is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_patch::DynamicValue;
    ///
    /// let value = DynamicValue::from_json_str("[1, null, \"x\"]")?;
    /// assert_eq!(value.as_array().map(<[_]>::len), Some(3));
    /// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
    /// ```
    pub fn from_json_str(text: &str) -> PatchResult<Self> {
        serde_json::from_str::<Value>(text)
            .into_patch()
            .map(Self::from)
    }

    /// Converts this value into a `serde_json` value.
    ///
    /// Integral numbers become JSON integers; other finite numbers become
    /// JSON floats.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::UnrepresentableNumber`] naming the dotted path of
    /// the first `NaN` or infinite number encountered.
    pub fn to_json_value(&self) -> PatchResult<Value> {
        to_json_at(self, None)
    }
}

fn to_json_at(value: &DynamicValue, path: Option<&str>) -> PatchResult<Value> {
    Ok(match value {
        DynamicValue::Null => Value::Null,
        DynamicValue::Bool(flag) => Value::Bool(*flag),
        DynamicValue::Number(number) => number_to_json(*number).ok_or_else(|| {
            Arc::new(PatchError::UnrepresentableNumber {
                path: path.unwrap_or_default().to_owned(),
            })
        })?,
        DynamicValue::String(text) => Value::String(text.clone()),
        DynamicValue::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| to_json_at(item, Some(&join_path(path, &index.to_string()))))
                .collect::<PatchResult<Vec<_>>>()?,
        ),
        DynamicValue::Object(map) => {
            let mut converted = Map::with_capacity(map.len());
            for (key, inner) in map {
                converted.insert(key.clone(), to_json_at(inner, Some(&join_path(path, key)))?);
            }
            Value::Object(converted)
        }
    })
}

fn number_to_json(number: f64) -> Option<Value> {
    exact_integer(number).map_or_else(
        || Number::from_f64(number).map(Value::Number),
        |integer| Some(Value::from(integer)),
    )
}

/// Parses JSON text that must hold an object.
///
/// # Errors
///
/// Returns [`PatchError::Json`] for malformed text and
/// [`PatchError::NotAnObject`] when the document is not an object.
///
/// # Examples
///
/// ```rust
/// use object_patch::{PatchError, object_from_json_str};
///
/// let object = object_from_json_str(r#"{"a": {"b": 1}}"#)?;
/// assert!(object.contains_key("a"));
///
/// let err = object_from_json_str("[1, 2]").unwrap_err();
/// assert!(matches!(&*err, PatchError::NotAnObject { .. }));
/// # Ok::<_, std::sync::Arc<PatchError>>(())
/// ```
pub fn object_from_json_str(text: &str) -> PatchResult<ObjectMap> {
    match DynamicValue::from_json_str(text)? {
        DynamicValue::Object(map) => Ok(map),
        other => Err(Arc::new(PatchError::NotAnObject {
            found: other.coarse_type(),
        })),
    }
}
