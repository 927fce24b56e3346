//! Projection of an object onto the key structure of a template.

use serde::Deserialize;

use crate::{DELETION_PREFIX, DynamicValue, ObjectMap};

/// Options for [`filter_object`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOptions {
    /// Pass `-=` keys of the template through even when `source` lacks them.
    pub keep_special: bool,
    /// Take values from the template rather than from `source`.
    pub template_values: bool,
}

impl FilterOptions {
    /// Both switches off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keep_special: false,
            template_values: false,
        }
    }

    /// Set [`FilterOptions::keep_special`].
    #[must_use]
    pub const fn with_keep_special(mut self, keep_special: bool) -> Self {
        self.keep_special = keep_special;
        self
    }

    /// Set [`FilterOptions::template_values`].
    #[must_use]
    pub const fn with_template_values(mut self, template_values: bool) -> Self {
        self.template_values = template_values;
        self
    }
}

/// Keeps the keys of `source` that also appear in `template`.
///
/// Walks `template` in order. Where both sides hold objects the walk
/// recurses; otherwise the value comes from `source`, or from `template`
/// when [`FilterOptions::template_values`] is set.
///
/// # Examples
///
/// ```rust
/// use object_patch::{FilterOptions, filter_object, object_from_json_str};
///
/// let source = object_from_json_str(
///     r#"{"foo": {"number": 1, "name": "Tim", "topping": "olives"}, "bar": "baz"}"#,
/// )?;
/// let template = object_from_json_str(
///     r#"{"foo": {"number": 0, "name": "Mit", "style": "bold"}, "other": 72}"#,
/// )?;
///
/// let kept = filter_object(&source, &template, FilterOptions::default());
/// assert_eq!(kept, object_from_json_str(r#"{"foo": {"number": 1, "name": "Tim"}}"#)?);
///
/// let shaped = filter_object(&source, &template, FilterOptions::new().with_template_values(true));
/// assert_eq!(shaped, object_from_json_str(r#"{"foo": {"number": 0, "name": "Mit"}}"#)?);
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
#[must_use]
pub fn filter_object(source: &ObjectMap, template: &ObjectMap, options: FilterOptions) -> ObjectMap {
    let mut filtered = ObjectMap::new();
    for (key, shape) in template {
        let Some(present) = source.get(key) else {
            if options.keep_special && key.starts_with(DELETION_PREFIX) {
                filtered.insert(key.clone(), shape.clone());
            }
            continue;
        };
        let kept = match (present, shape) {
            (DynamicValue::Object(inner), DynamicValue::Object(inner_shape)) => {
                DynamicValue::Object(filter_object(inner, inner_shape, options))
            }
            _ if options.template_values => shape.clone(),
            _ => present.clone(),
        };
        filtered.insert(key.clone(), kept);
    }
    filtered
}
