//! Recursive patch application with deletion-key support.
//!
//! A merge walks the keys of `other` in insertion order:
//! - `-=key` removes `key` from the result, whatever the switches say;
//! - `==key` stores the value under `key` wholesale, bypassing every switch;
//! - a key missing from `original` is inserted when `insert_keys` (top level)
//!   or `insert_values` (nested) allows it;
//! - a key present on both sides recurses when both values are objects and
//!   `recursive` is set, and is otherwise replaced when `overwrite` is set.
//!
//! Top-level keys containing `.` are expanded first on either side, so
//! `{"a.b": 1}` patches the nested `b`. Failures are detected by a read-only
//! pass before anything is written.

mod apply;
mod options;
mod validate;

use std::borrow::Cow;
use std::sync::Arc;

use crate::path::is_dotted;
use crate::{ObjectMap, PatchError, PatchResult, duplicate_object, expand_object};

use self::apply::apply_level;
use self::options::Level;
use self::validate::validate_level;

pub use self::options::MergeOptions;

/// Merges `other` into a copy of `original` and returns the copy.
///
/// `original` is never modified, and the result shares no structure with
/// either input. The working copy is made with [`duplicate_object`], so a
/// non-finite number in either input comes out as `null`.
///
/// # Errors
///
/// Returns [`PatchError::TypeMismatch`] (or an aggregate of them) when
/// `enforce_types` is set and a shared key changes coarse type, and
/// [`PatchError::RecursionDepthExceeded`] when the inputs nest too deeply.
///
/// # Examples
///
/// ```rust
/// use object_patch::{MergeOptions, merge_object, object_from_json_str};
///
/// let original = object_from_json_str(r#"{"a": 1, "b": 2}"#)?;
/// let patch = object_from_json_str(r#"{"-=a": null, "c": 3}"#)?;
/// let merged = merge_object(&original, &patch, MergeOptions::default())?;
/// assert_eq!(merged, object_from_json_str(r#"{"b": 2, "c": 3}"#)?);
///
/// let guarded = merge_object(&original, &patch, MergeOptions::default().with_insert_keys(false))?;
/// assert_eq!(guarded, object_from_json_str(r#"{"b": 2}"#)?);
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
pub fn merge_object(
    original: &ObjectMap,
    other: &ObjectMap,
    options: MergeOptions,
) -> PatchResult<ObjectMap> {
    let mut merged = duplicate_object(original);
    merge_object_in_place(&mut merged, other, options)?;
    Ok(merged)
}

/// Merges `other` into `original`, mutating it.
///
/// On error `original` is left exactly as it was. Values already in
/// `original` are kept as they are; values taken from `other` are stored
/// through the strict [`crate::duplicate`].
///
/// # Errors
///
/// Fails under the same conditions as [`merge_object`].
pub fn merge_object_in_place(
    original: &mut ObjectMap,
    other: &ObjectMap,
    options: MergeOptions,
) -> PatchResult<()> {
    let expanded_original = expand_dotted(original)?;
    let patch = expand_dotted(other)?;

    let mut errors = Vec::new();
    validate_level(
        expanded_original.as_ref(),
        patch.as_ref(),
        options,
        Level::Top,
        None,
        0,
        &mut errors,
    );
    if let Some(err) = PatchError::try_aggregate(errors) {
        tracing::debug!(errors = %err, "merge rejected before mutation");
        return Err(Arc::new(err));
    }

    if let Cow::Owned(expanded) = expanded_original {
        *original = expanded;
    }
    apply_level(original, patch.as_ref(), options, Level::Top);
    Ok(())
}

fn expand_dotted(object: &ObjectMap) -> PatchResult<Cow<'_, ObjectMap>> {
    if object.keys().any(|key| is_dotted(key)) {
        expand_object(object).map(Cow::Owned)
    } else {
        Ok(Cow::Borrowed(object))
    }
}
