//! Structured-data transformation toolkit for JSON-like document trees.
//!
//! Every operation works on [`DynamicValue`], a closed tagged union of
//! `null`, booleans, numbers, strings, arrays and insertion-ordered objects.
//! Together the operations form a patch engine: callers merge partial updates
//! into documents, compute minimal diffs for persistence or sync, address
//! single fields by dotted path, and take safe working copies before mutating.
//!
//! # Example
//!
//! ```rust
//! use object_patch::{DynamicValue, MergeOptions, diff_object, merge_object, object_from_json_str};
//!
//! let original = object_from_json_str(r#"{"name": "Tim", "stats": {"hp": 10, "mp": 4}}"#)?;
//! let patch = object_from_json_str(r#"{"stats": {"hp": 7}, "-=name": null}"#)?;
//!
//! let merged = merge_object(&original, &patch, MergeOptions::default())?;
//! assert!(!merged.contains_key("name"));
//! assert_eq!(merged.get("stats").and_then(|s| s.get("mp")), Some(&DynamicValue::from(4)));
//!
//! let changes = diff_object(&original, &merged, Default::default());
//! assert_eq!(changes.len(), 1);
//! # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
//! ```

mod accessor;
mod diff;
mod duplicate;
mod error;
mod filter;
mod flatten;
mod invert;
mod merge;
pub mod path;
mod result_ext;
mod value;

#[cfg(test)]
mod test_support;

pub use accessor::{get_property, get_property_mut, has_property, set_property};
pub use diff::{DiffOptions, diff_object};
pub use duplicate::{duplicate, duplicate_lenient, duplicate_object};
pub use error::{AggregatedErrors, PatchError};
pub use filter::{FilterOptions, filter_object};
pub use flatten::{
    Expansion, PathConflict, expand_object, expand_object_reporting, expand_value,
    flatten_object, flatten_value,
};
pub use invert::invert_object;
pub use merge::{MergeOptions, merge_object, merge_object_in_place};
pub use result_ext::PatchResultExt;
pub use value::{CoarseType, DynamicValue, ObjectMap, object_from_json_str};

/// Result alias used by fallible toolkit operations.
///
/// Errors are shared through [`std::sync::Arc`] so aggregated failures can be
/// cloned into diagnostics without copying the underlying error values.
pub type PatchResult<T> = Result<T, std::sync::Arc<PatchError>>;

/// Maximum nesting depth accepted by flatten, expand and merge.
///
/// Inputs nested more deeply fail with [`PatchError::RecursionDepthExceeded`].
pub const MAX_DEPTH: usize = 100;

/// Key prefix marking a merge instruction to delete the stripped key.
pub const DELETION_PREFIX: &str = "-=";

/// Key prefix marking a merge instruction to replace the stripped key
/// wholesale, bypassing every merge switch.
pub const REPLACEMENT_PREFIX: &str = "==";
