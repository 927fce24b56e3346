//! Conversion between nested trees and flat dotted-path maps.
//!
//! [`flatten_value`] walks every object and array, emitting one entry per
//! leaf keyed by its full dotted path. Array elements are keyed by index.
//! Empty objects and arrays are leaves in their own right.
//!
//! [`expand_object`] is the inverse for objects. Numeral keys always expand
//! to objects keyed by the numeral string: a flattened array comes back as an
//! object such as `{"0": .., "1": ..}`, never as an array. When one flat key
//! is a strict prefix of another the later entry wins at the conflicting node
//! and the conflict is logged; expansion never aborts because of it. An array
//! that a later path cannot index into counts as such a conflict and is
//! replaced by an object.

use std::sync::Arc;

use crate::accessor::{BlockedArray, assign};
use crate::path::{decode_path, join_path};
use crate::{CoarseType, DynamicValue, MAX_DEPTH, ObjectMap, PatchError, PatchResult};

/// Flattens an object into a single-level map of dotted paths.
///
/// # Errors
///
/// Returns [`PatchError::RecursionDepthExceeded`] when the tree nests more
/// than [`MAX_DEPTH`] levels.
///
/// # Examples
///
/// ```rust
/// use object_patch::{flatten_object, object_from_json_str};
///
/// let doc = object_from_json_str(r#"{"a": {"b": 1, "c": []}, "d": [true]}"#)?;
/// let flat = flatten_object(&doc)?;
/// let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["a.b", "a.c", "d.0"]);
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
pub fn flatten_object(object: &ObjectMap) -> PatchResult<ObjectMap> {
    let mut flat = ObjectMap::new();
    for (key, value) in object {
        flatten_into(key, value, 0, &mut flat)?;
    }
    Ok(flat)
}

/// Flattens any value.
///
/// Objects and arrays flatten their children; a scalar root yields a single
/// entry under the empty path `""`.
///
/// # Errors
///
/// Returns [`PatchError::RecursionDepthExceeded`] when the tree nests more
/// than [`MAX_DEPTH`] levels.
pub fn flatten_value(value: &DynamicValue) -> PatchResult<ObjectMap> {
    match value {
        DynamicValue::Object(map) => flatten_object(map),
        DynamicValue::Array(items) => {
            let mut flat = ObjectMap::new();
            for (index, item) in items.iter().enumerate() {
                flatten_into(&index.to_string(), item, 0, &mut flat)?;
            }
            Ok(flat)
        }
        leaf => Ok(std::iter::once((String::new(), leaf.clone())).collect()),
    }
}

fn flatten_into(
    path: &str,
    value: &DynamicValue,
    depth: usize,
    flat: &mut ObjectMap,
) -> PatchResult<()> {
    if depth > MAX_DEPTH {
        return Err(PatchError::depth_exceeded_arc(path));
    }
    match value {
        DynamicValue::Object(map) if !map.is_empty() => {
            for (key, inner) in map {
                flatten_into(&join_path(Some(path), key), inner, depth + 1, flat)?;
            }
        }
        DynamicValue::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(
                    &join_path(Some(path), &index.to_string()),
                    item,
                    depth + 1,
                    flat,
                )?;
            }
        }
        leaf => {
            flat.insert(path.to_owned(), leaf.clone());
        }
    }
    Ok(())
}

/// A non-fatal collision found while expanding a flat map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathConflict {
    /// Dotted path of the flat entry whose assignment displaced a value.
    pub path: String,
    /// Coarse type of the value that was displaced.
    pub displaced: CoarseType,
}

/// An expanded object together with the conflicts met on the way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expansion {
    /// The expanded object.
    pub object: ObjectMap,
    /// Conflicts in the order they occurred.
    pub conflicts: Vec<PathConflict>,
}

/// Expands a flat map of dotted paths into a nested object.
///
/// Values are expanded too: objects nested inside `flat` have their own
/// dotted keys expanded, and arrays keep their shape with each element
/// expanded.
///
/// # Errors
///
/// Returns [`PatchError::RecursionDepthExceeded`] when the expanded tree
/// would nest more than [`MAX_DEPTH`] levels.
///
/// # Examples
///
/// ```rust
/// use object_patch::{expand_object, object_from_json_str};
///
/// let flat = object_from_json_str(r#"{"a.b": 1, "a.c": 2, "list.0": "x"}"#)?;
/// let nested = expand_object(&flat)?;
/// assert_eq!(
///     nested,
///     object_from_json_str(r#"{"a": {"b": 1, "c": 2}, "list": {"0": "x"}}"#)?
/// );
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
pub fn expand_object(flat: &ObjectMap) -> PatchResult<ObjectMap> {
    expand_object_reporting(flat).map(|expansion| expansion.object)
}

/// Like [`expand_object`], additionally returning every [`PathConflict`].
///
/// # Errors
///
/// Returns [`PatchError::RecursionDepthExceeded`] when the expanded tree
/// would nest more than [`MAX_DEPTH`] levels.
pub fn expand_object_reporting(flat: &ObjectMap) -> PatchResult<Expansion> {
    let mut conflicts = Vec::new();
    let object = expand_map(flat, None, 0, &mut conflicts)?;
    Ok(Expansion { object, conflicts })
}

/// Expands dotted keys at every level of `value`.
///
/// # Errors
///
/// Returns [`PatchError::RecursionDepthExceeded`] when the expanded tree
/// would nest more than [`MAX_DEPTH`] levels.
pub fn expand_value(value: &DynamicValue) -> PatchResult<DynamicValue> {
    expand_node(value, None, 0, &mut Vec::new())
}

fn expand_node(
    value: &DynamicValue,
    path: Option<&str>,
    depth: usize,
    conflicts: &mut Vec<PathConflict>,
) -> PatchResult<DynamicValue> {
    match value {
        DynamicValue::Object(map) => expand_map(map, path, depth, conflicts).map(DynamicValue::Object),
        DynamicValue::Array(items) => {
            if depth > MAX_DEPTH {
                return Err(PatchError::depth_exceeded_arc(path.unwrap_or_default()));
            }
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let item_path = join_path(path, &index.to_string());
                    expand_node(item, Some(&item_path), depth + 1, conflicts)
                })
                .collect::<PatchResult<Vec<_>>>()
                .map(DynamicValue::Array)
        }
        leaf => Ok(leaf.clone()),
    }
}

fn expand_map(
    map: &ObjectMap,
    path: Option<&str>,
    depth: usize,
    conflicts: &mut Vec<PathConflict>,
) -> PatchResult<ObjectMap> {
    let mut expanded = ObjectMap::new();
    for (key, inner) in map {
        let segments = decode_path(key);
        let entry_path = join_path(path, key);
        let entry_depth = depth + segments.len();
        if entry_depth > MAX_DEPTH {
            return Err(Arc::new(PatchError::depth_exceeded(entry_path)));
        }
        let value = expand_node(inner, Some(&entry_path), entry_depth, conflicts)?;
        let outcome = assign(&mut expanded, &segments, value, BlockedArray::Replace);
        if let Some(displaced) = outcome.displaced {
            tracing::warn!(
                path = %entry_path,
                displaced = %displaced,
                "expanded path collides with an earlier entry; keeping the later value"
            );
            conflicts.push(PathConflict {
                path: entry_path,
                displaced,
            });
        }
    }
    Ok(expanded)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface fixture mistakes"
)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{expand_object, expand_object_reporting, expand_value, flatten_object, flatten_value};
    use crate::test_support::{object, value};
    use crate::{CoarseType, DynamicValue, MAX_DEPTH, ObjectMap, PatchError};

    fn nested(depth: usize) -> ObjectMap {
        let mut current = DynamicValue::from(1);
        for _ in 0..depth {
            current = [("k", current)].into_iter().collect();
        }
        match current {
            DynamicValue::Object(map) => map,
            _ => ObjectMap::new(),
        }
    }

    #[test]
    fn flatten_emits_leaf_paths_in_order() {
        let doc = object(json!({"a": {"b": 1, "c": {"d": null}}, "e": "x"}));
        let flat = flatten_object(&doc).expect("flatten");
        assert_eq!(flat, object(json!({"a.b": 1, "a.c.d": null, "e": "x"})));
    }

    #[test]
    fn flatten_keys_array_elements_by_index() {
        let doc = object(json!({"list": [10, {"x": true}]}));
        let flat = flatten_object(&doc).expect("flatten");
        assert_eq!(flat, object(json!({"list.0": 10, "list.1.x": true})));
    }

    #[rstest]
    #[case::empty_object(json!({"a": {}}))]
    #[case::empty_array(json!({"a": []}))]
    fn flatten_keeps_empty_containers_as_leaves(#[case] input: serde_json::Value) {
        let doc = object(input);
        assert_eq!(flatten_object(&doc).expect("flatten"), doc);
    }

    #[test]
    fn flatten_value_handles_non_object_roots() {
        assert_eq!(
            flatten_value(&value(json!([1, [2]]))).expect("flatten"),
            object(json!({"0": 1, "1.0": 2}))
        );
        assert_eq!(flatten_value(&value(json!("x"))).expect("flatten"), object(json!({"": "x"})));
        assert!(flatten_value(&value(json!({}))).expect("flatten").is_empty());
    }

    #[test]
    fn flatten_trips_the_depth_guard() {
        let err = flatten_object(&nested(MAX_DEPTH + 2)).expect_err("depth guard");
        assert!(matches!(&*err, PatchError::RecursionDepthExceeded { .. }));
        assert!(flatten_object(&nested(MAX_DEPTH)).is_ok());
    }

    #[rstest]
    #[case::scalars(json!({"a": 1, "b": {"c": "x", "d": {"e": null}}}))]
    #[case::empty_branches(json!({"a": {}, "b": {"c": {}}}))]
    #[case::ordering(json!({"z": 1, "a": {"y": 2, "b": 3}}))]
    fn expand_inverts_flatten(#[case] input: serde_json::Value) {
        let doc = object(input);
        let round_trip = expand_object(&flatten_object(&doc).expect("flatten")).expect("expand");
        assert_eq!(round_trip, doc);
    }

    #[test]
    fn expand_rebuilds_arrays_as_numeral_objects() {
        let doc = object(json!({"list": [1, 2]}));
        let round_trip = expand_object(&flatten_object(&doc).expect("flatten")).expect("expand");
        assert_eq!(round_trip, object(json!({"list": {"0": 1, "1": 2}})));
    }

    #[test]
    fn expand_reports_prefix_conflicts_last_write_wins() {
        let flat = object(json!({"a": 1, "a.b": 2, "c.d": 3, "c": 4}));
        let expansion = expand_object_reporting(&flat).expect("expand");
        assert_eq!(expansion.object, object(json!({"a": {"b": 2}, "c": 4})));
        let conflicts: Vec<_> = expansion
            .conflicts
            .iter()
            .map(|conflict| (conflict.path.as_str(), conflict.displaced))
            .collect();
        assert_eq!(conflicts, [("a.b", CoarseType::Number), ("c", CoarseType::Object)]);
    }

    #[rstest]
    #[case::non_numeric_and_past_end(
        json!({"a": [1], "a.x": 2, "a.5": 3}),
        json!({"a": {"x": 2, "5": 3}}),
        &["a.x"],
    )]
    #[case::inside_an_element(
        json!({"a": [[1], 2], "a.0.k": true}),
        json!({"a": [{"k": true}, 2]}),
        &["a.0.k"],
    )]
    #[case::append_slot(json!({"a": [1], "a.1": 2}), json!({"a": [1, 2]}), &[])]
    fn expand_replaces_arrays_later_paths_cannot_index(
        #[case] input: serde_json::Value,
        #[case] expected: serde_json::Value,
        #[case] conflict_paths: &[&str],
    ) {
        let expansion = expand_object_reporting(&object(input)).expect("expand");
        assert_eq!(expansion.object, object(expected));
        let reported: Vec<_> = expansion
            .conflicts
            .iter()
            .map(|conflict| (conflict.path.as_str(), conflict.displaced))
            .collect();
        let wanted: Vec<_> = conflict_paths
            .iter()
            .map(|path| (*path, CoarseType::Array))
            .collect();
        assert_eq!(reported, wanted);
    }

    #[test]
    fn expand_descends_into_existing_objects_without_conflict() {
        let flat = object(json!({"a": {"x": 1}, "a.y": 2}));
        let expansion = expand_object_reporting(&flat).expect("expand");
        assert_eq!(expansion.object, object(json!({"a": {"x": 1, "y": 2}})));
        assert!(expansion.conflicts.is_empty());
    }

    #[test]
    fn expand_value_recurses_into_nested_values_and_arrays() {
        let input = value(json!({"a.b": {"c.d": 1}, "list": [{"x.y": true}]}));
        let expanded = expand_value(&input).expect("expand");
        assert_eq!(
            expanded,
            value(json!({"a": {"b": {"c": {"d": 1}}}, "list": [{"x": {"y": true}}]}))
        );
    }

    #[test]
    fn expand_trips_the_depth_guard_on_long_paths() {
        let long = vec!["k"; MAX_DEPTH + 1].join(".");
        let flat: ObjectMap = std::iter::once((long, DynamicValue::Null)).collect();
        let err = expand_object(&flat).expect_err("depth guard");
        assert!(matches!(&*err, PatchError::RecursionDepthExceeded { .. }));
    }
}
