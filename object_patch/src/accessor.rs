//! Single-path navigation and mutation by dotted path.
//!
//! Object segments are looked up by key. Array segments must be decimal
//! indices of an existing element. [`set_property`] creates missing
//! intermediate nodes as objects, never as arrays, even when the segment
//! looks numeric.

use crate::path::decode_path;
use crate::{CoarseType, DynamicValue, ObjectMap};

/// Returns `true` when `path` resolves to some value in `root`, including
/// `null`.
///
/// # Examples
///
/// ```rust
/// use object_patch::{has_property, object_from_json_str};
///
/// let doc = object_from_json_str(r#"{"a": {"b": null, "list": [1, 2]}}"#)?;
/// assert!(has_property(&doc, "a.b"));
/// assert!(has_property(&doc, "a.list.1"));
/// assert!(!has_property(&doc, "a.list.2"));
/// assert!(!has_property(&doc, "a.b.c"));
/// # Ok::<_, std::sync::Arc<object_patch::PatchError>>(())
/// ```
#[must_use]
pub fn has_property(root: &ObjectMap, path: &str) -> bool {
    get_property(root, path).is_some()
}

/// Resolves `path` in `root`.
///
/// Returns `None` when any segment fails to resolve, so a stored `null`
/// (`Some(&DynamicValue::Null)`) stays distinguishable from a missing path.
#[must_use]
pub fn get_property<'a>(root: &'a ObjectMap, path: &str) -> Option<&'a DynamicValue> {
    let segments = decode_path(path);
    let (first, rest) = segments.split_first()?;
    rest.iter()
        .try_fold(root.get(*first)?, |node, segment| node.child(segment))
}

/// Mutable counterpart of [`get_property`].
pub fn get_property_mut<'a>(root: &'a mut ObjectMap, path: &str) -> Option<&'a mut DynamicValue> {
    let segments = decode_path(path);
    let (first, rest) = segments.split_first()?;
    let mut node = root.get_mut(*first)?;
    for segment in rest {
        node = node.child_mut(segment)?;
    }
    Some(node)
}

/// Assigns `value` at `path`, creating intermediate objects as needed.
///
/// Returns whether the stored value changed: `false` when the path already
/// held an equal value, or when the path runs into an array through a
/// non-numeric or out-of-range segment (the tree is then left untouched).
/// The final segment may equal an array's length to append. A scalar met on
/// an intermediate segment is replaced by an object.
///
/// # Examples
///
/// ```rust
/// use object_patch::{DynamicValue, ObjectMap, get_property, set_property};
///
/// let mut doc = ObjectMap::new();
/// assert!(set_property(&mut doc, "a.0.b", DynamicValue::from(1)));
/// assert!(!set_property(&mut doc, "a.0.b", DynamicValue::from(1)));
/// assert_eq!(get_property(&doc, "a.0.b"), Some(&DynamicValue::from(1)));
/// // Numeric segments create objects keyed by the numeral.
/// assert!(doc.get("a").is_some_and(DynamicValue::is_object));
/// ```
pub fn set_property(root: &mut ObjectMap, path: &str, value: DynamicValue) -> bool {
    assign(root, &decode_path(path), value, BlockedArray::Refuse).changed
}

/// Outcome of an assignment through [`assign`].
#[derive(Debug)]
pub(crate) struct Assignment {
    /// The tree now differs from before the assignment.
    pub(crate) changed: bool,
    /// Type of a value that was overwritten, either at the final segment or
    /// as a scalar standing where an intermediate container was needed.
    pub(crate) displaced: Option<CoarseType>,
}

/// What an assignment does with an array its path cannot index into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlockedArray {
    /// Leave the tree untouched and report no change.
    Refuse,
    /// Replace the array with an object holding the assignment.
    Replace,
}

/// Assigns `value` at the location named by `segments`.
pub(crate) fn assign(
    root: &mut ObjectMap,
    segments: &[&str],
    value: DynamicValue,
    blocked: BlockedArray,
) -> Assignment {
    let mut displaced = None;
    let changed =
        assign_in_object(root, segments, value, blocked, &mut displaced).unwrap_or(false);
    Assignment { changed, displaced }
}

fn assign_in_object(
    map: &mut ObjectMap,
    segments: &[&str],
    value: DynamicValue,
    blocked: BlockedArray,
    displaced: &mut Option<CoarseType>,
) -> Option<bool> {
    match segments {
        [] => None,
        [last] => Some(match map.get_mut(*last) {
            Some(existing) => replace_leaf(existing, value, displaced),
            None => {
                map.insert((*last).to_owned(), value);
                true
            }
        }),
        [head, rest @ ..] => {
            let child = map
                .entry((*head).to_owned())
                .or_insert_with(|| DynamicValue::Object(ObjectMap::new()));
            descend(child, rest, value, blocked, displaced)
        }
    }
}

fn assign_in_array(
    items: &mut Vec<DynamicValue>,
    segments: &[&str],
    value: DynamicValue,
    blocked: BlockedArray,
    displaced: &mut Option<CoarseType>,
) -> Option<bool> {
    let (head, rest) = segments.split_first()?;
    let index = head.parse::<usize>().ok()?;
    if rest.is_empty() && index == items.len() {
        items.push(value);
        return Some(true);
    }
    let slot = items.get_mut(index)?;
    if rest.is_empty() {
        Some(replace_leaf(slot, value, displaced))
    } else {
        descend(slot, rest, value, blocked, displaced)
    }
}

/// Whether the leading segment names an element of `items`, or the append
/// slot when it is the final segment.
fn indexes_into(items: &[DynamicValue], segments: &[&str]) -> bool {
    segments.split_first().is_some_and(|(head, rest)| {
        head.parse::<usize>()
            .is_ok_and(|index| index < items.len() || (rest.is_empty() && index == items.len()))
    })
}

fn descend(
    node: &mut DynamicValue,
    segments: &[&str],
    value: DynamicValue,
    blocked: BlockedArray,
    displaced: &mut Option<CoarseType>,
) -> Option<bool> {
    match node {
        DynamicValue::Object(map) => assign_in_object(map, segments, value, blocked, displaced),
        DynamicValue::Array(items)
            if blocked == BlockedArray::Refuse || indexes_into(items, segments) =>
        {
            assign_in_array(items, segments, value, blocked, displaced)
        }
        obstacle => {
            let mut fresh = ObjectMap::new();
            let changed = assign_in_object(&mut fresh, segments, value, blocked, displaced)?;
            *displaced = Some(obstacle.coarse_type());
            *obstacle = DynamicValue::Object(fresh);
            Some(changed)
        }
    }
}

fn replace_leaf(
    slot: &mut DynamicValue,
    value: DynamicValue,
    displaced: &mut Option<CoarseType>,
) -> bool {
    if *slot == value {
        return false;
    }
    *displaced = Some(slot.coarse_type());
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{BlockedArray, assign, get_property, get_property_mut, has_property, set_property};
    use crate::test_support::object;
    use crate::{CoarseType, DynamicValue, ObjectMap};

    #[rstest]
    #[case::nested_null("a.b", true)]
    #[case::array_index("a.list.0", true)]
    #[case::array_out_of_range("a.list.5", false)]
    #[case::array_non_numeric("a.list.x", false)]
    #[case::through_scalar("a.n.x", false)]
    #[case::missing_root("zz", false)]
    #[case::trailing_separator("a.", false)]
    fn has_property_walks_containers(#[case] path: &str, #[case] expected: bool) {
        let doc = object(json!({"a": {"b": null, "n": 3, "list": [{"x": 1}]}}));
        assert_eq!(has_property(&doc, path), expected);
    }

    #[test]
    fn get_property_distinguishes_null_from_absent() {
        let doc = object(json!({"a": {"b": null}}));
        assert_eq!(get_property(&doc, "a.b"), Some(&DynamicValue::Null));
        assert_eq!(get_property(&doc, "a.c"), None);
    }

    #[test]
    fn empty_segments_are_literal_keys() {
        let doc = object(json!({"": {"": 1}}));
        assert_eq!(get_property(&doc, "."), Some(&DynamicValue::from(1)));
        assert!(has_property(&doc, ""));
    }

    #[test]
    fn get_property_mut_edits_in_place() {
        let mut doc = object(json!({"a": [{"b": 1}]}));
        if let Some(slot) = get_property_mut(&mut doc, "a.0.b") {
            *slot = DynamicValue::from("edited");
        }
        assert_eq!(get_property(&doc, "a.0.b"), Some(&DynamicValue::from("edited")));
    }

    #[test]
    fn set_property_creates_objects_for_numeric_segments() {
        let mut doc = ObjectMap::new();
        assert!(set_property(&mut doc, "items.0", DynamicValue::from(true)));
        assert_eq!(DynamicValue::Object(doc), DynamicValue::from(json!({"items": {"0": true}})));
    }

    #[test]
    fn set_property_reports_unchanged_for_equal_values() {
        let mut doc = object(json!({"a": {"b": [1, 2]}}));
        assert!(!set_property(&mut doc, "a.b", DynamicValue::from(json!([1, 2]))));
        assert!(set_property(&mut doc, "a.b", DynamicValue::from(json!([1, 3]))));
    }

    #[test]
    fn set_property_uses_existing_arrays() {
        let mut doc = object(json!({"a": [1, {"b": 2}]}));
        assert!(set_property(&mut doc, "a.1.b", DynamicValue::from(5)));
        assert!(set_property(&mut doc, "a.2", DynamicValue::from(9)));
        assert_eq!(DynamicValue::Object(doc), DynamicValue::from(json!({"a": [1, {"b": 5}, 9]})));
    }

    #[rstest]
    #[case::past_end("a.3")]
    #[case::non_numeric("a.x")]
    #[case::intermediate_past_end("a.2.b")]
    fn set_property_rejects_unreachable_array_slots(#[case] path: &str) {
        let mut doc = object(json!({"a": [1, 2]}));
        let before = doc.clone();
        assert!(!set_property(&mut doc, path, DynamicValue::from(0)));
        assert_eq!(doc, before);
    }

    #[test]
    fn set_property_replaces_scalar_intermediates() {
        let mut doc = object(json!({"a": 1}));
        let outcome = assign(&mut doc, &["a", "b"], DynamicValue::from(2), BlockedArray::Refuse);
        assert!(outcome.changed);
        assert_eq!(outcome.displaced, Some(CoarseType::Number));
        assert_eq!(DynamicValue::Object(doc), DynamicValue::from(json!({"a": {"b": 2}})));
    }

    #[rstest]
    #[case::non_numeric(&["a", "x"], json!({"a": {"x": 0}}))]
    #[case::past_end(&["a", "5"], json!({"a": {"5": 0}}))]
    #[case::nested_array(&["a", "1", "x"], json!({"a": [1, {"x": 0}]}))]
    fn replacing_assignments_turn_blocked_arrays_into_objects(
        #[case] segments: &[&str],
        #[case] expected: serde_json::Value,
    ) {
        let mut doc = object(json!({"a": [1, [2]]}));
        let outcome = assign(&mut doc, segments, DynamicValue::from(0), BlockedArray::Replace);
        assert!(outcome.changed);
        assert_eq!(outcome.displaced, Some(CoarseType::Array));
        assert_eq!(DynamicValue::Object(doc), DynamicValue::from(expected));
    }

    #[rstest]
    #[case::new_key("x.y", json!(1))]
    #[case::overwrite("a.b", json!("new"))]
    #[case::into_array("a.c.0", json!({"deep": true}))]
    fn set_then_get_round_trips(#[case] path: &str, #[case] value: serde_json::Value) {
        let mut doc = object(json!({"a": {"b": "old", "c": [0]}}));
        let stored = DynamicValue::from(value);
        assert!(set_property(&mut doc, path, stored.clone()));
        assert_eq!(get_property(&doc, path), Some(&stored));
        assert!(has_property(&doc, path));
    }
}
