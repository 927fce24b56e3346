//! Read-only first pass over a merge.
//!
//! The pass visits exactly the pairs the apply pass will touch and collects
//! every type mismatch and depth violation, so a failing merge is rejected
//! before anything is mutated.

use std::collections::HashMap;

use crate::path::join_path;
use crate::{DELETION_PREFIX, DynamicValue, MAX_DEPTH, ObjectMap, PatchError, REPLACEMENT_PREFIX};

use super::options::{Level, MergeOptions};

/// Collects the errors merging `patch` into `target` would raise.
pub(super) fn validate_level(
    target: &ObjectMap,
    patch: &ObjectMap,
    options: MergeOptions,
    level: Level,
    path: Option<&str>,
    depth: usize,
    errors: &mut Vec<PatchError>,
) {
    if depth > MAX_DEPTH {
        errors.push(PatchError::depth_exceeded(path.unwrap_or_default()));
        return;
    }
    // Keys already deleted or force-replaced earlier in this level.
    let mut touched: HashMap<&str, Option<&DynamicValue>> = HashMap::new();
    for (key, incoming) in patch {
        if let Some(removed) = key.strip_prefix(DELETION_PREFIX) {
            touched.insert(removed, None);
            continue;
        }
        if let Some(replaced) = key.strip_prefix(REPLACEMENT_PREFIX) {
            touched.insert(replaced, Some(incoming));
            continue;
        }
        let key_path = join_path(path, key);
        let existing = touched
            .get(key.as_str())
            .copied()
            .unwrap_or_else(|| target.get(key));
        match existing {
            None => {
                if let DynamicValue::Object(inserted) = incoming
                    && options.may_insert(level)
                {
                    validate_level(
                        &ObjectMap::new(),
                        inserted,
                        options.for_insertion(),
                        Level::Nested,
                        Some(&key_path),
                        depth + 1,
                        errors,
                    );
                }
            }
            Some(current) => {
                if options.enforce_types && current.coarse_type() != incoming.coarse_type() {
                    errors.push(PatchError::type_mismatch(
                        key_path,
                        current.coarse_type(),
                        incoming.coarse_type(),
                    ));
                    continue;
                }
                if let (DynamicValue::Object(current_map), DynamicValue::Object(incoming_map)) =
                    (current, incoming)
                    && options.recursive
                {
                    validate_level(
                        current_map,
                        incoming_map,
                        options,
                        Level::Nested,
                        Some(&key_path),
                        depth + 1,
                        errors,
                    );
                }
            }
        }
    }
}
