//! Mutating second pass over a merge.
//!
//! Runs only after [`super::validate::validate_level`] accepted the same
//! inputs, so it cannot fail. Patch values are stored through the strict
//! [`duplicate`], so non-finite numbers land as `null`.

use crate::{DELETION_PREFIX, DynamicValue, ObjectMap, REPLACEMENT_PREFIX, duplicate};

use super::options::{Level, MergeOptions};

/// Merges `patch` into `target` in place.
pub(super) fn apply_level(
    target: &mut ObjectMap,
    patch: &ObjectMap,
    options: MergeOptions,
    level: Level,
) {
    for (key, incoming) in patch {
        if let Some(removed) = key.strip_prefix(DELETION_PREFIX) {
            if target.shift_remove(removed).is_some() {
                tracing::trace!(key = removed, "deleted key during merge");
            }
            continue;
        }
        if let Some(replaced) = key.strip_prefix(REPLACEMENT_PREFIX) {
            tracing::trace!(key = replaced, "forced replacement during merge");
            target.insert(replaced.to_owned(), duplicate(incoming));
            continue;
        }
        match (target.get_mut(key), incoming) {
            (None, _) => {
                if options.may_insert(level) {
                    target.insert(key.clone(), inserted(incoming, options));
                }
            }
            (Some(DynamicValue::Object(current)), DynamicValue::Object(incoming_map))
                if options.recursive =>
            {
                apply_level(current, incoming_map, options, Level::Nested);
            }
            (Some(current), _) => {
                if options.overwrite {
                    *current = duplicate(incoming);
                }
            }
        }
    }
}

/// Builds the value stored for a newly inserted key.
///
/// Objects are rebuilt through a merge into an empty object so nested
/// deletion keys are dropped rather than stored.
fn inserted(incoming: &DynamicValue, options: MergeOptions) -> DynamicValue {
    match incoming {
        DynamicValue::Object(map) => {
            let mut fresh = ObjectMap::with_capacity(map.len());
            apply_level(&mut fresh, map, options.for_insertion(), Level::Nested);
            DynamicValue::Object(fresh)
        }
        other => duplicate(other),
    }
}
