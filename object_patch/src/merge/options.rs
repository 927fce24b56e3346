//! Switches controlling [`crate::merge_object`].

use serde::Deserialize;

/// Options for [`crate::merge_object`] and [`crate::merge_object_in_place`].
///
/// Every switch defaults to `true` except `enforce_types`. The record
/// deserialises from camelCase keys, so option sets can live in a caller's
/// JSON configuration:
///
/// ```rust
/// use object_patch::MergeOptions;
///
/// let options: MergeOptions = serde_json::from_str(r#"{"insertKeys": false}"#)?;
/// assert_eq!(options, MergeOptions::default().with_insert_keys(false));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[expect(
    clippy::struct_excessive_bools,
    reason = "each switch is an independent merge behaviour"
)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MergeOptions {
    /// Insert top-level keys of `other` missing from `original`.
    pub insert_keys: bool,
    /// Insert keys missing from an already shared nested object.
    pub insert_values: bool,
    /// Replace values present on both sides.
    pub overwrite: bool,
    /// Merge nested objects key by key instead of replacing them.
    pub recursive: bool,
    /// Fail when a shared key changes coarse type.
    pub enforce_types: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeOptions {
    /// The default option set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            insert_keys: true,
            insert_values: true,
            overwrite: true,
            recursive: true,
            enforce_types: false,
        }
    }

    /// Set [`MergeOptions::insert_keys`].
    #[must_use]
    pub const fn with_insert_keys(mut self, insert_keys: bool) -> Self {
        self.insert_keys = insert_keys;
        self
    }

    /// Set [`MergeOptions::insert_values`].
    #[must_use]
    pub const fn with_insert_values(mut self, insert_values: bool) -> Self {
        self.insert_values = insert_values;
        self
    }

    /// Set [`MergeOptions::overwrite`].
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set [`MergeOptions::recursive`].
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set [`MergeOptions::enforce_types`].
    #[must_use]
    pub const fn with_enforce_types(mut self, enforce_types: bool) -> Self {
        self.enforce_types = enforce_types;
        self
    }

    /// Whether a missing key may be inserted at the given level.
    pub(super) const fn may_insert(self, level: Level) -> bool {
        match level {
            Level::Top => self.insert_keys,
            Level::Nested => self.insert_values,
        }
    }

    /// Options used to normalise a freshly inserted object.
    pub(super) const fn for_insertion(self) -> Self {
        self.with_insert_keys(true).with_insert_values(true)
    }
}

/// Position of a merge step relative to the call root.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Level {
    /// Keys of the objects passed by the caller.
    Top,
    /// Keys of objects nested beneath them.
    Nested,
}
