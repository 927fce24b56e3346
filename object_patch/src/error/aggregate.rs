//! Failures collected by one merge validation pass.

use std::fmt;

use super::PatchError;

/// Every failure a rejected merge found, ordered by dotted path.
///
/// Ordering by path keeps reports stable whatever order the patch keys
/// arrived in. Stable sorting keeps errors at the same path in the order
/// they were found.
#[derive(Debug)]
pub struct AggregatedErrors(Vec<PatchError>);

impl AggregatedErrors {
    pub(super) fn new(mut errors: Vec<PatchError>) -> Self {
        errors.sort_by(|left, right| left.path().cmp(&right.path()));
        Self(errors)
    }

    /// Iterate over the collected errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &PatchError> {
        self.0.iter()
    }

    /// Dotted paths of the offending keys, in report order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(PatchError::path)
    }

    /// Number of collected errors.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            write!(f, "  {first}")?;
        }
        for err in lines {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}
