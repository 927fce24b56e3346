//! Constructors and accessors for `PatchError`.

use std::sync::Arc;

use crate::{CoarseType, MAX_DEPTH};

use super::{AggregatedErrors, PatchError};

impl PatchError {
    /// Folds the failures of one validation pass into a single error.
    ///
    /// `None` when the pass found nothing, the error itself when it found
    /// one, and [`Self::Aggregate`] otherwise.
    pub(crate) fn try_aggregate(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 | 1 => errors.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors)))),
        }
    }

    /// Construct a type mismatch for the dotted `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use object_patch::{CoarseType, PatchError};
    /// let e = PatchError::type_mismatch("stats.hp", CoarseType::Number, CoarseType::String);
    /// assert_eq!(
    ///     e.to_string(),
    ///     "type mismatch at 'stats.hp': existing number, incoming string"
    /// );
    /// assert_eq!(e.path(), Some("stats.hp"));
    /// ```
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>, expected: CoarseType, found: CoarseType) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Construct a depth guard failure at `path` using [`MAX_DEPTH`].
    #[must_use]
    pub fn depth_exceeded(path: impl Into<String>) -> Self {
        Self::RecursionDepthExceeded {
            path: path.into(),
            limit: MAX_DEPTH,
        }
    }

    /// Construct a depth guard failure wrapped in an [`Arc`].
    #[must_use]
    pub fn depth_exceeded_arc(path: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::depth_exceeded(path))
    }

    /// Dotted path the error points at, when it points at one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { key, .. } => Some(key.as_str()),
            Self::RecursionDepthExceeded { path, .. } | Self::UnrepresentableNumber { path } => {
                Some(path.as_str())
            }
            Self::NotAnObject { .. } | Self::Json(_) | Self::Aggregate(_) => None,
        }
    }
}
