//! Extensions for mapping foreign errors to `PatchResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(PatchError::…))`
//! patterns when converting external error types into the crate's
//! `PatchResult<T>` alias (`Result<T, Arc<PatchError>>`).
//!
//! # Examples
//!
//! ```
//! use object_patch::{PatchResult, PatchResultExt};
//!
//! fn parse(text: &str) -> PatchResult<serde_json::Value> {
//!     serde_json::from_str(text).into_patch()
//! }
//!
//! assert!(parse("{").is_err());
//! ```

use std::sync::Arc;

use crate::{PatchError, PatchResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<PatchError>`
/// into a `PatchResult<T>`.
pub trait PatchResultExt<T, E> {
    /// Convert `Result<T, E>` into `PatchResult<T>` using `Into<PatchError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<PatchError>`.
    fn into_patch(self) -> PatchResult<T>;
}

impl<T, E> PatchResultExt<T, E> for Result<T, E>
where
    E: Into<PatchError>,
{
    fn into_patch(self) -> PatchResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

impl From<serde_json::Error> for PatchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(Box::new(e))
    }
}
