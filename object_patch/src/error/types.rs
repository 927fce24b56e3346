//! Primary error enum for merge, flatten and conversion failures.

use thiserror::Error;

use crate::CoarseType;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while transforming dynamic values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatchError {
    /// A merge with `enforce_types` met a shared key whose coarse types differ.
    #[error("type mismatch at '{key}': existing {expected}, incoming {found}")]
    TypeMismatch {
        /// Dotted path of the conflicting key.
        key: String,
        /// Coarse type of the value already present.
        expected: CoarseType,
        /// Coarse type of the incoming value.
        found: CoarseType,
    },

    /// The nesting depth guard was tripped.
    #[error("maximum depth of {limit} exceeded at '{path}'")]
    RecursionDepthExceeded {
        /// Dotted path at which the limit was crossed.
        path: String,
        /// The depth limit in force.
        limit: usize,
    },

    /// A `NaN` or infinite number cannot be represented as JSON.
    #[error("number at '{path}' is not representable as JSON")]
    UnrepresentableNumber {
        /// Dotted path of the offending number.
        path: String,
    },

    /// A document expected to be an object was some other type.
    #[error("expected an object document, found {found}")]
    NotAnObject {
        /// Coarse type of the document that was supplied.
        found: CoarseType,
    },

    /// JSON text could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] Box<serde_json::Error>),

    /// A merge was rejected for more than one reason.
    #[error("merge rejected with {count} errors:\n{0}", count = .0.len())]
    Aggregate(Box<AggregatedErrors>),
}
