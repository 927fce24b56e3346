//! Error types produced by toolkit operations.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::PatchError;
