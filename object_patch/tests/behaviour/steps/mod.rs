//! Behavioural step modules registered with `rstest-bdd`.

pub mod document_steps;
pub mod flatten_steps;
pub mod merge_steps;
