//! Test helpers shared across crates.
//!
//! [`text`] normalises step placeholders captured by behavioural suites, and
//! [`json`] turns captured JSON literals into documents with readable
//! failure messages.

pub mod json;
pub mod text;
