//! Graph validation for visually authored automation workflows.
//!
//! The browser-based graph editor owns the node/edge state; this crate takes
//! a snapshot of that state and returns a list of [`error::ValidationIssue`]s.
//! Issues typed `error` block workflow activation, `warning`s are advisory.
//! Validation is a pure function over the snapshot: no I/O, no retained state
//! between calls, no mutation of the inputs.

pub mod error;
pub mod parse;
pub mod validate;
pub mod wasm;
