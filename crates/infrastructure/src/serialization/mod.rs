//! Deterministic JSON serialization for collection files.
//!
//! Output is stable across runs so exported collections diff cleanly:
//! - Field order follows the model's declaration order
//! - Map keys are sorted (`serde_json::Map` is ordered by key)
//! - 2-space indentation
//! - Trailing newline

mod json;

pub use json::*;
