//! Purpose: Index access into JSON arrays for an expression evaluator.
//! Exports: `core` (errors), `eval` (accessor trait and dispatch), `json` (array accessor, results, decoding).
//! Role: Library behind the `jsonidx` CLI and the integration tests.
//! Invariants: Accessors are stateless and safe to share across threads.
//! Invariants: Target documents are borrowed for reads and never mutated.
pub mod core;
pub mod eval;
pub mod json;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::eval::{EvaluationContext, Index, IndexAccessor, NodeType};
pub use crate::json::{JsonIndexAccessor, Scalar, TypedValue};
