//! Purpose: JSON-side pieces of index evaluation.
//! Exports: `JsonIndexAccessor`, `TypedValue`, `Scalar`, and the `parse` decode boundary.
//! Role: Everything that knows about `serde_json::Value` node shapes lives here.
//! Invariants: Accessors only borrow target nodes; nothing here mutates a document.

mod index_accessor;
pub mod parse;
mod typed;

pub use index_accessor::JsonIndexAccessor;
pub use typed::{Scalar, TypedValue};
