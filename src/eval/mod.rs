//! Purpose: Host-side seam for index access inside expression evaluation.
//! Exports: `IndexAccessor`, `Index`, `NodeType`, `EvaluationContext`.
//! Role: Routes `target[index]` to registered accessors in a fixed order.
//! Invariants: Type-specific accessors are tried before general ones.
//! Invariants: An accessor is only asked to read/write after it accepted the same pair.

mod accessor;
mod context;

pub use accessor::{Index, IndexAccessor, NodeType};
pub use context::EvaluationContext;
