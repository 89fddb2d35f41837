use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::eval::{Index, IndexAccessor, NodeType};
use crate::json::{JsonIndexAccessor, TypedValue};

/// Evaluation state shared by index accessors: the ordered accessor registry.
#[derive(Clone)]
pub struct EvaluationContext {
    index_accessors: Vec<Arc<dyn IndexAccessor>>,
}

impl fmt::Debug for EvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("index_accessors", &self.index_accessors.len())
            .finish()
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        let mut context = Self::new();
        context.add_index_accessor(Arc::new(JsonIndexAccessor));
        context
    }
}

impl EvaluationContext {
    /// Context with no accessors registered.
    pub fn new() -> Self {
        Self {
            index_accessors: Vec::new(),
        }
    }

    pub fn add_index_accessor(&mut self, accessor: Arc<dyn IndexAccessor>) {
        self.index_accessors.push(accessor);
    }

    pub fn index_accessors(&self) -> &[Arc<dyn IndexAccessor>] {
        &self.index_accessors
    }

    /// Reads `target[index]` through the first accessor that accepts the pair.
    pub fn read_index<'a>(
        &self,
        target: &'a Value,
        index: &Index,
    ) -> Result<TypedValue<'a>, Error> {
        let node_type = NodeType::of(target);
        for accessor in self.accessors_to_try(node_type) {
            if accessor.can_read(self, target, index) {
                tracing::debug!(%node_type, %index, "dispatching index read");
                return accessor.read(self, target, index);
            }
        }
        Err(indexing_not_supported(node_type, index))
    }

    /// Writes `target[index] = value` through the first accessor that accepts the pair.
    pub fn write_index(
        &self,
        target: &mut Value,
        index: &Index,
        value: Value,
    ) -> Result<(), Error> {
        let node_type = NodeType::of(target);
        for accessor in self.accessors_to_try(node_type) {
            if accessor.can_write(self, target, index) {
                tracing::debug!(%node_type, %index, "dispatching index write");
                return accessor.write(self, target, index, value);
            }
        }
        Err(indexing_not_supported(node_type, index)
            .with_hint("no registered accessor permits writes"))
    }

    /// Applies `path` left to right, starting from `target`.
    ///
    /// An empty path yields the target itself as a node.
    pub fn read_path<'a>(
        &self,
        target: &'a Value,
        path: &[Index],
    ) -> Result<TypedValue<'a>, Error> {
        let mut current = TypedValue::Node(target);
        for (position, index) in path.iter().enumerate() {
            let node = match current {
                TypedValue::Node(node) => node,
                TypedValue::Null => {
                    return Err(Error::new(ErrorKind::Usage)
                        .with_message(format!(
                            "cannot index into null at path position {position}"
                        ))
                        .with_index(index));
                }
                TypedValue::Scalar(scalar) => {
                    return Err(Error::new(ErrorKind::Usage)
                        .with_message(format!(
                            "cannot index into scalar {scalar} at path position {position}"
                        ))
                        .with_index(index));
                }
            };
            current = self.read_index(node, index)?;
        }
        Ok(current)
    }

    // Type-specific accessors first, then general ones; registration order within each group.
    fn accessors_to_try(&self, node_type: NodeType) -> Vec<&Arc<dyn IndexAccessor>> {
        let specific = self
            .index_accessors
            .iter()
            .filter(|accessor| accessor.specific_target_types().contains(&node_type));
        let general = self
            .index_accessors
            .iter()
            .filter(|accessor| accessor.specific_target_types().is_empty());
        specific.chain(general).collect()
    }
}

fn indexing_not_supported(node_type: NodeType, index: &Index) -> Error {
    Error::new(ErrorKind::Usage)
        .with_message(format!("indexing into type {node_type} is not supported"))
        .with_index(index)
}
