//! Purpose: Read `array[1]` / `array['1']` from JSON array nodes during evaluation.
//! Exports: `JsonIndexAccessor`.
//! Role: Index accessor registered on `EvaluationContext` for `NodeType::Array` targets.
//! Invariants: Accepts integer indexes and non-empty ASCII-digit string indexes only.
//! Invariants: Missing, negative, or null positions read as `TypedValue::Null`.
//! Invariants: Read-only; `write` always fails with `ErrorKind::Unsupported`.
//! Notes: Negative digit strings (`'-1'`) are declined while native `-1` reads as null.

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::eval::{EvaluationContext, Index, IndexAccessor, NodeType};
use crate::json::TypedValue;

const SUPPORTED_TYPES: &[NodeType] = &[NodeType::Array];

/// Stateless accessor for JSON array elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonIndexAccessor;

impl IndexAccessor for JsonIndexAccessor {
    fn specific_target_types(&self) -> &[NodeType] {
        SUPPORTED_TYPES
    }

    fn can_read(&self, _context: &EvaluationContext, target: &Value, index: &Index) -> bool {
        target.is_array() && (matches!(index, Index::Int(_)) || is_numeric_string(index))
    }

    fn read<'a>(
        &self,
        _context: &EvaluationContext,
        target: &'a Value,
        index: &Index,
    ) -> Result<TypedValue<'a>, Error> {
        let Value::Array(items) = target else {
            return Err(Error::new(ErrorKind::Access)
                .with_message(format!(
                    "target is a {} node, not an array",
                    NodeType::of(target)
                ))
                .with_index(index));
        };
        let position = int_index(index)?;
        // Negative positions never address an element.
        let element = usize::try_from(position)
            .ok()
            .and_then(|position| items.get(position));
        tracing::trace!(%index, len = items.len(), found = element.is_some(), "json array read");
        TypedValue::from_node(element).map_err(|err| {
            Error::new(ErrorKind::Access)
                .with_message("failed to decode array element")
                .with_index(index)
                .with_source(err)
        })
    }

    fn can_write(&self, _context: &EvaluationContext, _target: &Value, _index: &Index) -> bool {
        false
    }

    fn write(
        &self,
        _context: &EvaluationContext,
        _target: &mut Value,
        index: &Index,
        _value: Value,
    ) -> Result<(), Error> {
        Err(Error::new(ErrorKind::Unsupported)
            .with_message("write is not supported")
            .with_index(index))
    }
}

fn is_numeric_string(index: &Index) -> bool {
    match index {
        Index::Str(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

fn int_index(index: &Index) -> Result<i64, Error> {
    match index {
        Index::Int(i) => Ok(*i),
        Index::Str(s) => s.parse::<i64>().map_err(|err| {
            Error::new(ErrorKind::Access)
                .with_message("index is not a representable integer")
                .with_index(index)
                .with_source(err)
        }),
        other => Err(Error::new(ErrorKind::Access)
            .with_message("index must be an integer or a numeric string")
            .with_index(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_numeric_string, JsonIndexAccessor};
    use crate::core::error::ErrorKind;
    use crate::eval::{EvaluationContext, Index, IndexAccessor, NodeType};
    use crate::json::{Scalar, TypedValue};
    use serde_json::json;

    #[test]
    fn numeric_string_shape_check() {
        for ok in ["0", "3", "007", "18446744073709551616"] {
            assert!(is_numeric_string(&Index::from(ok)), "{ok}");
        }
        for bad in ["", "-3", "+3", "3.0", " 3", "3 ", "3a", "٣"] {
            assert!(!is_numeric_string(&Index::from(bad)), "{bad:?}");
        }
        assert!(!is_numeric_string(&Index::Int(3)));
    }

    #[test]
    fn supports_only_arrays() {
        assert_eq!(JsonIndexAccessor.specific_target_types(), &[NodeType::Array]);
    }

    #[test]
    fn read_mixes_scalar_kinds() {
        let context = EvaluationContext::new();
        let doc = json!([10, "x", true]);
        let read = |index: Index| JsonIndexAccessor.read(&context, &doc, &index).unwrap();
        assert_eq!(read(Index::Int(0)), TypedValue::Scalar(Scalar::Int(10)));
        assert_eq!(read(Index::Int(1)), TypedValue::Scalar(Scalar::Str("x")));
        assert_eq!(read(Index::from("2")), TypedValue::Scalar(Scalar::Bool(true)));
    }

    #[test]
    fn read_on_non_array_is_access_error() {
        let context = EvaluationContext::new();
        let doc = json!({"0": 1});
        let err = JsonIndexAccessor
            .read(&context, &doc, &Index::Int(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Access);
    }

    #[test]
    fn read_with_rejected_index_shape_is_access_error() {
        let context = EvaluationContext::new();
        let doc = json!([1]);
        let err = JsonIndexAccessor
            .read(&context, &doc, &Index::Float(0.0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Access);
    }

    #[test]
    fn leading_zeros_parse_as_position() {
        let context = EvaluationContext::new();
        let doc = json!(["a", "b"]);
        let value = JsonIndexAccessor
            .read(&context, &doc, &Index::from("01"))
            .unwrap();
        assert_eq!(value.as_scalar().and_then(|s| s.as_str()), Some("b"));
    }
}
