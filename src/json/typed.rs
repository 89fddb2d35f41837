//! Purpose: Tagged result of an index read against a JSON node.
//! Exports: `TypedValue`, `Scalar`.
//! Role: Keeps null, decoded scalar, and raw composite outcomes distinct for the host.
//! Invariants: Composite nodes are borrowed from the target, never cloned or flattened.
//! Invariants: Scalars borrow string payloads from the target node.

use std::fmt;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};

/// Decoded leaf value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl<'a> Scalar<'a> {
    /// Decodes a leaf node into its native representation.
    ///
    /// Integers prefer `i64`, then `u64`; anything else numeric is `f64`.
    pub fn from_leaf(node: &'a Value) -> Result<Self, Error> {
        match node {
            Value::String(s) => Ok(Self::Str(s.as_str())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::UInt(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(Error::new(ErrorKind::Internal)
                        .with_message(format!("number {n} has no native representation")))
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => {
                Err(Error::new(ErrorKind::Internal).with_message("json node is not a leaf value"))
            }
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::from(*s),
            Self::Int(i) => Value::from(*i),
            Self::UInt(u) => Value::from(*u),
            // Non-finite floats cannot come from a parsed document; from(f64) maps them to null.
            Self::Float(f) => Value::from(*f),
            Self::Bool(b) => Value::from(*b),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// Outcome of reading one position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypedValue<'a> {
    Null,
    Scalar(Scalar<'a>),
    Node(&'a Value),
}

impl<'a> TypedValue<'a> {
    /// Classifies a looked-up element. `None` means the position holds nothing.
    pub fn from_node(node: Option<&'a Value>) -> Result<Self, Error> {
        match node {
            None | Some(Value::Null) => Ok(Self::Null),
            Some(composite @ (Value::Array(_) | Value::Object(_))) => Ok(Self::Node(composite)),
            Some(leaf) => Scalar::from_leaf(leaf).map(Self::Scalar),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_scalar(&self) -> Option<Scalar<'a>> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&'a Value> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Scalar(scalar) => scalar.to_json(),
            Self::Node(node) => (*node).clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, TypedValue};
    use crate::core::error::ErrorKind;
    use serde_json::{json, Value};

    #[test]
    fn absent_and_null_are_null() {
        assert!(TypedValue::from_node(None).unwrap().is_null());
        assert!(TypedValue::from_node(Some(&Value::Null)).unwrap().is_null());
    }

    #[test]
    fn composites_are_borrowed_not_copied() {
        let doc = json!([[1, 2], {"k": "v"}]);
        let arr = doc.as_array().unwrap();
        let first = TypedValue::from_node(arr.first()).unwrap();
        assert!(std::ptr::eq(first.as_node().unwrap(), &arr[0]));
        let second = TypedValue::from_node(arr.get(1)).unwrap();
        assert_eq!(second.as_node().unwrap(), &json!({"k": "v"}));
    }

    #[test]
    fn numbers_decode_to_narrowest_native_type() {
        let doc = json!([-5, 18446744073709551615u64, 2.5]);
        let arr = doc.as_array().unwrap();
        assert_eq!(Scalar::from_leaf(&arr[0]).unwrap(), Scalar::Int(-5));
        assert_eq!(Scalar::from_leaf(&arr[1]).unwrap(), Scalar::UInt(u64::MAX));
        assert_eq!(Scalar::from_leaf(&arr[2]).unwrap(), Scalar::Float(2.5));
    }

    #[test]
    fn strings_borrow_from_node() {
        let node = json!("hello");
        let scalar = Scalar::from_leaf(&node).unwrap();
        assert_eq!(scalar.as_str(), Some("hello"));
        assert_eq!(scalar.to_string(), "\"hello\"");
    }

    #[test]
    fn non_leaf_is_internal_error() {
        let node = json!([1]);
        let err = Scalar::from_leaf(&node).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn to_json_renders_each_outcome() {
        let node = json!({"a": [true]});
        assert_eq!(TypedValue::Null.to_json(), Value::Null);
        assert_eq!(TypedValue::Scalar(Scalar::Bool(true)).to_json(), json!(true));
        assert_eq!(TypedValue::Node(&node).to_json(), node);
    }
}
