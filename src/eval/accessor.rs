use std::fmt;

use serde_json::Value;

use crate::core::error::Error;
use crate::eval::EvaluationContext;
use crate::json::TypedValue;

/// JSON node classification used to route index access to accessors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NodeType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index operand as handed over by the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Index {
    Int(i64),
    Str(String),
    Float(f64),
    Bool(bool),
    Null,
}

impl Index {
    /// Interprets one command-line argument as an index.
    ///
    /// `'1'` is the string index `1`; `1` and `-1` are integers; anything else is a string.
    pub fn from_arg(arg: &str) -> Self {
        if let Some(quoted) = arg
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            return Self::Str(quoted.to_string());
        }
        match arg.parse::<i64>() {
            Ok(int) => Self::Int(int),
            Err(_) => Self::Str(arg.to_string()),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for Index {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Index {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Index {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Index {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Index {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Index {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Capability plugin for `target[index]` reads and writes.
///
/// The evaluator asks `can_read`/`can_write` first and only calls `read`/`write`
/// on an accessor that answered `true` for the same pair.
pub trait IndexAccessor: Send + Sync {
    /// Node types this accessor handles. Empty means it is tried for any target.
    fn specific_target_types(&self) -> &[NodeType];

    fn can_read(&self, context: &EvaluationContext, target: &Value, index: &Index) -> bool;

    fn read<'a>(
        &self,
        context: &EvaluationContext,
        target: &'a Value,
        index: &Index,
    ) -> Result<TypedValue<'a>, Error>;

    fn can_write(&self, context: &EvaluationContext, target: &Value, index: &Index) -> bool;

    fn write(
        &self,
        context: &EvaluationContext,
        target: &mut Value,
        index: &Index,
        value: Value,
    ) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::{Index, NodeType};
    use serde_json::json;

    #[test]
    fn node_type_follows_value_variant() {
        assert_eq!(NodeType::of(&json!([])), NodeType::Array);
        assert_eq!(NodeType::of(&json!({})), NodeType::Object);
        assert_eq!(NodeType::of(&json!(null)), NodeType::Null);
        assert_eq!(NodeType::of(&json!("a")).to_string(), "string");
    }

    #[test]
    fn from_arg_distinguishes_quoted_strings() {
        assert_eq!(Index::from_arg("1"), Index::Int(1));
        assert_eq!(Index::from_arg("-1"), Index::Int(-1));
        assert_eq!(Index::from_arg("'1'"), Index::Str("1".to_string()));
        assert_eq!(Index::from_arg("''"), Index::Str(String::new()));
        assert_eq!(Index::from_arg("name"), Index::Str("name".to_string()));
        assert_eq!(Index::from_arg("'"), Index::Str("'".to_string()));
    }

    #[test]
    fn display_quotes_strings() {
        assert_eq!(Index::from("7").to_string(), "'7'");
        assert_eq!(Index::from(7).to_string(), "7");
        assert_eq!(Index::Null.to_string(), "null");
    }
}
