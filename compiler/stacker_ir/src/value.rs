//! Runtime values for the Stacker interpreter.

use std::fmt;

/// Runtime value held in a stack slot.
///
/// Equality is structural and never crosses kinds: `Int(100)` is not
/// equal to `Str("100")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// Raw text token.
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// Absence of a value.
    Void,
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Get the type name of this value, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Void => "void",
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Returns `true` only for `Bool(false)`.
    ///
    /// `Int(0)`, `Void` and the empty string are not false.
    #[inline]
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Void => write!(f, "void"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}
