//! The scalar value type exposed through the console.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of scalar a console field holds.
///
/// Only these three kinds may be bound to a variable name; anything else
/// is rejected when the field is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Free-form text.
    Text,
}

impl ValueKind {
    /// Coerces a raw command-line argument into a value of this kind.
    ///
    /// Integers parse as base-10 signed 64-bit (overflow is a parse
    /// failure); floats accept decimal and scientific literals; text is
    /// taken as-is and cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidValue`](crate::ErrorKind::InvalidValue)
    /// if the raw string does not parse as this kind.
    pub fn coerce(self, raw: &str) -> crate::Result<Value> {
        match self {
            Self::Integer => raw
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| Error::invalid_value(raw, self)),
            Self::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::invalid_value(raw, self)),
            Self::Text => Ok(Value::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Text => write!(f, "Text"),
        }
    }
}

/// A scalar value held by a console field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Free-form text.
    Text(String),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
