//! Dynamically typed inputs and their validated numeric form
//!
//! Every operation that needs a real number or a string accepts anything
//! convertible into a [`Value`]. Typed Rust arguments (`f64`, `i32`, `&str`)
//! convert without loss, while inputs of the wrong shape are rejected at
//! runtime with [`AnalyticsError::Validation`].
//!
//! ```
//! use streamkit::value::{Number, Value};
//!
//! assert_eq!(Value::from(3).as_number().unwrap(), Number::Int(3));
//! assert!(Value::from("3").as_number().is_err());
//! assert!(Value::Null.as_number().is_err());
//! ```

use core::fmt;

use crate::error::{AnalyticsError, Result};

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// An untyped input value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Validate this value as a real number
    ///
    /// Integers and non-NaN floats pass. Booleans are not numbers here.
    pub fn as_number(&self) -> Result<Number> {
        match *self {
            Value::Int(i) => Ok(Number::Int(i)),
            Value::Float(f) if !f.is_nan() => Ok(Number::Float(f)),
            Value::Float(_) => Err(AnalyticsError::validation("expected int or float, got NaN")),
            ref other => Err(AnalyticsError::validation(format_kind(
                "expected int or float, got ",
                other.kind(),
            ))),
        }
    }

    /// Validate this value as a string
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(AnalyticsError::validation(format_kind(
                "expected string, got ",
                other.kind(),
            ))),
        }
    }
}

fn format_kind(prefix: &str, kind: &str) -> String {
    let mut msg = String::with_capacity(prefix.len() + kind.len());
    msg.push_str(prefix);
    msg.push_str(kind);
    msg
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A validated real number
///
/// Integer arithmetic stays integral until it overflows, at which point the
/// result is computed in floating point instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Coerce to floating point
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Sum of two numbers
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.to_f64() + b.to_f64()),
        }
    }

    /// Product of two numbers
    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Number::Float(a as f64 * b as f64), Number::Int),
            (a, b) => Number::Float(a.to_f64() * b.to_f64()),
        }
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.to_f64()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(Value::from(7i32).as_number(), Ok(Number::Int(7)));
        assert_eq!(Value::from(2.5).as_number(), Ok(Number::Float(2.5)));
        assert_eq!(
            Value::from(f64::INFINITY).as_number(),
            Ok(Number::Float(f64::INFINITY))
        );
    }

    #[test]
    fn test_rejects_non_numbers() {
        let bad = [
            Value::Null,
            Value::from(true),
            Value::from("12"),
            Value::from(vec![1, 2]),
            Value::from(f64::NAN),
            Value::from(None::<f64>),
        ];
        for v in bad {
            let err = v.as_number().unwrap_err();
            assert!(err.is_validation(), "{:?} should fail validation", v);
        }
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::from("hi").as_str(), Ok("hi"));
        let err = Value::from(3).as_str().unwrap_err();
        assert_eq!(err.to_string(), "validation error: expected string, got int");
    }

    #[test]
    fn test_int_arithmetic_overflows_to_float() {
        assert_eq!(Number::Int(2).add(Number::Int(3)), Number::Int(5));
        assert_eq!(Number::Int(3).mul(Number::Int(4)), Number::Int(12));
        assert_eq!(
            Number::Int(i64::MAX).add(Number::Int(1)),
            Number::Float(i64::MAX as f64 + 1.0)
        );
        assert_eq!(Number::Int(1).add(Number::Float(0.5)), Number::Float(1.5));
    }
}
