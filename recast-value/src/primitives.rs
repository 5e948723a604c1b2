//! `Construct` implementations for the common scalars and containers.
//!
//! The scalar coercions are deliberately lenient in the way a casting layer
//! is expected to be: integral targets accept integral numbers, truncate
//! finite floats toward zero, and parse strings that spell an integer, so
//! `"122"` casts to `122` and `2.3` casts to `2` while `"1.23"` is rejected.

use recast_core::CastError;
use serde_json::Value;

use crate::construct::{Construct, value_kind};

fn out_of_range(value: impl std::fmt::Display, target: &'static str) -> CastError {
    CastError::InvalidInput(format!("{value} is out of range for {target}"))
}

fn unparsable(value: &str, target: &'static str) -> CastError {
    CastError::InvalidInput(format!("cannot parse `{value}` as {target}"))
}

impl Construct for i64 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if let Some(f) = n.as_f64() {
                    truncate_f64(f, i64::MIN as f64, i64::MAX as f64, "an integer")
                        .map(|f| f as i64)
                } else {
                    Err(out_of_range(n, "an integer"))
                }
            }
            Value::String(s) => s.parse().map_err(|_| unparsable(s, "an integer")),
            Value::Bool(b) => Ok(i64::from(*b)),
            other => Err(CastError::Mismatch {
                expected: "a number, numeric string, or boolean",
                found: value_kind(other),
            }),
        }
    }
}

impl Construct for u64 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_u64() {
                    Ok(i)
                } else if let Some(f) = n.as_f64() {
                    truncate_f64(f, 0.0, u64::MAX as f64, "an unsigned integer").map(|f| f as u64)
                } else {
                    Err(out_of_range(n, "an unsigned integer"))
                }
            }
            Value::String(s) => s.parse().map_err(|_| unparsable(s, "an unsigned integer")),
            Value::Bool(b) => Ok(u64::from(*b)),
            other => Err(CastError::Mismatch {
                expected: "a number, numeric string, or boolean",
                found: value_kind(other),
            }),
        }
    }
}

/// Truncates toward zero, rejecting values a `[min, max]` integral target
/// cannot hold.
fn truncate_f64(f: f64, min: f64, max: f64, target: &'static str) -> Result<f64, CastError> {
    if !f.is_finite() || f < min || f > max {
        return Err(out_of_range(f, target));
    }
    Ok(f.trunc())
}

impl Construct for f64 {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| out_of_range(n, "a float")),
            Value::String(s) => s.parse().map_err(|_| unparsable(s, "a float")),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(CastError::Mismatch {
                expected: "a number, numeric string, or boolean",
                found: value_kind(other),
            }),
        }
    }
}

impl Construct for bool {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(CastError::Mismatch {
                expected: "a boolean",
                found: value_kind(other),
            }),
        }
    }
}

impl Construct for String {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(CastError::Mismatch {
                expected: "a string, number, or boolean",
                found: value_kind(other),
            }),
        }
    }
}

impl<T: Construct> Construct for Option<T> {
    /// `Null` becomes `None`; any other value must cast to `T`.
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: Construct> Construct for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, CastError> {
        match value {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            other => Err(CastError::Mismatch {
                expected: "an array",
                found: value_kind(other),
            }),
        }
    }
}
