//! Application-level values handled by the codec.

use std::fmt;

use bigdecimal::{BigDecimal, num_bigint::BigInt};
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use serde::Serialize;

use crate::converters::decimal::plain;
use crate::error::CodecError;
use crate::types::TypeName;

/// A dynamically typed value on the application side of the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Arbitrary-precision decimal, scale preserved
    Decimal(BigDecimal),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
    /// Instant anchored to the codec time zone
    Timestamp(DateTime<FixedOffset>),
    /// MySQL all-zero date (`0000-00-00`), which has no calendar instant
    ZeroDate,
    /// MySQL TIME: signed clock duration
    Time(TimeDelta),
    Json(serde_json::Value),
}

impl Value {
    /// Serialize any `Serialize` value for a JSON column.
    ///
    /// Fails with an encode error when the value has no JSON form
    /// (e.g. a map with non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Value, CodecError> {
        serde_json::to_value(value)
            .map(Value::Json)
            .map_err(|e| CodecError::encode(TypeName::Json, "json", e.to_string()))
    }

    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
            Value::ZeroDate => "zero date",
            Value::Time(_) => "time",
            Value::Json(_) => "json",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => f.write_str(&plain(d)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Value::ZeroDate => write!(f, "0000-00-00"),
            Value::Time(t) => write!(f, "{}", t),
            Value::Json(j) => write!(f, "{}", j),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<rust_decimal::Decimal> for Value {
    fn from(d: rust_decimal::Decimal) -> Self {
        Value::Decimal(BigDecimal::new(BigInt::from(d.mantissa()), d.scale().into()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(ts: DateTime<Tz>) -> Self {
        Value::Timestamp(ts.fixed_offset())
    }
}

impl From<TimeDelta> for Value {
    fn from(t: TimeDelta) -> Self {
        Value::Time(t)
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Value::Json(j)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
