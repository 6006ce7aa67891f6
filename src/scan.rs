//! Scanning decoded values into typed destinations.
//!
//! Coercion is decided by the decoded value, with one rule on top:
//! `String` and `Vec<u8>` accept the raw wire text of every type, after it
//! has been validated by the type's decoder. So scanning `int` "123" into a
//! `String` yields `"123"`, while scanning `varchar` "abc" into an `i64` is a
//! `DestinationMismatch`.

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::converters::decimal::plain;
use crate::error::{CodecError, Result};
use crate::types::{TypeClass, TypeName};
use crate::value::Value;

/// A decoded column, handed to `FromValue`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<'a> {
    pub type_name: TypeName,
    /// Raw bytes as received
    pub raw: &'a [u8],
    pub value: Value,
}

impl Decoded<'_> {
    /// Mismatch error for destination `T`.
    pub fn mismatch<T: FromValue>(&self, reason: impl Into<String>) -> CodecError {
        CodecError::mismatch(self.type_name, T::DESTINATION, reason)
    }

    fn wrong_kind<T: FromValue>(&self) -> CodecError {
        self.mismatch::<T>(format!("{} values do not convert", self.value.kind()))
    }
}

/// Types that can be scanned out of a decoded column.
pub trait FromValue: Sized {
    /// Destination name used in errors.
    const DESTINATION: &'static str;

    fn from_value(decoded: Decoded<'_>) -> Result<Self>;
}

/// Structured JSON destination (and source) for any serde type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: serde::Serialize> Json<T> {
    /// Value for encoding into a `json` column.
    pub fn to_value(&self) -> Result<Value> {
        Value::json(&self.0)
    }
}

impl FromValue for Value {
    const DESTINATION: &'static str = "Value";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        Ok(decoded.value)
    }
}

impl FromValue for String {
    const DESTINATION: &'static str = "String";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Text(s) => Ok(s),
            _ => String::from_utf8(decoded.raw.to_vec())
                .map_err(|_| decoded.mismatch::<Self>("bytes are not valid UTF-8")),
        }
    }
}

impl FromValue for Vec<u8> {
    const DESTINATION: &'static str = "Vec<u8>";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Bytes(b) => Ok(b),
            _ => Ok(decoded.raw.to_vec()),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($t:ty),*) => {
        $(impl FromValue for $t {
            const DESTINATION: &'static str = stringify!($t);

            fn from_value(decoded: Decoded<'_>) -> Result<Self> {
                let converted = match decoded.value {
                    Value::Int(n) => <$t>::try_from(n).ok(),
                    Value::UInt(n) => <$t>::try_from(n).ok(),
                    _ => return Err(decoded.wrong_kind::<Self>()),
                };
                converted.ok_or_else(|| decoded.mismatch::<Self>("out of range"))
            }
        })*
    };
}

impl_from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Integers convert only when the double holds them exactly (|n| <= 2^53,
/// or a multiple of a large enough power of two).
impl FromValue for f64 {
    const DESTINATION: &'static str = "f64";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        let n = match decoded.value {
            Value::Float(n) => return Ok(n),
            Value::Int(n) => n as i128,
            Value::UInt(n) => n as i128,
            _ => return Err(decoded.wrong_kind::<Self>()),
        };
        let f = n as f64;
        if f as i128 == n {
            Ok(f)
        } else {
            Err(decoded.mismatch::<Self>("not exactly representable"))
        }
    }
}

impl FromValue for f32 {
    const DESTINATION: &'static str = "f32";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Float(n) if n.abs() <= f32::MAX as f64 => Ok(n as f32),
            Value::Float(_) => Err(decoded.mismatch::<Self>("out of range")),
            _ => Err(decoded.wrong_kind::<Self>()),
        }
    }
}

impl FromValue for bool {
    const DESTINATION: &'static str = "bool";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Bool(b) => Ok(b),
            _ => Err(decoded.wrong_kind::<Self>()),
        }
    }
}

impl FromValue for BigDecimal {
    const DESTINATION: &'static str = "BigDecimal";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Decimal(d) => Ok(d),
            Value::Int(n) => Ok(BigDecimal::from(n)),
            Value::UInt(n) => Ok(BigDecimal::from(n)),
            _ => Err(decoded.wrong_kind::<Self>()),
        }
    }
}

/// 96-bit decimal. Values beyond its 28 digits are a mismatch, not rounded.
impl FromValue for Decimal {
    const DESTINATION: &'static str = "Decimal";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match &decoded.value {
            Value::Decimal(d) => Decimal::from_str_exact(&plain(d))
                .map_err(|_| decoded.mismatch::<Self>("exceeds 96-bit decimal precision")),
            Value::Int(n) => Ok(Decimal::from(*n)),
            Value::UInt(n) => Ok(Decimal::from(*n)),
            _ => Err(decoded.wrong_kind::<Self>()),
        }
    }
}

/// Instant of a temporal value. Zero dates have none.
fn instant<T: FromValue>(decoded: &Decoded<'_>) -> Result<DateTime<FixedOffset>> {
    match decoded.value {
        Value::Timestamp(ts) => Ok(ts),
        Value::ZeroDate => Err(decoded.mismatch::<T>("zero date has no calendar instant")),
        _ => Err(decoded.wrong_kind::<T>()),
    }
}

impl FromValue for DateTime<FixedOffset> {
    const DESTINATION: &'static str = "DateTime<FixedOffset>";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        instant::<Self>(&decoded)
    }
}

impl FromValue for DateTime<Utc> {
    const DESTINATION: &'static str = "DateTime<Utc>";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        instant::<Self>(&decoded).map(|ts| ts.with_timezone(&Utc))
    }
}

/// Wall-clock time in the codec zone.
impl FromValue for NaiveDateTime {
    const DESTINATION: &'static str = "NaiveDateTime";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        instant::<Self>(&decoded).map(|ts| ts.naive_local())
    }
}

/// Calendar date in the codec zone.
impl FromValue for NaiveDate {
    const DESTINATION: &'static str = "NaiveDate";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        instant::<Self>(&decoded).map(|ts| ts.date_naive())
    }
}

impl FromValue for TimeDelta {
    const DESTINATION: &'static str = "TimeDelta";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        match decoded.value {
            Value::Time(t) => Ok(t),
            _ => Err(decoded.wrong_kind::<Self>()),
        }
    }
}

/// Parse a JSON column document into `T`.
fn json_document<D, T>(decoded: &Decoded<'_>) -> Result<T>
where
    D: FromValue,
    T: DeserializeOwned,
{
    if decoded.type_name.class() != TypeClass::Json {
        return Err(decoded.mismatch::<D>("only json columns hold documents"));
    }
    serde_json::from_slice(decoded.raw)
        .map_err(|e| CodecError::parse(decoded.type_name, decoded.raw, e.to_string()))
}

impl FromValue for serde_json::Value {
    const DESTINATION: &'static str = "serde_json::Value";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        json_document::<Self, _>(&decoded)
    }
}

impl<T: DeserializeOwned> FromValue for Json<T> {
    const DESTINATION: &'static str = "Json<T>";

    fn from_value(decoded: Decoded<'_>) -> Result<Self> {
        json_document::<Self, T>(&decoded).map(Json)
    }
}
