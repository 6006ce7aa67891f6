//! Per-class converters.
//!
//! One module per converter family:
//! - `integer`: tinyint..bigint, year
//! - `float`: float, double, real
//! - `decimal`: decimal, numeric
//! - `bit`: bit-field values
//! - `temporal`: date, datetime, timestamp
//! - `time`: time (clock form and integer alias)
//! - `text`: char/varchar/text family, enum, set
//! - `binary`: binary/varbinary/blob family
//! - `boolean`: boolean
//! - `spatial`: geometry and subtypes
//! - `json`: json
//!
//! Converters only ever see registered type names; unknown names are
//! rejected before dispatch. NULL is handled by the facade.

pub mod binary;
pub mod bit;
pub mod boolean;
pub mod decimal;
pub mod float;
pub mod integer;
pub mod json;
pub mod spatial;
pub mod temporal;
pub mod text;
pub mod time;

use bytes::BytesMut;

use crate::error::{CodecError, Result};
use crate::literal::Escaping;
use crate::options::TypeOptions;
use crate::types::{TypeClass, TypeName};
use crate::tz::CodecTimeZone;
use crate::value::Value;

/// Per-call conversion context.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub type_name: TypeName,
    pub options: TypeOptions,
    pub time_zone: CodecTimeZone,
    pub escaping: Escaping,
}

impl Context {
    pub fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            options: TypeOptions::NONE,
            time_zone: CodecTimeZone::Utc,
            escaping: Escaping::Backslash,
        }
    }

    pub(crate) fn parse_error(&self, raw: &[u8], reason: impl Into<String>) -> CodecError {
        CodecError::parse(self.type_name, raw, reason)
    }

    pub(crate) fn encode_error(&self, value: &Value, reason: impl Into<String>) -> CodecError {
        CodecError::encode(self.type_name, value.kind(), reason)
    }

    /// The value variant has no literal form for this type.
    pub(crate) fn incompatible(&self, value: &Value) -> CodecError {
        self.encode_error(value, format!("{} values are not accepted", value.kind()))
    }

    /// Raw bytes as UTF-8, or a parse error.
    pub(crate) fn utf8<'a>(&self, raw: &'a [u8]) -> Result<&'a str> {
        std::str::from_utf8(raw).map_err(|e| self.parse_error(raw, format!("invalid UTF-8: {}", e)))
    }
}

/// Decode raw column bytes.
pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    match ctx.type_name.class() {
        TypeClass::Integer => integer::decode(raw, ctx),
        TypeClass::Float => float::decode(raw, ctx),
        TypeClass::Decimal => decimal::decode(raw, ctx),
        TypeClass::Bit => bit::decode(raw, ctx),
        TypeClass::Temporal => temporal::decode(raw, ctx),
        TypeClass::Time => time::decode(raw, ctx),
        TypeClass::Text | TypeClass::Enumerated => text::decode(raw, ctx),
        TypeClass::Binary => binary::decode(raw, ctx),
        TypeClass::Boolean => boolean::decode(raw, ctx),
        TypeClass::Spatial => spatial::decode(raw, ctx),
        TypeClass::Json => json::decode(raw, ctx),
    }
}

/// Append the SQL literal for a non-NULL value.
pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match ctx.type_name.class() {
        TypeClass::Integer => integer::encode(value, buf, ctx),
        TypeClass::Float => float::encode(value, buf, ctx),
        TypeClass::Decimal => decimal::encode(value, buf, ctx),
        TypeClass::Bit => bit::encode(value, buf, ctx),
        TypeClass::Temporal => temporal::encode(value, buf, ctx),
        TypeClass::Time => time::encode(value, buf, ctx),
        TypeClass::Text | TypeClass::Enumerated => text::encode(value, buf, ctx),
        TypeClass::Binary => binary::encode(value, buf, ctx),
        TypeClass::Boolean => boolean::encode(value, buf, ctx),
        TypeClass::Spatial => spatial::encode(value, buf, ctx),
        TypeClass::Json => json::encode(value, buf, ctx),
    }
}
