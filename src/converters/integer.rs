//! Integer family: tinyint, smallint, mediumint, int, bigint and year.
//!
//! Decode is always 64-bit: i64, or u64 with the `unsigned` option.
//! Encode checks the column width; values never widen past it. With the
//! `unsigned` option only the unsigned range is accepted, otherwise both the
//! signed and unsigned ranges are.

use bytes::BytesMut;

use super::{Context, decimal};
use crate::error::Result;
use crate::literal::{write_i64, write_u64};
use crate::types::TypeName;
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    let text = ctx.utf8(raw)?;
    parse(text, raw, ctx)
}

/// Parse decimal ASCII text per the signedness option.
pub(crate) fn parse(text: &str, raw: &[u8], ctx: &Context) -> Result<Value> {
    if ctx.options.unsigned {
        text.parse::<u64>()
            .map(Value::UInt)
            .map_err(|e| ctx.parse_error(raw, e.to_string()))
    } else {
        text.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| ctx.parse_error(raw, e.to_string()))
    }
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    let n = to_i128(value, ctx)?;
    if !fits(ctx.type_name, n, ctx.options.unsigned) {
        return Err(ctx.encode_error(value, format!("{} is out of range", n)));
    }
    write_i128(buf, n);
    Ok(())
}

/// Integer view of a value, shared with the `time` integer alias.
pub(crate) fn to_i128(value: &Value, ctx: &Context) -> Result<i128> {
    match value {
        Value::Int(n) => Ok(*n as i128),
        Value::UInt(n) => Ok(*n as i128),
        Value::Bool(b) => Ok(*b as i128),
        Value::Decimal(d) => decimal::to_i128(d).ok_or_else(|| ctx.encode_error(value, "not an integral value")),
        other => Err(ctx.incompatible(other)),
    }
}

pub(crate) fn write_i128(buf: &mut BytesMut, n: i128) {
    if n < 0 {
        write_i64(buf, n as i64);
    } else {
        write_u64(buf, n as u64);
    }
}

fn fits(type_name: TypeName, n: i128, unsigned: bool) -> bool {
    let (min, max): (i128, i128) = match type_name {
        TypeName::TinyInt => (i8::MIN.into(), u8::MAX.into()),
        TypeName::SmallInt => (i16::MIN.into(), u16::MAX.into()),
        TypeName::MediumInt => (-(1 << 23), (1 << 24) - 1),
        TypeName::Int => (i32::MIN.into(), u32::MAX.into()),
        TypeName::Year => return matches!(n, 0..=99 | 1901..=2155),
        _ => (i64::MIN.into(), u64::MAX.into()),
    };
    let min = if unsigned { 0 } else { min };
    (min..=max).contains(&n)
}
