//! BIT(M) columns, M <= 64.
//!
//! The text protocol sends bit fields as raw big-endian bytes.

use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::literal::{write_bits, write_hex};
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    if raw.is_empty() || raw.len() > 8 {
        return Err(ctx.parse_error(raw, "expected 1 to 8 bytes"));
    }
    let n = raw.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
    Ok(Value::UInt(n))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::UInt(n) => write_bits(buf, *n),
        Value::Int(n) if *n >= 0 => write_bits(buf, *n as u64),
        Value::Int(_) => return Err(ctx.encode_error(value, "negative bit value")),
        Value::Bool(b) => write_bits(buf, *b as u64),
        Value::Bytes(b) if b.len() <= 8 => write_hex(buf, b),
        Value::Bytes(_) => return Err(ctx.encode_error(value, "more than 64 bits")),
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}
