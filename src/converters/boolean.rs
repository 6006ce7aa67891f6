//! BOOLEAN: exactly `1` or `0` on the wire.

use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    match raw {
        b"1" => Ok(Value::Bool(true)),
        b"0" => Ok(Value::Bool(false)),
        _ => Err(ctx.parse_error(raw, "expected \"1\" or \"0\"")),
    }
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    let b = match value {
        Value::Bool(b) => *b,
        Value::Int(0) | Value::UInt(0) => false,
        Value::Int(1) | Value::UInt(1) => true,
        Value::Int(_) | Value::UInt(_) => return Err(ctx.encode_error(value, "only 0 and 1 are booleans")),
        other => return Err(ctx.incompatible(other)),
    };
    buf.extend_from_slice(if b { b"1" } else { b"0" });
    Ok(())
}
