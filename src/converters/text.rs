//! Character types and enumerations.
//!
//! char, varchar, the text family, enum and set all decode to the text
//! unchanged. Enum and set labels are not checked against declared members;
//! `ColumnType::members` carries those for callers that want to.

use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::literal::write_quoted;
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    ctx.utf8(raw).map(|s| Value::Text(s.to_string()))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Text(s) => write_quoted(buf, s.as_bytes(), ctx.escaping),
        Value::Bytes(b) => write_quoted(buf, b, ctx.escaping),
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}
