//! binary, varbinary and the blob family.
//!
//! Decode returns the raw bytes as received. Nothing is hex-decoded, even
//! when the payload happens to look like hex. Encode always uses a hex
//! literal so NUL, quotes and backslashes survive.

use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::literal::write_hex;
use crate::value::Value;

pub fn decode(raw: &[u8], _ctx: &Context) -> Result<Value> {
    Ok(Value::Bytes(raw.to_vec()))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Bytes(b) => write_hex(buf, b),
        Value::Text(s) => write_hex(buf, s.as_bytes()),
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}
