//! geometry and its subtypes.
//!
//! Values are opaque here: no WKB parsing. Select `ST_AsText(col)` to get
//! WKT text back; raw WKB columns are not UTF-8 and fail to decode.

use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::literal::{write_hex, write_quoted};
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    ctx.utf8(raw).map(|s| Value::Text(s.to_string()))
}

/// WKT text becomes `ST_GeomFromText('…')`, WKB bytes `ST_GeomFromWKB(X'…')`.
pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Text(wkt) => {
            buf.extend_from_slice(b"ST_GeomFromText(");
            write_quoted(buf, wkt.as_bytes(), ctx.escaping);
            buf.extend_from_slice(b")");
        }
        Value::Bytes(wkb) => {
            buf.extend_from_slice(b"ST_GeomFromWKB(");
            write_hex(buf, wkb);
            buf.extend_from_slice(b")");
        }
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}
