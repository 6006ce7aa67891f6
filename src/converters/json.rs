//! JSON columns.
//!
//! Decode hands back the raw document text; structured parsing happens when
//! scanning into `serde_json::Value` or `Json<T>`. Encode always produces
//! valid JSON inside a string literal.

use bytes::BytesMut;

use super::{Context, decimal};
use crate::error::Result;
use crate::literal::write_quoted;
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    ctx.utf8(raw).map(|s| Value::Text(s.to_string()))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    let doc = match value {
        Value::Json(j) => serde_json::to_string(j).map_err(|e| ctx.encode_error(value, e.to_string()))?,
        Value::Text(s) => validated(s, value, ctx)?,
        Value::Bytes(b) => {
            let s = std::str::from_utf8(b).map_err(|e| ctx.encode_error(value, e.to_string()))?;
            validated(s, value, ctx)?
        }
        Value::Int(n) => n.to_string(),
        Value::UInt(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Decimal(d) => decimal::plain(d),
        Value::Float(n) => serde_json::Number::from_f64(*n)
            .map(|n| n.to_string())
            .ok_or_else(|| ctx.encode_error(value, "NaN and infinity are not JSON"))?,
        other => return Err(ctx.incompatible(other)),
    };
    write_quoted(buf, doc.as_bytes(), ctx.escaping);
    Ok(())
}

fn validated(s: &str, value: &Value, ctx: &Context) -> Result<String> {
    serde_json::from_str::<serde::de::IgnoredAny>(s)
        .map(|_| s.to_string())
        .map_err(|e| ctx.encode_error(value, format!("invalid JSON: {}", e)))
}
