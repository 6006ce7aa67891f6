//! Floating point: float, double, real.
//!
//! MySQL has no NaN or infinity literals, so non-finite values are rejected
//! in both directions.

use bytes::BytesMut;

use super::{Context, decimal};
use crate::error::Result;
use crate::literal::{write_f64, write_i64, write_u64};
use crate::types::TypeName;
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    let text = ctx.utf8(raw)?;
    let n: f64 = text.parse().map_err(|e: std::num::ParseFloatError| ctx.parse_error(raw, e.to_string()))?;
    if !n.is_finite() {
        return Err(ctx.parse_error(raw, "not a finite number"));
    }
    Ok(Value::Float(n))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Float(n) => {
            if !n.is_finite() {
                return Err(ctx.encode_error(value, "NaN and infinity have no SQL literal"));
            }
            // Single precision columns
            if ctx.type_name == TypeName::Float && n.abs() > f32::MAX as f64 {
                return Err(ctx.encode_error(value, "out of range for single precision"));
            }
            write_f64(buf, *n);
        }
        Value::Int(n) => write_i64(buf, *n),
        Value::UInt(n) => write_u64(buf, *n),
        Value::Decimal(d) => buf.extend_from_slice(decimal::plain(d).as_bytes()),
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::test_util::{ctx, render};

    #[test]
    fn test_decode() {
        let c = ctx(TypeName::Double);
        assert_eq!(decode(b"3.25", &c).unwrap(), Value::Float(3.25));
        assert_eq!(decode(b"-1e-3", &c).unwrap(), Value::Float(-0.001));
        assert_eq!(decode(b"1e20", &c).unwrap(), Value::Float(1e20));
    }

    #[test]
    fn test_decode_rejects_non_finite() {
        let c = ctx(TypeName::Real);
        for raw in [&b"NaN"[..], b"inf", b"-infinity", b"1e400", b"", b"x"] {
            assert!(decode(raw, &c).unwrap_err().is_parse(), "{:?}", raw);
        }
    }

    #[test]
    fn test_encode() {
        let c = ctx(TypeName::Double);
        assert_eq!(render(&Value::Float(0.1), &c).unwrap(), "0.1");
        assert_eq!(render(&Value::Float(1.0), &c).unwrap(), "1.0");
        assert_eq!(render(&Value::Int(-3), &c).unwrap(), "-3");
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        let c = ctx(TypeName::Double);
        assert!(render(&Value::Float(f64::NAN), &c).unwrap_err().is_encode());
        assert!(render(&Value::Float(f64::NEG_INFINITY), &c).unwrap_err().is_encode());
    }

    #[test]
    fn test_single_precision_range() {
        let c = ctx(TypeName::Float);
        assert!(render(&Value::Float(1e39), &c).is_err());
        assert!(render(&Value::Float(1e38), &c).is_ok());
        assert!(render(&Value::Float(1e39), &ctx(TypeName::Double)).is_ok());
    }

    #[test]
    fn test_round_trip_is_exact() {
        let c = ctx(TypeName::Double);
        for n in [0.1, -2.5e-300, 123456.789, f64::MAX, f64::MIN_POSITIVE] {
            let text = render(&Value::Float(n), &c).unwrap();
            assert_eq!(decode(text.as_bytes(), &c).unwrap(), Value::Float(n));
        }
    }
}
