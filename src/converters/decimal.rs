//! Fixed-point decimal: decimal, numeric.
//!
//! Backed by `BigDecimal`, so the full MySQL range (65 digits, scale 30)
//! decodes exactly. Scale is preserved as given and never rounded.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use bytes::BytesMut;

use super::Context;
use crate::error::Result;
use crate::literal::{write_i64, write_u64};
use crate::value::Value;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    let text = ctx.utf8(raw)?;
    if !is_plain_decimal(text) {
        return Err(ctx.parse_error(raw, "expected [-]digits[.digits]"));
    }
    BigDecimal::from_str(text)
        .map(Value::Decimal)
        .map_err(|e| ctx.parse_error(raw, e.to_string()))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Decimal(d) => buf.extend_from_slice(plain(d).as_bytes()),
        Value::Int(n) => write_i64(buf, *n),
        Value::UInt(n) => write_u64(buf, *n),
        Value::Float(_) => {
            return Err(ctx.encode_error(value, "binary floats are not exact; convert to a decimal first"));
        }
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}

/// Positional text with exactly `scale` fraction digits, never exponent form.
pub fn plain(d: &BigDecimal) -> String {
    let (int, scale) = d.as_bigint_and_exponent();
    let text = int.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    if scale <= 0 {
        if digits == "0" {
            return "0".to_string();
        }
        return format!("{}{}{}", sign, digits, "0".repeat(scale.unsigned_abs() as usize));
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits.to_string()
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{}{}.{}", sign, int_part, frac_part)
}

/// Integer value of an integral decimal, if it fits i128.
pub(crate) fn to_i128(d: &BigDecimal) -> Option<i128> {
    let text = plain(d);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if frac_part.bytes().any(|b| b != b'0') {
        return None;
    }
    int_part.parse().ok()
}

/// `[+-]digits[.digits]`, as MySQL prints DECIMAL.
fn is_plain_decimal(text: &str) -> bool {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}
