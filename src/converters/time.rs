//! TIME columns.
//!
//! Clock form `[-]H:MM:SS[.fraction]` (hours up to 838) decodes to a signed
//! duration. Bare integer text goes through the integer alias and honours
//! the `unsigned` option.

use bytes::BytesMut;
use chrono::TimeDelta;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    sequence::tuple,
    IResult,
};

use super::temporal::{fixed_digits, fraction, push_fraction};
use super::{Context, integer};
use crate::error::Result;
use crate::literal::write_quoted;
use crate::value::Value;

/// 838:59:59, the MySQL TIME bound in either direction.
const MAX_SECONDS: i64 = 838 * 3600 + 59 * 60 + 59;

/// Largest integer alias value (838:59:59 as HHMMSS).
const MAX_INTEGER: i128 = 8_385_959;

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    let text = ctx.utf8(raw)?;
    if is_integer_text(text) {
        return integer::parse(text, raw, ctx);
    }

    let (_, (negative, hours, _, minutes, _, seconds, nanos)) = all_consuming(clock)(text)
        .map_err(|_| ctx.parse_error(raw, "expected [-]H:MM:SS[.fraction]"))?;
    if minutes > 59 || seconds > 59 {
        return Err(ctx.parse_error(raw, "minutes and seconds must be below 60"));
    }

    let total = hours as i64 * 3600 + minutes as i64 * 60 + seconds as i64;
    let nanos = nanos.unwrap_or(0);
    if total > MAX_SECONDS || (total == MAX_SECONDS && nanos > 0) {
        return Err(ctx.parse_error(raw, "outside -838:59:59..838:59:59"));
    }
    let delta = TimeDelta::new(total, nanos)
        .ok_or_else(|| ctx.parse_error(raw, "outside -838:59:59..838:59:59"))?;
    Ok(Value::Time(if negative.is_some() { -delta } else { delta }))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Time(delta) => {
            let text = format_clock(*delta).ok_or_else(|| ctx.encode_error(value, "outside -838:59:59..838:59:59"))?;
            write_quoted(buf, text.as_bytes(), ctx.escaping);
        }
        Value::Int(_) | Value::UInt(_) => {
            let n = integer::to_i128(value, ctx)?;
            if n.abs() > MAX_INTEGER {
                return Err(ctx.encode_error(value, "outside -8385959..8385959"));
            }
            integer::write_i128(buf, n);
        }
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}

fn format_clock(delta: TimeDelta) -> Option<String> {
    let negative = delta < TimeDelta::zero();
    let magnitude = if negative { -delta } else { delta };
    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos() as u32;
    if total > MAX_SECONDS || (total == MAX_SECONDS && nanos > 0) {
        return None;
    }
    let mut text = format!(
        "{}{:02}:{:02}:{:02}",
        if negative { "-" } else { "" },
        total / 3600,
        total % 3600 / 60,
        total % 60
    );
    push_fraction(&mut text, nanos);
    Some(text)
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

type Clock = (Option<char>, u32, char, u32, char, u32, Option<u32>);

fn clock(input: &str) -> IResult<&str, Clock> {
    tuple((
        opt(char('-')),
        map_res(take_while_m_n(1, 3, |c: char| c.is_ascii_digit()), |s: &str| s.parse::<u32>()),
        char(':'),
        fixed_digits(2),
        char(':'),
        fixed_digits(2),
        opt(fraction),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::test_util::{ctx, render};
    use crate::options::TypeOptions;
    use crate::types::TypeName;

    #[test]
    fn test_decode_clock() {
        let c = ctx(TypeName::Time);
        assert_eq!(decode(b"12:34:56", &c).unwrap(), Value::Time(TimeDelta::seconds(45_296)));
        assert_eq!(decode(b"-01:00:00", &c).unwrap(), Value::Time(TimeDelta::hours(-1)));
        assert_eq!(
            decode(b"838:59:59", &c).unwrap(),
            Value::Time(TimeDelta::seconds(MAX_SECONDS))
        );
        assert_eq!(
            decode(b"00:00:01.5", &c).unwrap(),
            Value::Time(TimeDelta::milliseconds(1500))
        );
    }

    #[test]
    fn test_decode_integer_alias() {
        let c = ctx(TypeName::Time);
        assert_eq!(decode(b"123456", &c).unwrap(), Value::Int(123_456));
        let mut c = ctx(TypeName::Time);
        c.options = TypeOptions::UNSIGNED;
        assert_eq!(decode(b"42", &c).unwrap(), Value::UInt(42));
    }

    #[test]
    fn test_decode_rejects_out_of_range() {
        let c = ctx(TypeName::Time);
        for raw in [&b"839:00:00"[..], b"838:59:59.1", b"10:60:00", b"10:00:61", b"1:2:3", b"12:00", b"-"] {
            assert!(decode(raw, &c).unwrap_err().is_parse(), "{:?}", raw);
        }
    }

    #[test]
    fn test_encode_clock() {
        let c = ctx(TypeName::Time);
        assert_eq!(render(&Value::Time(TimeDelta::seconds(45_296)), &c).unwrap(), "'12:34:56'");
        assert_eq!(render(&Value::Time(TimeDelta::milliseconds(-1500)), &c).unwrap(), "'-00:00:01.5'");
        assert_eq!(render(&Value::Time(TimeDelta::hours(100)), &c).unwrap(), "'100:00:00'");
        assert!(render(&Value::Time(TimeDelta::hours(839)), &c).unwrap_err().is_encode());
    }

    #[test]
    fn test_encode_integer_alias() {
        let c = ctx(TypeName::Time);
        assert_eq!(render(&Value::Int(-123_456), &c).unwrap(), "-123456");
        assert!(render(&Value::UInt(8_385_960), &c).unwrap_err().is_encode());
        assert!(render(&Value::Float(1.0), &c).unwrap_err().is_encode());
    }

    #[test]
    fn test_clock_round_trip() {
        let c = ctx(TypeName::Time);
        for text in ["'-838:59:59'", "'00:00:00'", "'07:08:09.000001'"] {
            let raw = text.trim_matches('\'');
            let value = decode(raw.as_bytes(), &c).unwrap();
            assert_eq!(render(&value, &c).unwrap(), text);
        }
    }
}
