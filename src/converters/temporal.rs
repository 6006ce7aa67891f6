//! DATE, DATETIME and TIMESTAMP.
//!
//! Text form: `YYYY-MM-DD[ HH:MM:SS[.fraction]]`. Decoded values are anchored
//! to the codec zone; encoded values are rendered as wall-clock time in the
//! same zone, so a round trip through one codec keeps the instant.

use bytes::BytesMut;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    sequence::{preceded, tuple},
    IResult,
};

use super::Context;
use crate::error::Result;
use crate::literal::write_quoted;
use crate::types::TypeName;
use crate::value::Value;

const ZERO_DATE: &str = "0000-00-00";
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// Parsed date-time fields, before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Parts {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanos: u32,
}

impl Parts {
    fn is_zero_date(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0 && self.nanos == 0
    }
}

pub fn decode(raw: &[u8], ctx: &Context) -> Result<Value> {
    let text = ctx.utf8(raw)?;
    let (_, parts) = all_consuming(datetime)(text)
        .map_err(|_| ctx.parse_error(raw, "expected YYYY-MM-DD[ HH:MM:SS[.fraction]]"))?;

    if parts.is_zero_date() {
        return if parts.is_midnight() {
            Ok(Value::ZeroDate)
        } else {
            Err(ctx.parse_error(raw, "zero date with a time of day"))
        };
    }

    let naive = NaiveDate::from_ymd_opt(parts.year as i32, parts.month, parts.day)
        .and_then(|d| d.and_hms_nano_opt(parts.hour, parts.minute, parts.second, parts.nanos))
        .ok_or_else(|| ctx.parse_error(raw, "not a valid calendar date or time"))?;

    ctx.time_zone
        .anchor(&naive)
        .map(Value::Timestamp)
        .ok_or_else(|| ctx.parse_error(raw, format!("local time does not exist in {}", ctx.time_zone)))
}

pub fn encode(value: &Value, buf: &mut BytesMut, ctx: &Context) -> Result<()> {
    match value {
        Value::Timestamp(ts) => {
            let local = ctx.time_zone.localize(ts);
            let text = format_local(&local, ctx.type_name).map_err(|reason| ctx.encode_error(value, reason))?;
            write_quoted(buf, text.as_bytes(), ctx.escaping);
        }
        Value::ZeroDate => {
            let text = if ctx.type_name == TypeName::Date { ZERO_DATE } else { ZERO_DATETIME };
            write_quoted(buf, text.as_bytes(), ctx.escaping);
        }
        other => return Err(ctx.incompatible(other)),
    }
    Ok(())
}

fn format_local(local: &NaiveDateTime, type_name: TypeName) -> std::result::Result<String, &'static str> {
    let year = local.year();
    if !(0..=9999).contains(&year) {
        return Err("year outside 0000-9999");
    }
    let date = format!("{:04}-{:02}-{:02}", year, local.month(), local.day());
    if type_name == TypeName::Date {
        if local.num_seconds_from_midnight() != 0 || local.nanosecond() != 0 {
            return Err("a date column would drop the time of day");
        }
        return Ok(date);
    }

    let nanos = local.nanosecond();
    if nanos >= 1_000_000_000 {
        return Err("leap seconds have no MySQL representation");
    }
    let mut text = format!("{} {:02}:{:02}:{:02}", date, local.hour(), local.minute(), local.second());
    push_fraction(&mut text, nanos);
    Ok(text)
}

/// Append `.fraction` with trailing zeros trimmed; nothing for zero.
pub(crate) fn push_fraction(text: &mut String, nanos: u32) {
    if nanos > 0 {
        let digits = format!("{:09}", nanos);
        text.push('.');
        text.push_str(digits.trim_end_matches('0'));
    }
}

// ==================== Grammar ====================

/// Exactly `n` ASCII digits.
pub(crate) fn fixed_digits<'a>(n: usize) -> impl FnMut(&'a str) -> IResult<&'a str, u32> {
    map_res(take_while_m_n(n, n, |c: char| c.is_ascii_digit()), |s: &str| s.parse::<u32>())
}

/// `.` followed by 1-9 digits, scaled to nanoseconds.
pub(crate) fn fraction(input: &str) -> IResult<&str, u32> {
    preceded(
        char('.'),
        map_res(take_while_m_n(1, 9, |c: char| c.is_ascii_digit()), |s: &str| {
            s.parse::<u32>().map(|n| n * 10u32.pow(9 - s.len() as u32))
        }),
    )(input)
}

fn date(input: &str) -> IResult<&str, (u32, u32, u32)> {
    let (input, (year, _, month, _, day)) =
        tuple((fixed_digits(4), char('-'), fixed_digits(2), char('-'), fixed_digits(2)))(input)?;
    Ok((input, (year, month, day)))
}

fn clock(input: &str) -> IResult<&str, (u32, u32, u32, u32)> {
    let (input, (hour, _, minute, _, second, nanos)) = tuple((
        fixed_digits(2),
        char(':'),
        fixed_digits(2),
        char(':'),
        fixed_digits(2),
        opt(fraction),
    ))(input)?;
    Ok((input, (hour, minute, second, nanos.unwrap_or(0))))
}

fn datetime(input: &str) -> IResult<&str, Parts> {
    let (input, (year, month, day)) = date(input)?;
    let (input, time) = opt(preceded(char(' '), clock))(input)?;
    let (hour, minute, second, nanos) = time.unwrap_or_default();
    Ok((input, Parts { year, month, day, hour, minute, second, nanos }))
}
