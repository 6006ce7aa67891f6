//! Time zone context for temporal conversions.
//!
//! One zone is fixed at codec construction and shared by encode and decode,
//! so a value written through a codec reads back as the same instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Zone used to interpret zone-naive DATE/DATETIME/TIMESTAMP text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CodecTimeZone {
    Utc,
    /// Process-local zone, DST rules included
    #[default]
    Local,
    Fixed(FixedOffset),
    /// IANA zone such as `Europe/Paris`, independent of the process zone
    Named(Tz),
}

impl CodecTimeZone {
    /// Fixed offset east of UTC, in seconds.
    pub fn fixed(seconds_east: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds_east).map(CodecTimeZone::Fixed)
    }

    /// IANA zone by name, e.g. `America/New_York`.
    pub fn named(name: &str) -> Option<Self> {
        name.parse::<Tz>().ok().map(CodecTimeZone::Named)
    }

    /// Anchor a wall-clock time in this zone.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earliest instant.
    /// Returns `None` for times skipped by a DST gap.
    pub fn anchor(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            CodecTimeZone::Utc => Some(Utc.from_utc_datetime(naive).fixed_offset()),
            CodecTimeZone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            CodecTimeZone::Fixed(offset) => offset.from_local_datetime(naive).single(),
            CodecTimeZone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
        }
    }

    /// Wall-clock time of an instant in this zone.
    pub fn localize(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            CodecTimeZone::Utc => instant.naive_utc(),
            CodecTimeZone::Local => instant.with_timezone(&Local).naive_local(),
            CodecTimeZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
            CodecTimeZone::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }
}

impl fmt::Display for CodecTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecTimeZone::Utc => f.write_str("UTC"),
            CodecTimeZone::Local => f.write_str("Local"),
            CodecTimeZone::Fixed(offset) => write!(f, "{}", offset),
            CodecTimeZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for CodecTimeZone {
    type Err = CodecError;

    /// Accepts `UTC`/`Z`, `Local`/`SYSTEM`, `+HH:MM` / `-HH:MM`, or an IANA
    /// zone name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s == "Z" {
            return Ok(CodecTimeZone::Utc);
        }
        if s.eq_ignore_ascii_case("local") || s.eq_ignore_ascii_case("system") {
            return Ok(CodecTimeZone::Local);
        }
        parse_offset(s)
            .and_then(CodecTimeZone::fixed)
            .or_else(|| CodecTimeZone::named(s))
            .ok_or_else(|| CodecError::Config(format!("invalid time zone {:?}", s)))
    }
}

impl TryFrom<String> for CodecTimeZone {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CodecTimeZone> for String {
    fn from(tz: CodecTimeZone) -> Self {
        tz.to_string()
    }
}

impl From<FixedOffset> for CodecTimeZone {
    fn from(offset: FixedOffset) -> Self {
        CodecTimeZone::Fixed(offset)
    }
}

/// `+HH:MM` -> seconds east of UTC.
fn parse_offset(s: &str) -> Option<i32> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}
