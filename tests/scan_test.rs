//! Scan destinations through the facade.

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use pretty_assertions::assert_eq;
use qail_mysql_codec::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn codec() -> TypeCodec {
    TypeCodec::new().with_time_zone(CodecTimeZone::Utc)
}

// ==================== Policy matrix ====================

/// One valid wire sample per type.
fn sample(name: TypeName) -> &'static [u8] {
    match name {
        TypeName::TinyInt | TypeName::SmallInt | TypeName::MediumInt | TypeName::Int | TypeName::BigInt => b"42",
        TypeName::Year => b"2024",
        TypeName::Decimal | TypeName::Numeric => b"12.50",
        TypeName::Float | TypeName::Double | TypeName::Real => b"1.5",
        TypeName::Bit => &[0x05],
        TypeName::Date => b"2024-02-29",
        TypeName::DateTime | TypeName::Timestamp => b"2024-02-29 13:05:09",
        TypeName::Time => b"12:30:00",
        TypeName::Char
        | TypeName::VarChar
        | TypeName::TinyText
        | TypeName::Text
        | TypeName::MediumText
        | TypeName::LongText
        | TypeName::Enum
        | TypeName::Set => b"hello",
        TypeName::Binary
        | TypeName::VarBinary
        | TypeName::TinyBlob
        | TypeName::Blob
        | TypeName::MediumBlob
        | TypeName::LongBlob => b"abc",
        TypeName::Boolean => b"1",
        TypeName::Geometry
        | TypeName::Point
        | TypeName::LineString
        | TypeName::Polygon
        | TypeName::MultiPoint
        | TypeName::MultiLineString
        | TypeName::MultiPolygon
        | TypeName::GeometryCollection => b"POINT(1 2)",
        TypeName::Json => br#"{"a":1}"#,
    }
}

/// Destinations each type scans into; every other destination is a mismatch.
fn expected(name: TypeName) -> Vec<&'static str> {
    let numeric = vec!["String", "Vec<u8>", "i64", "u64", "f64", "Decimal", "BigDecimal", "Value"];
    match name {
        TypeName::TinyInt
        | TypeName::SmallInt
        | TypeName::MediumInt
        | TypeName::Int
        | TypeName::BigInt
        | TypeName::Year
        | TypeName::Bit => numeric,
        TypeName::Decimal | TypeName::Numeric => vec!["String", "Vec<u8>", "Decimal", "BigDecimal", "Value"],
        TypeName::Float | TypeName::Double | TypeName::Real => vec!["String", "Vec<u8>", "f64", "Value"],
        TypeName::Date | TypeName::DateTime | TypeName::Timestamp => {
            vec!["String", "Vec<u8>", "DateTime<FixedOffset>", "NaiveDate", "Value"]
        }
        TypeName::Time => vec!["String", "Vec<u8>", "TimeDelta", "Value"],
        TypeName::Boolean => vec!["String", "Vec<u8>", "bool", "Value"],
        TypeName::Json => vec!["String", "Vec<u8>", "serde_json::Value", "Value"],
        TypeName::Char
        | TypeName::VarChar
        | TypeName::TinyText
        | TypeName::Text
        | TypeName::MediumText
        | TypeName::LongText
        | TypeName::Enum
        | TypeName::Set
        | TypeName::Binary
        | TypeName::VarBinary
        | TypeName::TinyBlob
        | TypeName::Blob
        | TypeName::MediumBlob
        | TypeName::LongBlob
        | TypeName::Geometry
        | TypeName::Point
        | TypeName::LineString
        | TypeName::Polygon
        | TypeName::MultiPoint
        | TypeName::MultiLineString
        | TypeName::MultiPolygon
        | TypeName::GeometryCollection => vec!["String", "Vec<u8>", "Value"],
    }
}

/// Ok or `DestinationMismatch`; any other error fails the test.
fn accepts<T: FromValue>(name: TypeName, raw: &[u8]) -> (&'static str, bool) {
    match codec().scan::<T>(name, raw, TypeOptions::NONE) {
        Ok(_) => (T::DESTINATION, true),
        Err(e) if e.is_destination_mismatch() => (T::DESTINATION, false),
        Err(e) => panic!("{} {:?} into {}: {}", name, raw, T::DESTINATION, e),
    }
}

fn accepted(name: TypeName) -> Vec<&'static str> {
    let raw = sample(name);
    [
        accepts::<String>(name, raw),
        accepts::<Vec<u8>>(name, raw),
        accepts::<i64>(name, raw),
        accepts::<u64>(name, raw),
        accepts::<f64>(name, raw),
        accepts::<bool>(name, raw),
        accepts::<Decimal>(name, raw),
        accepts::<BigDecimal>(name, raw),
        accepts::<DateTime<FixedOffset>>(name, raw),
        accepts::<NaiveDate>(name, raw),
        accepts::<TimeDelta>(name, raw),
        accepts::<serde_json::Value>(name, raw),
        accepts::<Value>(name, raw),
    ]
    .into_iter()
    .filter_map(|(destination, ok)| ok.then_some(destination))
    .collect()
}

#[test]
fn test_scan_policy_matrix() {
    for name in TypeName::ALL {
        assert_eq!(accepted(name), expected(name), "scan policy for {}", name);
    }
}

// ==================== Individual destinations ====================

#[test]
fn test_integer_into_string_keeps_raw_text() {
    let s: String = codec().scan("int", b"123", TypeOptions::NONE).unwrap();
    assert_eq!(s, "123");
    let s: String = codec().scan("decimal", b"1.50", TypeOptions::NONE).unwrap();
    assert_eq!(s, "1.50");
}

#[test]
fn test_raw_text_is_validated_first() {
    let err = codec().scan::<String>("int", b"12a", TypeOptions::NONE).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_text_into_integer_is_mismatch() {
    let err = codec().scan::<i64>("varchar", b"123", TypeOptions::NONE).unwrap_err();
    match err {
        CodecError::DestinationMismatch { type_name, destination, .. } => {
            assert_eq!(type_name, TypeName::VarChar);
            assert_eq!(destination, "i64");
        }
        other => panic!("Expected destination mismatch, got {:?}", other),
    }
}

#[test]
fn test_integer_destinations() {
    let c = codec();
    assert_eq!(c.scan::<u8>("tinyint", b"255", TypeOptions::UNSIGNED).unwrap(), 255);
    assert!(c.scan::<i8>("tinyint", b"255", TypeOptions::UNSIGNED).unwrap_err().is_destination_mismatch());
    assert_eq!(c.scan::<u64>("bigint", b"18446744073709551615", TypeOptions::UNSIGNED).unwrap(), u64::MAX);
    assert_eq!(c.scan::<i32>("year", b"2024", TypeOptions::NONE).unwrap(), 2024);
    assert_eq!(c.scan::<f64>("int", b"-3", TypeOptions::NONE).unwrap(), -3.0);
    assert!(c.scan::<bool>("int", b"1", TypeOptions::NONE).unwrap_err().is_destination_mismatch());
}

#[test]
fn test_decimal_destination() {
    let c = codec();
    let d: Decimal = c.scan("numeric", b"-0.0100", TypeOptions::NONE).unwrap();
    assert_eq!(d.to_string(), "-0.0100");
    let d: Decimal = c.scan("bigint", b"42", TypeOptions::NONE).unwrap();
    assert_eq!(d, Decimal::from_str("42").unwrap());
    assert!(c.scan::<Decimal>("double", b"0.1", TypeOptions::NONE).unwrap_err().is_destination_mismatch());

    // DECIMAL(35, 30) needs the arbitrary-precision destination
    let raw = b"12345.123456789012345678901234567890";
    let big: BigDecimal = c.scan("decimal", raw, TypeOptions::NONE).unwrap();
    assert_eq!(big, BigDecimal::from_str("12345.123456789012345678901234567890").unwrap());
    assert!(c.scan::<Decimal>("decimal", raw, TypeOptions::NONE).unwrap_err().is_destination_mismatch());
}

#[test]
fn test_f64_from_wide_integer_is_checked() {
    let c = codec();
    assert_eq!(c.scan::<f64>("bigint", b"9007199254740992", TypeOptions::NONE).unwrap(), 9007199254740992.0);
    assert!(c.scan::<f64>("bigint", b"9007199254740993", TypeOptions::NONE).unwrap_err().is_destination_mismatch());
    assert!(c
        .scan::<f64>("bigint", b"18446744073709551615", TypeOptions::UNSIGNED)
        .unwrap_err()
        .is_destination_mismatch());
}

#[test]
fn test_temporal_destinations() {
    let c = codec();
    let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_micro_opt(13, 5, 9, 250).unwrap();

    let naive: NaiveDateTime = c.scan("datetime", b"2024-02-29 13:05:09.000250", TypeOptions::NONE).unwrap();
    assert_eq!(naive, expected);
    let utc: DateTime<Utc> = c.scan("timestamp", b"2024-02-29 13:05:09.000250", TypeOptions::NONE).unwrap();
    assert_eq!(utc.naive_utc(), expected);
    let fixed: DateTime<FixedOffset> = c.scan("datetime", b"2024-02-29 13:05:09.000250", TypeOptions::NONE).unwrap();
    assert_eq!(fixed.offset().local_minus_utc(), 0);
    let date: NaiveDate = c.scan("date", b"2024-02-29", TypeOptions::NONE).unwrap();
    assert_eq!(date, expected.date());

    assert!(c.scan::<NaiveDate>("date", b"0000-00-00", TypeOptions::NONE).unwrap_err().is_destination_mismatch());
    assert_eq!(c.scan::<Value>("date", b"0000-00-00", TypeOptions::NONE).unwrap(), Value::ZeroDate);
    assert!(c.scan::<NaiveDateTime>("varchar", b"2024-02-29 13:05:09", TypeOptions::NONE).is_err());
}

#[test]
fn test_time_destination() {
    let t: TimeDelta = codec().scan("time", b"12:30:00.5", TypeOptions::NONE).unwrap();
    assert_eq!(t, TimeDelta::minutes(12 * 60 + 30) + TimeDelta::milliseconds(500));
}

#[test]
fn test_binary_destinations() {
    let c = codec();
    let raw = [0x0a, 0x1b, 0xff];
    let b: Vec<u8> = c.scan("blob", &raw, TypeOptions::NONE).unwrap();
    assert_eq!(b, raw);
    // hex-looking text stays as-is
    let b: Vec<u8> = c.scan("binary", b"0A1B", TypeOptions::NONE).unwrap();
    assert_eq!(b, b"0A1B");
    assert!(c.scan::<String>("blob", &raw, TypeOptions::NONE).unwrap_err().is_destination_mismatch());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    tags: Vec<String>,
}

#[test]
fn test_json_destinations() {
    let c = codec();
    let raw = br#"{"name":"ada","tags":["x","y"]}"#;

    let Json(profile) = c.scan::<Json<Profile>>("json", raw, TypeOptions::NONE).unwrap();
    assert_eq!(profile, Profile { name: "ada".into(), tags: vec!["x".into(), "y".into()] });

    let doc: serde_json::Value = c.scan("json", raw, TypeOptions::NONE).unwrap();
    assert_eq!(doc["tags"][1], "y");

    let text: String = c.scan("json", raw, TypeOptions::NONE).unwrap();
    assert_eq!(text.as_bytes(), raw);

    assert!(c.scan::<Json<Profile>>("text", raw, TypeOptions::NONE).unwrap_err().is_destination_mismatch());
    assert!(c.scan::<Json<Profile>>("json", b"[1]", TypeOptions::NONE).unwrap_err().is_parse());
}

#[test]
fn test_json_encode_from_struct() {
    let c = codec();
    let value = Json(Profile { name: "o'neil".into(), tags: vec![] }).to_value().unwrap();
    assert_eq!(
        c.encode_to_vec("json", &value, TypeOptions::NONE).unwrap(),
        br#"'{\"name\":\"o\'neil\",\"tags\":[]}'"#
    );
}

#[test]
fn test_scan_into() {
    let c = codec();
    let mut flag = false;
    c.scan_into("boolean", b"1", &mut flag, TypeOptions::NONE).unwrap();
    assert!(flag);
    assert!(c.scan_into("boolean", b"yes", &mut flag, TypeOptions::NONE).unwrap_err().is_parse());
    assert!(flag);
}

#[test]
fn test_spatial_text() {
    let wkt: String = codec().scan("point", b"POINT(1 2)", TypeOptions::NONE).unwrap();
    assert_eq!(wkt, "POINT(1 2)");
}
