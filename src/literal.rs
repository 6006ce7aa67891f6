//! SQL literal writers.
//!
//! All writers append to a caller-owned `BytesMut` and never allocate for
//! integers or floats.

use bytes::BytesMut;

/// Literal NULL.
pub const NULL: &[u8] = b"NULL";

/// How string literals escape special bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// MySQL default: backslash escapes.
    #[default]
    Backslash,
    /// `NO_BACKSLASH_ESCAPES` mode: only `'` is doubled.
    QuotesOnly,
}

/// Write an i64 in decimal.
#[inline]
pub fn write_i64(buf: &mut BytesMut, n: i64) {
    let mut fmt = itoa::Buffer::new();
    buf.extend_from_slice(fmt.format(n).as_bytes());
}

/// Write a u64 in decimal.
#[inline]
pub fn write_u64(buf: &mut BytesMut, n: u64) {
    let mut fmt = itoa::Buffer::new();
    buf.extend_from_slice(fmt.format(n).as_bytes());
}

/// Write a finite f64. Caller rejects NaN and infinities.
#[inline]
pub fn write_f64(buf: &mut BytesMut, n: f64) {
    let mut fmt = ryu::Buffer::new();
    buf.extend_from_slice(fmt.format_finite(n).as_bytes());
}

/// Write string bytes between single quotes, escaped.
pub fn write_quoted(buf: &mut BytesMut, s: &[u8], escaping: Escaping) {
    buf.reserve(s.len() + 2);
    buf.extend_from_slice(b"'");
    match escaping {
        Escaping::Backslash => escape_backslash(buf, s),
        Escaping::QuotesOnly => escape_quotes(buf, s),
    }
    buf.extend_from_slice(b"'");
}

/// Write bytes as a hex literal: `X'0AFF'`.
pub fn write_hex(buf: &mut BytesMut, b: &[u8]) {
    buf.reserve(b.len() * 2 + 3);
    buf.extend_from_slice(b"X'");
    buf.extend_from_slice(hex::encode_upper(b).as_bytes());
    buf.extend_from_slice(b"'");
}

/// Write a bit-value literal: `b'101'`. Zero is `b'0'`.
pub fn write_bits(buf: &mut BytesMut, n: u64) {
    buf.extend_from_slice(b"b'");
    if n == 0 {
        buf.extend_from_slice(b"0");
    } else {
        let width = 64 - n.leading_zeros();
        for i in (0..width).rev() {
            buf.extend_from_slice(if (n >> i) & 1 == 1 { b"1" } else { b"0" });
        }
    }
    buf.extend_from_slice(b"'");
}

fn escape_backslash(buf: &mut BytesMut, s: &[u8]) {
    for &c in s {
        match c {
            0x00 => buf.extend_from_slice(b"\\0"),
            b'\n' => buf.extend_from_slice(b"\\n"),
            b'\r' => buf.extend_from_slice(b"\\r"),
            0x1a => buf.extend_from_slice(b"\\Z"),
            b'\'' => buf.extend_from_slice(b"\\'"),
            b'"' => buf.extend_from_slice(b"\\\""),
            b'\\' => buf.extend_from_slice(b"\\\\"),
            _ => buf.extend_from_slice(&[c]),
        }
    }
}

fn escape_quotes(buf: &mut BytesMut, s: &[u8]) {
    for &c in s {
        if c == b'\'' {
            buf.extend_from_slice(b"''");
        } else {
            buf.extend_from_slice(&[c]);
        }
    }
}
