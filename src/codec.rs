//! Dispatch facade.
//!
//! `TypeCodec` maps a type name to its converter and runs encode, decode or
//! scan. It holds only its construction-time configuration, so one instance
//! can be shared across threads without locking.
//!
//! # Example
//! ```
//! use bytes::BytesMut;
//! use qail_mysql_codec::prelude::*;
//!
//! let codec = TypeCodec::new();
//! let mut buf = BytesMut::new();
//! codec.encode("varchar", &Value::from("O'Brien"), &mut buf, TypeOptions::NONE).unwrap();
//! assert_eq!(&buf[..], b"'O\\'Brien'");
//!
//! let n: u64 = codec.scan("bigint", b"18446744073709551615", TypeOptions::UNSIGNED).unwrap();
//! assert_eq!(n, u64::MAX);
//! ```

use bytes::BytesMut;

use crate::column_type::ColumnType;
use crate::config::CodecConfig;
use crate::converters::{self, Context};
use crate::error::Result;
use crate::literal::{self, Escaping};
use crate::options::TypeOptions;
use crate::scan::{Decoded, FromValue};
use crate::types::{IntoTypeName, TypeName};
use crate::tz::CodecTimeZone;
use crate::value::Value;

/// Type codec for MySQL values.
#[derive(Debug, Clone, Default)]
pub struct TypeCodec {
    config: CodecConfig,
}

impl TypeCodec {
    /// Codec with the default configuration (local zone, backslash escaping).
    pub fn new() -> Self {
        Self::from_config(CodecConfig::default())
    }

    pub fn from_config(config: CodecConfig) -> Self {
        tracing::debug!(
            time_zone = %config.time_zone,
            no_backslash_escapes = config.no_backslash_escapes,
            unknown_options = ?config.unknown_options,
            "type codec configured"
        );
        Self { config }
    }

    /// Same codec anchored to another zone.
    pub fn with_time_zone(self, time_zone: impl Into<CodecTimeZone>) -> Self {
        Self::from_config(self.config.with_time_zone(time_zone.into()))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn time_zone(&self) -> CodecTimeZone {
        self.config.time_zone
    }

    /// Parse option tags under the configured policy.
    pub fn options<I, S>(&self, tags: I) -> Result<TypeOptions>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TypeOptions::from_tags(tags, self.config.unknown_options)
    }

    /// Parse a `COLUMN_TYPE` definition under the configured policy.
    pub fn column_type(&self, definition: &str) -> Result<ColumnType> {
        ColumnType::parse_with_policy(definition, self.config.unknown_options)
    }

    fn context(&self, type_name: TypeName, options: TypeOptions) -> Context {
        Context {
            type_name,
            options,
            time_zone: self.config.time_zone,
            escaping: if self.config.no_backslash_escapes {
                Escaping::QuotesOnly
            } else {
                Escaping::Backslash
            },
        }
    }

    // ==================== Encode ====================

    /// Append the SQL literal for `value` to `buf`.
    ///
    /// `Value::Null` renders as `NULL` for every type. On error `buf` is left
    /// as it was.
    pub fn encode(
        &self,
        name: impl IntoTypeName,
        value: &Value,
        buf: &mut BytesMut,
        options: TypeOptions,
    ) -> Result<()> {
        let type_name = name.into_type_name()?;
        if value.is_null() {
            buf.extend_from_slice(literal::NULL);
            return Ok(());
        }

        let start = buf.len();
        let ctx = self.context(type_name, options);
        converters::encode(value, buf, &ctx).inspect_err(|_| buf.truncate(start))
    }

    /// Encode into a fresh byte vector.
    pub fn encode_to_vec(
        &self,
        name: impl IntoTypeName,
        value: &Value,
        options: TypeOptions,
    ) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(32);
        self.encode(name, value, &mut buf, options)?;
        Ok(buf.to_vec())
    }

    // ==================== Decode ====================

    /// Decode raw column bytes into a `Value`.
    pub fn decode(&self, name: impl IntoTypeName, raw: &[u8], options: TypeOptions) -> Result<Value> {
        let type_name = name.into_type_name()?;
        converters::decode(raw, &self.context(type_name, options))
    }

    // ==================== Scan ====================

    /// Decode and convert into `T`.
    pub fn scan<T: FromValue>(
        &self,
        name: impl IntoTypeName,
        raw: &[u8],
        options: TypeOptions,
    ) -> Result<T> {
        let type_name = name.into_type_name()?;
        let value = converters::decode(raw, &self.context(type_name, options))?;
        T::from_value(Decoded { type_name, raw, value })
    }

    /// Like `scan`, writing into `dest`. `dest` is untouched on error.
    pub fn scan_into<T: FromValue>(
        &self,
        name: impl IntoTypeName,
        raw: &[u8],
        dest: &mut T,
        options: TypeOptions,
    ) -> Result<()> {
        *dest = self.scan(name, raw, options)?;
        Ok(())
    }
}
