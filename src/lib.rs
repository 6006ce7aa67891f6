//! MySQL type codec for QAIL.
//!
//! Converts between Rust values and MySQL's textual wire form, keyed by
//! column type name: encode a value into a SQL literal, decode raw column
//! bytes into a [`Value`], or scan them straight into a typed destination.
//!
//! No I/O, no connection state. The only shared setting is the time zone
//! fixed when the codec is built.
//!
//! # Example
//! ```
//! use qail_mysql_codec::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let codec = TypeCodec::new();
//!
//! let price: Decimal = codec.scan("decimal", b"19.90", TypeOptions::NONE).unwrap();
//! assert_eq!(price.to_string(), "19.90");
//!
//! let sql = codec.encode_to_vec("decimal", &Value::from(price), TypeOptions::NONE).unwrap();
//! assert_eq!(sql, b"19.90");
//!
//! assert!(codec.decode("uuid", b"x", TypeOptions::NONE).unwrap_err().is_unsupported_type());
//! ```

pub mod codec;
pub mod column_type;
pub mod config;
pub mod converters;
pub mod error;
pub mod literal;
pub mod options;
pub mod scan;
pub mod types;
pub mod tz;
pub mod value;

pub use codec::TypeCodec;
pub use error::{CodecError, Result};
pub use types::TypeName;
pub use value::Value;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::codec::TypeCodec;
    pub use crate::column_type::ColumnType;
    pub use crate::config::CodecConfig;
    pub use crate::error::CodecError;
    pub use crate::options::{TypeOptions, UnknownOptionPolicy};
    pub use crate::scan::{FromValue, Json};
    pub use crate::types::TypeName;
    pub use crate::tz::CodecTimeZone;
    pub use crate::value::Value;
}
