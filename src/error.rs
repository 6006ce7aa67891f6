//! Codec errors.
//!
//! Every failure is a rejected single conversion. Nothing here is logged or
//! retried; the caller decides what to do with the surrounding query.

use std::fmt;

use thiserror::Error;

use crate::types::TypeName;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Offending raw input, kept for diagnostics.
///
/// Displays as escaped ASCII so binary garbage stays readable in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBytes(pub Vec<u8>);

impl fmt::Display for RawBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

impl From<&[u8]> for RawBytes {
    fn from(raw: &[u8]) -> Self {
        RawBytes(raw.to_vec())
    }
}

/// Errors raised by the type codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The type name is not in the registry. Raised wherever a name enters
    /// the crate: the codec facade, `TypeName::from_str` and the column type
    /// parser.
    #[error("unsupported type: {0:?}")]
    UnsupportedType(String),

    /// Raw bytes do not match the grammar of the type.
    #[error("cannot decode {raw} as {type_name}: {reason}")]
    Parse {
        type_name: TypeName,
        raw: RawBytes,
        reason: String,
    },

    /// A value cannot be rendered as a literal of the type.
    #[error("cannot encode {kind} value as {type_name}: {reason}")]
    Encode {
        type_name: TypeName,
        kind: &'static str,
        reason: String,
    },

    /// Scan destination is incompatible with the decoded value.
    #[error("cannot scan {type_name} into {destination}: {reason}")]
    DestinationMismatch {
        type_name: TypeName,
        destination: &'static str,
        reason: String,
    },

    /// An option tag was rejected under `UnknownOptionPolicy::Reject`.
    #[error("unknown type option: {0:?}")]
    UnknownOption(String),

    /// Malformed column type definition.
    #[error("invalid column type {input:?}: {reason}")]
    Syntax { input: String, reason: String },

    /// Invalid codec configuration.
    #[error("invalid codec config: {0}")]
    Config(String),
}

impl CodecError {
    pub(crate) fn parse(type_name: TypeName, raw: &[u8], reason: impl Into<String>) -> Self {
        CodecError::Parse {
            type_name,
            raw: RawBytes::from(raw),
            reason: reason.into(),
        }
    }

    pub(crate) fn encode(type_name: TypeName, kind: &'static str, reason: impl Into<String>) -> Self {
        CodecError::Encode {
            type_name,
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(
        type_name: TypeName,
        destination: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        CodecError::DestinationMismatch {
            type_name,
            destination,
            reason: reason.into(),
        }
    }

    /// True for `UnsupportedType`.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, CodecError::UnsupportedType(_))
    }

    /// True for `Parse`.
    pub fn is_parse(&self) -> bool {
        matches!(self, CodecError::Parse { .. })
    }

    /// True for `Encode`.
    pub fn is_encode(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }

    /// True for `DestinationMismatch`.
    pub fn is_destination_mismatch(&self) -> bool {
        matches!(self, CodecError::DestinationMismatch { .. })
    }
}
