//! Codec configuration.
//!
//! Loaded from TOML or built in code. Fixed for the lifetime of a codec.
//!
//! # Example
//! ```
//! use qail_mysql_codec::config::CodecConfig;
//!
//! let config = CodecConfig::from_toml_str(r#"
//!     time_zone = "+02:00"
//!     no_backslash_escapes = false
//!     unknown_options = "reject"
//! "#).unwrap();
//! assert_eq!(config.time_zone.to_string(), "+02:00");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::options::UnknownOptionPolicy;
use crate::tz::CodecTimeZone;

/// Construction-time settings of a `TypeCodec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Zone for zone-naive temporal text.
    pub time_zone: CodecTimeZone,
    /// Server runs with `NO_BACKSLASH_ESCAPES`; only quotes are escaped.
    pub no_backslash_escapes: bool,
    /// Handling of option tags outside the known set.
    pub unknown_options: UnknownOptionPolicy,
}

impl CodecConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, CodecError> {
        toml::from_str(s).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, CodecError> {
        toml::to_string(self).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn with_time_zone(mut self, time_zone: CodecTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_no_backslash_escapes(mut self, enabled: bool) -> Self {
        self.no_backslash_escapes = enabled;
        self
    }

    pub fn with_unknown_options(mut self, policy: UnknownOptionPolicy) -> Self {
        self.unknown_options = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.time_zone, CodecTimeZone::Local);
        assert_eq!(config.unknown_options, UnknownOptionPolicy::Ignore);
    }

    #[test]
    fn test_full_document() {
        let config = CodecConfig::from_toml_str(
            r#"
            time_zone = "UTC"
            no_backslash_escapes = true
            unknown_options = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.time_zone, CodecTimeZone::Utc);
        assert!(config.no_backslash_escapes);
        assert_eq!(config.unknown_options, UnknownOptionPolicy::Reject);
    }

    #[test]
    fn test_bad_zone_is_config_error() {
        let err = CodecConfig::from_toml_str(r#"time_zone = "Mars/Olympus""#).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(CodecConfig::from_toml_str("timezone = \"UTC\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CodecConfig::default()
            .with_time_zone(CodecTimeZone::fixed(-5 * 3600).unwrap())
            .with_unknown_options(UnknownOptionPolicy::Reject);
        let text = config.to_toml_string().unwrap();
        assert_eq!(CodecConfig::from_toml_str(&text).unwrap(), config);
    }
}
