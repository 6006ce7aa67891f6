//! Type options that refine how a type name is interpreted.
//!
//! Options travel next to the type name rather than inside it, so
//! `int` + `unsigned` decodes into `u64` while the name stays `int`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A single option tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOption {
    /// Integer values are unsigned.
    Unsigned,
}

impl TypeOption {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeOption::Unsigned => "unsigned",
        }
    }
}

impl FromStr for TypeOption {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("unsigned") {
            Ok(TypeOption::Unsigned)
        } else {
            Err(CodecError::UnknownOption(s.to_string()))
        }
    }
}

/// What to do with option tags outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownOptionPolicy {
    /// Skip the tag.
    #[default]
    Ignore,
    /// Fail with `CodecError::UnknownOption`.
    Reject,
}

/// Options applied to one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeOptions {
    pub unsigned: bool,
}

impl TypeOptions {
    /// No options.
    pub const NONE: TypeOptions = TypeOptions { unsigned: false };

    /// Unsigned integers.
    pub const UNSIGNED: TypeOptions = TypeOptions { unsigned: true };

    /// Set one option. Setting it twice is the same as once.
    pub fn with(mut self, option: TypeOption) -> Self {
        match option {
            TypeOption::Unsigned => self.unsigned = true,
        }
        self
    }

    /// Build options from string tags.
    ///
    /// # Example
    /// ```
    /// use qail_mysql_codec::options::{TypeOptions, UnknownOptionPolicy};
    ///
    /// let opts = TypeOptions::from_tags(["unsigned", "zerofill"], UnknownOptionPolicy::Ignore).unwrap();
    /// assert!(opts.unsigned);
    /// assert!(TypeOptions::from_tags(["zerofill"], UnknownOptionPolicy::Reject).is_err());
    /// ```
    pub fn from_tags<I, S>(tags: I, policy: UnknownOptionPolicy) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = TypeOptions::NONE;
        for tag in tags {
            let tag = tag.as_ref();
            match (tag.parse::<TypeOption>(), policy) {
                (Ok(option), _) => opts = opts.with(option),
                (Err(_), UnknownOptionPolicy::Ignore) => {
                    tracing::trace!(tag, "ignoring unknown type option");
                }
                (Err(err), UnknownOptionPolicy::Reject) => return Err(err),
            }
        }
        Ok(opts)
    }
}

impl From<TypeOption> for TypeOptions {
    fn from(option: TypeOption) -> Self {
        TypeOptions::NONE.with(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed() {
        assert!(!TypeOptions::default().unsigned);
        assert_eq!(TypeOptions::default(), TypeOptions::NONE);
    }

    #[test]
    fn test_tags_are_idempotent() {
        let opts = TypeOptions::from_tags(["unsigned", "UNSIGNED"], UnknownOptionPolicy::Reject).unwrap();
        assert_eq!(opts, TypeOptions::UNSIGNED);
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let opts = TypeOptions::from_tags(["zerofill"], UnknownOptionPolicy::Ignore).unwrap();
        assert_eq!(opts, TypeOptions::NONE);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = TypeOptions::from_tags(["unsigned", "zerofill"], UnknownOptionPolicy::Reject).unwrap_err();
        assert_eq!(err, CodecError::UnknownOption("zerofill".to_string()));
    }

    #[test]
    fn test_empty_tags() {
        let tags: [&str; 0] = [];
        assert_eq!(
            TypeOptions::from_tags(tags, UnknownOptionPolicy::Reject).unwrap(),
            TypeOptions::NONE
        );
    }
}
