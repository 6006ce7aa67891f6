//! Parser for MySQL column type definitions.
//!
//! Turns `information_schema.COLUMNS.COLUMN_TYPE` text such as
//! `int(10) unsigned zerofill` or `enum('red','it''s')` into a type name,
//! its arguments and the options the codec needs.
//!
//! Malformed definitions are `Syntax` errors. A well-formed definition whose
//! type is not in the registry is `UnsupportedType`, the same error the codec
//! facade raises for that name.
//!
//! # Example
//! ```
//! use qail_mysql_codec::column_type::ColumnType;
//! use qail_mysql_codec::types::TypeName;
//!
//! let col = ColumnType::parse("bigint(20) unsigned").unwrap();
//! assert_eq!(col.name, TypeName::BigInt);
//! assert!(col.options.unsigned);
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, multispace1, none_of},
    combinator::{all_consuming, map, opt, recognize, value},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::error::CodecError;
use crate::options::{TypeOptions, UnknownOptionPolicy};
use crate::types::{TypeClass, TypeName};

/// A parsed column type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    pub name: TypeName,
    /// Parenthesised arguments: widths, precision/scale, or enum/set labels.
    pub args: Vec<String>,
    pub options: TypeOptions,
}

impl ColumnType {
    /// Parse, ignoring unknown modifiers.
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        Self::parse_with_policy(input, UnknownOptionPolicy::Ignore)
    }

    /// Parse, applying `policy` to modifiers other than
    /// `unsigned`, `signed` and `zerofill`.
    ///
    /// Fails with `Syntax` when the text is not a column definition and with
    /// `UnsupportedType` when the base type is unknown.
    pub fn parse_with_policy(input: &str, policy: UnknownOptionPolicy) -> Result<Self, CodecError> {
        let (_, (name, args, modifiers)) = all_consuming(column_type)(input).map_err(|e| {
            let reason = match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => format!("unexpected input at {:?}", e.input),
                nom::Err::Incomplete(_) => "incomplete input".to_string(),
            };
            CodecError::Syntax {
                input: input.to_string(),
                reason,
            }
        })?;

        let name = resolve_alias(name).parse::<TypeName>()?;

        let mut options = TypeOptions::NONE;
        for modifier in modifiers {
            if modifier.eq_ignore_ascii_case("zerofill") {
                // ZEROFILL implies UNSIGNED
                options.unsigned = true;
            } else if !modifier.eq_ignore_ascii_case("signed") {
                let parsed = TypeOptions::from_tags([modifier], policy)?;
                options.unsigned |= parsed.unsigned;
            }
        }

        Ok(Self {
            name,
            args: args.unwrap_or_default(),
            options,
        })
    }

    /// Declared labels of an enum or set column.
    pub fn members(&self) -> Option<&[String]> {
        match self.name.class() {
            TypeClass::Enumerated => Some(&self.args),
            _ => None,
        }
    }
}

/// Spellings MySQL prints that differ from the registry.
fn resolve_alias(name: &str) -> &str {
    if name.eq_ignore_ascii_case("geomcollection") {
        "geometrycollection"
    } else {
        name
    }
}

type Parsed<'a> = (&'a str, Option<Vec<String>>, Vec<&'a str>);

fn column_type(input: &str) -> IResult<&str, Parsed<'_>> {
    let (input, _) = multispace0(input)?;
    let (input, name) = identifier(input)?;
    let (input, args) = opt(preceded(multispace0, arguments))(input)?;
    let (input, modifiers) = many0(preceded(multispace1, identifier))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (name, args, modifiers)))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// `(arg, arg, ...)`
fn arguments(input: &str) -> IResult<&str, Vec<String>> {
    delimited(
        pair(char('('), multispace0),
        separated_list0(tuple((multispace0, char(','), multispace0)), argument),
        pair(multispace0, char(')')),
    )(input)
}

fn argument(input: &str) -> IResult<&str, String> {
    alt((
        quoted_label,
        map(recognize(pair(opt(char('-')), digit1)), String::from),
    ))(input)
}

/// Single-quoted label; `''` is an escaped quote.
fn quoted_label(input: &str) -> IResult<&str, String> {
    let (input, _) = char('\'')(input)?;
    let (input, chars) = many0(alt((value('\'', tag("''")), none_of("'"))))(input)?;
    let (input, _) = char('\'')(input)?;
    Ok((input, chars.into_iter().collect()))
}
