//! MySQL column type registry.
//!
//! Reference: https://dev.mysql.com/doc/refman/8.0/en/data-types.html
//!
//! External names are mapped to [`TypeName`] once, at the boundary. Everything
//! past that point matches on the enum, so adding a type is a compile error
//! until every converter handles it.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Canonical MySQL column type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeName {
    // Numeric
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Numeric,
    Float,
    Double,
    Real,
    Bit,

    // Date and time
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,

    // String
    Char,
    VarChar,
    Boolean,

    // Text
    TinyText,
    Text,
    MediumText,
    LongText,

    // Binary
    Binary,
    VarBinary,

    // Blob
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,

    // Special string
    Enum,
    Set,

    // Spatial
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,

    // JSON
    Json,
}

/// Converter family a type name dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Integer,
    Float,
    Decimal,
    Bit,
    Temporal,
    Time,
    Text,
    Enumerated,
    Binary,
    Boolean,
    Spatial,
    Json,
}

impl TypeName {
    /// Every registered type, in declaration order.
    pub const ALL: [TypeName; 40] = [
        TypeName::TinyInt,
        TypeName::SmallInt,
        TypeName::MediumInt,
        TypeName::Int,
        TypeName::BigInt,
        TypeName::Decimal,
        TypeName::Numeric,
        TypeName::Float,
        TypeName::Double,
        TypeName::Real,
        TypeName::Bit,
        TypeName::Date,
        TypeName::DateTime,
        TypeName::Timestamp,
        TypeName::Time,
        TypeName::Year,
        TypeName::Char,
        TypeName::VarChar,
        TypeName::Boolean,
        TypeName::TinyText,
        TypeName::Text,
        TypeName::MediumText,
        TypeName::LongText,
        TypeName::Binary,
        TypeName::VarBinary,
        TypeName::TinyBlob,
        TypeName::Blob,
        TypeName::MediumBlob,
        TypeName::LongBlob,
        TypeName::Enum,
        TypeName::Set,
        TypeName::Geometry,
        TypeName::Point,
        TypeName::LineString,
        TypeName::Polygon,
        TypeName::MultiPoint,
        TypeName::MultiLineString,
        TypeName::MultiPolygon,
        TypeName::GeometryCollection,
        TypeName::Json,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::TinyInt => "tinyint",
            TypeName::SmallInt => "smallint",
            TypeName::MediumInt => "mediumint",
            TypeName::Int => "int",
            TypeName::BigInt => "bigint",
            TypeName::Decimal => "decimal",
            TypeName::Numeric => "numeric",
            TypeName::Float => "float",
            TypeName::Double => "double",
            TypeName::Real => "real",
            TypeName::Bit => "bit",
            TypeName::Date => "date",
            TypeName::DateTime => "datetime",
            TypeName::Timestamp => "timestamp",
            TypeName::Time => "time",
            TypeName::Year => "year",
            TypeName::Char => "char",
            TypeName::VarChar => "varchar",
            TypeName::Boolean => "boolean",
            TypeName::TinyText => "tinytext",
            TypeName::Text => "text",
            TypeName::MediumText => "mediumtext",
            TypeName::LongText => "longtext",
            TypeName::Binary => "binary",
            TypeName::VarBinary => "varbinary",
            TypeName::TinyBlob => "tinyblob",
            TypeName::Blob => "blob",
            TypeName::MediumBlob => "mediumblob",
            TypeName::LongBlob => "longblob",
            TypeName::Enum => "enum",
            TypeName::Set => "set",
            TypeName::Geometry => "geometry",
            TypeName::Point => "point",
            TypeName::LineString => "linestring",
            TypeName::Polygon => "polygon",
            TypeName::MultiPoint => "multipoint",
            TypeName::MultiLineString => "multilinestring",
            TypeName::MultiPolygon => "multipolygon",
            TypeName::GeometryCollection => "geometrycollection",
            TypeName::Json => "json",
        }
    }

    /// Converter family for this type.
    pub fn class(self) -> TypeClass {
        match self {
            TypeName::TinyInt
            | TypeName::SmallInt
            | TypeName::MediumInt
            | TypeName::Int
            | TypeName::BigInt
            | TypeName::Year => TypeClass::Integer,
            TypeName::Decimal | TypeName::Numeric => TypeClass::Decimal,
            TypeName::Float | TypeName::Double | TypeName::Real => TypeClass::Float,
            TypeName::Bit => TypeClass::Bit,
            TypeName::Date | TypeName::DateTime | TypeName::Timestamp => TypeClass::Temporal,
            TypeName::Time => TypeClass::Time,
            TypeName::Char
            | TypeName::VarChar
            | TypeName::TinyText
            | TypeName::Text
            | TypeName::MediumText
            | TypeName::LongText => TypeClass::Text,
            TypeName::Enum | TypeName::Set => TypeClass::Enumerated,
            TypeName::Binary
            | TypeName::VarBinary
            | TypeName::TinyBlob
            | TypeName::Blob
            | TypeName::MediumBlob
            | TypeName::LongBlob => TypeClass::Binary,
            TypeName::Boolean => TypeClass::Boolean,
            TypeName::Geometry
            | TypeName::Point
            | TypeName::LineString
            | TypeName::Polygon
            | TypeName::MultiPoint
            | TypeName::MultiLineString
            | TypeName::MultiPolygon
            | TypeName::GeometryCollection => TypeClass::Spatial,
            TypeName::Json => TypeClass::Json,
        }
    }

    /// Integer family, including the `year` alias.
    pub fn is_integer(self) -> bool {
        self.class() == TypeClass::Integer
    }

    /// Types whose decoded form is text.
    pub fn is_textual(self) -> bool {
        matches!(
            self.class(),
            TypeClass::Text | TypeClass::Enumerated | TypeClass::Spatial | TypeClass::Json
        )
    }

    /// Date, datetime, timestamp and time.
    pub fn is_temporal(self) -> bool {
        matches!(self.class(), TypeClass::Temporal | TypeClass::Time)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeName {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TypeName::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CodecError::UnsupportedType(s.to_string()))
    }
}

/// Anything that names a column type at the facade boundary.
pub trait IntoTypeName {
    fn into_type_name(self) -> Result<TypeName, CodecError>;
}

impl IntoTypeName for TypeName {
    fn into_type_name(self) -> Result<TypeName, CodecError> {
        Ok(self)
    }
}

impl IntoTypeName for &str {
    fn into_type_name(self) -> Result<TypeName, CodecError> {
        self.parse()
    }
}

impl IntoTypeName for &String {
    fn into_type_name(self) -> Result<TypeName, CodecError> {
        self.parse()
    }
}

impl IntoTypeName for String {
    fn into_type_name(self) -> Result<TypeName, CodecError> {
        self.parse()
    }
}
