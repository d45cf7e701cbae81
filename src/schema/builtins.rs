//! XSD built-in types
//!
//! The primitive types a descriptor can carry as its leaf text value. Only
//! the subset the BuildingSync schema uses is supported; anything else is a
//! schema shape error at generation time.

use serde::Serialize;
use std::fmt;

/// Scalar kind of a leaf element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScalarKind {
    /// `xs:boolean`
    Boolean,
    /// `xs:integer`, `xs:int`, `xs:long`, `xs:short`
    Integer,
    /// `xs:nonNegativeInteger`, `xs:unsignedInt`, `xs:unsignedLong`
    NonNegativeInteger,
    /// `xs:decimal`
    Decimal,
    /// `xs:float`, `xs:double`
    Float,
    /// `xs:string` and the string-derived builtins
    String,
    /// `xs:date`
    Date,
    /// `xs:time`
    Time,
    /// `xs:dateTime`
    DateTime,
    /// `xs:gMonthDay`
    GMonthDay,
    /// `xs:gYear`
    GYear,
}

impl ScalarKind {
    /// Map an XSD built-in local name to its scalar kind
    pub fn from_xsd_name(local_name: &str) -> Option<Self> {
        let kind = match local_name {
            "boolean" => ScalarKind::Boolean,
            "integer" | "int" | "long" | "short" => ScalarKind::Integer,
            "nonNegativeInteger" | "unsignedInt" | "unsignedLong" => {
                ScalarKind::NonNegativeInteger
            }
            "decimal" => ScalarKind::Decimal,
            "float" | "double" => ScalarKind::Float,
            "string" | "normalizedString" | "token" | "anyURI" | "ID" | "IDREF" | "NCName"
            | "Name" | "language" => ScalarKind::String,
            "date" => ScalarKind::Date,
            "time" => ScalarKind::Time,
            "dateTime" => ScalarKind::DateTime,
            "gMonthDay" => ScalarKind::GMonthDay,
            "gYear" => ScalarKind::GYear,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical XSD local name
    pub fn xsd_name(&self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::Integer => "integer",
            ScalarKind::NonNegativeInteger => "nonNegativeInteger",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Float => "float",
            ScalarKind::String => "string",
            ScalarKind::Date => "date",
            ScalarKind::Time => "time",
            ScalarKind::DateTime => "dateTime",
            ScalarKind::GMonthDay => "gMonthDay",
            ScalarKind::GYear => "gYear",
        }
    }

    /// Path of the variant as written in generated code
    pub fn rust_path(&self) -> &'static str {
        match self {
            ScalarKind::Boolean => "ScalarKind::Boolean",
            ScalarKind::Integer => "ScalarKind::Integer",
            ScalarKind::NonNegativeInteger => "ScalarKind::NonNegativeInteger",
            ScalarKind::Decimal => "ScalarKind::Decimal",
            ScalarKind::Float => "ScalarKind::Float",
            ScalarKind::String => "ScalarKind::String",
            ScalarKind::Date => "ScalarKind::Date",
            ScalarKind::Time => "ScalarKind::Time",
            ScalarKind::DateTime => "ScalarKind::DateTime",
            ScalarKind::GMonthDay => "ScalarKind::GMonthDay",
            ScalarKind::GYear => "ScalarKind::GYear",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xs:{}", self.xsd_name())
    }
}
