//! Native values and their canonical XML text
//!
//! A [`Value`] is what a caller hands to a value-shaped element. Coercion
//! checks the value against the element's [`ScalarKind`] and renders the
//! lexical form written into the document.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

use super::element::BsElement;
use crate::error::{Error, Result};
use crate::schema::ScalarKind;

/// A native scalar input
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Exact decimal
    Decimal(Decimal),
    /// Binary floating point
    Float(f64),
    /// String
    Str(String),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time without an offset
    DateTime(NaiveDateTime),
    /// Date and time with a UTC offset
    DateTimeTz(DateTime<FixedOffset>),
}

impl Value {
    /// Name of the native type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Decimal(_) => "decimal",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) | Value::DateTimeTz(_) => "datetime",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::DateTimeTz(dt) => write!(f, "{}", dt),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i64 => Int,
    i32 => Int,
    i16 => Int,
    u32 => Int,
    u16 => Int,
    u8 => Int,
    f64 => Float,
    f32 => Float,
    Decimal => Decimal,
    String => Str,
    &str => Str,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeTz,
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTimeTz(v.fixed_offset())
    }
}

/// One positional constructor argument
#[derive(Debug, Clone)]
pub enum Arg {
    /// A scalar value
    Value(Value),
    /// A child element
    Element(BsElement),
}

impl<T: Into<Value>> From<T> for Arg {
    fn from(v: T) -> Self {
        Arg::Value(v.into())
    }
}

impl From<BsElement> for Arg {
    fn from(element: BsElement) -> Self {
        Arg::Element(element)
    }
}

impl ScalarKind {
    /// Check a value against this kind and render its canonical text
    pub fn coerce(&self, value: &Value) -> Result<String> {
        let text = match (self, value) {
            (ScalarKind::Boolean, Value::Bool(b)) => b.to_string(),
            (ScalarKind::Integer, Value::Int(i)) => i.to_string(),
            (ScalarKind::NonNegativeInteger, Value::Int(i)) => {
                if *i < 0 {
                    return Err(Error::Value(format!(
                        "non-negative integer expected, found {}",
                        i
                    )));
                }
                i.to_string()
            }
            (ScalarKind::Decimal, Value::Decimal(d)) => d.to_string(),
            (ScalarKind::Decimal, Value::Float(x)) => {
                if !x.is_finite() {
                    return Err(Error::Value(format!("finite decimal expected, found {}", x)));
                }
                format!("{:.6}", x)
            }
            (ScalarKind::Float, Value::Float(x)) => float_text(*x),
            (ScalarKind::String, Value::Str(s)) => s.clone(),
            (ScalarKind::Date, Value::Date(d)) => d.format("%Y-%m-%d").to_string(),
            (ScalarKind::Time, Value::Time(t)) => t.format("%H:%M:%S%.f").to_string(),
            (ScalarKind::DateTime, Value::DateTime(dt)) => {
                dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
            }
            (ScalarKind::DateTime, Value::DateTimeTz(dt)) => {
                dt.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string()
            }
            (ScalarKind::GMonthDay, Value::Date(d)) => d.format("--%m-%d").to_string(),
            (ScalarKind::GYear, Value::Int(i)) => i.to_string(),
            (kind, value) => {
                return Err(Error::Type(format!(
                    "{} expected, found {} {}",
                    expected_native(*kind),
                    value.type_name(),
                    value
                )))
            }
        };
        Ok(text)
    }
}

fn expected_native(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Boolean => "bool",
        ScalarKind::Integer | ScalarKind::GYear => "integer",
        ScalarKind::NonNegativeInteger => "non-negative integer",
        ScalarKind::Decimal => "decimal or float",
        ScalarKind::Float => "float",
        ScalarKind::String => "string",
        ScalarKind::Date | ScalarKind::GMonthDay => "date",
        ScalarKind::Time => "time",
        ScalarKind::DateTime => "datetime",
    }
}

/// xs:float lexical form
fn float_text(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "INF".to_string()
    } else if x == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        x.to_string()
    }
}
