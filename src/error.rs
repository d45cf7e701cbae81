//! Error types for bsyncgen
//!
//! This module defines all error types used throughout the library. Schema
//! shape errors surface while generating code; construction errors surface
//! while a caller builds a document with the runtime.

use std::fmt;
use thiserror::Error;

/// Result type alias using bsyncgen Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bsyncgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unsupported or malformed XSD construct
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two constructs share the same full path
    #[error("duplicate definition: {0}")]
    DuplicateDefinition(String),

    /// A type reference that names no known descriptor
    #[error("unresolved type: {0}")]
    UnresolvedType(String),

    /// No suffix of the ancestor path identifies the descriptor
    #[error("no distinct path: {0}")]
    NoDistinctName(String),

    /// The dependency graph has a cycle
    #[error("cyclic dependency detected: {0}")]
    CyclicDependency(String),

    /// An emitted identifier collides with another
    #[error("name error: {0}")]
    Name(String),

    /// More than one positional value was supplied
    #[error("{element}: too many arguments ({count} supplied, 1 expected)")]
    TooManyArguments {
        /// Element the arguments were supplied to
        element: String,
        /// Number of arguments supplied
        count: usize,
    },

    /// Value of the wrong native type for a scalar element
    #[error("type error: {0}")]
    Type(String),

    /// Value outside a numeric constraint
    #[error("value error: {0}")]
    Value(String),

    /// Value not in the declared enumeration
    #[error("{element}: invalid enumeration {value:?}")]
    InvalidEnumeration {
        /// Element the value was supplied to
        element: String,
        /// Offending value
        value: String,
    },

    /// No union member accepts the value
    #[error("{element}: invalid argument")]
    InvalidArgument {
        /// Union element the value was supplied to
        element: String,
    },

    /// Child tag is not declared on the element
    #[error("{element:?} object has no child {child:?}")]
    UnknownChild {
        /// Element that was accessed
        element: String,
        /// Requested child tag
        child: String,
    },

    /// Child tag is declared but was never supplied
    #[error("{child:?} not set")]
    ChildNotSet {
        /// Element that was accessed
        element: String,
        /// Requested child tag
        child: String,
    },

    /// Single-valued child assigned a second time
    #[error("{child:?} already set")]
    ChildAlreadySet {
        /// Element that was modified
        element: String,
        /// Child tag
        child: String,
    },

    /// No declared child slot accepts the value's type
    #[error("{element}: expecting one of: {}", expected.join(", "))]
    UnexpectedChild {
        /// Element that was modified
        element: String,
        /// Type names of the declared slots
        expected: Vec<String>,
    },

    /// More than one declared child slot accepts the value's type
    #[error("{element}: {value} matches more than one child: {}", candidates.join(", "))]
    AmbiguousChild {
        /// Element that was modified
        element: String,
        /// Type name of the supplied value
        value: String,
        /// Tags of the matching slots
        candidates: Vec<String>,
    },

    /// XML attribute that was never set
    #[error("{element}: no attribute {attribute:?}")]
    UnknownAttribute {
        /// Element that was accessed
        element: String,
        /// Requested attribute name
        attribute: String,
    },

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// XML Schema parsing error
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Location in the schema file
    pub location: Option<String>,
    /// Schema construct that caused the error
    pub source: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, "\n\nLocation: {}", loc)?;
        }

        if let Some(ref src) = self.source {
            write!(f, "\n\nSource:\n{}", src)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
