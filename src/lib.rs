//! # bsyncgen
//!
//! Generates Rust data-binding types from the BuildingSync XML Schema, and
//! provides the runtime those types use to build BuildingSync documents.
//!
//! Generation runs in three steps:
//!
//! - the schema walker turns every element and type declaration into a
//!   descriptor, keyed by its full nesting path
//! - the compiler gives each descriptor the shortest unambiguous name and
//!   orders descriptors so dependencies come first
//! - the generator emits one Rust type per descriptor
//!
//! ## Example
//!
//! ```rust,ignore
//! use bsyncgen::compiler::compile_location;
//! use bsyncgen::generators::{Generator, GeneratorConfig, RustGenerator};
//! use bsyncgen::{limits::Limits, locations::Location};
//!
//! let compilation = compile_location(&Location::path("BuildingSync.xsd"), Limits::default())?;
//! let output = RustGenerator::new(GeneratorConfig::default()).generate(&compilation)?;
//! output.write_to("bsync.rs")?;
//! ```
//!
//! Documents can also be built without generated code, straight from a
//! compiled schema:
//!
//! ```rust,ignore
//! use bsyncgen::runtime::Catalog;
//!
//! let catalog = Catalog::from_compilation(&compilation)?;
//! let name = catalog.build("Name", vec!["abc".into()])?;
//! let widget = catalog.build("Widget", vec![name.into()])?;
//! assert_eq!(widget.to_xml()?, "<Widget><Name>abc</Name></Widget>");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;

pub mod names;
pub mod namespaces;

pub mod loaders;
pub mod locations;

pub mod documents;

pub mod compiler;
pub mod generators;
pub mod schema;

pub mod runtime;

pub use error::{Error, Result};

/// Version of the bsyncgen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
