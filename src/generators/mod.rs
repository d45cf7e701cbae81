//! Code generators
//!
//! A generator turns a [`Compilation`] into source text. Only Rust is
//! emitted today; the trait keeps the emitter separate from the compiler
//! passes.

pub mod rust;

pub use rust::{RustGenerator, RustOutput};

use crate::compiler::Compilation;
use crate::error::Result;

/// Default header copied to the top of every generated file
pub const DEFAULT_HEADER: &str = include_str!("../../templates/header.rs");

/// Trait that all generators implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from a compiled schema
    fn generate(&self, compilation: &Compilation) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Whether to emit documentation comments from schema annotations
    pub generate_docs: bool,
    /// Header text copied verbatim before the generated types
    pub header: String,
    /// Path of the runtime module, imported as `rt` by the generated file
    pub runtime_path: String,
    /// Whether to emit modules mirroring nested short names
    pub namespace_modules: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            header: DEFAULT_HEADER.to_string(),
            runtime_path: "bsyncgen::runtime".to_string(),
            namespace_modules: true,
        }
    }
}

impl GeneratorConfig {
    /// Replace the header text
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Turn documentation comments on or off
    pub fn with_docs(mut self, generate_docs: bool) -> Self {
        self.generate_docs = generate_docs;
        self
    }

    /// Refer to the runtime under another path
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }
}
