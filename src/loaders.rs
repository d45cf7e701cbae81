//! Resource loading utilities
//!
//! This module reads schema text from a [`Location`], enforcing the size
//! limit before anything is parsed.

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::locations::Location;
use std::fs;

/// Resource loader for schemas
#[derive(Debug, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Limits this loader enforces
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a resource as a string
    pub fn load(&self, location: &Location) -> Result<String> {
        let content = match location {
            Location::Path(path) => fs::read_to_string(path).map_err(|e| {
                Error::Resource(format!("Failed to read file '{}': {}", path.display(), e))
            })?,
            Location::Inline(s) => s.clone(),
        };

        self.limits.check_schema_size(content.len())?;
        tracing::debug!(location = %location, bytes = content.len(), "loaded schema");

        Ok(content)
    }
}
