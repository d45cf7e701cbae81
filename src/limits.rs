//! Limits and constraints for schema processing
//!
//! The generator walks a schema recursively, so these limits bound the
//! input size, the nesting depth of XSD constructs and the number of
//! descriptors a single schema may register.

use crate::error::{Error, Result};

/// Global limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum schema file size in bytes
    pub max_schema_size: usize,

    /// Maximum nesting depth of XSD constructs
    pub max_schema_depth: usize,

    /// Maximum number of registered descriptors
    pub max_descriptors: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_schema_size: 100 * 1024 * 1024, // 100 MB
            max_schema_depth: 256,
            max_descriptors: 100_000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_schema_size: 10 * 1024 * 1024, // 10 MB
            max_schema_depth: 64,
            max_descriptors: 10_000,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_schema_size: 1024 * 1024 * 1024, // 1 GB
            max_schema_depth: 4096,
            max_descriptors: 1_000_000,
        }
    }

    /// Check if schema size is within limits
    pub fn check_schema_size(&self, size: usize) -> Result<()> {
        if size > self.max_schema_size {
            Err(Error::LimitExceeded(format!(
                "schema size {} bytes exceeds maximum {} bytes",
                size, self.max_schema_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if construct nesting depth is within limits
    pub fn check_schema_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_schema_depth {
            Err(Error::LimitExceeded(format!(
                "schema depth {} exceeds maximum {}",
                depth, self.max_schema_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if number of descriptors is within limits
    pub fn check_descriptors(&self, count: usize) -> Result<()> {
        if count > self.max_descriptors {
            Err(Error::LimitExceeded(format!(
                "descriptor count {} exceeds maximum {}",
                count, self.max_descriptors
            )))
        } else {
            Ok(())
        }
    }
}
