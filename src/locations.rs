//! Schema source locations
//!
//! A schema is read either from a file or from text already in memory
//! (tests and embedding callers).

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a schema comes from
#[derive(Debug, Clone)]
pub enum Location {
    /// File system path
    Path(PathBuf),
    /// In-memory schema text
    Inline(String),
}

impl Location {
    /// Location for a file on disk
    pub fn path(path: impl AsRef<Path>) -> Self {
        Location::Path(path.as_ref().to_path_buf())
    }

    /// Location for schema text held in memory
    pub fn inline(text: impl Into<String>) -> Self {
        Location::Inline(text.into())
    }

    /// Check if this is a local file
    pub fn is_file(&self) -> bool {
        matches!(self, Location::Path(_))
    }

    /// Short label used in log lines and error locations
    pub fn label(&self) -> String {
        match self {
            Location::Path(p) => p.display().to_string(),
            Location::Inline(_) => "<inline>".to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
