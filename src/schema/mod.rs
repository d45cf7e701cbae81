//! Schema model
//!
//! Reads an XSD into a [`Registry`] of [`Descriptor`]s, one per named
//! construct.

pub mod builtins;
pub mod descriptor;
pub mod parsing;
pub mod registry;

pub use builtins::ScalarKind;
pub use descriptor::{AttributeDecl, ChildRef, Descriptor, DescriptorKind, TypeRef};
pub use parsing::{parse_schema, SchemaWalker};
pub use registry::Registry;

use crate::error::Result;
use crate::limits::Limits;
use crate::loaders::Loader;
use crate::locations::Location;

/// Load and walk a schema from a location
pub fn load_schema(location: &Location, limits: Limits) -> Result<Registry> {
    let text = Loader::new().with_limits(limits.clone()).load(location)?;
    tracing::info!(location = %location, "walking schema");
    SchemaWalker::new().with_limits(limits).walk(&text)
}
