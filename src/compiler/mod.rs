//! Schema compilation
//!
//! Takes the registry produced by the schema walker through name
//! disambiguation, subclass resolution and dependency ordering.

pub mod dependencies;
pub mod disambiguation;

pub use dependencies::DependencyGraph;
pub use disambiguation::{assign_short_names, resolve_subclasses};

use serde::Serialize;

use crate::error::Result;
use crate::limits::Limits;
use crate::locations::Location;
use crate::schema::{self, Descriptor, Registry};

/// A fully resolved schema, ready for code generation
#[derive(Debug, Clone)]
pub struct Compilation {
    registry: Registry,
    order: Vec<String>,
}

impl Compilation {
    /// The resolved registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Full paths in emission order
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Descriptors in emission order
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.order.iter().filter_map(|p| self.registry.get(p))
    }

    /// Descriptor by short name
    pub fn get(&self, short_name: &str) -> Option<&Descriptor> {
        self.registry.by_short_name(short_name)
    }

    /// Short name of a descriptor given its full path
    pub fn short_name_of(&self, full_path: &str) -> Result<&str> {
        self.registry.short_name_of(full_path)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the schema produced no descriptors
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolved descriptors and emission order as JSON
    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Dump<'a> {
            target_namespace: Option<&'a str>,
            order: Vec<&'a str>,
            descriptors: Vec<&'a Descriptor>,
        }

        let dump = Dump {
            target_namespace: self.registry.target_namespace(),
            order: self.descriptors().map(Descriptor::display_name).collect(),
            descriptors: self.descriptors().collect(),
        };
        Ok(serde_json::to_string_pretty(&dump)?)
    }
}

/// Run every compiler pass over a walked registry
pub fn compile(mut registry: Registry) -> Result<Compilation> {
    assign_short_names(&mut registry)?;
    resolve_subclasses(&mut registry)?;

    let graph = DependencyGraph::build(&registry)?;
    let order = graph.topological_sort()?;
    tracing::info!(descriptors = order.len(), "schema compiled");

    Ok(Compilation { registry, order })
}

/// Walk and compile schema text
pub fn compile_str(text: &str) -> Result<Compilation> {
    compile(schema::parse_schema(text)?)
}

/// Load, walk and compile a schema
pub fn compile_location(location: &Location, limits: Limits) -> Result<Compilation> {
    compile(schema::load_schema(location, limits)?)
}
