//! Dependency graph and emission order
//!
//! A descriptor depends on its base type, the types of its children and its
//! union members. Types are emitted after everything they depend on.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};
use crate::schema::Registry;

/// Edges from each descriptor (full path) to the descriptors it references
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: IndexMap<String, IndexSet<String>>,
}

impl DependencyGraph {
    /// Build the graph for every descriptor in the registry
    pub fn build(registry: &Registry) -> Result<Self> {
        let mut edges = IndexMap::new();

        for descriptor in registry.iter() {
            let own = descriptor.full_path.as_str();
            // Only a child slot may point back at its own type
            if descriptor.base_type() == Some(own)
                || descriptor.union_members.iter().any(|m| m == own)
            {
                return Err(Error::CyclicDependency(format!("{} derives from itself", own)));
            }

            let mut deps = IndexSet::new();
            for target in descriptor.references() {
                if target == own {
                    continue;
                }
                let dependency = registry.get(target).ok_or_else(|| {
                    Error::UnresolvedType(format!(
                        "{} (referenced by {})",
                        target,
                        descriptor.display_name()
                    ))
                })?;
                tracing::debug!(
                    from = %descriptor.display_name(),
                    to = %dependency.display_name(),
                    "dependency"
                );
                deps.insert(target.to_string());
            }
            edges.insert(descriptor.full_path.clone(), deps);
        }

        Ok(Self { edges })
    }

    /// Descriptors a descriptor depends on
    pub fn dependencies(&self, full_path: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(full_path)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Order the nodes so every node follows its dependencies
    ///
    /// Each pass emits, in declaration order, every pending node whose
    /// dependencies have all been emitted. A pass that emits nothing means
    /// the remaining nodes form a cycle.
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        let mut order = Vec::with_capacity(self.edges.len());
        let mut emitted: HashSet<&str> = HashSet::new();
        let mut pending: Vec<(&String, &IndexSet<String>)> = self.edges.iter().collect();

        while !pending.is_empty() {
            let before = order.len();
            let mut still_pending = Vec::new();

            for (node, deps) in pending {
                if deps.iter().all(|d| emitted.contains(d.as_str())) {
                    emitted.insert(node.as_str());
                    order.push(node.clone());
                } else {
                    still_pending.push((node, deps));
                }
            }

            if order.len() == before {
                let (node, deps) = still_pending[0];
                let waiting: Vec<&str> = deps
                    .iter()
                    .map(String::as_str)
                    .filter(|d| !emitted.contains(d))
                    .collect();
                return Err(Error::CyclicDependency(format!(
                    "{} (waiting on {})",
                    node,
                    waiting.join(", ")
                )));
            }
            tracing::trace!(emitted = order.len() - before, pending = still_pending.len(), "sort pass");
            pending = still_pending;
        }

        Ok(order)
    }
}
