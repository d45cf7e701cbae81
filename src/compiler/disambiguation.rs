//! Short name assignment
//!
//! Schema names such as `Capacity` or `Controls` are reused under many
//! parents. Each descriptor gets the shortest suffix of its ancestor path
//! that no other descriptor shares, scanning suffix lengths shortest-first.
//! A suffix is only taken when its parent qualifier is itself unambiguous,
//! so `Facilities.Facility` is never chosen while `Facilities` still names
//! two things.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::schema::Registry;

/// Number of descriptors whose ancestor path starts with each prefix
#[derive(Debug, Default)]
struct Buckets {
    counts: HashMap<Vec<String>, usize>,
}

impl Buckets {
    fn build(registry: &Registry) -> Self {
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        for descriptor in registry.iter() {
            let path = &descriptor.parent_path;
            for len in 1..=path.len() {
                *counts.entry(path[..len].to_vec()).or_default() += 1;
            }
        }
        Self { counts }
    }

    fn count(&self, prefix: &[String]) -> usize {
        self.counts.get(prefix).copied().unwrap_or(0)
    }
}

/// Dotted name for an innermost-first path prefix
fn dotted(prefix: &[String]) -> String {
    prefix
        .iter()
        .rev()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(".")
}

/// Assign every descriptor its short name
pub fn assign_short_names(registry: &mut Registry) -> Result<()> {
    let buckets = Buckets::build(registry);

    let paths: Vec<(String, Vec<String>)> = registry
        .iter()
        .map(|d| (d.full_path.clone(), d.parent_path.clone()))
        .collect();

    // Top-level names cannot be shortened further
    for (full_path, path) in paths.iter().filter(|(_, p)| p.len() == 1) {
        tracing::debug!(short_name = %path[0], "top level");
        registry.assign_short_name(full_path, path[0].clone())?;
    }

    for (full_path, path) in paths.iter().filter(|(_, p)| p.len() > 1) {
        let short_name = shortest_distinct(registry, &buckets, path)
            .ok_or_else(|| Error::NoDistinctName(full_path.clone()))?;
        tracing::debug!(full_path = %full_path, short_name = %short_name, "short name");
        registry.assign_short_name(full_path, short_name)?;
    }
    Ok(())
}

fn shortest_distinct(registry: &Registry, buckets: &Buckets, path: &[String]) -> Option<String> {
    for len in 1..=path.len() {
        let prefix = &path[..len];
        let candidate = dotted(prefix);

        if buckets.count(prefix) > 1 {
            tracing::trace!(candidate = %candidate, "shared, try again");
            continue;
        }

        // The qualifier must be unambiguous too. A qualifier that is already
        // a short name counts even when its bucket is shared, which is what
        // lets `ScenarioType.ScenarioType` resolve.
        let parent = &prefix[1..];
        if !registry.has_short_name(&dotted(parent)) && buckets.count(parent) > 1 {
            tracing::trace!(candidate = %candidate, "parent shared, try again");
            continue;
        }

        return Some(candidate);
    }
    None
}

/// Record each dotted short name under the descriptor it nests in
pub fn resolve_subclasses(registry: &mut Registry) -> Result<()> {
    let mut nested: Vec<(String, String)> = Vec::new();
    for descriptor in registry.iter() {
        let short_name = descriptor.display_name();
        if let Some((parent, _)) = short_name.rsplit_once('.') {
            let parent = registry
                .by_short_name(parent)
                .ok_or_else(|| Error::NoDistinctName(format!("{} (parent of {})", parent, short_name)))?;
            tracing::trace!(parent = %parent.display_name(), child = %short_name, "subclass");
            nested.push((parent.full_path.clone(), descriptor.full_path.clone()));
        }
    }

    for (parent, child) in nested {
        if let Some(descriptor) = registry.get_mut(&parent) {
            descriptor.subclasses.push(child);
        }
    }
    Ok(())
}
