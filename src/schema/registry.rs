//! Descriptor registry
//!
//! The compilation context shared by the walker, the disambiguator and the
//! dependency builder: descriptors by full path in declaration order, the
//! short names assigned to them, and the schema's global attributes.

use super::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::limits::Limits;
use indexmap::IndexMap;

/// Table of every descriptor produced from one schema
#[derive(Debug, Clone, Default)]
pub struct Registry {
    descriptors: IndexMap<String, Descriptor>,
    short_names: IndexMap<String, String>,
    global_attributes: IndexMap<String, String>,
    target_namespace: Option<String>,
    limits: Limits,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits checked on insertion
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Target namespace of the schema
    pub fn target_namespace(&self) -> Option<&str> {
        self.target_namespace.as_deref()
    }

    /// Record the schema's target namespace
    pub fn set_target_namespace(&mut self, namespace: Option<String>) {
        self.target_namespace = namespace;
    }

    /// Register a descriptor; full paths must be unique
    pub fn insert(&mut self, descriptor: Descriptor) -> Result<()> {
        if self.descriptors.contains_key(&descriptor.full_path) {
            return Err(Error::DuplicateDefinition(descriptor.full_path));
        }
        self.limits.check_descriptors(self.descriptors.len() + 1)?;

        tracing::trace!(full_path = %descriptor.full_path, "registered");
        self.descriptors
            .insert(descriptor.full_path.clone(), descriptor);
        Ok(())
    }

    /// Descriptor by full path
    pub fn get(&self, full_path: &str) -> Option<&Descriptor> {
        self.descriptors.get(full_path)
    }

    /// Mutable descriptor by full path
    pub fn get_mut(&mut self, full_path: &str) -> Option<&mut Descriptor> {
        self.descriptors.get_mut(full_path)
    }

    /// Descriptor by full path, or [`Error::UnresolvedType`]
    pub fn resolve(&self, full_path: &str) -> Result<&Descriptor> {
        self.get(full_path)
            .ok_or_else(|| Error::UnresolvedType(full_path.to_string()))
    }

    /// Whether a full path is registered
    pub fn contains(&self, full_path: &str) -> bool {
        self.descriptors.contains_key(full_path)
    }

    /// Descriptors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.values()
    }

    /// Full paths in declaration order
    pub fn full_paths(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor was registered
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Bind a short name to a descriptor
    pub fn assign_short_name(&mut self, full_path: &str, short_name: impl Into<String>) -> Result<()> {
        let short_name = short_name.into();
        if let Some(owner) = self.short_names.get(&short_name) {
            if owner != full_path {
                return Err(Error::NoDistinctName(format!(
                    "{} is claimed by both {} and {}",
                    short_name, owner, full_path
                )));
            }
        }
        let descriptor = self
            .descriptors
            .get_mut(full_path)
            .ok_or_else(|| Error::UnresolvedType(full_path.to_string()))?;
        descriptor.short_name = Some(short_name.clone());
        self.short_names.insert(short_name, full_path.to_string());
        Ok(())
    }

    /// Whether a short name has been assigned
    pub fn has_short_name(&self, short_name: &str) -> bool {
        self.short_names.contains_key(short_name)
    }

    /// Descriptor by short name
    pub fn by_short_name(&self, short_name: &str) -> Option<&Descriptor> {
        self.short_names
            .get(short_name)
            .and_then(|full_path| self.descriptors.get(full_path))
    }

    /// Short name of a descriptor, or [`Error::UnresolvedType`]
    pub fn short_name_of(&self, full_path: &str) -> Result<&str> {
        let descriptor = self.resolve(full_path)?;
        descriptor
            .short_name
            .as_deref()
            .ok_or_else(|| Error::NoDistinctName(full_path.to_string()))
    }

    /// Record a global attribute declaration
    pub fn record_attribute(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.global_attributes.insert(name.into(), type_name.into());
    }

    /// Type of a global attribute
    pub fn attribute_type(&self, name: &str) -> Option<&str> {
        self.global_attributes.get(name).map(String::as_str)
    }
}
