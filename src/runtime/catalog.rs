//! Specs built straight from a compiled schema
//!
//! A [`Catalog`] holds one [`ElementSpec`] per descriptor, so documents can
//! be built against a schema loaded at run time without going through
//! generated code.

use indexmap::IndexMap;

use super::element::BsElement;
use super::spec::{ElementSpec, SpecLink, SpecRef};
use super::value::Arg;
use crate::compiler::Compilation;
use crate::error::{Error, Result};
use crate::schema::{Descriptor, TypeRef};

/// Element specs by short name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    specs: IndexMap<String, SpecRef>,
}

impl Catalog {
    /// Build a spec for every descriptor, dependencies first
    pub fn from_compilation(compilation: &Compilation) -> Result<Self> {
        let mut catalog = Self::default();
        for descriptor in compilation.descriptors() {
            let spec = catalog.build_spec(compilation, descriptor)?;
            catalog
                .specs
                .insert(descriptor.display_name().to_string(), spec);
        }
        tracing::debug!(specs = catalog.specs.len(), "catalog built");
        Ok(catalog)
    }

    fn build_spec(&self, compilation: &Compilation, descriptor: &Descriptor) -> Result<SpecRef> {
        let mut builder = ElementSpec::builder(descriptor.display_name(), descriptor.name.as_str());

        if let Some(doc) = &descriptor.docstring {
            builder = builder.doc(doc.as_str());
        }
        match &descriptor.base {
            Some(TypeRef::Builtin(kind)) => builder = builder.scalar(*kind),
            Some(TypeRef::Named(path)) => builder = builder.base(self.resolved(compilation, path)?),
            None => {}
        }
        if !descriptor.enumerations.is_empty() {
            builder = builder.enumerations(descriptor.enumerations.iter().cloned());
        }
        for member in &descriptor.union_members {
            builder = builder.union_member(SpecLink::Shared(self.resolved(compilation, member)?.clone()));
        }
        for attribute in &descriptor.attributes {
            builder = builder.attribute(attribute.name.as_str());
        }
        for child in &descriptor.children {
            let link = if child.target == descriptor.full_path {
                SpecLink::Itself
            } else {
                SpecLink::Shared(self.resolved(compilation, &child.target)?.clone())
            };
            builder = builder.child(child.tag.as_str(), link);
        }

        Ok(builder.build())
    }

    /// Spec of an already built descriptor, by full path
    fn resolved(&self, compilation: &Compilation, full_path: &str) -> Result<&SpecRef> {
        let short_name = compilation.short_name_of(full_path)?;
        self.specs
            .get(short_name)
            .ok_or_else(|| Error::UnresolvedType(short_name.to_string()))
    }

    /// Spec by short name
    pub fn get(&self, short_name: &str) -> Option<&SpecRef> {
        self.specs.get(short_name)
    }

    /// Spec by short name, or [`Error::UnresolvedType`]
    pub fn spec(&self, short_name: &str) -> Result<&SpecRef> {
        self.get(short_name)
            .ok_or_else(|| Error::UnresolvedType(short_name.to_string()))
    }

    /// Short names in emission order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Number of specs
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Empty instance of a type
    pub fn element(&self, short_name: &str) -> Result<BsElement> {
        Ok(BsElement::new(self.spec(short_name)?))
    }

    /// Instance of a type from positional arguments
    pub fn build(&self, short_name: &str, args: Vec<Arg>) -> Result<BsElement> {
        self.construct(short_name, args, Vec::<(String, String)>::new())
    }

    /// Instance of a type from positional arguments and XML attributes
    pub fn construct<I, K, V>(&self, short_name: &str, args: Vec<Arg>, attributes: I) -> Result<BsElement>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        BsElement::construct(self.spec(short_name)?, args, attributes)
    }
}
