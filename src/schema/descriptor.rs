//! Class descriptors
//!
//! A [`Descriptor`] is the generator's model of one named schema construct:
//! enough to emit a type for it and to build its runtime tables.

use super::builtins::ScalarKind;
use serde::Serialize;
use std::fmt;

/// Which schema construct produced a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptorKind {
    /// `xs:element`
    Element,
    /// named `xs:simpleType`
    SimpleType,
    /// named `xs:complexType`
    ComplexType,
}

/// Reference to the type a descriptor derives its value shape from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum TypeRef {
    /// An XSD built-in
    Builtin(ScalarKind),
    /// Another descriptor, by full path
    Named(String),
}

impl TypeRef {
    /// Scalar kind when this is a built-in reference
    pub fn as_builtin(&self) -> Option<ScalarKind> {
        match self {
            TypeRef::Builtin(kind) => Some(*kind),
            TypeRef::Named(_) => None,
        }
    }

    /// Descriptor path when this is a named reference
    pub fn as_named(&self) -> Option<&str> {
        match self {
            TypeRef::Builtin(_) => None,
            TypeRef::Named(path) => Some(path),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Builtin(kind) => write!(f, "{}", kind),
            TypeRef::Named(path) => f.write_str(path),
        }
    }
}

/// A child element slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRef {
    /// Tag the child is serialized under
    pub tag: String,
    /// Full path of the child's descriptor
    pub target: String,
}

impl ChildRef {
    /// Create a child slot
    pub fn new(tag: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            target: target.into(),
        }
    }
}

/// An XML attribute declared on a complex type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDecl {
    /// Attribute name
    pub name: String,
    /// Declared type, as written in the schema without its prefix
    pub type_name: String,
}

impl AttributeDecl {
    /// Create an attribute declaration
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Generator model of one named schema construct
#[derive(Debug, Clone, Serialize)]
pub struct Descriptor {
    /// Local schema name
    pub name: String,
    /// Construct kind
    pub kind: DescriptorKind,
    /// Own name followed by each named ancestor, innermost first
    pub parent_path: Vec<String>,
    /// Dot-joined path from the schema root
    pub full_path: String,
    /// Disambiguated name, assigned by the compiler
    pub short_name: Option<String>,
    /// Base type: a built-in scalar or another descriptor
    pub base: Option<TypeRef>,
    /// Allowed literal values
    pub enumerations: Vec<String>,
    /// Union member descriptors (full paths), in trial order
    pub union_members: Vec<String>,
    /// XML attribute slots
    pub attributes: Vec<AttributeDecl>,
    /// Child element slots in declaration order
    pub children: Vec<ChildRef>,
    /// Annotation text
    pub docstring: Option<String>,
    /// Descriptors (full paths) whose short name nests under this one
    pub subclasses: Vec<String>,
    /// Position in the schema text, `line:column`
    pub location: Option<String>,
}

impl Descriptor {
    /// Create a descriptor for `name` nested under `ancestors` (outermost first)
    pub fn new(kind: DescriptorKind, name: impl Into<String>, ancestors: &[String]) -> Self {
        let name = name.into();
        let mut parent_path = vec![name.clone()];
        parent_path.extend(ancestors.iter().rev().cloned());

        let full_path = ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name.as_str()))
            .collect::<Vec<_>>()
            .join(".");

        Self {
            name,
            kind,
            parent_path,
            full_path,
            short_name: None,
            base: None,
            enumerations: Vec::new(),
            union_members: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            docstring: None,
            subclasses: Vec::new(),
            location: None,
        }
    }

    /// Disambiguated name, or the full path before disambiguation ran
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.full_path)
    }

    /// Whether the descriptor sits at the top level of the schema
    pub fn is_top_level(&self) -> bool {
        self.parent_path.len() == 1
    }

    /// Built-in scalar kind, when the base is a built-in
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        self.base.as_ref().and_then(TypeRef::as_builtin)
    }

    /// Base descriptor path, when the base is another descriptor
    pub fn base_type(&self) -> Option<&str> {
        self.base.as_ref().and_then(TypeRef::as_named)
    }

    /// Whether the descriptor itself declares a value shape
    pub fn has_value_shape(&self) -> bool {
        !self.enumerations.is_empty() || !self.union_members.is_empty() || self.scalar_kind().is_some()
    }

    /// Full paths of every descriptor this one references
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.base_type()
            .into_iter()
            .chain(self.children.iter().map(|c| c.target.as_str()))
            .chain(self.union_members.iter().map(String::as_str))
    }
}
