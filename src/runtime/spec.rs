//! Element class tables
//!
//! An [`ElementSpec`] carries everything the runtime needs to know about one
//! generated type: its tag, value shape, attribute table and child slots.
//! Specs are shared behind [`Arc`] and compared by identity.

use std::fmt;
use std::sync::Arc;

use crate::schema::ScalarKind;

/// Shared handle to an element spec
pub type SpecRef = Arc<ElementSpec>;

/// How a child slot or union member reaches its spec
#[derive(Clone)]
pub enum SpecLink {
    /// Accessor of a generated type, called when first needed
    Static(fn() -> &'static SpecRef),
    /// A spec that already exists
    Shared(SpecRef),
    /// The spec that declares the slot
    Itself,
}

impl SpecLink {
    /// Resolve the link; `owner` is the spec holding it
    pub fn resolve(&self, owner: &SpecRef) -> SpecRef {
        match self {
            SpecLink::Static(accessor) => Arc::clone(accessor()),
            SpecLink::Shared(spec) => Arc::clone(spec),
            SpecLink::Itself => Arc::clone(owner),
        }
    }
}

impl fmt::Debug for SpecLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecLink::Static(accessor) => write!(f, "Static({})", accessor().name()),
            SpecLink::Shared(spec) => write!(f, "Shared({})", spec.name()),
            SpecLink::Itself => f.write_str("Itself"),
        }
    }
}

/// A declared child element slot
#[derive(Debug, Clone)]
pub struct ChildSlot {
    /// Tag the child is serialized under
    pub tag: String,
    /// Type of the child
    pub spec: SpecLink,
}

/// Class tables of one generated type
pub struct ElementSpec {
    name: String,
    tag: String,
    doc: Option<String>,
    base: Option<SpecRef>,
    scalar: Option<ScalarKind>,
    enumerations: Vec<String>,
    union: Vec<SpecLink>,
    attributes: Vec<String>,
    children: Vec<ChildSlot>,
}

impl ElementSpec {
    /// Start building a spec for type `name` serialized as `tag`
    pub fn builder(name: impl Into<String>, tag: impl Into<String>) -> ElementSpecBuilder {
        ElementSpecBuilder {
            name: name.into(),
            tag: tag.into(),
            doc: None,
            base: None,
            scalar: None,
            enumerations: Vec::new(),
            union: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default element tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Documentation text
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Base type, if this type derives from another
    pub fn base(&self) -> Option<&SpecRef> {
        self.base.as_ref()
    }

    /// Scalar kind of the text value
    pub fn scalar(&self) -> Option<ScalarKind> {
        self.scalar
    }

    /// Allowed literal values
    pub fn enumerations(&self) -> &[String] {
        &self.enumerations
    }

    /// Union members in trial order
    pub fn union_members(&self) -> &[SpecLink] {
        &self.union
    }

    /// Declared attribute names
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Child slots in declaration order
    pub fn children(&self) -> &[ChildSlot] {
        &self.children
    }

    /// First slot declared for a tag
    pub fn slot(&self, tag: &str) -> Option<&ChildSlot> {
        self.children.iter().find(|slot| slot.tag == tag)
    }

    /// Whether instances hold a value rather than children
    pub fn is_value_shaped(&self) -> bool {
        !self.enumerations.is_empty() || !self.union.is_empty() || self.scalar.is_some()
    }

    /// Whether this type is `other` or derives from it
    pub fn is_a(&self, other: &ElementSpec) -> bool {
        let mut current = Some(self);
        while let Some(spec) = current {
            if std::ptr::eq(spec, other) {
                return true;
            }
            current = spec.base.as_deref();
        }
        false
    }
}

impl fmt::Debug for ElementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementSpec")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("base", &self.base.as_ref().map(|b| b.name()))
            .field("scalar", &self.scalar)
            .field("enumerations", &self.enumerations.len())
            .field("union", &self.union.len())
            .field("children", &self.children.iter().map(|c| &c.tag).collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ElementSpec`]
#[derive(Debug)]
pub struct ElementSpecBuilder {
    name: String,
    tag: String,
    doc: Option<String>,
    base: Option<SpecRef>,
    scalar: Option<ScalarKind>,
    enumerations: Vec<String>,
    union: Vec<SpecLink>,
    attributes: Vec<String>,
    children: Vec<ChildSlot>,
}

impl ElementSpecBuilder {
    /// Set the documentation text
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Derive from another type
    pub fn base(mut self, base: &SpecRef) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Set the scalar kind
    pub fn scalar(mut self, kind: ScalarKind) -> Self {
        self.scalar = Some(kind);
        self
    }

    /// Set the allowed literal values
    pub fn enumerations<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enumerations = values.into_iter().map(Into::into).collect();
        self
    }

    /// Append a union member
    pub fn union_member(mut self, member: SpecLink) -> Self {
        self.union.push(member);
        self
    }

    /// Declare an attribute
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Declare a child slot
    pub fn child(mut self, tag: impl Into<String>, spec: SpecLink) -> Self {
        self.children.push(ChildSlot {
            tag: tag.into(),
            spec,
        });
        self
    }

    /// Finish the spec
    ///
    /// Tables left empty are inherited from the base type. A base slot that
    /// points at the base itself keeps pointing at the base.
    pub fn build(self) -> SpecRef {
        let mut spec = ElementSpec {
            name: self.name,
            tag: self.tag,
            doc: self.doc,
            base: self.base,
            scalar: self.scalar,
            enumerations: self.enumerations,
            union: self.union,
            attributes: self.attributes,
            children: self.children,
        };

        if let Some(base) = spec.base.clone() {
            if spec.scalar.is_none() {
                spec.scalar = base.scalar;
            }
            if spec.enumerations.is_empty() {
                spec.enumerations = base.enumerations.clone();
            }
            if spec.union.is_empty() {
                spec.union = base.union.iter().map(|m| inherited(m, &base)).collect();
            }
            if spec.attributes.is_empty() {
                spec.attributes = base.attributes.clone();
            }
            if spec.children.is_empty() {
                spec.children = base
                    .children
                    .iter()
                    .map(|slot| ChildSlot {
                        tag: slot.tag.clone(),
                        spec: inherited(&slot.spec, &base),
                    })
                    .collect();
            }
        }

        Arc::new(spec)
    }
}

fn inherited(link: &SpecLink, base: &SpecRef) -> SpecLink {
    match link {
        SpecLink::Itself => SpecLink::Shared(Arc::clone(base)),
        other => other.clone(),
    }
}
