//! Runtime element instances
//!
//! A [`BsElement`] is one node of a document under construction: its spec,
//! the coerced text value, XML attributes and the children supplied per
//! slot. Every mutation is checked against the spec and fails immediately.

use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use super::spec::SpecRef;
use super::value::{Arg, Value};
use crate::documents::{Document, Element};
use crate::error::{Error, Result};

/// An element instance
#[derive(Debug, Clone)]
pub struct BsElement {
    spec: SpecRef,
    text: Option<String>,
    attributes: IndexMap<String, String>,
    children: IndexMap<String, Vec<BsElement>>,
}

impl BsElement {
    /// Create an empty instance
    pub fn new(spec: &SpecRef) -> Self {
        Self {
            spec: Arc::clone(spec),
            text: None,
            attributes: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// Create a value-shaped instance from a single value
    pub fn with_value(spec: &SpecRef, value: impl Into<Value>) -> Result<Self> {
        Self::construct(spec, vec![Arg::Value(value.into())], Vec::<(String, String)>::new())
    }

    /// Create an instance from positional arguments and XML attributes
    ///
    /// Enumerations, unions and scalars take exactly one value. Any other
    /// type takes child elements, each placed in the slot its type selects.
    /// Attributes are stored as given.
    pub fn construct<I, K, V>(spec: &SpecRef, args: Vec<Arg>, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut element = Self::new(spec);

        if spec.is_value_shaped() {
            if args.len() > 1 {
                return Err(Error::TooManyArguments {
                    element: spec.name().to_string(),
                    count: args.len(),
                });
            }
            match args.into_iter().next() {
                Some(Arg::Value(value)) => element.text = Some(coerce(spec, &value)?),
                Some(Arg::Element(child)) => {
                    return Err(Error::Type(format!(
                        "{}: value expected, found element {}",
                        spec.name(),
                        child.name()
                    )))
                }
                None => {}
            }
        } else {
            for arg in args {
                match arg {
                    Arg::Element(child) => {
                        element.push(child)?;
                    }
                    Arg::Value(_) => return Err(element.unexpected_child()),
                }
            }
        }

        for (name, value) in attributes {
            element.attributes.insert(name.into(), value.into());
        }
        Ok(element)
    }

    /// Spec of this instance
    pub fn spec(&self) -> &SpecRef {
        &self.spec
    }

    /// Type name
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Coerced text value
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Append a child to the slot for `tag`
    pub fn add(&mut self, tag: &str, child: BsElement) -> Result<&mut Self> {
        self.check_slot(tag, &child)?;
        self.children.entry(tag.to_string()).or_default().push(child);
        Ok(self)
    }

    /// Set the single child for `tag`; fails if one was already supplied
    pub fn set_child(&mut self, tag: &str, child: BsElement) -> Result<&mut Self> {
        self.check_slot(tag, &child)?;
        if self.children.get(tag).is_some_and(|values| !values.is_empty()) {
            return Err(Error::ChildAlreadySet {
                element: self.name().to_string(),
                child: tag.to_string(),
            });
        }
        self.children.insert(tag.to_string(), vec![child]);
        Ok(self)
    }

    /// Append a child to the slot its type selects
    ///
    /// A slot of exactly the child's type wins over slots of a base type.
    /// More than one equally good slot is an error.
    pub fn push(&mut self, child: BsElement) -> Result<&mut Self> {
        let slots: Vec<(String, SpecRef)> = self
            .spec
            .children()
            .iter()
            .map(|slot| (slot.tag.clone(), slot.spec.resolve(&self.spec)))
            .collect();

        let exact: Vec<&str> = slots
            .iter()
            .filter(|(_, spec)| Arc::ptr_eq(spec, &child.spec))
            .map(|(tag, _)| tag.as_str())
            .collect();
        let candidates = if exact.is_empty() {
            slots
                .iter()
                .filter(|(_, spec)| child.spec.is_a(spec))
                .map(|(tag, _)| tag.as_str())
                .collect()
        } else {
            exact
        };

        let tag = match candidates.as_slice() {
            [] => return Err(self.unexpected_child()),
            [tag] => tag.to_string(),
            many => {
                return Err(Error::AmbiguousChild {
                    element: self.name().to_string(),
                    value: child.name().to_string(),
                    candidates: many.iter().map(|t| t.to_string()).collect(),
                })
            }
        };

        tracing::trace!(element = %self.name(), tag = %tag, "push");
        self.children.entry(tag).or_default().push(child);
        Ok(self)
    }

    /// Every child supplied for `tag`, in supply order
    pub fn children(&self, tag: &str) -> Result<&[BsElement]> {
        if self.spec.slot(tag).is_none() {
            return Err(Error::UnknownChild {
                element: self.name().to_string(),
                child: tag.to_string(),
            });
        }
        match self.children.get(tag) {
            Some(values) if !values.is_empty() => Ok(values),
            _ => Err(Error::ChildNotSet {
                element: self.name().to_string(),
                child: tag.to_string(),
            }),
        }
    }

    /// First child supplied for `tag`
    pub fn child(&self, tag: &str) -> Result<&BsElement> {
        let values = self.children(tag)?;
        Ok(&values[0])
    }

    /// Whether a child was supplied for `tag`
    pub fn has_child(&self, tag: &str) -> bool {
        self.children.get(tag).is_some_and(|values| !values.is_empty())
    }

    /// Set an XML attribute
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set an XML attribute, builder style
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Read an XML attribute
    pub fn get(&self, name: &str) -> Result<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownAttribute {
                element: self.name().to_string(),
                attribute: name.to_string(),
            })
    }

    /// XML attributes in the order they were set
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Tree form, tagged with the spec's tag
    pub fn to_element(&self) -> Element {
        self.to_element_named(self.spec.tag())
    }

    /// Tree form under an explicit tag
    ///
    /// Children are written slot by slot in declaration order, and in
    /// supply order within a slot.
    pub fn to_element_named(&self, tag: &str) -> Element {
        let mut element = Element::local(tag);
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            element.set_text(text.to_string());
        }
        for (name, value) in &self.attributes {
            element.set_attribute(name.as_str(), value.as_str());
        }

        let mut written: Vec<&str> = Vec::new();
        for slot in self.spec.children() {
            if written.contains(&slot.tag.as_str()) {
                continue;
            }
            written.push(&slot.tag);
            for child in self.children.get(&slot.tag).into_iter().flatten() {
                element.add_child(child.to_element_named(&slot.tag));
            }
        }
        element
    }

    /// Document with this element as root
    pub fn to_document(&self) -> Document {
        Document::with_root(self.to_element())
    }

    /// Compact XML text
    pub fn to_xml(&self) -> Result<String> {
        self.to_element().to_xml_string()
    }

    /// Indented XML text
    pub fn to_xml_pretty(&self) -> Result<String> {
        self.to_element().to_xml_pretty()
    }

    fn check_slot(&self, tag: &str, child: &BsElement) -> Result<()> {
        let slot = self.spec.slot(tag).ok_or_else(|| Error::UnknownChild {
            element: self.name().to_string(),
            child: tag.to_string(),
        })?;
        let expected = slot.spec.resolve(&self.spec);
        if !child.spec.is_a(&expected) {
            return Err(Error::Type(format!(
                "{:?} invalid type, expecting {}, found {}",
                tag,
                expected.name(),
                child.name()
            )));
        }
        Ok(())
    }

    fn unexpected_child(&self) -> Error {
        Error::UnexpectedChild {
            element: self.name().to_string(),
            expected: self
                .spec
                .children()
                .iter()
                .map(|slot| slot.spec.resolve(&self.spec).name().to_string())
                .collect(),
        }
    }
}

/// Check a value against a value-shaped spec and render its text
///
/// Union members are tried in order and the first to accept wins.
pub fn coerce(spec: &SpecRef, value: &Value) -> Result<String> {
    if !spec.enumerations().is_empty() {
        return match value {
            Value::Str(s) if spec.enumerations().contains(s) => Ok(s.clone()),
            other => Err(Error::InvalidEnumeration {
                element: spec.name().to_string(),
                value: other.to_string(),
            }),
        };
    }

    if !spec.union_members().is_empty() {
        for member in spec.union_members() {
            let member = member.resolve(spec);
            if Arc::ptr_eq(&member, spec) {
                continue;
            }
            match coerce(&member, value) {
                Ok(text) => {
                    tracing::trace!(union = %spec.name(), member = %member.name(), "union member accepted");
                    return Ok(text);
                }
                Err(e) => tracing::trace!(member = %member.name(), error = %e, "union member rejected"),
            }
        }
        return Err(Error::InvalidArgument {
            element: spec.name().to_string(),
        });
    }

    match spec.scalar() {
        Some(kind) => kind.coerce(value).map_err(|e| match e {
            Error::Type(message) => Error::Type(format!("{}: {}", spec.name(), message)),
            Error::Value(message) => Error::Value(format!("{}: {}", spec.name(), message)),
            other => other,
        }),
        None => Err(Error::Type(format!("{} does not take a value", spec.name()))),
    }
}

impl Index<&str> for BsElement {
    type Output = str;

    /// Attribute value; panics when the attribute was never set
    fn index(&self, name: &str) -> &Self::Output {
        match self.attributes.get(name) {
            Some(value) => value,
            None => panic!("{}: no attribute {:?}", self.name(), name),
        }
    }
}

impl fmt::Display for BsElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml_pretty().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

/// Implemented by every generated type
pub trait BsType: Sized {
    /// Class tables of the type
    fn spec() -> &'static SpecRef;

    /// Wrap an instance without checking its spec
    fn wrap(element: BsElement) -> Self;

    /// The underlying instance
    fn element(&self) -> &BsElement;

    /// The underlying instance, mutably
    fn element_mut(&mut self) -> &mut BsElement;

    /// Unwrap into the underlying instance
    fn into_element(self) -> BsElement;

    /// Empty instance
    fn empty() -> Self {
        Self::wrap(BsElement::new(Self::spec()))
    }

    /// Wrap an instance whose spec is this type or derives from it
    fn try_from_element(element: BsElement) -> Result<Self> {
        if element.spec().is_a(Self::spec()) {
            Ok(Self::wrap(element))
        } else {
            Err(Error::Type(format!(
                "{} expected, found {}",
                Self::spec().name(),
                element.name()
            )))
        }
    }

    /// Append a child to the slot its type selects
    fn push<C: BsType>(&mut self, child: C) -> Result<&mut Self> {
        self.element_mut().push(child.into_element())?;
        Ok(self)
    }

    /// Set an XML attribute, builder style
    fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.element_mut().set(name, value);
        self
    }

    /// Set an XML attribute
    fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.element_mut().set(name, value);
        self
    }

    /// Read an XML attribute
    fn get(&self, name: &str) -> Result<&str> {
        self.element().get(name)
    }

    /// Compact XML text
    fn to_xml(&self) -> Result<String> {
        self.element().to_xml()
    }

    /// Indented XML text
    fn to_xml_pretty(&self) -> Result<String> {
        self.element().to_xml_pretty()
    }
}
