//! XSD schema walking
//!
//! Turns one XSD document into [`Descriptor`]s. Only the constructs the
//! BuildingSync schema uses are understood; anything else is a fatal
//! [`ParseError`] naming the construct and its position.

use roxmltree::{Document, Node};

use super::builtins::ScalarKind;
use super::descriptor::{AttributeDecl, ChildRef, Descriptor, DescriptorKind, TypeRef};
use super::registry::Registry;
use crate::error::{Error, ParseError, Result};
use crate::limits::Limits;
use crate::names::{split_qname, validate_ncname};
use crate::namespaces::NamespaceContext;
use crate::XSD_NAMESPACE;

/// XSD element local names
mod xsd_elements {
    pub const SCHEMA: &str = "schema";
    pub const ELEMENT: &str = "element";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const SIMPLE_TYPE: &str = "simpleType";
    pub const ATTRIBUTE: &str = "attribute";
    pub const SEQUENCE: &str = "sequence";
    pub const CHOICE: &str = "choice";
    pub const ANNOTATION: &str = "annotation";
    pub const DOCUMENTATION: &str = "documentation";
    pub const IMPORT: &str = "import";
    pub const RESTRICTION: &str = "restriction";
    pub const EXTENSION: &str = "extension";
    pub const UNION: &str = "union";
    pub const SIMPLE_CONTENT: &str = "simpleContent";
    pub const ENUMERATION: &str = "enumeration";
}

/// XSD attribute names
mod xsd_attrs {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const REF: &str = "ref";
    pub const BASE: &str = "base";
    pub const VALUE: &str = "value";
    pub const MEMBER_TYPES: &str = "memberTypes";
    pub const TARGET_NAMESPACE: &str = "targetNamespace";
}

use xsd_elements as el;

/// Walks a schema document and registers a descriptor per named construct
#[derive(Debug, Default)]
pub struct SchemaWalker {
    limits: Limits,
    namespaces: NamespaceContext,
    registry: Registry,
}

impl SchemaWalker {
    /// Create a walker with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Walk schema text and return the populated registry
    pub fn walk(mut self, text: &str) -> Result<Registry> {
        self.limits.check_schema_size(text.len())?;
        let doc = Document::parse(text)?;
        let root = doc.root_element();
        if !is_xsd(&root, el::SCHEMA) {
            return Err(shape_error(&root, "document root is not xs:schema"));
        }

        self.namespaces = NamespaceContext::from_node(&root);
        self.registry = Registry::new().with_limits(self.limits.clone());
        self.registry.set_target_namespace(
            root.attribute(xsd_attrs::TARGET_NAMESPACE)
                .map(str::to_string),
        );

        // Attribute references may precede the global declaration
        for child in xsd_children(&root) {
            if child.tag_name().name() == el::ATTRIBUTE {
                self.global_attribute(&child)?;
            }
        }

        for child in xsd_children(&root) {
            match child.tag_name().name() {
                el::IMPORT | el::ANNOTATION | el::ATTRIBUTE => {}
                el::ELEMENT => {
                    self.element(&child, &[], 1)?;
                }
                el::SIMPLE_TYPE => {
                    let name = required_name(&child)?;
                    let mut desc = Descriptor::new(DescriptorKind::SimpleType, name, &[]);
                    desc.location = Some(location(&child));
                    self.simple_type(&mut desc, &child, 1)?;
                    self.registry.insert(desc)?;
                }
                el::COMPLEX_TYPE => {
                    let name = required_name(&child)?;
                    let mut desc = Descriptor::new(DescriptorKind::ComplexType, name, &[]);
                    desc.location = Some(location(&child));
                    self.complex_type(&mut desc, &child, &[name.to_string()], 1)?;
                    self.registry.insert(desc)?;
                }
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized top-level construct: {}", other),
                    ))
                }
            }
        }

        tracing::debug!(descriptors = self.registry.len(), "schema walked");
        Ok(self.registry)
    }

    fn global_attribute(&mut self, node: &Node) -> Result<()> {
        let name = required_name(node)?;
        let type_name = match node.attribute(xsd_attrs::TYPE) {
            Some(t) => local_part(t).to_string(),
            None => "anySimpleType".to_string(),
        };
        tracing::debug!(name, type_name = %type_name, "global attribute");
        self.registry.record_attribute(name, type_name);
        Ok(())
    }

    /// Register an element with a name; returns its full path
    fn element(&mut self, node: &Node, ancestors: &[String], depth: usize) -> Result<String> {
        self.limits.check_schema_depth(depth)?;

        if node.attribute(xsd_attrs::REF).is_some() {
            return Err(shape_error(node, "element reference outside a content model"));
        }
        if node.attribute(xsd_attrs::NAME).is_none() {
            return Err(shape_error(node, "element with no name or reference"));
        }
        let name = required_name(node)?;
        tracing::debug!(name, depth, "element");

        let mut desc = Descriptor::new(DescriptorKind::Element, name, ancestors);
        desc.location = Some(location(node));
        if let Some(type_name) = node.attribute(xsd_attrs::TYPE) {
            desc.base = Some(self.resolve_type(node, type_name)?);
        }

        let mut docstring = None;
        let mut inline = None;
        for child in xsd_children(node) {
            match child.tag_name().name() {
                el::ANNOTATION => docstring = documentation(&child),
                el::SIMPLE_TYPE | el::COMPLEX_TYPE if inline.is_none() => inline = Some(child),
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized child of an element: {}", other),
                    ))
                }
            }
        }

        if let Some(body) = inline {
            if desc.base.is_some() {
                return Err(shape_error(node, "element has both a type and an inline type"));
            }
            if body.tag_name().name() == el::SIMPLE_TYPE {
                self.simple_type(&mut desc, &body, depth + 1)?;
            } else {
                let mut scope = ancestors.to_vec();
                scope.push(name.to_string());
                self.complex_type(&mut desc, &body, &scope, depth + 1)?;
            }
        }

        // An element's own annotation wins over its inline type's
        if docstring.is_some() {
            desc.docstring = docstring;
        }

        let full_path = desc.full_path.clone();
        self.registry.insert(desc)?;
        Ok(full_path)
    }

    fn simple_type(&mut self, desc: &mut Descriptor, node: &Node, depth: usize) -> Result<()> {
        self.limits.check_schema_depth(depth)?;
        tracing::debug!(name = %desc.name, "simpleType");

        for child in xsd_children(node) {
            match child.tag_name().name() {
                el::ANNOTATION => desc.docstring = documentation(&child),
                el::RESTRICTION => self.restriction(desc, &child)?,
                el::UNION => {
                    let members = child.attribute(xsd_attrs::MEMBER_TYPES).ok_or_else(|| {
                        shape_error(&child, "union without memberTypes")
                    })?;
                    for member in members.split_whitespace() {
                        match self.resolve_type(&child, member)? {
                            TypeRef::Named(path) => desc.union_members.push(path),
                            TypeRef::Builtin(_) => {
                                return Err(shape_error(
                                    &child,
                                    format!("union out of scope: {}", member),
                                ))
                            }
                        }
                    }
                    tracing::debug!(members = ?desc.union_members, "union");
                }
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized child of a simple type: {}", other),
                    ))
                }
            }
        }
        Ok(())
    }

    fn restriction(&mut self, desc: &mut Descriptor, node: &Node) -> Result<()> {
        let base = node
            .attribute(xsd_attrs::BASE)
            .ok_or_else(|| shape_error(node, "restriction without a base"))?;
        let kind = match self.resolve_type(node, base)? {
            TypeRef::Builtin(kind) => kind,
            TypeRef::Named(_) => {
                return Err(shape_error(
                    node,
                    format!("unknown restriction base: {}", base),
                ))
            }
        };
        desc.base = Some(TypeRef::Builtin(kind));

        if kind != ScalarKind::String {
            return Ok(());
        }

        let mut enumerations = Vec::new();
        let mut other_facets = Vec::new();
        for facet in xsd_children(node) {
            match facet.tag_name().name() {
                el::ANNOTATION => {}
                el::ENUMERATION => {
                    let value = facet
                        .attribute(xsd_attrs::VALUE)
                        .ok_or_else(|| shape_error(&facet, "enumeration without a value"))?;
                    enumerations.push(value.to_string());
                }
                other => other_facets.push(other),
            }
        }

        if !enumerations.is_empty() {
            if let Some(other) = other_facets.first() {
                return Err(shape_error(
                    node,
                    format!("enumeration expected, found {}", other),
                ));
            }
            tracing::debug!(count = enumerations.len(), "enumerations");
            desc.enumerations = enumerations;
        }
        Ok(())
    }

    fn complex_type(
        &mut self,
        desc: &mut Descriptor,
        node: &Node,
        scope: &[String],
        depth: usize,
    ) -> Result<()> {
        self.limits.check_schema_depth(depth)?;
        tracing::debug!(name = %desc.name, "complexType");

        let mut content: Option<Node> = None;
        for child in xsd_children(node) {
            match child.tag_name().name() {
                el::ANNOTATION => desc.docstring = documentation(&child),
                el::ATTRIBUTE => {
                    if let Some(attribute) = self.attribute(&child)? {
                        desc.attributes.push(attribute);
                    }
                }
                el::SIMPLE_CONTENT | el::CHOICE | el::SEQUENCE => {
                    if content.is_some() {
                        return Err(shape_error(&child, "unexpected simpleContent/choice/sequence"));
                    }
                    content = Some(child);
                }
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized child of a complex type: {}", other),
                    ))
                }
            }
        }

        match content {
            Some(body) if body.tag_name().name() == el::SIMPLE_CONTENT => {
                self.simple_content(desc, &body)
            }
            Some(body) => self.particles(desc, &body, scope, depth + 1),
            None => {
                tracing::debug!(name = %desc.name, "empty content");
                Ok(())
            }
        }
    }

    fn simple_content(&mut self, desc: &mut Descriptor, node: &Node) -> Result<()> {
        for child in xsd_children(node) {
            match child.tag_name().name() {
                el::ANNOTATION => {}
                el::EXTENSION => {
                    let base = child
                        .attribute(xsd_attrs::BASE)
                        .ok_or_else(|| shape_error(&child, "extension without a base"))?;
                    desc.base = Some(self.resolve_type(&child, base)?);

                    for item in xsd_children(&child) {
                        match item.tag_name().name() {
                            el::ANNOTATION => {}
                            el::ATTRIBUTE => {
                                if let Some(attribute) = self.attribute(&item)? {
                                    desc.attributes.push(attribute);
                                }
                            }
                            other => {
                                return Err(shape_error(
                                    &item,
                                    format!("unrecognized child of an extension: {}", other),
                                ))
                            }
                        }
                    }
                }
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized child of simple content: {}", other),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Flatten a sequence or choice into child slots
    fn particles(
        &mut self,
        desc: &mut Descriptor,
        node: &Node,
        scope: &[String],
        depth: usize,
    ) -> Result<()> {
        self.limits.check_schema_depth(depth)?;

        for child in xsd_children(node) {
            match child.tag_name().name() {
                el::ANNOTATION => {}
                el::ELEMENT => {
                    let slot = self.particle_element(&child, scope, depth + 1)?;
                    tracing::debug!(parent = %desc.name, tag = %slot.tag, target = %slot.target, "child");
                    desc.children.push(slot);
                }
                el::SEQUENCE | el::CHOICE => self.particles(desc, &child, scope, depth + 1)?,
                other => {
                    return Err(shape_error(
                        &child,
                        format!("unrecognized child of a {}: {}", node.tag_name().name(), other),
                    ))
                }
            }
        }
        Ok(())
    }

    fn particle_element(&mut self, node: &Node, scope: &[String], depth: usize) -> Result<ChildRef> {
        let name = node.attribute(xsd_attrs::NAME);
        match (name, node.attribute(xsd_attrs::REF)) {
            (name, Some(reference)) => {
                let target = match self.resolve_type(node, reference)? {
                    TypeRef::Named(path) => path,
                    TypeRef::Builtin(_) => {
                        return Err(shape_error(
                            node,
                            format!("reference out of scope: {}", reference),
                        ))
                    }
                };
                let tag = name.unwrap_or_else(|| local_part(reference));
                tracing::debug!(tag, target = %target, "element reference");
                Ok(ChildRef::new(tag, target))
            }
            (Some(name), None) => {
                let target = self.element(node, scope, depth)?;
                Ok(ChildRef::new(name, target))
            }
            (None, None) => Err(shape_error(node, "element with no name or reference")),
        }
    }

    fn attribute(&self, node: &Node) -> Result<Option<AttributeDecl>> {
        let name = node.attribute(xsd_attrs::NAME);
        let type_name = node.attribute(xsd_attrs::TYPE);
        let reference = node.attribute(xsd_attrs::REF);

        let decl = match (name, type_name, reference) {
            (Some(name), Some(type_name), _) => AttributeDecl::new(name, local_part(type_name)),
            (_, _, Some(reference)) => {
                let name = local_part(reference);
                let type_name = self.registry.attribute_type(name).unwrap_or(name);
                AttributeDecl::new(name, type_name)
            }
            (Some(name), None, None) => AttributeDecl::new(name, "anySimpleType"),
            (None, _, None) => {
                tracing::debug!(position = %location(node), "attribute without a name, skipped");
                return Ok(None);
            }
        };
        tracing::debug!(name = %decl.name, type_name = %decl.type_name, "attribute");
        Ok(Some(decl))
    }

    /// Resolve a `prefix:name` type reference against the schema namespaces
    fn resolve_type(&self, node: &Node, prefixed: &str) -> Result<TypeRef> {
        let qname = self
            .namespaces
            .resolve(prefixed)
            .map_err(|e| shape_error(node, e.to_string()))?;

        if qname.is_in(Some(XSD_NAMESPACE)) {
            return ScalarKind::from_xsd_name(&qname.local_name)
                .map(TypeRef::Builtin)
                .ok_or_else(|| {
                    shape_error(node, format!("unsupported built-in type: {}", prefixed))
                });
        }
        if qname.is_in(self.registry.target_namespace()) {
            return Ok(TypeRef::Named(qname.local_name));
        }
        Err(shape_error(node, format!("out of scope: {}", prefixed)))
    }
}

/// Walk schema text with default limits
pub fn parse_schema(text: &str) -> Result<Registry> {
    SchemaWalker::new().walk(text)
}

fn is_xsd(node: &Node, local_name: &str) -> bool {
    node.tag_name().namespace() == Some(XSD_NAMESPACE) && node.tag_name().name() == local_name
}

fn xsd_children<'a, 'input>(node: &Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(XSD_NAMESPACE))
}

fn required_name<'a>(node: &Node<'a, '_>) -> Result<&'a str> {
    let name = node.attribute(xsd_attrs::NAME).ok_or_else(|| {
        shape_error(
            node,
            format!("{} without a name", node.tag_name().name()),
        )
    })?;
    validate_ncname(name).map_err(|e| shape_error(node, e.to_string()))?;
    Ok(name)
}

fn documentation(annotation: &Node) -> Option<String> {
    xsd_children(annotation)
        .find(|n| n.tag_name().name() == el::DOCUMENTATION)
        .and_then(|n| n.text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn local_part(prefixed: &str) -> &str {
    split_qname(prefixed).1
}

fn location(node: &Node) -> String {
    let pos = node.document().text_pos_at(node.range().start);
    format!("{}:{}", pos.row, pos.col)
}

fn shape_error(node: &Node, message: impl Into<String>) -> Error {
    ParseError::new(message)
        .with_location(location(node))
        .with_source(format!("<xs:{}>", node.tag_name().name()))
        .into()
}
