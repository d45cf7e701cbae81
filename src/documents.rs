//! XML document trees
//!
//! Runtime elements serialize into this tree first and the tree is written
//! out as text on demand. The reader half turns text back into a tree, which
//! the tests use to inspect generated documents.

use crate::error::{Error, Result};
use crate::namespaces::{NamespaceContext, QName};
use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// XML Element in the document tree
#[derive(Debug, Clone)]
pub struct Element {
    /// Element qualified name
    pub qname: QName,
    /// Element attributes, in the order they were set
    pub attributes: IndexMap<QName, String>,
    /// Text content (if any)
    pub text: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
    /// Namespace context for this element
    pub namespaces: NamespaceContext,
}

impl Element {
    /// Create a new element
    pub fn new(qname: QName) -> Self {
        Self {
            qname,
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
            namespaces: NamespaceContext::new(),
        }
    }

    /// Create a new element without a namespace
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(QName::local(name))
    }

    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.qname.local_name
    }

    /// Get an attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(qname, _)| qname.local_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(QName::local(name), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Set text content
    pub fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    /// Find child elements by local name
    pub fn find_children(&self, local_name: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|e| e.local_name() == local_name)
            .collect()
    }

    /// Write this element (and its subtree) as compact XML text
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Write this element as indented XML text
    pub fn to_xml_pretty(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        into_string(writer)
    }

    /// Write this element to a quick-xml writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let name = self.local_name();
        let mut start = BytesStart::new(name);
        for (qname, value) in &self.attributes {
            start.push_attribute((qname.local_name.as_str(), value.as_str()));
        }

        let text = self.text.as_deref().filter(|t| !t.is_empty());
        if text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Xml(format!("Generated XML is not UTF-8: {}", e)))
}

/// XML Document representation
#[derive(Debug, Default)]
pub struct Document {
    /// Root element of the document
    pub root: Option<Element>,
    /// Document namespace context
    pub namespaces: NamespaceContext,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document around a root element
    pub fn with_root(root: Element) -> Self {
        Self {
            root: Some(root),
            namespaces: NamespaceContext::new(),
        }
    }

    /// Serialize with an `<?xml version="1.0" encoding="UTF-8"?>` declaration
    pub fn to_xml_string(&self, pretty: bool) -> Result<String> {
        let mut writer = if pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        if let Some(root) = &self.root {
            root.write_to(&mut writer)?;
        }
        into_string(writer)
    }

    /// Parse an XML document from a string
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::parse(xml.as_bytes())
    }

    /// Parse an XML document from bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.trim_text(true);

        let mut doc = Document::new();
        let mut element_stack: Vec<Element> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let element = Self::parse_element(&e)?;
                    element_stack.push(element);
                }
                Ok(Event::End(_)) => {
                    if let Some(current) = element_stack.pop() {
                        if let Some(parent) = element_stack.last_mut() {
                            parent.add_child(current);
                        } else {
                            doc.root = Some(current);
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    let element = Self::parse_element(&e)?;
                    if let Some(parent) = element_stack.last_mut() {
                        parent.add_child(element);
                    } else {
                        doc.root = Some(element);
                    }
                }
                Ok(Event::Text(e)) => {
                    if let Some(current) = element_stack.last_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::Xml(format!("Failed to unescape text: {}", e)))?
                            .to_string();
                        if !text.trim().is_empty() {
                            current.set_text(text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!(
                        "Error parsing XML at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {} // Ignore other events (comments, processing instructions, etc.)
            }
            buf.clear();
        }

        Ok(doc)
    }

    /// Parse element from BytesStart event
    fn parse_element(start: &BytesStart) -> Result<Element> {
        let name_bytes = start.name();
        let name = std::str::from_utf8(name_bytes.as_ref())
            .map_err(|e| Error::Xml(format!("Invalid element name: {}", e)))?;
        let local = name.split_once(':').map_or(name, |(_, local)| local);

        let mut element = Element::local(local);

        for attr_result in start.attributes() {
            let attr = attr_result
                .map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;

            let attr_name = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Xml(format!("Invalid attribute name: {}", e)))?;

            let attr_value = attr
                .unescape_value()
                .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?
                .to_string();

            if attr_name == "xmlns" {
                element.namespaces.set_default_namespace(&attr_value);
            } else if let Some(prefix) = attr_name.strip_prefix("xmlns:") {
                element.namespaces.add_prefix(prefix, &attr_value);
            } else {
                let local = attr_name.split_once(':').map_or(attr_name, |(_, l)| l);
                element.attributes.insert(QName::local(local), attr_value);
            }
        }

        Ok(element)
    }

    /// Get the root element
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }
}
