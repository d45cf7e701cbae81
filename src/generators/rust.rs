//! Rust code generator
//!
//! Emits one source file: the header, then for each descriptor in
//! emission order a newtype over [`BsElement`](crate::runtime::BsElement)
//! with its lazily built spec, constructors and per-child accessors, and
//! finally modules that mirror nested short names.

use indexmap::{IndexMap, IndexSet};
use std::path::Path;

use crate::compiler::Compilation;
use crate::error::{Error, Result};
use crate::generators::{Generator, GeneratorConfig};
use crate::names::{prefixed_method, snake_ident, type_ident};
use crate::schema::{ChildRef, Descriptor, TypeRef};

/// Name the runtime is imported under in generated code
const RUNTIME_ALIAS: &str = "rt";

/// Names the generated file uses unqualified
const RESERVED_TYPES: &[&str] = &[RUNTIME_ALIAS, "fmt", "std", "Default", "From", "Into", "Ok"];

/// Methods every generated type already has
const RESERVED_METHODS: &[&str] = &[
    "new",
    "default",
    "spec",
    "wrap",
    "element",
    "element_mut",
    "into_element",
    "empty",
    "try_from_element",
    "push",
    "with_attribute",
    "set",
    "get",
    "to_xml",
    "to_xml_pretty",
    "fmt",
    "clone",
    "from",
    "into",
];

/// Output of the Rust generator
#[derive(Debug, Clone)]
pub struct RustOutput {
    /// Generated source text
    pub source: String,
    /// Emitted type identifiers in emission order
    pub type_names: Vec<String>,
}

impl RustOutput {
    /// Write the source to a file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.source)?;
        Ok(())
    }
}

/// Rust code generator
#[derive(Debug, Clone, Default)]
pub struct RustGenerator {
    config: GeneratorConfig,
}

impl Generator for RustGenerator {
    type Output = RustOutput;

    fn generate(&self, compilation: &Compilation) -> Result<Self::Output> {
        let idents = type_idents(compilation)?;

        let mut code = String::new();
        code.push_str(&self.config.header);
        if !code.ends_with('\n') {
            code.push('\n');
        }
        code.push('\n');
        code.push_str(&self.generate_imports());

        for descriptor in compilation.descriptors() {
            code.push('\n');
            code.push_str(&self.generate_type(descriptor, compilation, &idents)?);
            tracing::debug!(
                path = %descriptor.full_path,
                ident = %idents.get(&descriptor.full_path).map(String::as_str).unwrap_or_default(),
                "emitted type"
            );
        }

        if self.config.namespace_modules {
            let modules = generate_namespace_modules(compilation, &idents)?;
            if !modules.is_empty() {
                code.push('\n');
                code.push_str(&modules);
            }
        }

        tracing::info!(types = idents.len(), "generated Rust source");
        Ok(RustOutput {
            source: code,
            type_names: idents.into_values().collect(),
        })
    }
}

impl RustGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn generate_imports(&self) -> String {
        format!(
            "use std::fmt;\n\nuse {} as {};\n",
            self.config.runtime_path, RUNTIME_ALIAS
        )
    }

    /// Everything emitted for one descriptor
    fn generate_type(
        &self,
        descriptor: &Descriptor,
        compilation: &Compilation,
        idents: &IndexMap<String, String>,
    ) -> Result<String> {
        let ident = ident_of(idents, &descriptor.full_path)?;
        let mut code = String::new();

        code.push_str(&format!("// {}\n", descriptor.full_path));
        if self.config.generate_docs {
            match &descriptor.docstring {
                Some(doc) => code.push_str(&doc_comment(doc, "")),
                None => code.push_str(&format!("/// `{}` element\n", descriptor.display_name())),
            }
        }
        code.push_str("#[derive(Debug, Clone)]\n");
        code.push_str(&format!("pub struct {}(rt::BsElement);\n\n", ident));

        code.push_str(&self.generate_spec_impl(descriptor, ident, idents)?);
        code.push('\n');

        let value_shaped = is_value_shaped(descriptor, compilation)?;
        let children = effective_children(descriptor, compilation)?;
        code.push_str(&self.generate_methods(descriptor, ident, value_shaped, children, idents)?);
        code.push('\n');

        if !value_shaped {
            code.push_str(&format!(
                "impl Default for {} {{\n    fn default() -> Self {{\n        Self::new()\n    }}\n}}\n\n",
                ident
            ));
        }
        code.push_str(&format!(
            "impl From<{}> for rt::BsElement {{\n    fn from(value: {}) -> Self {{\n        value.0\n    }}\n}}\n\n",
            ident, ident
        ));
        code.push_str(&format!(
            "impl fmt::Display for {} {{\n    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{\n        fmt::Display::fmt(&self.0, f)\n    }}\n}}\n",
            ident
        ));

        Ok(code)
    }

    /// `impl BsType` with the class tables
    fn generate_spec_impl(
        &self,
        descriptor: &Descriptor,
        ident: &str,
        idents: &IndexMap<String, String>,
    ) -> Result<String> {
        let mut chain = String::new();
        let line = |chain: &mut String, call: String| {
            chain.push_str("                ");
            chain.push_str(&call);
            chain.push('\n');
        };

        if self.config.generate_docs {
            if let Some(doc) = &descriptor.docstring {
                line(&mut chain, format!(".doc({:?})", doc));
            }
        }
        match &descriptor.base {
            Some(TypeRef::Builtin(kind)) => line(&mut chain, format!(".scalar(rt::{})", kind.rust_path())),
            Some(TypeRef::Named(path)) => line(
                &mut chain,
                format!(".base(<{} as rt::BsType>::spec())", ident_of(idents, path)?),
            ),
            None => {}
        }
        if !descriptor.enumerations.is_empty() {
            let values: Vec<String> = descriptor
                .enumerations
                .iter()
                .map(|v| format!("{:?}", v))
                .collect();
            line(&mut chain, format!(".enumerations([{}])", values.join(", ")));
        }
        for member in &descriptor.union_members {
            line(
                &mut chain,
                format!(".union_member({})", static_link(ident_of(idents, member)?)),
            );
        }
        for attribute in &descriptor.attributes {
            line(&mut chain, format!(".attribute({:?})", attribute.name));
        }
        for child in &descriptor.children {
            let link = if child.target == descriptor.full_path {
                "rt::SpecLink::Itself".to_string()
            } else {
                static_link(ident_of(idents, &child.target)?)
            };
            line(&mut chain, format!(".child({:?}, {})", child.tag, link));
        }

        let mut code = String::new();
        code.push_str(&format!("impl rt::BsType for {} {{\n", ident));
        code.push_str("    fn spec() -> &'static rt::SpecRef {\n");
        code.push_str("        static SPEC: rt::Lazy<rt::SpecRef> = rt::Lazy::new(|| {\n");
        code.push_str(&format!(
            "            rt::ElementSpec::builder({:?}, {:?})\n",
            descriptor.display_name(),
            descriptor.name
        ));
        code.push_str(&chain);
        code.push_str("                .build()\n");
        code.push_str("        });\n");
        code.push_str("        &SPEC\n");
        code.push_str("    }\n\n");
        code.push_str("    fn wrap(element: rt::BsElement) -> Self {\n        Self(element)\n    }\n\n");
        code.push_str("    fn element(&self) -> &rt::BsElement {\n        &self.0\n    }\n\n");
        code.push_str("    fn element_mut(&mut self) -> &mut rt::BsElement {\n        &mut self.0\n    }\n\n");
        code.push_str("    fn into_element(self) -> rt::BsElement {\n        self.0\n    }\n");
        code.push_str("}\n");
        Ok(code)
    }

    /// Constructor and per-child accessors
    fn generate_methods(
        &self,
        descriptor: &Descriptor,
        ident: &str,
        value_shaped: bool,
        children: &[ChildRef],
        idents: &IndexMap<String, String>,
    ) -> Result<String> {
        let docs = self.config.generate_docs;
        let mut code = String::new();
        code.push_str(&format!("impl {} {{\n", ident));

        if value_shaped {
            if docs {
                code.push_str("    /// Create an instance holding `value`\n");
            }
            code.push_str("    pub fn new(value: impl Into<rt::Value>) -> rt::Result<Self> {\n");
            code.push_str("        rt::BsElement::with_value(<Self as rt::BsType>::spec(), value).map(Self)\n");
            code.push_str("    }\n");
        } else {
            if docs {
                code.push_str("    /// Create an empty instance\n");
            }
            code.push_str("    pub fn new() -> Self {\n");
            code.push_str("        <Self as rt::BsType>::empty()\n");
            code.push_str("    }\n");
        }

        let mut names = MethodNames::new(descriptor.display_name());
        let mut seen_tags: IndexSet<&str> = IndexSet::new();
        for child in children {
            if !seen_tags.insert(child.tag.as_str()) {
                continue;
            }
            let child_ident = ident_of(idents, &child.target)?;
            let add = names.claim(prefixed_method("add", &child.tag));
            let set = names.claim(prefixed_method("set", &child.tag));
            let get = names.claim(snake_ident(&child.tag));

            code.push('\n');
            if docs {
                code.push_str(&format!("    /// Append a `{}` child\n", child.tag));
            }
            code.push_str(&format!(
                "    pub fn {}(&mut self, child: {}) -> rt::Result<&mut Self> {{\n        self.0.add({:?}, child.0)?;\n        Ok(self)\n    }}\n\n",
                add, child_ident, child.tag
            ));
            if docs {
                code.push_str(&format!("    /// Set the single `{}` child\n", child.tag));
            }
            code.push_str(&format!(
                "    pub fn {}(&mut self, child: {}) -> rt::Result<&mut Self> {{\n        self.0.set_child({:?}, child.0)?;\n        Ok(self)\n    }}\n\n",
                set, child_ident, child.tag
            ));
            if docs {
                code.push_str(&format!("    /// Every `{}` child, in supply order\n", child.tag));
            }
            code.push_str(&format!(
                "    pub fn {}(&self) -> rt::Result<&[rt::BsElement]> {{\n        self.0.children({:?})\n    }}\n",
                get, child.tag
            ));
        }

        code.push_str("}\n");
        Ok(code)
    }
}

/// Type identifier for every descriptor, in emission order
fn type_idents(compilation: &Compilation) -> Result<IndexMap<String, String>> {
    let mut idents: IndexMap<String, String> = IndexMap::new();
    let mut owners: IndexMap<String, String> = RESERVED_TYPES
        .iter()
        .map(|name| (name.to_string(), "the generated file".to_string()))
        .collect();

    for descriptor in compilation.descriptors() {
        let ident = type_ident(descriptor.display_name());
        if let Some(owner) = owners.get(&ident) {
            return Err(Error::Name(format!(
                "{} and {} both map to type {}",
                owner, descriptor.full_path, ident
            )));
        }
        owners.insert(ident.clone(), descriptor.full_path.clone());
        idents.insert(descriptor.full_path.clone(), ident);
    }
    Ok(idents)
}

fn ident_of<'a>(idents: &'a IndexMap<String, String>, full_path: &str) -> Result<&'a str> {
    idents
        .get(full_path)
        .map(String::as_str)
        .ok_or_else(|| Error::UnresolvedType(full_path.to_string()))
}

fn static_link(ident: &str) -> String {
    format!("rt::SpecLink::Static(<{} as rt::BsType>::spec)", ident)
}

/// Children declared on the descriptor or inherited from its nearest base
fn effective_children<'a>(
    descriptor: &'a Descriptor,
    compilation: &'a Compilation,
) -> Result<&'a [ChildRef]> {
    let mut current = descriptor;
    let mut seen: IndexSet<&str> = IndexSet::new();
    loop {
        if !current.children.is_empty() {
            return Ok(&current.children);
        }
        match current.base_type() {
            Some(base) if seen.insert(base) => current = compilation.registry().resolve(base)?,
            _ => return Ok(&[]),
        }
    }
}

/// Whether the descriptor or any of its bases declares a value shape
fn is_value_shaped(descriptor: &Descriptor, compilation: &Compilation) -> Result<bool> {
    let mut current = descriptor;
    let mut seen: IndexSet<&str> = IndexSet::new();
    loop {
        if current.has_value_shape() {
            return Ok(true);
        }
        match current.base_type() {
            Some(base) if seen.insert(base) => current = compilation.registry().resolve(base)?,
            _ => return Ok(false),
        }
    }
}

fn doc_comment(text: &str, indent: &str) -> String {
    text.lines()
        .map(str::trim)
        .map(|line| {
            if line.is_empty() {
                format!("{}///\n", indent)
            } else {
                format!("{}/// {}\n", indent, line)
            }
        })
        .collect()
}

/// Method identifiers already taken on one type
struct MethodNames<'a> {
    owner: &'a str,
    used: IndexSet<String>,
}

impl<'a> MethodNames<'a> {
    fn new(owner: &'a str) -> Self {
        Self {
            owner,
            used: RESERVED_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Take `ident`, or the first free `ident_N`
    fn claim(&mut self, ident: String) -> String {
        if self.used.insert(ident.clone()) {
            return ident;
        }
        let stem = ident.trim_start_matches("r#");
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", stem, n);
            if self.used.insert(candidate.clone()) {
                tracing::warn!(owner = %self.owner, method = %ident, renamed = %candidate, "method name collision");
                return candidate;
            }
            n += 1;
        }
    }
}

/// Namespace modules built from nested short names
#[derive(Debug, Default)]
struct ModuleTree {
    aliases: IndexMap<String, String>,
    modules: IndexMap<String, ModuleTree>,
}

impl ModuleTree {
    fn render(&self, code: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        let supers = "super::".repeat(depth + 1);
        for (name, tree) in &self.modules {
            code.push_str(&format!("{}pub mod {} {{\n", indent, name));
            for (alias, target) in &tree.aliases {
                code.push_str(&format!("{}    pub use {}{} as {};\n", indent, supers, target, alias));
            }
            tree.render(code, depth + 1);
            code.push_str(&format!("{}}}\n", indent));
        }
    }
}

fn generate_namespace_modules(
    compilation: &Compilation,
    idents: &IndexMap<String, String>,
) -> Result<String> {
    let mut root = ModuleTree::default();

    for descriptor in compilation.descriptors() {
        for subclass in &descriptor.subclasses {
            let short_name = compilation.short_name_of(subclass)?;
            let target = ident_of(idents, subclass)?;
            let segments: Vec<&str> = short_name.split('.').collect();
            let Some((leaf, parents)) = segments.split_last() else {
                continue;
            };

            let mut node = &mut root;
            for parent in parents {
                node = node.modules.entry(snake_ident(parent)).or_default();
            }
            node.aliases
                .entry(type_ident(leaf))
                .or_insert_with(|| target.to_string());
        }
    }

    for module in root.modules.keys() {
        if RESERVED_TYPES.contains(&module.as_str()) {
            return Err(Error::Name(format!(
                "namespace module {} collides with a name the generated file uses",
                module
            )));
        }
        if idents.values().any(|ident| ident == module) {
            return Err(Error::Name(format!(
                "namespace module {} collides with a type of the same name",
                module
            )));
        }
    }

    let mut code = String::new();
    root.render(&mut code, 0);
    Ok(code)
}
