//! XML name validation and Rust identifier derivation
//!
//! Schema names are NCNames; the emitted code needs Rust identifiers. Type
//! names keep the schema's casing (dotted short names are flattened with
//! `_`), method and module names are snake_case.

use crate::error::{Error, Result};
use heck::ToSnakeCase;
use once_cell::sync::Lazy;
use regex::Regex;

static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}][A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\-\.0-9]*$")
        .expect("NCName pattern is valid")
});

static NON_IDENT_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("identifier pattern is valid"));

/// Check if a string is a valid NCName (non-colonized name)
pub fn is_valid_ncname(name: &str) -> bool {
    NCNAME.is_match(name)
}

/// Validate an NCName and return an error if invalid
pub fn validate_ncname(name: &str) -> Result<()> {
    if is_valid_ncname(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("Invalid NCName: '{}'", name)))
    }
}

/// Split a QName into prefix and local name
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = qname.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, qname)
    }
}

/// Rust type identifier for a (possibly dotted) short name
///
/// `Facilities.Facility` becomes `Facilities_Facility`.
pub fn type_ident(short_name: &str) -> String {
    let flat = NON_IDENT_CHAR.replace_all(short_name, "_").into_owned();
    let flat = if flat.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", flat)
    } else {
        flat
    };
    if is_rust_keyword(&flat) {
        format!("{}_", flat)
    } else {
        flat
    }
}

/// snake_case identifier for a child accessor or module
pub fn snake_ident(name: &str) -> String {
    let snake = NON_IDENT_CHAR
        .replace_all(&name.to_snake_case(), "_")
        .into_owned();
    let snake = if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", snake)
    } else {
        snake
    };
    escape_keyword(snake)
}

/// Method identifier with a prefix, e.g. `add_` + `ProgramDate` -> `add_program_date`
pub fn prefixed_method(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, name.to_snake_case())
}

fn escape_keyword(ident: String) -> String {
    if !is_rust_keyword(&ident) {
        return ident;
    }
    // These cannot be raw identifiers
    if matches!(ident.as_str(), "self" | "Self" | "super" | "crate") {
        format!("{}_", ident)
    } else {
        format!("r#{}", ident)
    }
}

/// Check if a string is a Rust keyword
pub fn is_rust_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "break"
            | "const"
            | "continue"
            | "crate"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "async"
            | "await"
            | "dyn"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
            | "try"
    )
}
