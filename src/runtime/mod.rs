//! Document-building runtime
//!
//! Generated types are thin wrappers around [`BsElement`]; each carries a
//! lazily built [`ElementSpec`] with its class tables. Everything the
//! generated file refers to is re-exported here.

pub mod catalog;
pub mod element;
pub mod spec;
pub mod value;

pub use catalog::Catalog;
pub use element::{coerce, BsElement, BsType};
pub use spec::{ChildSlot, ElementSpec, ElementSpecBuilder, SpecLink, SpecRef};
pub use value::{Arg, Value};

pub use crate::error::{Error, Result};
pub use crate::schema::ScalarKind;
pub use once_cell::sync::Lazy;
