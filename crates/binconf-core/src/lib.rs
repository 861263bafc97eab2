//! # binconf-core
//!
//! Dynamic, schema-less configuration documents with a compact binary
//! encoding and dotted-path addressing.
//!
//! A [`Document`] is a tree of objects, arrays, and scalar values that
//! serializes to a tagged binary stream ([`encode`]/[`decode`]) and bridges
//! to JSON for human authoring. The [`Properties`] trait is the property
//! surface other components consume; [`Store`] adds file and buffer
//! load/save entry points on top of a document.
//!
//! ## Quick start
//!
//! ```rust
//! use binconf_core::{decode, encode, Document, Properties};
//!
//! let mut doc = Document::new();
//! doc.set("server.host", "127.0.0.1")?;
//! doc.set("server.port", 8080i32)?;
//!
//! let bytes = encode(&doc);
//! let back = decode(&bytes)?;
//! assert_eq!(back.get_str_or("server.host", ""), "127.0.0.1");
//! assert_eq!(back.get_i64_or("server.port", 0), 8080);
//! # Ok::<(), binconf_core::ConfError>(())
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` variant type with total convert-on-read accessors
//! - [`document`] — the `Document`/`Node` tree and its path operations
//! - [`path`] — dotted path expression parsing
//! - [`writer`] / [`reader`] — binary codec
//! - [`store`] — the `Properties` trait and the `Store` façade
//! - [`error`] — the error enum shared across the crate

pub mod document;
pub mod error;
pub mod path;
pub mod reader;
pub mod store;
pub mod value;
pub mod writer;

mod json;
mod wire;

pub use document::{Children, Document, Node, NodeKey};
pub use error::{ConfError, Result};
pub use reader::{decode, decode_with_options, ReaderOptions, DEFAULT_MAX_DEPTH};
pub use store::{Properties, Store};
pub use value::Value;
pub use writer::{encode, encode_to};
