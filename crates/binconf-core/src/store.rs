//! Store façade — the property surface other components consume.
//!
//! [`Properties`] is the capability trait: dotted-path get/set/remove plus
//! typed getters that take an explicit default. Reads are total; Not-Found
//! and wrong-type both fall back to the caller's default, so configuration
//! lookups never branch on errors.
//!
//! [`Store`] owns a [`Document`] and adds load/save entry points over byte
//! buffers and files. `Document` itself also implements `Properties`, so
//! code that only reads and writes properties need not care which one it
//! holds.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::document::Document;
use crate::error::Result;
use crate::value::Value;
use crate::{reader, writer};

/// Dotted-path property access over a configuration tree.
///
/// The typed getters never fail: an absent path or a value that cannot
/// coerce to the requested type yields the supplied default.
pub trait Properties {
    /// Read the value at `path`. Containers and absent paths yield `None`.
    fn get_property(&self, path: &str) -> Option<Value>;

    /// Write `value` at `path`, creating missing intermediate containers.
    fn set_property(&mut self, path: &str, value: Value) -> Result<()>;

    /// Remove the subtree at `path`. Absent paths are a no-op.
    fn remove_property(&mut self, path: &str) -> Result<()>;

    /// Read a boolean, falling back to `default`.
    fn get_bool_or(&self, path: &str, default: bool) -> bool {
        self.get_property(path)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// Read a signed integer, falling back to `default`.
    fn get_i64_or(&self, path: &str, default: i64) -> i64 {
        self.get_property(path)
            .and_then(|v| v.as_i64())
            .unwrap_or(default)
    }

    /// Read a float, falling back to `default`.
    fn get_f64_or(&self, path: &str, default: f64) -> f64 {
        self.get_property(path)
            .and_then(|v| v.as_f64())
            .unwrap_or(default)
    }

    /// Read a string rendering of the value, falling back to `default`.
    fn get_str_or(&self, path: &str, default: &str) -> String {
        self.get_property(path)
            .and_then(|v| v.to_display_string())
            .unwrap_or_else(|| default.to_string())
    }
}

impl Properties for Document {
    fn get_property(&self, path: &str) -> Option<Value> {
        self.get(path).cloned()
    }

    fn set_property(&mut self, path: &str, value: Value) -> Result<()> {
        self.set(path, value)
    }

    fn remove_property(&mut self, path: &str) -> Result<()> {
        self.remove(path);
        Ok(())
    }
}

/// A configuration store backed by the binary document format.
#[derive(Debug, Clone, Default)]
pub struct Store {
    doc: Document,
}

impl Store {
    /// Create a store holding an empty document.
    pub fn new() -> Store {
        Store {
            doc: Document::new(),
        }
    }

    /// Borrow the underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Mutably borrow the underlying document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Decode a store from an in-memory binary buffer.
    pub fn load_from_buff(buf: &[u8]) -> Result<Store> {
        Ok(Store {
            doc: reader::decode(buf)?,
        })
    }

    /// Load a store from a file.
    ///
    /// With `create_if_missing`, a file that does not exist yields an empty
    /// store, so first-run and existing-config code paths are identical for
    /// the caller. Without it, a missing file is an I/O error.
    pub fn load(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Store> {
        match fs::read(path) {
            Ok(bytes) => Store::load_from_buff(&bytes),
            Err(err) if create_if_missing && err.kind() == ErrorKind::NotFound => Ok(Store::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Encode the document into a fresh binary buffer.
    pub fn save_to_buff(&self) -> Vec<u8> {
        writer::encode(&self.doc)
    }

    /// Encode the document and write it to a file.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.save_to_buff())?;
        Ok(())
    }
}

impl Properties for Store {
    fn get_property(&self, path: &str) -> Option<Value> {
        self.doc.get_property(path)
    }

    fn set_property(&mut self, path: &str, value: Value) -> Result<()> {
        self.doc.set_property(path, value)
    }

    fn remove_property(&mut self, path: &str) -> Result<()> {
        self.doc.remove_property(path)
    }
}
