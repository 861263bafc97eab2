//! JSON interop — bridge between documents and `serde_json::Value`.
//!
//! The typical workflow loads human-authored JSON and saves it in the
//! binary format (and back, for inspection). `serde_json` is built with
//! `preserve_order`, so member order survives both directions, matching
//! the document tree's insertion-order invariant.
//!
//! The mapping is lossy only where JSON itself is the limit: blobs export
//! as arrays of byte values, and importing JSON never produces blobs.
//! JSON numbers import at 64-bit width (`Int64`/`UInt64`/`Float64`).

use crate::document::{Document, Node};
use crate::error::{ConfError, Result};
use crate::value::Value;

impl Document {
    /// Build a document from a JSON string. The root JSON value must be an
    /// object, mirroring the document root invariant.
    pub fn from_json_str(json: &str) -> Result<Document> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        match value {
            serde_json::Value::Object(_) => Ok(Document::from_root(json_to_node(value))),
            _ => Err(ConfError::malformed(0, "root JSON value must be an object")),
        }
    }

    /// Render the document as a `serde_json::Value` tree.
    pub fn to_json_value(&self) -> serde_json::Value {
        node_to_json(self.root())
    }

    /// Render the document as minified JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json_value())?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value())?)
    }
}

fn json_to_node(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Value(Value::Null),
        serde_json::Value::Bool(b) => Node::Value(Value::Bool(b)),
        serde_json::Value::Number(n) => Node::Value(json_number_to_value(&n)),
        serde_json::Value::String(s) => Node::Value(Value::String(s)),
        serde_json::Value::Array(items) => {
            Node::Array(items.into_iter().map(json_to_node).collect())
        }
        serde_json::Value::Object(map) => Node::Object(
            map.into_iter()
                .map(|(name, child)| (name, json_to_node(child)))
                .collect(),
        ),
    }
}

fn json_number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int64(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt64(u)
    } else if let Some(f) = n.as_f64() {
        Value::Float64(f)
    } else {
        Value::Null
    }
}

fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Value(value) => value_to_json(value),
        Node::Object(entries) => {
            let mut map = serde_json::Map::new();
            for (name, child) in entries {
                map.insert(name.clone(), node_to_json(child));
            }
            serde_json::Value::Object(map)
        }
        Node::Array(items) => serde_json::Value::Array(items.iter().map(node_to_json).collect()),
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int8(v) => Json::from(*v),
        Value::Int16(v) => Json::from(*v),
        Value::Int32(v) => Json::from(*v),
        Value::Int64(v) => Json::from(*v),
        Value::UInt8(v) => Json::from(*v),
        Value::UInt16(v) => Json::from(*v),
        Value::UInt32(v) => Json::from(*v),
        Value::UInt64(v) => Json::from(*v),
        // JSON has no NaN/Infinity; those degrade to null.
        Value::Float32(v) => serde_json::Number::from_f64(f64::from(*v))
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::Float64(v) => serde_json::Number::from_f64(*v)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::String(s) => Json::String(s.clone()),
        Value::Blob(bytes) => Json::Array(bytes.iter().map(|b| Json::from(*b)).collect()),
    }
}
