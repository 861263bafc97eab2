//! Binary writer — serializes a document tree into the tagged wire format.
//!
//! The in-memory tree is structurally valid by invariant, so encoding into
//! a byte buffer cannot fail; only pushing the buffer into an I/O sink can.
//! Object members are written in insertion order and arrays in index order,
//! which is what makes enumeration order survive a round trip.

use std::io::Write;

use crate::document::{Document, Node};
use crate::error::Result;
use crate::value::Value;
use crate::wire::{self, write_varint};

/// Encode a document into a fresh byte buffer.
pub fn encode(doc: &Document) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(wire::MAGIC);
    out.push(wire::VERSION);
    write_node(doc.root(), &mut out);
    out
}

/// Encode a document and push the bytes into an I/O sink. The only failure
/// mode is an unwritable destination.
pub fn encode_to<W: Write>(doc: &Document, dest: &mut W) -> Result<()> {
    let bytes = encode(doc);
    dest.write_all(&bytes)?;
    Ok(())
}

fn write_node(node: &Node, out: &mut Vec<u8>) {
    match node {
        Node::Value(value) => write_value(value, out),
        Node::Object(entries) => {
            out.push(wire::TAG_OBJECT);
            for (name, child) in entries {
                // Names carry the string tag so a member start can never be
                // confused with the container end marker.
                out.push(wire::TAG_STRING);
                write_bytes(name.as_bytes(), out);
                write_node(child, out);
            }
            out.push(wire::TAG_END);
        }
        Node::Array(items) => {
            out.push(wire::TAG_ARRAY);
            for child in items {
                write_node(child, out);
            }
            out.push(wire::TAG_END);
        }
    }
}

/// Numbers are canonical fixed-width big-endian; the tag alone decides the
/// width, so decoding is bit-exact.
fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.push(wire::TAG_NULL),
        Value::Bool(true) => out.push(wire::TAG_TRUE),
        Value::Bool(false) => out.push(wire::TAG_FALSE),
        Value::Int8(v) => {
            out.push(wire::TAG_I8);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Int16(v) => {
            out.push(wire::TAG_I16);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Int32(v) => {
            out.push(wire::TAG_I32);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Int64(v) => {
            out.push(wire::TAG_I64);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::UInt8(v) => {
            out.push(wire::TAG_U8);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::UInt16(v) => {
            out.push(wire::TAG_U16);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::UInt32(v) => {
            out.push(wire::TAG_U32);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::UInt64(v) => {
            out.push(wire::TAG_U64);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Float32(v) => {
            out.push(wire::TAG_F32);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::Float64(v) => {
            out.push(wire::TAG_F64);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Value::String(s) => {
            out.push(wire::TAG_STRING);
            write_bytes(s.as_bytes(), out);
        }
        Value::Blob(b) => {
            out.push(wire::TAG_BLOB);
            write_bytes(b, out);
        }
    }
}

fn write_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    write_varint(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}
