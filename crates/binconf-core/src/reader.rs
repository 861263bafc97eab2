//! Binary reader — parses the tagged wire format back into a document tree.
//!
//! The reader is an incremental pull parser over a read-only byte slice:
//! read a tag, dispatch to the per-type decoder, recurse for containers.
//! Any structural violation — truncation, an unknown tag, a stray end
//! marker, a length running past the buffer, trailing bytes, a non-object
//! root, invalid UTF-8, a duplicate member name — aborts the whole load
//! with [`ConfError::MalformedInput`] carrying the byte offset. No partial
//! document is ever returned, so a caller can never end up operating on a
//! truncated configuration.
//!
//! Nesting depth is bounded by [`ReaderOptions::max_depth`] (default
//! [`DEFAULT_MAX_DEPTH`]) so adversarially nested input cannot exhaust the
//! stack.

use crate::document::{Document, Node};
use crate::error::{ConfError, Result};
use crate::value::Value;
use crate::wire;

/// Depth limit applied by [`decode`]. Far beyond any plausible
/// configuration document.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for [`decode_with_options`].
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Maximum container nesting depth accepted before the input is
    /// rejected as malformed. The root object counts as depth one.
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode a binary stream into a document with default options.
pub fn decode(buf: &[u8]) -> Result<Document> {
    decode_with_options(buf, &ReaderOptions::default())
}

/// Decode a binary stream into a document.
///
/// The input slice is only ever read; decoding allocates the tree from
/// scratch and succeeds or fails atomically.
pub fn decode_with_options(buf: &[u8], options: &ReaderOptions) -> Result<Document> {
    let mut reader = Reader {
        buf,
        pos: 0,
        max_depth: options.max_depth,
    };
    reader.expect_header()?;
    let root = reader.read_root()?;
    if reader.pos != buf.len() {
        return Err(reader.error("trailing bytes after document"));
    }
    Ok(Document::from_root(root))
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    fn error(&self, message: impl Into<String>) -> ConfError {
        ConfError::malformed(self.pos, message)
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| self.error("declared length runs past end of input"))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_len(&mut self) -> Result<usize> {
        let raw = wire::read_varint(self.buf, &mut self.pos)
            .ok_or_else(|| self.error("bad varint length"))?;
        usize::try_from(raw)
            .ok()
            .filter(|&len| len <= self.buf.len() - self.pos)
            .ok_or_else(|| self.error("declared length runs past end of input"))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_len()?;
        let offset = self.pos;
        let bytes = self.take(len)?;
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ConfError::malformed(offset, "invalid UTF-8 in string"))?;
        Ok(text.to_string())
    }

    fn expect_header(&mut self) -> Result<()> {
        let magic = self.read_u8()?;
        if magic != wire::MAGIC {
            return Err(ConfError::malformed(0, "bad magic byte"));
        }
        let version = self.read_u8()?;
        if version != wire::VERSION {
            return Err(ConfError::malformed(1, "unsupported format version"));
        }
        Ok(())
    }

    /// The root value must be an object container; documents are never
    /// bare scalars or arrays.
    fn read_root(&mut self) -> Result<Node> {
        let tag = self.read_u8()?;
        if tag != wire::TAG_OBJECT {
            return Err(self.error("root value must be an object"));
        }
        self.read_object(1)
    }

    fn read_object(&mut self, depth: usize) -> Result<Node> {
        let mut entries: Vec<(String, Node)> = Vec::new();
        loop {
            let tag = self.read_u8()?;
            if tag == wire::TAG_END {
                return Ok(Node::Object(entries));
            }
            if tag != wire::TAG_STRING {
                return Err(self.error("expected member name or end marker"));
            }
            let name_offset = self.pos;
            let name = self.read_string()?;
            if entries.iter().any(|(existing, _)| *existing == name) {
                return Err(ConfError::malformed(name_offset, "duplicate member name"));
            }
            let child = self.read_node(depth)?;
            entries.push((name, child));
        }
    }

    fn read_array(&mut self, depth: usize) -> Result<Node> {
        let mut items = Vec::new();
        loop {
            let tag = self.read_u8()?;
            if tag == wire::TAG_END {
                return Ok(Node::Array(items));
            }
            items.push(self.read_tagged(tag, depth)?);
        }
    }

    fn read_node(&mut self, depth: usize) -> Result<Node> {
        let tag = self.read_u8()?;
        if tag == wire::TAG_END {
            return Err(self.error("end marker with no open container"));
        }
        self.read_tagged(tag, depth)
    }

    /// Per-tag dispatch. `depth` is the nesting level of the container the
    /// value appears in.
    fn read_tagged(&mut self, tag: u8, depth: usize) -> Result<Node> {
        let value = match tag {
            wire::TAG_NULL => Value::Null,
            wire::TAG_TRUE => Value::Bool(true),
            wire::TAG_FALSE => Value::Bool(false),
            wire::TAG_I8 => Value::Int8(i8::from_be_bytes(self.read_fixed()?)),
            wire::TAG_I16 => Value::Int16(i16::from_be_bytes(self.read_fixed()?)),
            wire::TAG_I32 => Value::Int32(i32::from_be_bytes(self.read_fixed()?)),
            wire::TAG_I64 => Value::Int64(i64::from_be_bytes(self.read_fixed()?)),
            wire::TAG_U8 => Value::UInt8(u8::from_be_bytes(self.read_fixed()?)),
            wire::TAG_U16 => Value::UInt16(u16::from_be_bytes(self.read_fixed()?)),
            wire::TAG_U32 => Value::UInt32(u32::from_be_bytes(self.read_fixed()?)),
            wire::TAG_U64 => Value::UInt64(u64::from_be_bytes(self.read_fixed()?)),
            wire::TAG_F32 => Value::Float32(f32::from_be_bytes(self.read_fixed()?)),
            wire::TAG_F64 => Value::Float64(f64::from_be_bytes(self.read_fixed()?)),
            wire::TAG_STRING => Value::String(self.read_string()?),
            wire::TAG_BLOB => {
                let len = self.read_len()?;
                Value::Blob(self.take(len)?.to_vec())
            }
            wire::TAG_OBJECT => {
                self.check_depth(depth)?;
                return self.read_object(depth + 1);
            }
            wire::TAG_ARRAY => {
                self.check_depth(depth)?;
                return self.read_array(depth + 1);
            }
            _ => return Err(self.error("unknown type tag")),
        };
        Ok(Node::Value(value))
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.max_depth {
            return Err(self.error("nesting depth exceeds limit"));
        }
        Ok(())
    }
}
