//! Variant values carried by document leaf nodes.
//!
//! `Value` is a closed tagged union over the scalar, string, and blob kinds
//! the wire format can express. Containers (objects/arrays) are *not* value
//! kinds — they are tree node kinds (see [`crate::document::Node`]), which
//! makes "a node is either a leaf or a container, never both" hold by
//! construction.
//!
//! Reads are total: every `as_*` accessor coerces on a best-effort basis and
//! returns `None` for incompatible representations instead of failing, so
//! property access never turns into a hard error. Callers that want a
//! fallback use the `*_or` getters on [`crate::store::Properties`].

/// A dynamically typed scalar/string/blob payload.
///
/// The numeric width variants exist so the binary codec can round-trip a
/// document bit-exactly; on the access side they all coerce freely.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    /// Raw bytes with explicit length; never assumed to be text.
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Read as a boolean. Numbers coerce to `value != 0`; strings parse
    /// `"true"`/`"false"` or a numeric literal. Null and blobs yield `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                other => other.parse::<f64>().ok().map(|f| f != 0.0),
            },
            Value::Null | Value::Blob(_) => None,
            _ => self.as_f64().map(|f| f != 0.0),
        }
    }

    /// Read as a signed 64-bit integer. Floats truncate toward zero,
    /// out-of-range values saturate, numeric strings parse.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(i64::from(*v)),
            Value::Int16(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt8(v) => Some(i64::from(*v)),
            Value::UInt16(v) => Some(i64::from(*v)),
            Value::UInt32(v) => Some(i64::from(*v)),
            Value::UInt64(v) => Some(i64::try_from(*v).unwrap_or(i64::MAX)),
            Value::Float32(v) => Some(*v as i64),
            Value::Float64(v) => Some(*v as i64),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::String(s) => s
                .parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64)),
            Value::Null | Value::Blob(_) => None,
        }
    }

    /// Read as an unsigned 64-bit integer. Negative values yield `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt8(v) => Some(u64::from(*v)),
            Value::UInt16(v) => Some(u64::from(*v)),
            Value::UInt32(v) => Some(u64::from(*v)),
            Value::UInt64(v) => Some(*v),
            Value::String(s) => s
                .parse::<u64>()
                .ok()
                .or_else(|| self.as_i64().and_then(|i| u64::try_from(i).ok())),
            Value::Null | Value::Blob(_) => None,
            _ => self.as_i64().and_then(|i| u64::try_from(i).ok()),
        }
    }

    /// Read as a 64-bit float. Integers and booleans widen, numeric strings
    /// parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::Int8(v) => Some(f64::from(*v)),
            Value::Int16(v) => Some(f64::from(*v)),
            Value::Int32(v) => Some(f64::from(*v)),
            Value::Int64(v) => Some(*v as f64),
            Value::UInt8(v) => Some(f64::from(*v)),
            Value::UInt16(v) => Some(f64::from(*v)),
            Value::UInt32(v) => Some(f64::from(*v)),
            Value::UInt64(v) => Some(*v as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.parse::<f64>().ok(),
            Value::Null | Value::Blob(_) => None,
        }
    }

    /// Borrow the string payload. Only `String` values yield `Some`; use
    /// [`Value::to_display_string`] to format other scalars.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Format any scalar as text (numbers and booleans render their literal
    /// form). Null and blobs have no text form and yield `None`.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int8(v) => Some(v.to_string()),
            Value::Int16(v) => Some(v.to_string()),
            Value::Int32(v) => Some(v.to_string()),
            Value::Int64(v) => Some(v.to_string()),
            Value::UInt8(v) => Some(v.to_string()),
            Value::UInt16(v) => Some(v.to_string()),
            Value::UInt32(v) => Some(v.to_string()),
            Value::UInt64(v) => Some(v.to_string()),
            Value::Float32(v) => Some(v.to_string()),
            Value::Float64(v) => Some(v.to_string()),
            Value::Null | Value::Blob(_) => None,
        }
    }

    /// Borrow the blob payload. Only `Blob` values yield `Some`.
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UInt8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UInt16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Blob(v.to_vec())
    }
}
