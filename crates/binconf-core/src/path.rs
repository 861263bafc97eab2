//! Dotted path expressions for addressing nodes in a document.
//!
//! A path is an ASCII, dot-separated sequence of segments. A segment is
//! either an object member name or a non-negative decimal integer, which
//! addresses an array index when the node being walked is an array (against
//! an object it is just a member name).
//!
//! ## Escaping
//!
//! A backslash escapes the next character, so member names containing
//! literal dots stay addressable: `servers.a\.example\.com.port` has three
//! segments, the middle one named `a.example.com`. `\\` produces a literal
//! backslash; any other escaped character is taken literally. A segment
//! containing an escape is always treated as a member name, never as an
//! array index.
//!
//! Parsing is total — there are no invalid paths, only paths that fail to
//! resolve.

/// One parsed path segment: the literal member name plus its numeric
/// interpretation when the segment is a plain decimal integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    index: Option<usize>,
}

impl Segment {
    /// The segment as an object member name.
    pub fn name(&self) -> &str {
        &self.text
    }

    /// The segment as an array index, when it is an unescaped decimal
    /// integer that fits in `usize`.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// Split a path expression into segments, honoring backslash escapes.
///
/// The empty path yields no segments and addresses the document root.
pub fn parse(path: &str) -> Vec<Segment> {
    if path.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut text = String::new();
    let mut escaped_any = false;
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped_any = true;
                match chars.next() {
                    Some(next) => text.push(next),
                    None => text.push('\\'),
                }
            }
            '.' => {
                segments.push(finish_segment(std::mem::take(&mut text), escaped_any));
                escaped_any = false;
            }
            _ => text.push(c),
        }
    }
    segments.push(finish_segment(text, escaped_any));

    segments
}

fn finish_segment(text: String, escaped: bool) -> Segment {
    let index = if escaped { None } else { parse_index(&text) };
    Segment { text, index }
}

/// A segment counts as an index only if it is entirely decimal digits.
/// Overflowing values fall back to plain member names.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok()
}
