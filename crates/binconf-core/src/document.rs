//! The in-memory document tree and its path-addressed operations.
//!
//! A [`Document`] is a strictly hierarchical tree: every node is either a
//! leaf carrying a [`Value`] or a container (object/array) exclusively
//! owning its children. There are no parent back-references and no cycles —
//! ownership enforces both. Object children keep insertion order; array
//! children keep index order; the binary codec preserves both across a
//! round trip.
//!
//! # Write semantics
//!
//! [`Document::set`] creates missing intermediate segments as empty objects
//! (missing array slots are padded with nulls) and fails with
//! [`ConfError::TypeMismatch`] when the target or any ancestor already
//! exists with an incompatible shape — a path addresses one kind of node
//! for its lifetime unless removed first. The check runs over the whole
//! path before any mutation, so a failed `set` leaves the document
//! untouched.

use crate::error::{ConfError, Result};
use crate::path::{self, Segment};
use crate::value::Value;

/// A tree element: a leaf value, an object (ordered name→node pairs), or an
/// array (ordered nodes).
///
/// Objects use a `Vec` of pairs rather than a map so that member order is
/// insertion order; configuration documents are small enough that linear
/// name lookup is not a concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Value(Value),
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
}

/// Key of a child during enumeration: member name for objects, position for
/// arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKey<'a> {
    Name(&'a str),
    Index(usize),
}

impl Node {
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Object(_) | Node::Array(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Value(_))
    }

    /// The leaf value, or `None` for containers.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Node::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Number of children; leaves have none.
    pub fn len(&self) -> usize {
        match self {
            Node::Value(_) => 0,
            Node::Object(entries) => entries.len(),
            Node::Array(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over direct children in insertion/index order. Leaves yield
    /// nothing. The borrow held by the iterator statically rules out
    /// structural mutation mid-iteration.
    pub fn children(&self) -> Children<'_> {
        let inner = match self {
            Node::Value(_) => ChildrenInner::Leaf,
            Node::Object(entries) => ChildrenInner::Object(entries.iter()),
            Node::Array(items) => ChildrenInner::Array(items.iter().enumerate()),
        };
        Children { inner }
    }

    fn child(&self, seg: &Segment) -> Option<&Node> {
        match self {
            Node::Value(_) => None,
            Node::Object(entries) => entries
                .iter()
                .find(|(name, _)| name == seg.name())
                .map(|(_, node)| node),
            Node::Array(items) => seg.index().and_then(|ix| items.get(ix)),
        }
    }
}

/// Ordered iterator over a node's direct children.
pub struct Children<'a> {
    inner: ChildrenInner<'a>,
}

enum ChildrenInner<'a> {
    Leaf,
    Object(std::slice::Iter<'a, (String, Node)>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, Node>>),
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeKey<'a>, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Leaf => None,
            ChildrenInner::Object(iter) => iter
                .next()
                .map(|(name, node)| (NodeKey::Name(name.as_str()), node)),
            ChildrenInner::Array(iter) => {
                iter.next().map(|(ix, node)| (NodeKey::Index(ix), node))
            }
        }
    }
}

/// A configuration document: a single root object container.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document (root object with zero children).
    pub fn new() -> Self {
        Document {
            root: Node::Object(Vec::new()),
        }
    }

    pub(crate) fn from_root(root: Node) -> Self {
        Document { root }
    }

    /// The root container.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a path to a node without creating anything. The empty path
    /// addresses the root.
    pub fn get_node(&self, path: &str) -> Option<&Node> {
        let segments = path::parse(path);
        let mut cur = &self.root;
        for seg in &segments {
            cur = cur.child(seg)?;
        }
        Some(cur)
    }

    /// Read the value at a path. Absent paths and container nodes yield
    /// `None` — enumerate containers via [`Document::get_node`] and
    /// [`Node::children`] instead.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.get_node(path).and_then(Node::value)
    }

    /// Whether any node (leaf or container) exists at the path.
    pub fn exists(&self, path: &str) -> bool {
        self.get_node(path).is_some()
    }

    /// Write a value, creating missing intermediates as empty objects and
    /// padding missing array slots with nulls. Fails with `TypeMismatch`
    /// (leaving the document unmodified) if the target is an existing
    /// container or an ancestor segment exists as a leaf.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let segments = path::parse(path);
        if segments.is_empty() {
            // The root is a container for its whole lifetime.
            return Err(ConfError::mismatch(path));
        }
        self.check_writable(&segments, path)?;

        let mut cur = &mut self.root;
        for (i, seg) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();
            cur = match cur {
                Node::Value(_) => return Err(ConfError::mismatch(path)),
                Node::Object(entries) => {
                    let pos = match entries.iter().position(|(name, _)| name == seg.name()) {
                        Some(pos) => pos,
                        None => {
                            entries.push((seg.name().to_string(), fresh_node(last)));
                            entries.len() - 1
                        }
                    };
                    &mut entries[pos].1
                }
                Node::Array(items) => {
                    let ix = match seg.index() {
                        Some(ix) => ix,
                        None => return Err(ConfError::mismatch(path)),
                    };
                    if ix >= items.len() {
                        items.resize_with(ix + 1, || Node::Value(Value::Null));
                        items[ix] = fresh_node(last);
                    }
                    &mut items[ix]
                }
            };
        }
        *cur = Node::Value(value.into());
        Ok(())
    }

    /// Detach and drop the subtree at a path. Absent paths are a no-op.
    pub fn remove(&mut self, path: &str) {
        let segments = path::parse(path);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut cur = &mut self.root;
        for seg in parents {
            let next = match cur {
                Node::Value(_) => return,
                Node::Object(entries) => entries
                    .iter_mut()
                    .find(|(name, _)| name == seg.name())
                    .map(|(_, node)| node),
                Node::Array(items) => seg.index().and_then(|ix| items.get_mut(ix)),
            };
            match next {
                Some(node) => cur = node,
                None => return,
            }
        }

        match cur {
            Node::Value(_) => {}
            Node::Object(entries) => {
                if let Some(pos) = entries.iter().position(|(name, _)| name == last.name()) {
                    entries.remove(pos);
                }
            }
            Node::Array(items) => {
                if let Some(ix) = last.index() {
                    if ix < items.len() {
                        items.remove(ix);
                    }
                }
            }
        }
    }

    /// Validate a write path end to end before mutating, so a rejected
    /// `set` cannot leave half-created intermediates behind.
    fn check_writable(&self, segments: &[Segment], path: &str) -> Result<()> {
        let mut cur = Some(&self.root);
        for (i, seg) in segments.iter().enumerate() {
            let Some(parent) = cur else {
                // Everything from here down will be freshly created.
                break;
            };
            let child = match parent {
                // An existing leaf cannot become a container.
                Node::Value(_) => return Err(ConfError::mismatch(path)),
                Node::Object(entries) => entries
                    .iter()
                    .find(|(name, _)| name == seg.name())
                    .map(|(_, node)| node),
                Node::Array(items) => match seg.index() {
                    // Out-of-range is fine on a write: the array extends.
                    Some(ix) => items.get(ix),
                    None => return Err(ConfError::mismatch(path)),
                },
            };
            if i + 1 == segments.len() {
                if let Some(node) = child {
                    if node.is_container() {
                        return Err(ConfError::mismatch(path));
                    }
                }
            }
            cur = child;
        }
        Ok(())
    }
}

/// Freshly created path nodes are null leaves at the target position and
/// empty objects everywhere above it.
fn fresh_node(last: bool) -> Node {
    if last {
        Node::Value(Value::Null)
    } else {
        Node::Object(Vec::new())
    }
}
