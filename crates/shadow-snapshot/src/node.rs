use serde::{Deserialize, Serialize};
use text_size::TextSize;

use crate::point::Point;

/// Worker-assigned node identity, stable for the lifetime of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(pub u64);

/// One of the four sibling relations a node may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sibling {
    Next,
    Previous,
    NextNamed,
    PreviousNamed,
}

impl Sibling {
    pub const ALL: [Self; 4] = [Self::Next, Self::Previous, Self::NextNamed, Self::PreviousNamed];
}

/// A parsed node as described by the worker.
///
/// Every field except `type` is optional on the wire. A missing `type` is
/// kept as `None`; consumers decide what an untyped node means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeKey>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub start_position: Option<Point>,
    #[serde(default)]
    pub end_position: Option<Point>,
    #[serde(default)]
    pub start_index: TextSize,
    #[serde(default)]
    pub end_index: TextSize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub is_missing: bool,
    #[serde(default = "named_by_default")]
    pub is_named: bool,

    /// Sibling references point into the same snapshot graph by `id`. The
    /// referenced node is carried inline so that a sibling which is not part
    /// of the walked subtree can still be described.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_sibling: Option<Box<Self>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_sibling: Option<Box<Self>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_named_sibling: Option<Box<Self>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_named_sibling: Option<Box<Self>>,
}

fn named_by_default() -> bool {
    true
}

impl Default for SnapshotNode {
    fn default() -> Self {
        Self {
            id: None,
            kind: None,
            text: String::new(),
            start_position: None,
            end_position: None,
            start_index: TextSize::new(0),
            end_index: TextSize::new(0),
            children: Vec::new(),
            has_error: false,
            is_missing: false,
            is_named: true,
            next_sibling: None,
            previous_sibling: None,
            next_named_sibling: None,
            previous_named_sibling: None,
        }
    }
}

impl SnapshotNode {
    /// Creates an empty node of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..Self::default() }
    }

    /// Returns the node referenced by `relation`, if any.
    pub fn sibling(&self, relation: Sibling) -> Option<&Self> {
        match relation {
            Sibling::Next => self.next_sibling.as_deref(),
            Sibling::Previous => self.previous_sibling.as_deref(),
            Sibling::NextNamed => self.next_named_sibling.as_deref(),
            Sibling::PreviousNamed => self.previous_named_sibling.as_deref(),
        }
    }

    /// Sets the reference for `relation`.
    pub fn set_sibling(&mut self, relation: Sibling, target: Option<Self>) {
        let target = target.map(Box::new);
        match relation {
            Sibling::Next => self.next_sibling = target,
            Sibling::Previous => self.previous_sibling = target,
            Sibling::NextNamed => self.next_named_sibling = target,
            Sibling::PreviousNamed => self.previous_named_sibling = target,
        }
    }

    /// Counts this node and all of its descendants.
    pub fn subtree_len(&self) -> usize {
        let mut len = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(&node.children);
        }
        len
    }
}

/// The tree object a worker sends for one parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSnapshot {
    pub root_node: SnapshotNode,
    #[serde(default)]
    pub has_errors: Option<bool>,
    /// Filled in from the enclosing message, never part of the tree object.
    #[serde(skip)]
    pub file_id: Option<String>,
}

impl From<SnapshotNode> for TreeSnapshot {
    fn from(root_node: SnapshotNode) -> Self {
        Self { root_node, has_errors: None, file_id: None }
    }
}
