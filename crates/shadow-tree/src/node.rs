//! Node storage and the public node handle.

use std::fmt;
use std::hash::{Hash, Hasher};

use la_arena::Idx;
use shadow_snapshot::{NodeKey, Point, Sibling, SnapshotNode};
use text_size::{TextRange, TextSize};

use crate::tree::SyntaxTree;

/// Kind the grammar assigns to nodes it could not parse.
pub const ERROR_KIND: &str = "ERROR";

const UNKNOWN_KIND: &str = "<unknown>";

pub(crate) type NodeId = Idx<NodeData>;

/// Read-only attributes copied from a snapshot node.
#[derive(Debug)]
pub(crate) struct NodeAttrs {
    pub(crate) key: Option<NodeKey>,
    pub(crate) kind: Option<Box<str>>,
    pub(crate) text: Box<str>,
    pub(crate) start_position: Option<Point>,
    pub(crate) end_position: Option<Point>,
    pub(crate) start_index: TextSize,
    pub(crate) end_index: TextSize,
    pub(crate) has_error: bool,
    pub(crate) is_missing: bool,
    pub(crate) is_named: bool,
}

impl NodeAttrs {
    pub(crate) fn from_snapshot(node: &SnapshotNode) -> Self {
        Self {
            key: node.id,
            kind: node.kind.as_deref().map(Box::from),
            text: node.text.as_str().into(),
            start_position: node.start_position,
            end_position: node.end_position,
            start_index: node.start_index,
            end_index: node.end_index,
            has_error: node.has_error,
            is_missing: node.is_missing,
            is_named: node.is_named,
        }
    }
}

/// Arena slot.
///
/// A stand-in describes a sibling that was referenced but never walked. It
/// has attributes and nothing to navigate to.
#[derive(Debug)]
pub(crate) enum NodeData {
    Full(FullNode),
    StandIn(NodeAttrs),
}

impl NodeData {
    pub(crate) fn attrs(&self) -> &NodeAttrs {
        match self {
            Self::Full(node) => &node.attrs,
            Self::StandIn(attrs) => attrs,
        }
    }
}

#[derive(Debug)]
pub(crate) struct FullNode {
    pub(crate) attrs: NodeAttrs,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) siblings: Siblings,
}

impl FullNode {
    pub(crate) fn new(attrs: NodeAttrs, parent: Option<NodeId>) -> Self {
        Self { attrs, parent, children: Vec::new(), siblings: Siblings::default() }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Siblings {
    next: Option<NodeId>,
    previous: Option<NodeId>,
    next_named: Option<NodeId>,
    previous_named: Option<NodeId>,
}

impl Siblings {
    pub(crate) fn get(self, relation: Sibling) -> Option<NodeId> {
        match relation {
            Sibling::Next => self.next,
            Sibling::Previous => self.previous,
            Sibling::NextNamed => self.next_named,
            Sibling::PreviousNamed => self.previous_named,
        }
    }

    pub(crate) fn set(&mut self, relation: Sibling, target: NodeId) {
        let slot = match relation {
            Sibling::Next => &mut self.next,
            Sibling::Previous => &mut self.previous,
            Sibling::NextNamed => &mut self.next_named,
            Sibling::PreviousNamed => &mut self.previous_named,
        };
        *slot = Some(target);
    }
}

/// Node handle tied to the lifetime of the tree.
///
/// Two handles are equal only if they refer to the same node of the same
/// tree, so `==` observes shared identity.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a SyntaxTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn data(self) -> &'a NodeData {
        self.tree.node_data(self.id)
    }

    #[inline]
    fn attrs(self) -> &'a NodeAttrs {
        self.data().attrs()
    }

    #[inline]
    fn child_ids(self) -> &'a [NodeId] {
        match self.data() {
            NodeData::Full(node) => node.children.as_slice(),
            NodeData::StandIn(_) => &[],
        }
    }

    /// Returns the tree this node belongs to.
    #[inline]
    pub fn tree(self) -> &'a SyntaxTree {
        self.tree
    }

    /// Returns the worker-assigned identity, if the snapshot carried one.
    #[inline]
    pub fn id(self) -> Option<NodeKey> {
        self.attrs().key
    }

    /// Returns the grammar kind, or `None` if the snapshot omitted it.
    #[inline]
    pub fn kind(self) -> Option<&'a str> {
        self.attrs().kind.as_deref()
    }

    #[inline]
    pub fn text(self) -> &'a str {
        &self.attrs().text
    }

    #[inline]
    pub fn start_position(self) -> Option<Point> {
        self.attrs().start_position
    }

    #[inline]
    pub fn end_position(self) -> Option<Point> {
        self.attrs().end_position
    }

    #[inline]
    pub fn start_index(self) -> TextSize {
        self.attrs().start_index
    }

    #[inline]
    pub fn end_index(self) -> TextSize {
        self.attrs().end_index
    }

    /// Returns the byte range, clamped so that it is never inverted.
    #[inline]
    pub fn text_range(self) -> TextRange {
        let start = self.start_index();
        TextRange::new(start, self.end_index().max(start))
    }

    /// Returns `true` if this node or any descendant failed to parse.
    #[inline]
    pub fn has_error(self) -> bool {
        self.attrs().has_error
    }

    #[inline]
    pub fn is_missing(self) -> bool {
        self.attrs().is_missing
    }

    #[inline]
    pub fn is_named(self) -> bool {
        self.attrs().is_named
    }

    /// Returns `true` if this node's kind is [`ERROR_KIND`].
    #[inline]
    pub fn is_error(self) -> bool {
        self.kind() == Some(ERROR_KIND)
    }

    /// Returns `true` for a detached stand-in.
    ///
    /// Stand-ins are produced for sibling references whose target was not
    /// part of the snapshot's walked subtree. They have no parent, no
    /// children and no siblings of their own.
    #[inline]
    pub fn is_stand_in(self) -> bool {
        matches!(self.data(), NodeData::StandIn(_))
    }

    /// Returns the parent node if any.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        match self.data() {
            NodeData::Full(node) => Some(Self::new(self.tree, node.parent?)),
            NodeData::StandIn(_) => None,
        }
    }

    /// Returns an iterator of ancestors starting from this node.
    #[inline]
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        std::iter::successors(Some(self), |it| it.parent())
    }

    #[inline]
    pub fn child_count(self) -> usize {
        self.child_ids().len()
    }

    /// Returns the child at `index`, or `None` if out of bounds.
    #[inline]
    pub fn child(self, index: usize) -> Option<Self> {
        Some(Self::new(self.tree, *self.child_ids().get(index)?))
    }

    #[inline]
    pub fn children(self) -> Children<'a> {
        Children { tree: self.tree, iter: self.child_ids().iter() }
    }

    /// Iterates children that are named in the grammar.
    #[inline]
    pub fn named_children(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.children().filter(|child| child.is_named())
    }

    pub fn named_child_count(self) -> usize {
        self.named_children().count()
    }

    /// Returns the position of this node in its parent's children.
    pub(crate) fn index_in_parent(self) -> Option<usize> {
        self.parent()?.child_ids().iter().position(|&id| id == self.id)
    }

    /// Returns the node linked through `relation`.
    #[inline]
    pub fn sibling(self, relation: Sibling) -> Option<Self> {
        match self.data() {
            NodeData::Full(node) => Some(Self::new(self.tree, node.siblings.get(relation)?)),
            NodeData::StandIn(_) => None,
        }
    }

    #[inline]
    pub fn next_sibling(self) -> Option<Self> {
        self.sibling(Sibling::Next)
    }

    #[inline]
    pub fn previous_sibling(self) -> Option<Self> {
        self.sibling(Sibling::Previous)
    }

    #[inline]
    pub fn next_named_sibling(self) -> Option<Self> {
        self.sibling(Sibling::NextNamed)
    }

    #[inline]
    pub fn previous_named_sibling(self) -> Option<Self> {
        self.sibling(Sibling::PreviousNamed)
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

/// Renders `kind(row, column)`, or `kind(sibling)` for a stand-in.
impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind().unwrap_or(UNKNOWN_KIND);
        match self.data() {
            NodeData::Full(_) => {
                let start = self.start_position().unwrap_or_default();
                write!(f, "{kind}({}, {})", start.row, start.column)
            }
            NodeData::StandIn(_) => write!(f, "{kind}(sibling)"),
        }
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind())
            .field("range", &self.text_range())
            .field("stand_in", &self.is_stand_in())
            .finish_non_exhaustive()
    }
}

/// Iterator over the children of a node.
#[derive(Clone)]
pub struct Children<'a> {
    tree: &'a SyntaxTree,
    iter: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|&id| SyntaxNode::new(self.tree, id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|&id| SyntaxNode::new(self.tree, id))
    }
}

impl ExactSizeIterator for Children<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
