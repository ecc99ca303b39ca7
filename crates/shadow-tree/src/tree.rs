use std::fmt;

use la_arena::Arena;
use shadow_snapshot::{InputEdit, Range, SnapshotNode, TreeSnapshot};

use crate::builder::{Builder, Built};
use crate::cursor::TreeCursor;
use crate::node::{NodeData, NodeId, SyntaxNode};
use crate::walk::WalkEvent;

/// Owned syntax tree rebuilt from a worker snapshot.
///
/// The tree is immutable once built. It holds no external resources, so
/// dropping it is all the cleanup there is.
pub struct SyntaxTree {
    nodes: Arena<NodeData>,
    root: NodeId,
    has_errors: Option<bool>,
    file_id: Option<String>,
}

impl SyntaxTree {
    /// Rebuilds the tree described by `snapshot`.
    pub fn build(snapshot: &TreeSnapshot) -> Self {
        let Built { nodes, root } = Builder::new().build(&snapshot.root_node);
        Self { nodes, root, has_errors: snapshot.has_errors, file_id: snapshot.file_id.clone() }
    }

    /// Rebuilds a tree rooted at `root`.
    pub fn from_root(root: &SnapshotNode) -> Self {
        let Built { nodes, root } = Builder::new().build(root);
        Self { nodes, root, has_errors: None, file_id: None }
    }

    #[inline]
    pub(crate) fn node_data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id]
    }

    /// Returns the root syntax node.
    #[inline]
    pub fn root_node(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self, self.root)
    }

    /// Returns a new cursor positioned at the root.
    #[inline]
    pub fn walk(&self) -> TreeCursor<'_> {
        TreeCursor::new(self.root_node())
    }

    /// Identifier of the file the snapshot was parsed from, if known.
    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    /// Returns the worker's error flag, or the root's when the worker sent none.
    pub fn has_errors(&self) -> bool {
        self.has_errors.unwrap_or_else(|| self.root_node().has_error())
    }

    /// Number of nodes in the walked tree, not counting stand-ins.
    pub fn node_count(&self) -> usize {
        self.nodes.values().filter(|data| matches!(data, NodeData::Full(_))).count()
    }

    /// Accepts an edit without applying it.
    ///
    /// A rebuilt tree cannot be edited in place; a fresh snapshot has to be
    /// requested instead. The edit is reported so that it is not lost silently.
    pub fn edit(&self, edit: &InputEdit) {
        tracing::warn!(
            file_id = self.file_id.as_deref().unwrap_or("<unknown>"),
            start_index = u32::from(edit.start_index),
            old_end_index = u32::from(edit.old_end_index),
            new_end_index = u32::from(edit.new_end_index),
            "edit ignored: snapshot trees cannot be edited in place"
        );
    }

    /// Always empty: a rebuilt tree is never diffed against a previous one.
    #[allow(clippy::unused_self)]
    pub fn changed_ranges(&self, _other: &Self) -> Vec<Range> {
        Vec::new()
    }

    /// Spans of every [`ERROR_KIND`](crate::ERROR_KIND) node, in preorder.
    pub fn error_ranges(&self) -> Vec<Range> {
        self.root_node()
            .preorder()
            .filter_map(|event| match event {
                WalkEvent::Enter(node) if node.is_error() => Some(Range {
                    start_position: node.start_position().unwrap_or_default(),
                    end_position: node.end_position().unwrap_or_default(),
                    start_index: node.start_index(),
                    end_index: node.end_index(),
                }),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("file_id", &self.file_id)
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
