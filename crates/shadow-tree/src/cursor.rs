use crate::node::SyntaxNode;

/// Stateful walker holding a single position in the tree.
///
/// Starts at the root and can be reused indefinitely.
#[derive(Debug, Clone)]
pub struct TreeCursor<'a> {
    current: SyntaxNode<'a>,
}

impl<'a> TreeCursor<'a> {
    pub(crate) fn new(root: SyntaxNode<'a>) -> Self {
        Self { current: root }
    }

    #[inline]
    pub fn current_node(&self) -> SyntaxNode<'a> {
        self.current
    }

    /// Moves to the first child. Returns `false` and stays put on a leaf.
    pub fn goto_first_child(&mut self) -> bool {
        self.move_to(self.current.child(0))
    }

    /// Moves to the next child of the current node's parent.
    ///
    /// The position is looked up in the parent's children rather than through
    /// the node's own sibling link, which may point at a stand-in.
    pub fn goto_next_sibling(&mut self) -> bool {
        let next = self.current.parent().zip(self.current.index_in_parent());
        self.move_to(next.and_then(|(parent, index)| parent.child(index + 1)))
    }

    pub fn goto_parent(&mut self) -> bool {
        self.move_to(self.current.parent())
    }

    /// Puts the cursor back on the root of the tree.
    pub fn reset(&mut self) {
        self.current = self.current.tree().root_node();
    }

    fn move_to(&mut self, node: Option<SyntaxNode<'a>>) -> bool {
        match node {
            Some(node) => {
                self.current = node;
                true
            }
            None => false,
        }
    }
}
