//! Preorder traversal and the indented debug dump built on it.

use std::fmt::Write as _;

use shadow_snapshot::Point;

use crate::node::{Children, SyntaxNode};

/// Preorder walk event for nodes.
#[derive(Debug, Clone, Copy)]
pub enum WalkEvent<'a> {
    Enter(SyntaxNode<'a>),
    Leave(SyntaxNode<'a>),
}

/// Preorder traversal over nodes.
///
/// Stand-ins are never visited; they are reachable only through sibling links.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(SyntaxNode<'a>, Children<'a>)>,
    root: Option<SyntaxNode<'a>>,
}

impl<'a> Preorder<'a> {
    #[inline]
    fn new(start: SyntaxNode<'a>) -> Self {
        Self { stack: Vec::with_capacity(64), root: Some(start) }
    }

    /// Skips the current subtree during traversal.
    #[inline]
    pub fn skip_subtree(&mut self) {
        assert!(self.stack.pop().is_some(), "must have a subtree to skip");
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some((_, children)) = self.stack.last_mut() else {
            let root = self.root.take()?;
            self.stack.push((root, root.children()));
            return Some(WalkEvent::Enter(root));
        };
        match children.next() {
            Some(child) => {
                self.stack.push((child, child.children()));
                Some(WalkEvent::Enter(child))
            }
            None => {
                let (exited, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(exited))
            }
        }
    }
}

impl<'a> SyntaxNode<'a> {
    /// Returns a preorder iterator over this node and its descendants.
    #[inline]
    pub fn preorder(self) -> Preorder<'a> {
        Preorder::new(self)
    }

    /// Renders the subtree as one line per node, indented by depth.
    ///
    /// Each line shows the kind, the byte range and the row/column span.
    /// Leaves also show their text. Unnamed kinds are quoted.
    pub fn debug_tree(self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in self.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    write_node(&mut out, node, depth);
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        out
    }
}

fn write_node(out: &mut String, node: SyntaxNode<'_>, depth: usize) {
    let kind = node.kind().unwrap_or("<unknown>");
    let range = node.text_range();
    let _ = write!(out, "{:indent$}", "", indent = depth * 2);
    if node.is_named() {
        out.push_str(kind);
    } else {
        let _ = write!(out, "{kind:?}");
    }
    let _ = write!(
        out,
        "@{:?} [{}-{}]",
        range,
        point(node.start_position()),
        point(node.end_position())
    );
    if node.child_count() == 0 {
        let _ = write!(out, " {:?}", node.text());
    }
    if node.is_missing() {
        out.push_str(" MISSING");
    }
    out.push('\n');
}

fn point(point: Option<Point>) -> String {
    point.map_or_else(|| "?".to_owned(), |point| point.to_string())
}
