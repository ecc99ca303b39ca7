use shadow_snapshot::Point;

use crate::node::SyntaxNode;

impl SyntaxNode<'_> {
    /// Returns `true` if `point` lies within `[start_position, end_position]`.
    ///
    /// A node without positions contains no point.
    pub fn contains_point(self, point: Point) -> bool {
        match (self.start_position(), self.end_position()) {
            (Some(start), Some(end)) => start <= point && point <= end,
            _ => false,
        }
    }

    /// Returns the deepest node in this subtree whose span contains `point`.
    ///
    /// Children are tried left to right and the first one containing the
    /// point is descended into, so ties go to the leftmost child. Returns
    /// `None` if the point lies outside this node.
    pub fn descendant_for_position(self, point: Point) -> Option<Self> {
        if !self.contains_point(point) {
            return None;
        }
        let mut node = self;
        while let Some(child) = node.children().find(|child| child.contains_point(point)) {
            node = child;
        }
        Some(node)
    }
}
