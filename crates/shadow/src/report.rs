use std::fmt::Write as _;

use shadow_tree::{Point, SyntaxNode, SyntaxTree};

pub(crate) fn locate(tree: &SyntaxTree, point: Point) -> String {
    match tree.root_node().descendant_for_position(point) {
        Some(node) => format!("{node} {:?} {}", node.text(), path_to(node)),
        None => format!("no node contains {point}"),
    }
}

/// `root > child > ...` from the root down to `node`.
fn path_to(node: SyntaxNode<'_>) -> String {
    let mut kinds: Vec<&str> =
        node.ancestors().map(|it| it.kind().unwrap_or("<unknown>")).collect();
    kinds.reverse();
    kinds.join(" > ")
}

pub(crate) fn errors(tree: &SyntaxTree) -> String {
    let ranges = tree.error_ranges();
    if ranges.is_empty() {
        return "no errors\n".to_owned();
    }

    let mut out = String::new();
    for range in ranges {
        let _ = writeln!(out, "{range}");
    }
    out
}
