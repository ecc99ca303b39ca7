//! Navigable syntax tree rebuilt from a worker snapshot.
//!
//! The snapshot is turned into an arena of parent-linked nodes in two passes:
//! the first allocates every node and records it by identity, the second
//! resolves sibling references against that record. Handles into the arena
//! are `Copy` and tied to the lifetime of the owning [`SyntaxTree`].

mod builder;
mod cursor;
mod locate;
mod node;
mod tree;
mod walk;

pub use cursor::TreeCursor;
pub use node::{Children, ERROR_KIND, SyntaxNode};
pub use shadow_snapshot::{InputEdit, NodeKey, Point, Range, Sibling, SnapshotNode, TreeSnapshot};
pub use tree::SyntaxTree;
pub use walk::{Preorder, WalkEvent};
