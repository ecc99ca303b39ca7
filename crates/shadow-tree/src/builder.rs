//! Two-pass construction of the node arena from a snapshot.
//!
//! The first pass allocates every node of the walked subtree and records it
//! in an [`IdentityMap`]. Only once that pass is complete does the second one
//! resolve sibling references, since a reference may target a node that is
//! allocated later in the walk than the node declaring it.

use la_arena::Arena;
use rustc_hash::FxHashMap;
use shadow_snapshot::{NodeKey, Sibling, SnapshotNode};

use crate::node::{FullNode, NodeAttrs, NodeData, NodeId, Siblings};

/// Maps snapshot identity to the node built for it during one build.
#[derive(Debug, Default)]
pub(crate) struct IdentityMap {
    map: FxHashMap<NodeKey, NodeId>,
}

impl IdentityMap {
    /// Records `id` for `key`. The first node seen with a key keeps it.
    pub(crate) fn insert(&mut self, key: NodeKey, id: NodeId) {
        self.map.entry(key).or_insert(id);
    }

    pub(crate) fn get(&self, key: NodeKey) -> Option<NodeId> {
        self.map.get(&key).copied()
    }
}

pub(crate) struct Built {
    pub(crate) nodes: Arena<NodeData>,
    pub(crate) root: NodeId,
}

pub(crate) struct Builder<'s> {
    nodes: Arena<NodeData>,
    identity: IdentityMap,
    /// Every (snapshot, node) pair in depth-first order.
    visited: Vec<(&'s SnapshotNode, NodeId)>,
    stand_ins: usize,
}

impl<'s> Builder<'s> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Arena::new(),
            identity: IdentityMap::default(),
            visited: Vec::new(),
            stand_ins: 0,
        }
    }

    pub(crate) fn build(mut self, root: &'s SnapshotNode) -> Built {
        let root = self.build_nodes(root);
        self.link_siblings();

        tracing::debug!(
            nodes = self.visited.len(),
            stand_ins = self.stand_ins,
            "rebuilt syntax tree from snapshot"
        );

        Built { nodes: self.nodes, root }
    }

    fn build_nodes(&mut self, root: &'s SnapshotNode) -> NodeId {
        let root_id = self.alloc_full(root, None);

        let mut stack: Vec<(&'s SnapshotNode, NodeId)> =
            root.children.iter().rev().map(|child| (child, root_id)).collect();

        while let Some((snapshot, parent)) = stack.pop() {
            let id = self.alloc_full(snapshot, Some(parent));
            self.full_mut(parent).children.push(id);
            stack.extend(snapshot.children.iter().rev().map(|child| (child, id)));
        }

        root_id
    }

    fn alloc_full(&mut self, snapshot: &'s SnapshotNode, parent: Option<NodeId>) -> NodeId {
        let attrs = NodeAttrs::from_snapshot(snapshot);
        let id = self.nodes.alloc(NodeData::Full(FullNode::new(attrs, parent)));
        if let Some(key) = snapshot.id {
            self.identity.insert(key, id);
        }
        self.visited.push((snapshot, id));
        id
    }

    fn link_siblings(&mut self) {
        for index in 0..self.visited.len() {
            let (snapshot, id) = self.visited[index];

            let mut siblings = Siblings::default();
            for relation in Sibling::ALL {
                if let Some(target) = snapshot.sibling(relation) {
                    siblings.set(relation, self.resolve(target));
                }
            }
            self.full_mut(id).siblings = siblings;
        }
    }

    /// Reuses the node built for `target`, or allocates a detached stand-in
    /// when `target` was not part of the walk.
    fn resolve(&mut self, target: &SnapshotNode) -> NodeId {
        if let Some(id) = target.id.and_then(|key| self.identity.get(key)) {
            return id;
        }
        self.stand_ins += 1;
        self.nodes.alloc(NodeData::StandIn(NodeAttrs::from_snapshot(target)))
    }

    #[track_caller]
    fn full_mut(&mut self, id: NodeId) -> &mut FullNode {
        match &mut self.nodes[id] {
            NodeData::Full(node) => node,
            NodeData::StandIn(_) => unreachable!("stand-ins are never parents or walked nodes"),
        }
    }
}
