//! Node identity and storage
//!
//! Nodes are points of interest supplied by the surrounding application.
//! The navigation core only reads their positions and compares their
//! identities.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An opaque handle identifying a node in a [`NodeSet`].
///
/// Handles compare by identity, never by position: two nodes at the same
/// position are still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Get the raw index of this node
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.0)
    }
}

/// A set of navigation nodes with 3D positions.
///
/// The set is append-only; the surrounding application rebuilds the graph
/// whenever the set changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSet {
    positions: Vec<Vec3>,
}

impl NodeSet {
    /// Create a new empty node set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the given position and return its handle
    pub fn insert(&mut self, position: Vec3) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(position);
        id
    }

    /// Get the position of a node
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<Vec3> {
        self.positions.get(node.index()).copied()
    }

    /// Get the number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the set has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate all node handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.positions.len()).map(|i| NodeId(i as u32))
    }

    /// Iterate all nodes with their positions, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Vec3)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (NodeId(i as u32), p))
    }

    /// Find the node closest to a world position.
    ///
    /// Returns `None` for an empty set. Equidistant candidates keep the
    /// earlier-inserted node.
    #[must_use]
    pub fn nearest(&self, position: Vec3) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for (id, p) in self.iter() {
            let distance = p.distance_squared(position);
            match best {
                Some((_, closest)) if distance >= closest => {}
                _ => best = Some((id, distance)),
            }
        }
        best.map(|(id, _)| id)
    }
}
