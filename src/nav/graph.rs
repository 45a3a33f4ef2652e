//! Proximity graph construction
//!
//! Connects every ordered pair of nodes within a fixed radius with a
//! directed, distance-weighted edge.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, NodeSet};

/// Maximum distance at which two nodes are connected, in world units.
///
/// The threshold is inclusive: nodes exactly this far apart are connected.
pub const CONNECT_RADIUS: f32 = 8.0;

/// A directed, weighted edge between two nodes.
///
/// The cost is the Euclidean distance between the endpoints at build time.
/// A connection from A to B does not imply one from B to A exists; the
/// builder creates each direction independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Source node
    pub from: NodeId,
    /// Destination node
    pub to: NodeId,
    /// Traversal cost (non-negative)
    pub cost: f32,
}

/// A directed graph of connections between nearby nodes.
///
/// Immutable after [`Graph::build`] and safe to reuse across any number of
/// searches. The graph is a snapshot: it must be rebuilt whenever the node
/// set changes, and the caller owns that freshness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    connections: Vec<Connection>,
}

impl Graph {
    /// Build a graph connecting all node pairs within [`CONNECT_RADIUS`].
    #[must_use]
    pub fn build(nodes: &NodeSet) -> Self {
        Self::build_with_radius(nodes, CONNECT_RADIUS)
    }

    /// Build a graph connecting all node pairs within `radius` (inclusive).
    ///
    /// Produces an empty graph when fewer than two nodes exist. O(V²) in
    /// the number of nodes.
    #[must_use]
    pub fn build_with_radius(nodes: &NodeSet, radius: f32) -> Self {
        let mut connections = Vec::new();

        // Need at least two nodes to connect
        if nodes.len() < 2 {
            return Self { connections };
        }

        for (from, from_position) in nodes.iter() {
            for (to, to_position) in nodes.iter() {
                if from == to {
                    continue;
                }

                let distance = from_position.distance(to_position);
                if distance <= radius {
                    connections.push(Connection {
                        from,
                        to,
                        cost: distance,
                    });
                }
            }
        }

        log::debug!(
            "Built graph: {} nodes, {} connections",
            nodes.len(),
            connections.len()
        );

        Self { connections }
    }

    /// Iterate the outgoing connections of a node, in build order.
    ///
    /// Linear scan over the connection list; the order matters to callers
    /// that break cost ties by first discovery.
    pub fn connections_from(&self, node: NodeId) -> impl Iterator<Item = Connection> + '_ {
        self.connections
            .iter()
            .copied()
            .filter(move |c| c.from == node)
    }

    /// Access the full connection list in build order
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Get the total number of connections
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Check if the graph has no connections
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_threshold_inclusive() {
        let mut nodes = NodeSet::new();
        let a = nodes.insert(Vec3::ZERO);
        let b = nodes.insert(Vec3::new(8.0, 0.0, 0.0));

        // Exactly at the radius: both directions connected
        let graph = Graph::build(&nodes);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.connections_from(a).count(), 1);
        assert_eq!(graph.connections_from(b).count(), 1);
    }

    #[test]
    fn test_threshold_excludes_beyond_radius() {
        let mut nodes = NodeSet::new();
        nodes.insert(Vec3::ZERO);
        nodes.insert(Vec3::new(8.1, 0.0, 0.0));

        let graph = Graph::build(&nodes);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_fewer_than_two_nodes() {
        let empty = NodeSet::new();
        assert!(Graph::build(&empty).is_empty());

        let mut single = NodeSet::new();
        single.insert(Vec3::ZERO);
        assert!(Graph::build(&single).is_empty());
    }

    #[test]
    fn test_no_self_connections() {
        let mut nodes = NodeSet::new();
        nodes.insert(Vec3::ZERO);
        nodes.insert(Vec3::new(1.0, 0.0, 0.0));
        nodes.insert(Vec3::new(2.0, 0.0, 0.0));

        let graph = Graph::build(&nodes);
        assert!(graph.connections().iter().all(|c| c.from != c.to));
    }

    #[test]
    fn test_cost_is_distance() {
        let mut nodes = NodeSet::new();
        let a = nodes.insert(Vec3::ZERO);
        nodes.insert(Vec3::new(3.0, 4.0, 0.0));

        let graph = Graph::build(&nodes);
        let connection = graph.connections_from(a).next().unwrap();
        assert!((connection.cost - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_build_order() {
        // Three mutually connected nodes: connections appear in ordered-pair
        // sweep order (0,1), (0,2), (1,0), (1,2), (2,0), (2,1)
        let mut nodes = NodeSet::new();
        let n0 = nodes.insert(Vec3::ZERO);
        let n1 = nodes.insert(Vec3::new(1.0, 0.0, 0.0));
        let n2 = nodes.insert(Vec3::new(2.0, 0.0, 0.0));

        let graph = Graph::build(&nodes);
        let pairs: Vec<(NodeId, NodeId)> =
            graph.connections().iter().map(|c| (c.from, c.to)).collect();
        assert_eq!(
            pairs,
            vec![(n0, n1), (n0, n2), (n1, n0), (n1, n2), (n2, n0), (n2, n1)]
        );
    }

    #[test]
    fn test_custom_radius() {
        let mut nodes = NodeSet::new();
        let a = nodes.insert(Vec3::ZERO);
        nodes.insert(Vec3::new(10.0, 0.0, 0.0));

        assert!(Graph::build(&nodes).is_empty());

        let wide = Graph::build_with_radius(&nodes, 12.0);
        assert_eq!(wide.connections_from(a).count(), 1);
    }
}
