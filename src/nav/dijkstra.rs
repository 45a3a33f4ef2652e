//! Single-pair shortest-path search
//!
//! Dijkstra's algorithm over a proximity graph, producing the ordered
//! connection sequence from a start node to a goal node.

use glam::Vec3;

use super::frontier::{ClosedList, NodeRecord, OpenList};
use super::graph::{Connection, Graph};
use super::node::{NodeId, NodeSet};

/// An ordered sequence of connections from a start node to a goal node.
///
/// Empty when the search started at its goal. Unreachable goals are
/// signalled by [`pathfind`] returning `None`, not by an empty path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    /// Connections in start-to-goal order
    pub connections: Vec<Connection>,
    /// Total traversal cost
    pub cost: f32,
}

impl Path {
    /// Get the number of connections in the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Check if the path has no connections (start equals goal)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Translate the connection chain into waypoint positions.
    ///
    /// Returns the start position followed by the destination of each
    /// connection. `nodes` must be the set the graph was built from; empty
    /// paths yield no waypoints.
    #[must_use]
    pub fn waypoints(&self, nodes: &NodeSet) -> Vec<Vec3> {
        let mut waypoints = Vec::with_capacity(self.connections.len() + 1);
        if let Some(first) = self.connections.first() {
            waypoints.extend(nodes.position(first.from));
        }
        for connection in &self.connections {
            waypoints.extend(nodes.position(connection.to));
        }
        waypoints
    }
}

/// Find the cheapest path from `start` to `goal`.
///
/// Returns `None` when the goal is unreachable; this is a normal outcome,
/// not an error. When `start == goal` the result is an empty path with
/// zero cost. Repeated calls with the same inputs return identical paths.
#[must_use]
pub fn pathfind(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Path> {
    let mut open = OpenList::new();
    let mut closed = ClosedList::new();

    open.insert(NodeRecord {
        node: start,
        incoming: None,
        cost_so_far: 0.0,
    });

    // The goal record never enters the closed list: reconstruction reads it
    // directly and walks only its ancestors through the closed list. Every
    // ancestor is finalized before the goal is extracted, so the backward
    // walk cannot dead-end.
    let goal_record = loop {
        // Frontier exhausted without reaching the goal
        let Some(current) = open.extract_min() else {
            break None;
        };

        if current.node == goal {
            break Some(current);
        }

        for connection in graph.connections_from(current.node) {
            let end = connection.to;
            let tentative = current.cost_so_far + connection.cost;

            // Already finalized with an equal-or-better cost
            if closed.contains(end) {
                continue;
            }

            if let Some(existing) = open.find(end) {
                // An equal-cost route keeps the earlier-found connection
                if existing.cost_so_far <= tentative {
                    continue;
                }
                open.reroute(end, tentative, connection);
            } else {
                open.insert(NodeRecord {
                    node: end,
                    incoming: Some(connection),
                    cost_so_far: tentative,
                });
            }
        }

        open.remove(current.node);
        closed.insert(current);
    };

    let Some(goal_record) = goal_record else {
        log::debug!("No path from {start} to {goal}");
        return None;
    };

    // Walk back from the goal, accumulating connections until the start
    // record, which has none.
    let mut connections = Vec::new();
    let mut current = goal_record;
    while let Some(connection) = current.incoming {
        connections.push(connection);
        let Some(previous) = closed.find(connection.from) else {
            break;
        };
        current = *previous;
    }
    connections.reverse();

    log::trace!(
        "Path from {start} to {goal}: {} connections, cost {}",
        connections.len(),
        goal_record.cost_so_far
    );

    Some(Path {
        connections,
        cost: goal_record.cost_so_far,
    })
}
