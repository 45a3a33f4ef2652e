//! A 3D waypoint-graph navigation library
//!
//! This library provides:
//! - Proximity-based graph construction over 3D node sets
//! - Single-pair shortest-path search (Dijkstra)
//! - Serializable node layouts in RON and JSON
//!
//! The surrounding application supplies the nodes, decides when to rebuild
//! the graph, and turns the resulting connection sequence into movement.

pub mod layout;
pub mod nav;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::layout::{LayoutError, LayoutNode, NodeLayout};
    pub use crate::nav::{CONNECT_RADIUS, Connection, Graph, NodeId, NodeSet, Path, pathfind};
    pub use glam::Vec3;
}
