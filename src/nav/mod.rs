//! Waypoint navigation module
//!
//! Provides proximity graph construction and shortest-path search over
//! sets of 3D nodes.

mod dijkstra;
mod frontier;
mod graph;
mod node;

pub use dijkstra::{Path, pathfind};
pub use graph::{CONNECT_RADIUS, Connection, Graph};
pub use node::{NodeId, NodeSet};
