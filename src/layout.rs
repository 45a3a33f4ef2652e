//! Node layout serialization
//!
//! Supports saving and loading node layouts in RON (Rusty Object Notation)
//! and JSON formats, so waypoint sets can be authored as data files.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::nav::NodeSet;

/// A serializable navigation node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Optional node name
    pub name: Option<String>,
    /// Position in world space
    pub position: Vec3,
}

impl LayoutNode {
    /// Create an unnamed node at the given position
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            name: None,
            position,
        }
    }
}

/// A serializable layout containing multiple nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeLayout {
    /// Layout name
    pub name: String,
    /// Layout version for compatibility
    pub version: u32,
    /// All nodes in the layout
    pub nodes: Vec<LayoutNode>,
}

impl NodeLayout {
    /// Create a new empty layout
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: 1,
            nodes: Vec::new(),
        }
    }

    /// Capture an existing node set as a layout, in node order
    #[must_use]
    pub fn from_node_set(name: impl Into<String>, nodes: &NodeSet) -> Self {
        let mut layout = Self::new(name);
        layout.nodes = nodes
            .iter()
            .map(|(_, position)| LayoutNode::at(position))
            .collect();
        layout
    }

    /// Add a node to the layout
    pub fn add_node(&mut self, node: LayoutNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    /// Build a [`NodeSet`] from the layout positions, in layout order
    #[must_use]
    pub fn to_node_set(&self) -> NodeSet {
        let mut set = NodeSet::new();
        for node in &self.nodes {
            set.insert(node.position);
        }
        set
    }

    /// Save the layout to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| LayoutError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| LayoutError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a layout from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|e| LayoutError::IoError(e.to_string()))?;
        let layout: NodeLayout =
            ron::from_str(&content).map_err(|e| LayoutError::DeserializeError(e.to_string()))?;
        Ok(layout)
    }

    /// Save the layout to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), LayoutError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| LayoutError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a layout from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|e| LayoutError::IoError(e.to_string()))?;
        let layout: NodeLayout = serde_json::from_str(&content)
            .map_err(|e| LayoutError::DeserializeError(e.to_string()))?;
        Ok(layout)
    }

    /// Get the number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the layout is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Errors that can occur during layout operations
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Graph, pathfind};

    #[test]
    fn test_layout_serialization_ron() {
        let mut layout = NodeLayout::new("Test Layout");

        layout.add_node(LayoutNode {
            name: Some("Gate".to_string()),
            position: Vec3::new(1.0, 2.0, 3.0),
        });

        // Serialize to RON string
        let ron_str =
            ron::ser::to_string_pretty(&layout, ron::ser::PrettyConfig::default()).unwrap();
        assert!(ron_str.contains("Gate"));

        // Deserialize back
        let loaded: NodeLayout = ron::from_str(&ron_str).unwrap();
        assert_eq!(loaded.name, "Test Layout");
        assert_eq!(loaded.node_count(), 1);
        assert_eq!(loaded.nodes[0].name, Some("Gate".to_string()));
    }

    #[test]
    fn test_layout_serialization_json() {
        let mut layout = NodeLayout::new("JSON Test");

        layout.add_node(LayoutNode::at(Vec3::X));
        layout.add_node(LayoutNode::at(Vec3::new(4.0, 1.0, 0.0)));

        let json_str = serde_json::to_string(&layout).unwrap();

        let loaded: NodeLayout = serde_json::from_str(&json_str).unwrap();
        assert_eq!(loaded.name, "JSON Test");
        assert_eq!(loaded.node_count(), 2);
        assert_eq!(loaded.nodes[1].position, Vec3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_layout_to_node_set_searchable() {
        let mut layout = NodeLayout::new("Corridor");
        layout.add_node(LayoutNode::at(Vec3::ZERO));
        layout.add_node(LayoutNode::at(Vec3::new(5.0, 0.0, 0.0)));
        layout.add_node(LayoutNode::at(Vec3::new(10.0, 0.0, 0.0)));

        let nodes = layout.to_node_set();
        assert_eq!(nodes.len(), 3);

        let graph = Graph::build(&nodes);
        let ids: Vec<_> = nodes.ids().collect();
        let path = pathfind(&graph, ids[0], ids[2]).unwrap();
        assert!((path.cost - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_node_set_round_trip() {
        let mut nodes = NodeSet::new();
        nodes.insert(Vec3::new(1.0, 0.0, -1.0));
        nodes.insert(Vec3::new(2.0, 3.0, 4.0));

        let layout = NodeLayout::from_node_set("Captured", &nodes);
        let rebuilt = layout.to_node_set();

        assert_eq!(rebuilt.len(), nodes.len());
        for (id, position) in nodes.iter() {
            assert_eq!(rebuilt.position(id), Some(position));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = NodeLayout::load_ron("/nonexistent/layout.ron");
        assert!(matches!(result, Err(LayoutError::IoError(_))));
    }
}
