//! Scene graph state
//!
//! Holds the transient box primitives the renderer draws. Nodes are built
//! from the dimension store and never mutated in place: an edit removes
//! the old node and adds a freshly constructed one.

mod display;
mod node_ops;

pub use display::{node_display_name, role_display_name, short_id};

use shared::{BoxDimensions, BoxRole, Position};

/// Unique identifier of a scene node
pub type NodeId = String;

/// Edge wireframe color (RGBA), shared by all cuboids
pub const WIREFRAME_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Edge wireframe line width in pixels
pub const WIREFRAME_WIDTH: f32 = 2.0;

/// Visual style of a box primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    /// Face color RGB
    pub color: [f32; 3],
    /// Face opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Draw green edges on top of the faces
    pub wireframe: bool,
}

impl BoxStyle {
    pub const RED_TRANSPARENT: BoxStyle = BoxStyle {
        color: [1.0, 0.0, 0.0],
        opacity: 0.15,
        wireframe: true,
    };

    pub const BLUE_TRANSPARENT: BoxStyle = BoxStyle {
        color: [0.0, 0.0, 1.0],
        opacity: 0.15,
        wireframe: true,
    };

    pub fn for_role(role: BoxRole) -> Self {
        match role {
            BoxRole::Inner => Self::RED_TRANSPARENT,
            BoxRole::Outer | BoxRole::Secondary => Self::BLUE_TRANSPARENT,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// A renderable cuboid: extents, style and placement
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub role: BoxRole,
    pub dimensions: BoxDimensions,
    /// Center of the cuboid
    pub position: Position,
    pub style: BoxStyle,
}

impl SceneNode {
    /// Construct a node with a fresh ID and the role's default style
    pub fn new(role: BoxRole, dimensions: BoxDimensions, position: Position) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            dimensions,
            position,
            style: BoxStyle::for_role(role),
        }
    }
}

/// Scene graph with a version counter for GPU cache invalidation
#[derive(Default)]
pub struct SceneState {
    pub(crate) nodes: Vec<SceneNode>,
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node with the given role
    pub fn node_for_role(&self, role: BoxRole) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.role == role)
    }

    /// Number of nodes with the given role
    pub fn count_role(&self, role: BoxRole) -> usize {
        self.nodes.iter().filter(|n| n.role == role).count()
    }
}
