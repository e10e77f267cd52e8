//! Scene node → mesh conversion

use glam::Vec3;

use super::NodeMeshes;
use crate::state::scene::{SceneNode, WIREFRAME_COLOR};
use crate::viewport::mesh::{cuboid, cuboid_edges};

/// Build face and edge meshes for a single node
pub fn build_node_meshes(node: &SceneNode) -> NodeMeshes {
    let [w, h, d] = node.dimensions.as_array().map(|v| v as f32);
    let center = Vec3::new(
        node.position[0] as f32,
        node.position[1] as f32,
        node.position[2] as f32,
    );

    let faces = cuboid(w, h, d, center, node.style.color);
    let edges = node
        .style
        .wireframe
        .then(|| cuboid_edges(w, h, d, center, WIREFRAME_COLOR));

    NodeMeshes {
        faces,
        edges,
        opacity: node.style.opacity,
    }
}

#[cfg(test)]
mod tests {
    use shared::{BoxDimensions, BoxRole};

    use super::*;
    use crate::state::scene::BoxStyle;
    use crate::viewport::bounds::Aabb;

    #[test]
    fn test_node_mesh_matches_node_geometry() {
        let node = SceneNode::new(
            BoxRole::Inner,
            BoxDimensions::new(1.0, 2.0, 4.0),
            [0.5, -2.0, 0.0],
        );
        let meshes = build_node_meshes(&node);

        let aabb = Aabb::from_mesh(&meshes.faces);
        assert_eq!(aabb.size(), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(aabb.center(), Vec3::new(0.5, -2.0, 0.0));
        assert_eq!(meshes.opacity, 0.15);

        let edges = meshes.edges.unwrap();
        assert_eq!(edges.segment_count(), 12);
        assert_eq!(&edges.vertices[3..7], &WIREFRAME_COLOR);
    }

    #[test]
    fn test_face_color_follows_style() {
        let node = SceneNode::new(BoxRole::Outer, BoxDimensions::new(1.0, 1.0, 1.0), [0.0; 3]);
        let meshes = build_node_meshes(&node);
        assert_eq!(&meshes.faces.vertices[6..9], &BoxStyle::BLUE_TRANSPARENT.color);
    }

    #[test]
    fn test_no_wireframe_when_disabled() {
        let mut node =
            SceneNode::new(BoxRole::Outer, BoxDimensions::new(1.0, 1.0, 1.0), [0.0; 3]);
        node.style.wireframe = false;
        assert!(build_node_meshes(&node).edges.is_none());
    }
}
