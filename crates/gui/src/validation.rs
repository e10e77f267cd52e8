//! Geometry checks for built cuboid meshes.
//!
//! A node's face mesh must be a closed box: 24 vertices (4 per face),
//! 12 triangles, axis-aligned unit normals, one color, and an AABB that
//! matches the node's extents and center.

use crate::state::scene::SceneNode;
use crate::viewport::bounds::Aabb;
use crate::viewport::mesh::MeshData;

pub const CUBOID_VERTICES: usize = 24;
pub const CUBOID_TRIANGLES: usize = 12;

/// Tolerance for f64 -> f32 geometry comparisons
const GEOMETRY_EPSILON: f32 = 1e-4;
const COLOR_EPSILON: f32 = 0.01;

/// Checks a face mesh against the cuboid it was built from
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Extents of the mesh AABB (width, height, depth)
    pub fn extents(&self) -> [f32; 3] {
        Aabb::from_mesh(self.mesh).size().to_array()
    }

    pub fn center(&self) -> [f32; 3] {
        Aabb::from_mesh(self.mesh).center().to_array()
    }

    /// Every normal is a unit vector along one of ±X, ±Y, ±Z
    pub fn has_axis_aligned_normals(&self) -> bool {
        self.mesh.vertices.chunks_exact(9).all(|v| {
            let n = [v[3].abs(), v[4].abs(), v[5].abs()];
            let ones = n.iter().filter(|c| (*c - 1.0).abs() < GEOMETRY_EPSILON).count();
            let zeros = n.iter().filter(|c| **c < GEOMETRY_EPSILON).count();
            ones == 1 && zeros == 2
        })
    }

    /// Every vertex carries `color`
    pub fn has_uniform_color(&self, color: [f32; 3]) -> bool {
        self.vertex_count() > 0
            && self.mesh.vertices.chunks_exact(9).all(|v| {
                (0..3).all(|i| (v[6 + i] - color[i]).abs() < COLOR_EPSILON)
            })
    }

    /// Compare the mesh with `node`; an empty list means it matches.
    pub fn check_node(&self, node: &SceneNode) -> Vec<String> {
        let mut errors = Vec::new();

        if self.vertex_count() != CUBOID_VERTICES || self.triangle_count() != CUBOID_TRIANGLES {
            errors.push(format!(
                "expected {CUBOID_VERTICES} vertices / {CUBOID_TRIANGLES} triangles, got {} / {}",
                self.vertex_count(),
                self.triangle_count()
            ));
        }

        let expected_extents = node.dimensions.as_array().map(|x| x as f32);
        if !approx3(self.extents(), expected_extents) {
            errors.push(format!(
                "extents {:?} differ from dimensions {:?}",
                self.extents(),
                expected_extents
            ));
        }

        let expected_center = node.position.map(|x| x as f32);
        if !approx3(self.center(), expected_center) {
            errors.push(format!(
                "center {:?} differs from position {:?}",
                self.center(),
                expected_center
            ));
        }

        if !self.has_uniform_color(node.style.color) {
            errors.push(format!("faces are not uniformly {:?}", node.style.color));
        }

        if !self.has_axis_aligned_normals() {
            errors.push("normals are not axis-aligned unit vectors".to_string());
        }

        errors
    }
}

fn approx3(actual: [f32; 3], expected: [f32; 3]) -> bool {
    actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| (a - e).abs() < GEOMETRY_EPSILON)
}
