use glam::Vec3;

use super::mesh::{LineMeshData, MeshData};

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        Self::from_positions(data.vertices.chunks_exact(9))
    }

    /// Compute AABB from LineMeshData (7 floats per vertex: pos+color)
    pub fn from_lines(data: &LineMeshData) -> Self {
        Self::from_positions(data.vertices.chunks_exact(7))
    }

    fn from_positions<'a>(verts: impl Iterator<Item = &'a [f32]>) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for v in verts {
            let p = Vec3::new(v[0], v[1], v[2]);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extents (width, height, depth)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
