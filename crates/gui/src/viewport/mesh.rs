use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Debug)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 7
    }

    pub fn segment_count(&self) -> usize {
        self.vertex_count() / 2
    }
}

// ── Cuboid generation ────────────────────────────────────────

/// Axis-aligned cuboid of extents `w`×`h`×`d` centered at `center`
pub fn cuboid(w: f32, h: f32, d: f32, center: Vec3, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            push_vert(&mut vertices, center + *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// The 12 edges of a cuboid as line segments
pub fn cuboid_edges(w: f32, h: f32, d: f32, center: Vec3, color: [f32; 4]) -> LineMeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    // Corner i has bit 0 → +X, bit 1 → +Y, bit 2 → +Z
    let corner = |i: usize| {
        center
            + Vec3::new(
                if i & 1 != 0 { hw } else { -hw },
                if i & 2 != 0 { hh } else { -hh },
                if i & 4 != 0 { hd } else { -hd },
            )
    };

    let mut vertices = Vec::with_capacity(24 * 7);
    for a in 0..8 {
        for bit in [1, 2, 4] {
            if a & bit == 0 {
                push_line_vert(&mut vertices, corner(a), color);
                push_line_vert(&mut vertices, corner(a | bit), color);
            }
        }
    }

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, p: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, c[0], c[1], c[2], c[3]]);
}
