use std::collections::HashMap;

use glam::Mat4;
use glow::HasContext;

use super::mesh::{LineMeshData, MeshData};
use crate::build::NodeMeshes;
use crate::state::scene::{NodeId, WIREFRAME_WIDTH};

// ── Render parameters ────────────────────────────────────────

/// Parameters for rendering one viewport
pub struct RenderParams {
    /// Viewport rectangle [x, y, width, height] in pixels
    pub viewport: [f32; 4],
    /// Background color RGB
    pub bg_color: [u8; 3],
}

// ── GPU mesh handles ─────────────────────────────────────────

struct GpuMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ibo: glow::Buffer,
    index_count: i32,
}

struct GpuLines {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

struct GpuNode {
    faces: GpuMesh,
    edges: Option<GpuLines>,
    opacity: f32,
}

// ── Main GL renderer ─────────────────────────────────────────

/// Shared by all four views; node meshes are uploaded once per scene version.
pub struct GlRenderer {
    mesh_program: glow::Program,
    line_program: glow::Program,
    /// Node meshes keyed by scene node ID
    scene_nodes: HashMap<NodeId, GpuNode>,
    /// Version counter to detect scene changes
    last_scene_version: Option<u64>,
}

impl GlRenderer {
    pub fn new(gl: &glow::Context) -> Result<Self, String> {
        let mesh_program = compile_program(gl, MESH_VERT, MESH_FRAG)?;
        let line_program = compile_program(gl, LINE_VERT, LINE_FRAG)?;

        Ok(Self {
            mesh_program,
            line_program,
            scene_nodes: HashMap::new(),
            last_scene_version: None,
        })
    }

    /// Upload pre-built node meshes to GPU, replacing previous ones
    pub fn sync_from_meshes(
        &mut self,
        gl: &glow::Context,
        meshes: &HashMap<NodeId, NodeMeshes>,
        version: u64,
    ) {
        if self.last_scene_version == Some(version) {
            return;
        }
        self.last_scene_version = Some(version);

        for (_, node) in self.scene_nodes.drain() {
            delete_node(gl, &node);
        }

        for (id, node_meshes) in meshes {
            match upload_node(gl, node_meshes) {
                Ok(gpu) => {
                    self.scene_nodes.insert(id.clone(), gpu);
                }
                Err(e) => tracing::error!("Failed to upload node {id}: {e}"),
            }
        }
    }

    /// Render the scene with the given view-projection
    pub fn paint(&self, gl: &glow::Context, vp: &Mat4, params: &RenderParams) {
        unsafe {
            gl.viewport(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.scissor(
                params.viewport[0] as i32,
                params.viewport[1] as i32,
                params.viewport[2] as i32,
                params.viewport[3] as i32,
            );
            gl.enable(glow::SCISSOR_TEST);

            gl.clear_color(
                params.bg_color[0] as f32 / 255.0,
                params.bg_color[1] as f32 / 255.0,
                params.bg_color[2] as f32 / 255.0,
                1.0,
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.enable(glow::DEPTH_TEST);
            gl.depth_func(glow::LESS);

            // Opaque pass: edge wireframes
            gl.use_program(Some(self.line_program));
            set_uniform_mat4(gl, self.line_program, "u_mvp", vp);
            // Widths above 1.0 are driver-dependent; core profiles may clamp
            // to 1.0 or raise INVALID_VALUE.
            gl.line_width(WIREFRAME_WIDTH);
            for node in self.scene_nodes.values() {
                if let Some(ref edges) = node.edges {
                    draw_lines(gl, edges);
                }
            }
            gl.line_width(1.0);

            // Transparent pass: faces blended without depth writes
            gl.use_program(Some(self.mesh_program));
            set_uniform_mat4(gl, self.mesh_program, "u_mvp", vp);
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            gl.depth_mask(false);
            for node in self.scene_nodes.values() {
                set_uniform_f32(gl, self.mesh_program, "u_alpha", node.opacity);
                draw_mesh(gl, &node.faces);
            }
            gl.depth_mask(true);
            gl.disable(glow::BLEND);

            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::SCISSOR_TEST);
            gl.use_program(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.mesh_program);
            gl.delete_program(self.line_program);
        }
        for (_, node) in self.scene_nodes.drain() {
            delete_node(gl, &node);
        }
    }
}

// ── GPU upload ───────────────────────────────────────────────

fn upload_node(gl: &glow::Context, data: &NodeMeshes) -> Result<GpuNode, String> {
    let faces = upload_mesh(gl, &data.faces)?;
    let edges = match data.edges.as_ref().map(|e| upload_lines(gl, e)).transpose() {
        Ok(edges) => edges,
        Err(e) => {
            delete_mesh(gl, &faces);
            return Err(e);
        }
    };
    Ok(GpuNode {
        faces,
        edges,
        opacity: data.opacity,
    })
}

fn upload_mesh(gl: &glow::Context, data: &MeshData) -> Result<GpuMesh, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = 9 * 4; // 9 floats * 4 bytes
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // color: location 2 (normals at offset 3 are unused by the unlit shader)
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_f32(2, 3, glow::FLOAT, false, stride, 6 * 4);

        let ibo = gl.create_buffer()?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ibo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&data.indices),
            glow::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            vbo,
            ibo,
            index_count: data.indices.len() as i32,
        })
    }
}

fn upload_lines(gl: &glow::Context, data: &LineMeshData) -> Result<GpuLines, String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl.create_buffer()?;
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&data.vertices),
            glow::STATIC_DRAW,
        );

        let stride = 7 * 4; // 7 floats * 4 bytes
        // position: location 0
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
        // color: location 1
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(1, 4, glow::FLOAT, false, stride, 3 * 4);

        gl.bind_vertex_array(None);

        Ok(GpuLines {
            vao,
            vbo,
            vertex_count: data.vertex_count() as i32,
        })
    }
}

fn delete_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    unsafe {
        gl.delete_vertex_array(mesh.vao);
        gl.delete_buffer(mesh.vbo);
        gl.delete_buffer(mesh.ibo);
    }
}

fn delete_node(gl: &glow::Context, node: &GpuNode) {
    delete_mesh(gl, &node.faces);
    if let Some(ref edges) = node.edges {
        unsafe {
            gl.delete_vertex_array(edges.vao);
            gl.delete_buffer(edges.vbo);
        }
    }
}

// ── Draw calls ───────────────────────────────────────────────

unsafe fn draw_mesh(gl: &glow::Context, mesh: &GpuMesh) {
    gl.bind_vertex_array(Some(mesh.vao));
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.ibo));
    gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
    gl.bind_vertex_array(None);
}

unsafe fn draw_lines(gl: &glow::Context, lines: &GpuLines) {
    gl.bind_vertex_array(Some(lines.vao));
    gl.draw_arrays(glow::LINES, 0, lines.vertex_count);
    gl.bind_vertex_array(None);
}

// ── Shader compilation ───────────────────────────────────────

fn compile_shader(gl: &glow::Context, kind: u32, src: &str) -> Result<glow::Shader, String> {
    unsafe {
        let shader = gl.create_shader(kind)?;
        gl.shader_source(shader, src);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(format!("Shader compile error: {log}"));
        }
        Ok(shader)
    }
}

fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
) -> Result<glow::Program, String> {
    unsafe {
        let vert = compile_shader(gl, glow::VERTEX_SHADER, vert_src)?;
        let frag = match compile_shader(gl, glow::FRAGMENT_SHADER, frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(vert);
                return Err(e);
            }
        };

        let program = gl.create_program()?;
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(format!("Program link error: {log}"));
        }

        Ok(program)
    }
}

// ── Uniform setters ──────────────────────────────────────────

fn set_uniform_mat4(gl: &glow::Context, program: glow::Program, name: &str, mat: &Mat4) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_matrix_4_f32_slice(loc.as_ref(), false, &mat.to_cols_array());
    }
}

fn set_uniform_f32(gl: &glow::Context, program: glow::Program, name: &str, v: f32) {
    unsafe {
        let loc = gl.get_uniform_location(program, name);
        gl.uniform_1_f32(loc.as_ref(), v);
    }
}

// ── Shaders ──────────────────────────────────────────────────

const MESH_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 2) in vec3 a_color;

out vec3 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const MESH_FRAG: &str = r#"#version 330 core
uniform float u_alpha;

in vec3 v_color;

out vec4 frag_color;

void main() {
    frag_color = vec4(v_color, u_alpha);
}
"#;

const LINE_VERT: &str = r#"#version 330 core
uniform mat4 u_mvp;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec4 a_color;

out vec4 v_color;

void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
    v_color = a_color;
}
"#;

const LINE_FRAG: &str = r#"#version 330 core
in vec4 v_color;
out vec4 frag_color;

void main() {
    frag_color = v_color;
}
"#;
