use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use glow::HasContext;
use std::mem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Failed to create GL object: {0}")]
    Create(String),
}

/// A single mesh vertex: position only, bound at attribute location 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
        }
    }
}

/// An uploaded, indexed triangle mesh: one VAO with its vertex and index
/// buffers, drawn as `TRIANGLES`.
pub struct Mesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: i32,
}

impl Mesh {
    /// Uploads vertex and index data into fresh GPU buffers (STATIC_DRAW).
    pub fn upload(
        gl: &glow::Context,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> Result<Self, MeshError> {
        unsafe {
            let vao = gl.create_vertex_array().map_err(MeshError::Create)?;
            let vbo = match gl.create_buffer() {
                Ok(buffer) => buffer,
                Err(reason) => {
                    gl.delete_vertex_array(vao);
                    return Err(MeshError::Create(reason));
                }
            };
            let ebo = match gl.create_buffer() {
                Ok(buffer) => buffer,
                Err(reason) => {
                    gl.delete_vertex_array(vao);
                    gl.delete_buffer(vbo);
                    return Err(MeshError::Create(reason));
                }
            };

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                mem::size_of::<Vertex>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);

            // VAO first; unbinding the element buffer any earlier would
            // clear it out of the VAO state.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(Self {
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Draws the whole mesh as indexed triangles.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }
    }

    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Deletes the GPU-side objects. Consumes the value; call once at
    /// shutdown, before context teardown.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(mem::size_of::<Vertex>(), 3 * mem::size_of::<f32>());
    }

    #[test]
    fn test_vertex_bytes_match_positions() {
        let vertices = [Vertex::new(Vec3::new(1.0, 2.0, 3.0)), Vertex::new(Vec3::ZERO)];

        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    }
}
