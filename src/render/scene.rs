use anyhow::{Context, Result};
use glow::HasContext;
use log::info;

use crate::config::RenderConfig;
use crate::geometry;
use crate::render::mesh::Mesh;
use crate::render::shader::ShaderProgram;

/// Everything the render loop draws: one shader program, one mesh, and
/// the clear color behind them.
pub struct Scene {
    program: ShaderProgram,
    mesh: Mesh,
    clear_color: [f32; 4],
}

impl Scene {
    /// Builds the shader program from the configured source files and
    /// uploads the demo mesh.
    pub fn load(gl: &glow::Context, config: &RenderConfig) -> Result<Self> {
        let program =
            ShaderProgram::from_files(gl, &config.vertex_shader, &config.fragment_shader)
                .context("Failed to build shader program")?;
        info!(
            "Loaded shader program from {} and {}",
            config.vertex_shader.display(),
            config.fragment_shader.display()
        );

        let (vertices, indices) = geometry::triforce();
        let mesh = Mesh::upload(gl, &vertices, &indices).context("Failed to upload mesh")?;
        info!(
            "Uploaded mesh ({} vertices, {} indices)",
            vertices.len(),
            indices.len()
        );

        Ok(Self {
            program,
            mesh,
            clear_color: config.clear_color,
        })
    }

    pub fn draw(&self, gl: &glow::Context) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        self.program.activate(gl);
        self.mesh.draw(gl);
    }

    /// Releases the mesh first, then the program.
    pub fn destroy(self, gl: &glow::Context) {
        self.mesh.destroy(gl);
        self.program.destroy(gl);
    }
}
