pub mod config;
pub mod geometry;
pub mod render;

// Re-export commonly used types
pub use config::{Config, RenderConfig, WindowConfig};
pub use render::context::GlContext;
pub use render::mesh::{Mesh, MeshError, Vertex};
pub use render::scene::Scene;
pub use render::shader::{ShaderError, ShaderProgram, ShaderStage};
