pub mod context;
pub mod mesh;
pub mod scene;
pub mod shader;

pub use context::GlContext;
pub use mesh::{Mesh, MeshError, Vertex};
pub use scene::Scene;
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
