use glow::HasContext;
use log::warn;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to read shader source {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{stage} shader compilation failed: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("Program linking failed: {0}")]
    Link(String),
    #[error("Failed to create GL object: {0}")]
    Create(String),
}

/// One compiled unit of the pipeline: vertex or fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// A linked vertex + fragment program resident on the GPU.
///
/// The wrapped handle always refers to a successfully linked program;
/// failed construction returns an error, never a partial object. The GL
/// context is passed into every operation rather than captured, since the
/// "currently bound program" slot belongs to the context, not to this
/// object.
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Builds a program from two GLSL source files on disk.
    ///
    /// Both files are read before any GL object is created; a missing or
    /// unreadable path fails the construction while the driver still holds
    /// nothing. An empty file is only warned about, since the compiler
    /// rejects the empty source itself at the compile stage.
    pub fn from_files<P: AsRef<Path>>(
        gl: &glow::Context,
        vertex_path: P,
        fragment_path: P,
    ) -> Result<Self, ShaderError> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        Self::from_sources(gl, &vertex_source, &fragment_source)
    }

    /// Builds a program from in-memory GLSL sources.
    ///
    /// Compile and link status are queried; a failure carries the driver's
    /// info log and leaves no shader or program object behind.
    pub fn from_sources(
        gl: &glow::Context,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(err);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(reason) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(ShaderError::Create(reason));
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            // The driver keeps the stages alive only as long as the program
            // exists; they can be flagged for deletion right after linking.
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            Ok(Self { program })
        }
    }

    /// Makes this program the active rendering target on the context.
    ///
    /// Stateless from the object's point of view; re-activating the same
    /// program is harmless.
    pub fn activate(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// The opaque driver-assigned program handle.
    pub fn program(&self) -> glow::Program {
        self.program
    }

    /// Deletes the driver-side program object.
    ///
    /// Consumes the value: release happens exactly once and the program
    /// cannot be activated afterwards.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    let source = fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if source.is_empty() {
        warn!("Shader file is empty: {}", path.display());
    }

    Ok(source)
}

fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_type())
            .map_err(ShaderError::Create)?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_read_source_returns_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.vert");
        fs::write(&path, "#version 330 core\nvoid main() {}\n").unwrap();

        assert_eq!(
            read_source(&path).unwrap(),
            "#version 330 core\nvoid main() {}\n"
        );
    }

    #[test]
    fn test_read_source_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.frag");

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
        assert!(err.to_string().contains("missing.frag"));
    }

    #[test]
    fn test_read_source_accepts_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.vert");
        File::create(&path).unwrap();

        // warned about, not rejected; the compiler gets to reject it later
        assert_eq!(read_source(&path).unwrap(), "");
    }

    #[test]
    fn test_stage_names_and_gl_types() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn test_compile_error_carries_stage_and_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:1(1): error: syntax error".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("fragment"));
        assert!(msg.contains("syntax error"));
    }
}
