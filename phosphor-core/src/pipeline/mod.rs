//! Drawing context, present-lock batching and the shader pipeline

mod canvas;
mod shader;

pub use canvas::Canvas;
pub use shader::Shader;

/// Maximum number of post-processing stages a canvas can chain
pub const MAX_SHADERS: usize = 4;
