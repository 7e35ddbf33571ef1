//! GLSL shader loading, compilation and linking.
//!
//! Shaders are plain `.vert` / `.frag` GLSL files read at runtime. The flow is:
//!
//! 1. [`ShaderPath::new`] validates the stage/extension pairing (startup config check)
//! 2. [`ShaderPath::load`] reads the source
//! 3. [`compile`] parses and validates it with naga's GLSL front-end
//! 4. [`link`] checks the vertex/fragment interface against each other and
//!    against the [`Sample`](crate::chaos::Sample) vertex layout
//!
//! Every step returns a [`ShaderError`]. [`ShaderProgram::load`] runs the whole
//! chain, logs failures and yields `None` so callers can keep running with
//! nothing to draw.

mod compile;
mod error;
mod link;
mod program;
mod source;
mod stage;

pub use compile::{compile, CompiledShader};
pub use error::ShaderError;
pub use link::link;
pub use program::{ShaderProgram, ENTRY_POINT};
pub use source::{ShaderPath, ShaderSource};
pub use stage::ShaderStage;
