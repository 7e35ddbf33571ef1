use super::{compile, link, CompiledShader, ShaderError, ShaderPath};

/// Entry point name of every GLSL stage.
pub const ENTRY_POINT: &str = "main";

/// A linked vertex + fragment pair ready for pipeline creation.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: CompiledShader,
    fragment: CompiledShader,
}

impl ShaderProgram {
    pub(super) fn from_linked(vertex: CompiledShader, fragment: CompiledShader) -> Self {
        Self { vertex, fragment }
    }

    #[inline]
    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    /// Loads, compiles and links both stages, stopping at the first failure.
    pub fn try_load(vertex: &ShaderPath, fragment: &ShaderPath) -> Result<Self, ShaderError> {
        let vertex = compile(&vertex.load()?)?;
        let fragment = compile(&fragment.load()?)?;
        link(vertex, fragment)
    }

    /// Loads, compiles and links both stages, logging every failure.
    ///
    /// Both stages are attempted even if the first one fails so that all
    /// diagnostics show up in one run. `None` means there is nothing to draw
    /// with; callers keep running and just clear the screen.
    pub fn load(vertex: &ShaderPath, fragment: &ShaderPath) -> Option<Self> {
        let vertex = load_stage(vertex);
        let fragment = load_stage(fragment);
        let (vertex, fragment) = (vertex?, fragment?);

        match link(vertex, fragment) {
            Ok(program) => {
                log::info!(
                    "linked shader program ({} + {})",
                    program.vertex.path().display(),
                    program.fragment.path().display()
                );
                Some(program)
            }
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }
}

fn load_stage(path: &ShaderPath) -> Option<CompiledShader> {
    match path.load().and_then(|source| compile(&source)) {
        Ok(shader) => Some(shader),
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}
