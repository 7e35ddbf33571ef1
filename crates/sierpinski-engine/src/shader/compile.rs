use std::path::{Path, PathBuf};

use naga::front::glsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{ShaderError, ShaderSource, ShaderStage};

/// A parsed and validated shader stage.
#[derive(Debug, Clone)]
pub struct CompiledShader {
    stage: ShaderStage,
    path: PathBuf,
    module: naga::Module,
}

impl CompiledShader {
    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn module(&self) -> &naga::Module {
        &self.module
    }
}

/// Parses GLSL for the source's stage and validates the resulting module.
///
/// Diagnostics carry the compiler text with source excerpts.
pub fn compile(source: &ShaderSource) -> Result<CompiledShader, ShaderError> {
    let compile_error = |diagnostic: String| ShaderError::Compile {
        path: source.path().to_path_buf(),
        diagnostic,
    };

    let mut frontend = glsl::Frontend::default();
    let options = glsl::Options::from(source.stage().to_naga());

    let module = frontend
        .parse(&options, source.text())
        .map_err(|errors| compile_error(errors.emit_to_string(source.text())))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|err| compile_error(err.emit_to_string(source.text())))?;

    log::debug!(
        "compiled {} shader {}",
        source.stage(),
        source.path().display()
    );

    Ok(CompiledShader {
        stage: source.stage(),
        path: source.path().to_path_buf(),
        module,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::test_sources::{FRAGMENT, VERTEX};

    #[test]
    fn valid_vertex_shader_compiles() {
        let src = ShaderSource::new(ShaderStage::Vertex, "inline.vert", VERTEX);
        let compiled = compile(&src).unwrap();
        assert_eq!(compiled.stage(), ShaderStage::Vertex);
        assert_eq!(compiled.module().entry_points.len(), 1);
        assert_eq!(compiled.module().entry_points[0].stage, naga::ShaderStage::Vertex);
    }

    #[test]
    fn valid_fragment_shader_compiles() {
        let src = ShaderSource::new(ShaderStage::Fragment, "inline.frag", FRAGMENT);
        let compiled = compile(&src).unwrap();
        assert_eq!(compiled.module().entry_points[0].stage, naga::ShaderStage::Fragment);
    }

    #[test]
    fn syntax_error_reports_diagnostic() {
        let src = ShaderSource::new(
            ShaderStage::Fragment,
            "broken.frag",
            "#version 450\nlayout(location = 0) out vec4 c;\nvoid main() { c = vec4(1.0 }\n",
        );
        let err = compile(&src).unwrap_err();
        match &err {
            ShaderError::Compile { path, diagnostic } => {
                assert_eq!(path, Path::new("broken.frag"));
                assert!(!diagnostic.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("failed to compile"));
    }

    #[test]
    fn undeclared_identifier_is_a_compile_error() {
        let src = ShaderSource::new(
            ShaderStage::Vertex,
            "typo.vert",
            "#version 450\nvoid main() { gl_Position = vec4(a_position, 1.0); }\n",
        );
        assert!(matches!(compile(&src), Err(ShaderError::Compile { .. })));
    }
}
