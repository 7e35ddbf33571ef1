use std::path::{Path, PathBuf};

use super::{ShaderError, ShaderStage};

/// A shader file location checked against its stage.
///
/// Construction is the configuration-validation step: a `.frag` file handed
/// in as a vertex shader (or anything without the right extension) is
/// rejected here, before any file I/O happens.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShaderPath {
    stage: ShaderStage,
    path: PathBuf,
}

impl ShaderPath {
    pub fn new(stage: ShaderStage, path: impl Into<PathBuf>) -> Result<Self, ShaderError> {
        let path = path.into();
        let found = path.extension().and_then(|ext| ext.to_str());

        if found != Some(stage.extension()) {
            return Err(ShaderError::ExtensionMismatch {
                stage,
                expected: stage.extension(),
                found: found.map(str::to_owned),
                path,
            });
        }

        Ok(Self { stage, path })
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the shader source from disk.
    pub fn load(&self) -> Result<ShaderSource, ShaderError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| ShaderError::Read {
            path: self.path.clone(),
            source,
        })?;

        log::debug!(
            "loaded {} shader {} ({} bytes)",
            self.stage,
            self.path.display(),
            text.len()
        );

        Ok(ShaderSource {
            stage: self.stage,
            path: self.path.clone(),
            text,
        })
    }
}

/// GLSL text read from a [`ShaderPath`].
#[derive(Debug, Clone)]
pub struct ShaderSource {
    stage: ShaderStage,
    path: PathBuf,
    text: String,
}

impl ShaderSource {
    /// Wraps in-memory source; `path` is only used in diagnostics.
    pub fn new(stage: ShaderStage, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            stage,
            path: path.into(),
            text: text.into(),
        }
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extension validation ──────────────────────────────────────────────

    #[test]
    fn matching_extensions_are_accepted() {
        assert!(ShaderPath::new(ShaderStage::Vertex, "assets/shaders/Default.vert").is_ok());
        assert!(ShaderPath::new(ShaderStage::Fragment, "assets/shaders/Default.frag").is_ok());
    }

    #[test]
    fn swapped_extension_is_rejected() {
        let err = ShaderPath::new(ShaderStage::Vertex, "Default.frag").unwrap_err();
        match err {
            ShaderError::ExtensionMismatch { stage, expected, found, .. } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert_eq!(expected, "vert");
                assert_eq!(found.as_deref(), Some("frag"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_extension_is_rejected() {
        let err = ShaderPath::new(ShaderStage::Fragment, "shaders/Default").unwrap_err();
        assert!(matches!(err, ShaderError::ExtensionMismatch { found: None, .. }));
        assert!(err.to_string().contains("<none>"));
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        assert!(ShaderPath::new(ShaderStage::Vertex, "Default.VERT").is_err());
    }

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn missing_file_reports_path_and_reason() {
        let path = ShaderPath::new(ShaderStage::Vertex, "does/not/exist/Missing.vert").unwrap();
        let err = path.load().unwrap_err();
        match &err {
            ShaderError::Read { path, source } => {
                assert_eq!(path, Path::new("does/not/exist/Missing.vert"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Missing.vert"));
    }

    #[test]
    fn existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Point.frag");
        std::fs::write(&file, "#version 450\nvoid main() {}\n").unwrap();

        let source = ShaderPath::new(ShaderStage::Fragment, &file).unwrap().load().unwrap();
        assert_eq!(source.stage(), ShaderStage::Fragment);
        assert_eq!(source.path(), file.as_path());
        assert!(source.text().starts_with("#version 450"));
    }
}
