use std::path::PathBuf;

use thiserror::Error;

use super::ShaderStage;

/// Failures along the load → compile → link chain.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error(
        "shader ({}) is configured as a {stage} shader but has extension {}; expected .{expected}",
        .path.display(),
        display_extension(.found)
    )]
    ExtensionMismatch {
        path: PathBuf,
        stage: ShaderStage,
        expected: &'static str,
        found: Option<String>,
    },

    #[error("shader ({}) not found: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("shader ({}) failed to compile:\n{diagnostic}", .path.display())]
    Compile { path: PathBuf, diagnostic: String },

    #[error("shader program failed to link: {0}")]
    Link(String),
}

fn display_extension(found: &Option<String>) -> String {
    match found {
        Some(ext) => format!(".{ext}"),
        None => "<none>".to_string(),
    }
}
