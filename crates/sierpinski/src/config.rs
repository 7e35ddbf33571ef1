use std::path::PathBuf;

use sierpinski_engine::chaos::SeedSource;
use sierpinski_engine::paint::Color;
use sierpinski_engine::shader::{ShaderError, ShaderPath, ShaderStage};
use sierpinski_engine::window::RuntimeConfig;

/// Environment variable that pins the generator seed.
pub const SEED_ENV: &str = "SIERPINSKI_SEED";

/// Application-level configuration.
///
/// All values are fixed at build time except the seed, which may be pinned
/// through [`SEED_ENV`] to reproduce a point cloud.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub runtime: RuntimeConfig,

    /// Number of chaos-game samples generated at startup.
    pub sample_count: usize,

    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,

    /// Background the frame is cleared to before the points are drawn.
    pub clear_color: Color,

    pub seed: SeedSource,
}

/// Shader paths that passed the startup extension check.
#[derive(Debug, Clone)]
pub struct ShaderPaths {
    pub vertex: ShaderPath,
    pub fragment: ShaderPath,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            sample_count: 30_000,
            vertex_shader: PathBuf::from("./assets/shaders/Default.vert"),
            fragment_shader: PathBuf::from("./assets/shaders/Default.frag"),
            clear_color: Color::BLACK,
            seed: SeedSource::Entropy,
        }
    }
}

impl AppConfig {
    /// Defaults, with the seed taken from the environment when set.
    pub fn from_env() -> Self {
        let seed = match std::env::var(SEED_ENV) {
            Ok(raw) => parse_seed(&raw).unwrap_or_else(|| {
                log::warn!("ignoring {SEED_ENV}={raw:?}: not an unsigned 64-bit integer");
                SeedSource::Entropy
            }),
            Err(_) => SeedSource::Entropy,
        };

        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks the shader paths against their stages.
    ///
    /// A mismatch is a configuration error and aborts startup.
    pub fn validate(&self) -> Result<ShaderPaths, ShaderError> {
        Ok(ShaderPaths {
            vertex: ShaderPath::new(ShaderStage::Vertex, self.vertex_shader.clone())?,
            fragment: ShaderPath::new(ShaderStage::Fragment, self.fragment_shader.clone())?,
        })
    }
}

fn parse_seed(raw: &str) -> Option<SeedSource> {
    raw.trim().parse::<u64>().ok().map(SeedSource::Fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults_match_the_shipped_program() {
        let config = AppConfig::default();
        assert_eq!(config.sample_count, 30_000);
        assert_eq!(config.clear_color, Color::BLACK);
        assert_eq!(config.seed, SeedSource::Entropy);
        assert_eq!(config.runtime.initial_size.width, 1920);
        assert_eq!(config.runtime.initial_size.height, 1080);
    }

    #[test]
    fn default_shader_paths_validate() {
        let paths = AppConfig::default().validate().unwrap();
        assert_eq!(paths.vertex.stage(), ShaderStage::Vertex);
        assert_eq!(paths.fragment.stage(), ShaderStage::Fragment);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn swapped_shader_paths_are_rejected() {
        let config = AppConfig {
            vertex_shader: PathBuf::from("./assets/shaders/Default.frag"),
            fragment_shader: PathBuf::from("./assets/shaders/Default.vert"),
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ShaderError::ExtensionMismatch { stage: ShaderStage::Vertex, .. }
        ));
    }

    // ── seed parsing ──────────────────────────────────────────────────────

    #[test]
    fn seed_parses_unsigned_integers() {
        assert_eq!(parse_seed("42"), Some(SeedSource::Fixed(42)));
        assert_eq!(parse_seed(" 7 \n"), Some(SeedSource::Fixed(7)));
        assert_eq!(parse_seed("18446744073709551615"), Some(SeedSource::Fixed(u64::MAX)));
    }

    #[test]
    fn seed_rejects_garbage() {
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed("0x10"), None);
        assert_eq!(parse_seed("seed"), None);
    }
}
