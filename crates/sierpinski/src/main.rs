//! Sierpiński triangle, drawn with the chaos game.
//!
//! Generates the point cloud once, uploads it and redraws it every frame
//! until Escape is pressed or the window is closed.

mod app;
mod config;

use anyhow::Result;

use sierpinski_engine::chaos::{self, AnchorSet};
use sierpinski_engine::device::GpuInit;
use sierpinski_engine::logging::{init_logging, LoggingConfig};
use sierpinski_engine::window::Runtime;

use app::SierpinskiApp;
use config::AppConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::from_env();

    let shaders = match config.validate() {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return Err(e.into());
        }
    };

    let mut rng = config.seed.rng();
    let samples = chaos::generate(&AnchorSet::SIERPINSKI, config.sample_count, &mut rng);
    log::info!("generated {} samples (seed: {})", samples.len(), config.seed);

    let app = SierpinskiApp::new(samples, shaders, config.clear_color);
    Runtime::run(config.runtime, GpuInit::default(), app)
}
