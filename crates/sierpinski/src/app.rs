use sierpinski_engine::chaos::Sample;
use sierpinski_engine::core::{App, AppControl, FrameCtx};
use sierpinski_engine::device::Gpu;
use sierpinski_engine::input::{InputFrame, Key};
use sierpinski_engine::paint::Color;
use sierpinski_engine::render::{PointCloud, PointRenderer};
use sierpinski_engine::shader::ShaderProgram;

use crate::config::ShaderPaths;

/// Seconds of frame time averaged into one fps log line.
const STATS_INTERVAL: f32 = 5.0;

/// Draws a fixed point cloud every frame until Escape or close.
pub struct SierpinskiApp {
    clear: Color,
    shaders: ShaderPaths,

    /// Host copy of the point cloud; taken on upload.
    samples: Option<Vec<Sample>>,

    cloud: Option<PointCloud>,
    renderer: Option<PointRenderer>,

    stats: FrameStats,
}

impl SierpinskiApp {
    pub fn new(samples: Vec<Sample>, shaders: ShaderPaths, clear: Color) -> Self {
        Self {
            clear,
            shaders,
            samples: Some(samples),
            cloud: None,
            renderer: None,
            stats: FrameStats::default(),
        }
    }
}

impl App for SierpinskiApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) {
        let Some(samples) = self.samples.take() else {
            return;
        };

        self.cloud = Some(PointCloud::upload(gpu.device(), &samples));
        drop(samples);

        let program = ShaderProgram::load(&self.shaders.vertex, &self.shaders.fragment);
        let renderer = PointRenderer::new(gpu.device(), gpu.surface_format(), program.as_ref());
        if !renderer.has_pipeline() {
            log::warn!("no usable point pipeline; frames will only be cleared");
        }
        self.renderer = Some(renderer);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if exit_requested(ctx.input_frame) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        if let Some(fps) = self.stats.record(ctx.time.dt) {
            log::debug!("frame {}: {fps:.1} fps", ctx.time.frame_index);
        }

        let cloud = self.cloud.as_ref();
        let renderer = self.renderer.as_ref();

        ctx.render(self.clear, |_, target| {
            if let (Some(renderer), Some(cloud)) = (renderer, cloud) {
                renderer.render(target, cloud);
            }
        })
    }
}

/// Escape ends the render loop on the frame it was pressed in.
fn exit_requested(frame: &InputFrame) -> bool {
    frame.pressed(Key::Escape)
}

/// Frame counter reporting an average rate once per interval.
#[derive(Debug, Default)]
struct FrameStats {
    elapsed: f32,
    frames: u32,
}

impl FrameStats {
    /// Counts one frame of `dt` seconds; returns the average fps when an
    /// interval has filled up.
    fn record(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt;

        if self.elapsed < STATS_INTERVAL {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        *self = Self::default();
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_engine::input::{InputEvent, InputState, KeyState};

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(frame, InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        });
    }

    // ── exit ──────────────────────────────────────────────────────────────

    #[test]
    fn escape_press_requests_exit() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::Escape);

        assert!(exit_requested(&frame));
    }

    #[test]
    fn other_keys_keep_running() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::Unknown);
        state.apply_event(&mut frame, InputEvent::Focused(true));

        assert!(!exit_requested(&frame));
    }

    #[test]
    fn quiet_frame_keeps_running() {
        assert!(!exit_requested(&InputFrame::default()));
    }

    // ── stats ─────────────────────────────────────────────────────────────

    #[test]
    fn stats_stay_quiet_inside_an_interval() {
        let mut stats = FrameStats::default();
        for _ in 0..10 {
            assert_eq!(stats.record(0.1), None);
        }
    }

    #[test]
    fn stats_report_average_and_restart() {
        let mut stats = FrameStats::default();

        for _ in 0..9 {
            assert!(stats.record(0.5).is_none());
        }
        let fps = stats.record(0.5).unwrap();
        assert!((fps - 2.0).abs() < 1e-6);

        assert!(stats.record(0.5).is_none());
    }
}
