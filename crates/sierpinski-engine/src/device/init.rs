/// Knobs for surface and device creation.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if the surface offers one.
    pub prefer_srgb: bool,

    /// Requested present mode; unsupported modes fall back to FIFO, which
    /// also paces the redraw loop.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode. `None` (or an unsupported mode) takes the
    /// surface's first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            // Point lists with per-vertex color need nothing beyond the baseline.
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
