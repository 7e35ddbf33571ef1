use std::borrow::Cow;

use wgpu::util::DeviceExt;

use crate::chaos::Sample;
use crate::shader::{ShaderProgram, ENTRY_POINT};

use super::RenderTarget;

impl Sample {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    /// Vertex buffer layout: tightly packed samples, one vertex per sample.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Sample>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Raw bytes uploaded for `samples`.
fn sample_bytes(samples: &[Sample]) -> &[u8] {
    bytemuck::cast_slice(samples)
}

/// Samples resident in a GPU vertex buffer.
///
/// Uploaded once; the host copy can be dropped afterwards.
#[derive(Debug)]
pub struct PointCloud {
    buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl PointCloud {
    pub fn upload(device: &wgpu::Device, samples: &[Sample]) -> Self {
        let count = u32::try_from(samples.len()).unwrap_or(u32::MAX);
        if count as usize != samples.len() {
            log::warn!(
                "point cloud truncated to {count} of {} samples",
                samples.len()
            );
        }

        // wgpu does not need a buffer for an empty draw; skip the zero-sized allocation.
        let buffer = (count > 0).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("sierpinski point vbo"),
                contents: sample_bytes(&samples[..count as usize]),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });

        log::info!(
            "uploaded {count} points ({} bytes)",
            count as usize * std::mem::size_of::<Sample>()
        );

        Self { buffer, count }
    }

}

/// Draws a [`PointCloud`] as a point list with a linked shader program.
///
/// Built without a program (the shaders failed to load, compile or link), or
/// with one the device rejects, it records nothing and the frame shows only
/// the clear color.
pub struct PointRenderer {
    pipeline: Option<wgpu::RenderPipeline>,
}

impl PointRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        program: Option<&ShaderProgram>,
    ) -> Self {
        let pipeline = program.and_then(|program| create_pipeline(device, surface_format, program));
        Self { pipeline }
    }

    #[inline]
    pub fn has_pipeline(&self) -> bool {
        self.pipeline.is_some()
    }

    pub fn render(&self, target: &mut RenderTarget<'_>, cloud: &PointCloud) {
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(buffer) = cloud.buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sierpinski point pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, buffer.slice(..));
        rpass.draw(0..cloud.count, 0..1);
    }
}

/// Builds the point pipeline inside a validation error scope. A program the
/// device rejects is logged and yields `None`.
fn create_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    program: &ShaderProgram,
) -> Option<wgpu::RenderPipeline> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let vs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sierpinski vertex shader"),
        source: wgpu::ShaderSource::Naga(Cow::Owned(program.vertex().module().clone())),
    });
    let fs = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sierpinski fragment shader"),
        source: wgpu::ShaderSource::Naga(Cow::Owned(program.fragment().module().clone())),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sierpinski point pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sierpinski point pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &vs,
            entry_point: Some(ENTRY_POINT),
            compilation_options: Default::default(),
            buffers: &[Sample::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &fs,
            entry_point: Some(ENTRY_POINT),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::PointList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        log::error!(
            "shader program ({} + {}) rejected by the device: {err}",
            program.vertex().path().display(),
            program.fragment().path().display()
        );
        return None;
    }

    Some(pipeline)
}
