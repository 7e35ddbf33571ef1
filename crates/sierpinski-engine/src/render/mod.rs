//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] provided by the frame.
//!
//! Convention:
//! - geometry is uploaded in normalized device coordinates
//! - the viewport always covers the full surface

mod ctx;
mod points;

pub use ctx::{RenderCtx, RenderTarget};
pub use points::{PointCloud, PointRenderer};
