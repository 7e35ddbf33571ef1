//! wgpu device and window surface.
//!
//! [`Gpu`] owns the device, queue and configured surface for one window.
//! A frame is acquired with [`Gpu::begin_frame`], recorded into, then handed
//! back to [`Gpu::submit`] which presents it.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
