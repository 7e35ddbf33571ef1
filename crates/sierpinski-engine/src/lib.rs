//! Sierpinski engine crate.
//!
//! This crate owns the platform + GPU runtime pieces, the chaos-game point
//! generator and the shader/point rendering path used by the application.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod chaos;
pub mod shader;
pub mod render;
pub mod paint;
