//! Paint model shared between the application and renderers.
//!
//! Colors are linear, premultiplied alpha.

pub mod color;

pub use color::Color;
