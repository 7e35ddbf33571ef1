//! Coordinate and geometry types shared by the generator and the renderer.
//!
//! Canonical space is normalized device coordinates:
//! - origin at the window center
//! - +X right, +Y up
//! - z is carried through unchanged

mod vec3;

pub use vec3::Vec3;
