use bytemuck::{Pod, Zeroable};

use crate::coords::Vec3;

/// One generated point: where the walk landed and the color it picked up.
///
/// Layout (24 bytes, tightly packed):
///
///  offset  0  position  [f32; 3]   loc 0
///  offset 12  color     [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Sample {
    pub position: Vec3,
    pub color: Vec3,
}

impl Sample {
    #[inline]
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}
