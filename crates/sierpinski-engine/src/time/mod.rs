//! Time subsystem.
//!
//! Frame timing is observational only: presentation (FIFO) paces the loop and
//! nothing here throttles it. Call `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
