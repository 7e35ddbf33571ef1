//! Chaos-game point generation.
//!
//! A walker starts on the first anchor and repeatedly jumps halfway toward a
//! randomly chosen anchor. Every landing spot becomes a [`Sample`] carrying the
//! chosen anchor's color. With three triangle corners the samples converge on
//! the Sierpinski triangle.
//!
//! Randomness is always passed in explicitly; nothing here touches process-wide
//! state. Use [`SeedSource::Fixed`] for reproducible output.

mod anchors;
mod sample;
mod seed;
mod walk;

pub use anchors::{Anchor, AnchorSet, ANCHOR_COUNT};
pub use sample::Sample;
pub use seed::SeedSource;
pub use walk::{generate, generate_with, ChaosWalk};
