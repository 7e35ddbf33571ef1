use rand::Rng;

use crate::coords::Vec3;

use super::anchors::{AnchorSet, ANCHOR_COUNT};
use super::sample::Sample;

/// The chaos-game walk as an endless iterator of samples.
///
/// The walk starts on anchor 0. Each step asks `pick` for an anchor index
/// (reduced modulo [`ANCHOR_COUNT`]), moves halfway toward that anchor, takes
/// its color unblended and yields the result. No initial samples are skipped.
pub struct ChaosWalk<'a, F> {
    anchors: &'a AnchorSet,
    pick: F,
    position: Vec3,
    color: Vec3,
}

impl<'a, F> ChaosWalk<'a, F>
where
    F: FnMut() -> usize,
{
    pub fn new(anchors: &'a AnchorSet, pick: F) -> Self {
        let start = anchors.get(0);
        Self {
            anchors,
            pick,
            position: start.position,
            color: start.color,
        }
    }
}

impl<F> Iterator for ChaosWalk<'_, F>
where
    F: FnMut() -> usize,
{
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let target = self.anchors.get((self.pick)());

        self.position = self.position.midpoint(target.position);
        self.color = target.color;

        Some(Sample::new(self.position, self.color))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Runs the walk for `count` steps with an explicit index source.
pub fn generate_with<F>(anchors: &AnchorSet, count: usize, pick: F) -> Vec<Sample>
where
    F: FnMut() -> usize,
{
    ChaosWalk::new(anchors, pick).take(count).collect()
}

/// Runs the walk for `count` steps, drawing anchors uniformly from `rng`.
pub fn generate<R: Rng>(anchors: &AnchorSet, count: usize, rng: &mut R) -> Vec<Sample> {
    generate_with(anchors, count, || rng.gen_range(0..ANCHOR_COUNT))
}
