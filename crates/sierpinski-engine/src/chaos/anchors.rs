use crate::coords::Vec3;

/// Number of anchors in an [`AnchorSet`].
pub const ANCHOR_COUNT: usize = 3;

/// Slack for hull tests; halving accumulates rounding in the last few bits.
const HULL_EPSILON: f32 = 1e-5;

/// A fixed corner the walk jumps toward, paired with the color it stamps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor {
    pub position: Vec3,
    pub color: Vec3,
}

impl Anchor {
    #[inline]
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Exactly three anchors, paired by index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnchorSet {
    anchors: [Anchor; ANCHOR_COUNT],
}

impl AnchorSet {
    /// The triangle drawn by the application: right, left and top corners in
    /// green, red and blue.
    pub const SIERPINSKI: AnchorSet = AnchorSet::new([
        Anchor::new(Vec3::new(0.5, -0.5, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Anchor::new(Vec3::new(-0.5, -0.5, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        Anchor::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    ]);

    #[inline]
    pub const fn new(anchors: [Anchor; ANCHOR_COUNT]) -> Self {
        Self { anchors }
    }

    /// Anchor at `index` modulo [`ANCHOR_COUNT`].
    #[inline]
    pub fn get(&self, index: usize) -> &Anchor {
        &self.anchors[index % ANCHOR_COUNT]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    /// Barycentric weights of `p` with respect to the anchor triangle.
    ///
    /// `p` is assumed to lie in the triangle's plane. Returns `None` when the
    /// anchors are collinear.
    pub fn barycentric(&self, p: Vec3) -> Option<[f32; 3]> {
        let [a, b, c] = self.anchors.map(|anchor| anchor.position);

        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }

    /// Returns `true` if `p` lies inside the anchor triangle (edges included).
    pub fn contains(&self, p: Vec3) -> bool {
        self.barycentric(p)
            .is_some_and(|weights| weights.iter().all(|&w| w >= -HULL_EPSILON))
    }

    /// Returns `true` if `color` is exactly one of the anchor colors.
    pub fn has_color(&self, color: Vec3) -> bool {
        self.anchors.iter().any(|anchor| anchor.color == color)
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::SIERPINSKI
    }
}
