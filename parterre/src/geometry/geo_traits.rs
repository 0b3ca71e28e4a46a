use crate::geometry::primitives::{Point, Rect};

/// Trait for bounded 2D regions in which items can be placed.
///
/// Implementations are expected to be O(1) and free of square roots or other transcendental
/// operations, since [`Region::contains`] sits in the hot loop of rejection sampling.
pub trait Region {
    /// True if `p` lies strictly inside the admissible part of the region.
    fn contains(&self, p: Point) -> bool;

    /// Minimal axis-aligned rectangle enclosing the outer boundary of the region.
    fn bbox(&self) -> Rect;

    /// Area of the admissible part of the region (holes excluded).
    fn area(&self) -> f64;

    /// Fraction of the bounding box covered by the admissible region.
    /// Equals the expected acceptance rate of rejection sampling against [`Region::bbox`].
    fn sampling_efficiency(&self) -> f64 {
        self.area() / self.bbox().area()
    }
}
