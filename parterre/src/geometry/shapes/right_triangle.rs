use crate::error::{InputResult, ensure_finite_product, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Right triangle whose bounding box is centered on the origin.
/// The right angle sits in the lower-left corner of the bounding box,
/// with the base along the bottom edge and the height along the left edge.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct RightTriangle {
    base: f64,
    height: f64,
}

impl RightTriangle {
    pub fn try_new(base: f64, height: f64) -> InputResult<Self> {
        ensure_positive("base", base)?;
        ensure_positive("height", height)?;
        ensure_finite_product("base and height", base, height)?;
        Ok(Self { base, height })
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Region for RightTriangle {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        // relative to the right-angle corner
        let u = x + self.base / 2.0;
        let v = y + self.height / 2.0;
        u > 0.0 && v > 0.0 && u * self.height + v * self.base < self.base * self.height
    }

    fn bbox(&self) -> Rect {
        Rect::centered(self.base, self.height)
    }

    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }
}
