use crate::error::{InputResult, ensure_finite_product, ensure_nested, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Rectangular frame: an axis-aligned rectangle with a concentric rectangular hole, centered on the origin.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Frame {
    inner_width: f64,
    inner_height: f64,
    outer_width: f64,
    outer_height: f64,
}

impl Frame {
    pub fn try_new(
        inner_width: f64,
        inner_height: f64,
        outer_width: f64,
        outer_height: f64,
    ) -> InputResult<Self> {
        ensure_positive("innerWidth", inner_width)?;
        ensure_positive("innerHeight", inner_height)?;
        ensure_positive("outerWidth", outer_width)?;
        ensure_positive("outerHeight", outer_height)?;
        ensure_nested("width", inner_width, outer_width)?;
        ensure_nested("height", inner_height, outer_height)?;
        ensure_finite_product("outer extent", outer_width, outer_height)?;
        Ok(Self {
            inner_width,
            inner_height,
            outer_width,
            outer_height,
        })
    }

    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }

    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }

    pub fn outer_height(&self) -> f64 {
        self.outer_height
    }
}

impl Region for Frame {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        let (ax, ay) = (x.abs(), y.abs());
        let in_outer = ax < self.outer_width / 2.0 && ay < self.outer_height / 2.0;
        let in_hole = ax <= self.inner_width / 2.0 && ay <= self.inner_height / 2.0;
        in_outer && !in_hole
    }

    fn bbox(&self) -> Rect {
        Rect::centered(self.outer_width, self.outer_height)
    }

    fn area(&self) -> f64 {
        self.outer_width * self.outer_height - self.inner_width * self.inner_height
    }
}
