use crate::error::{InputResult, ensure_finite_product, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Axis-aligned rectangle centered on the origin
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn try_new(width: f64, height: f64) -> InputResult<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_finite_product("width and height", width, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Region for Rectangle {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        x.abs() < self.width / 2.0 && y.abs() < self.height / 2.0
    }

    fn bbox(&self) -> Rect {
        Rect::centered(self.width, self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}
