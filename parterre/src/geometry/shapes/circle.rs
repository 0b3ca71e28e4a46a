use std::f64::consts::PI;

use crate::error::{InputResult, ensure_finite_product, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Disc centered on the origin
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn try_new(radius: f64) -> InputResult<Self> {
        ensure_positive("radius", radius)?;
        ensure_finite_product("radius", radius, radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Region for Circle {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        x * x + y * y < self.radius * self.radius
    }

    fn bbox(&self) -> Rect {
        Rect::centered(2.0 * self.radius, 2.0 * self.radius)
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
