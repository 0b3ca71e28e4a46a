use std::f64::consts::PI;

use crate::error::{InputResult, ensure_finite_product, ensure_nested, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Ring between two concentric circles centered on the origin
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Annulus {
    inner_radius: f64,
    outer_radius: f64,
}

impl Annulus {
    pub fn try_new(inner_radius: f64, outer_radius: f64) -> InputResult<Self> {
        ensure_positive("innerRadius", inner_radius)?;
        ensure_positive("outerRadius", outer_radius)?;
        ensure_nested("radius", inner_radius, outer_radius)?;
        ensure_finite_product("outerRadius", outer_radius, outer_radius)?;
        Ok(Self {
            inner_radius,
            outer_radius,
        })
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }
}

impl Region for Annulus {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        let sq_d = x * x + y * y;
        sq_d > self.inner_radius * self.inner_radius && sq_d < self.outer_radius * self.outer_radius
    }

    fn bbox(&self) -> Rect {
        Rect::centered(2.0 * self.outer_radius, 2.0 * self.outer_radius)
    }

    fn area(&self) -> f64 {
        PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }
}
