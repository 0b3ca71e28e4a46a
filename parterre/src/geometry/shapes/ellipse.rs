use std::f64::consts::PI;

use crate::error::{InputResult, ensure_finite_product, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Axis-aligned ellipse centered on the origin
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Ellipse {
    semi_width: f64,
    semi_height: f64,
}

impl Ellipse {
    pub fn try_new(semi_width: f64, semi_height: f64) -> InputResult<Self> {
        ensure_positive("semi-width", semi_width)?;
        ensure_positive("semi-height", semi_height)?;
        ensure_finite_product(
            "semi-axes",
            semi_width * semi_width,
            semi_height * semi_height,
        )?;
        Ok(Self {
            semi_width,
            semi_height,
        })
    }

    pub fn semi_width(&self) -> f64 {
        self.semi_width
    }

    pub fn semi_height(&self) -> f64 {
        self.semi_height
    }
}

impl Region for Ellipse {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        // (x/a)² + (y/b)² < 1, multiplied through by a²b²
        let (a2, b2) = (self.semi_width.powi(2), self.semi_height.powi(2));
        x * x * b2 + y * y * a2 < a2 * b2
    }

    fn bbox(&self) -> Rect {
        Rect::centered(2.0 * self.semi_width, 2.0 * self.semi_height)
    }

    fn area(&self) -> f64 {
        PI * self.semi_width * self.semi_height
    }
}
