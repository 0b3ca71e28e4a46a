use crate::error::{InputResult, ensure_finite_product, ensure_positive};
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};

/// Axis-aligned square centered on the origin
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn try_new(side: f64) -> InputResult<Self> {
        ensure_positive("side", side)?;
        ensure_finite_product("side", side, side)?;
        Ok(Self { side })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Region for Square {
    #[inline(always)]
    fn contains(&self, Point(x, y): Point) -> bool {
        let half = self.side / 2.0;
        x.abs() < half && y.abs() < half
    }

    fn bbox(&self) -> Rect {
        Rect::centered(self.side, self.side)
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}
