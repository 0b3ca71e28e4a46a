///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle of the given dimensions, centered on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0,
            "invalid rectangle dimensions: {width} x {height}"
        );
        Rect {
            x_min: -width / 2.0,
            y_min: -height / 2.0,
            x_max: width / 2.0,
            y_max: height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Largest of the two dimensions
    pub fn max_dimension(&self) -> f64 {
        f64::max(self.width(), self.height())
    }
}
