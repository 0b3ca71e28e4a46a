use std::fmt::{Display, Formatter};

use crate::geometry::ShapeKind;
use crate::geometry::geo_traits::Region;
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::shapes::{Annulus, Circle, Ellipse, Frame, Rectangle, RightTriangle, Square};

/// The domain in which all items have to be placed.
///
/// Immutable once constructed: every variant validates its lengths on construction,
/// so a `Shape` can be shared read-only by all worker threads of an optimization run.
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum Shape {
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    RightTriangle(RightTriangle),
    Frame(Frame),
    Annulus(Annulus),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::RightTriangle(_) => ShapeKind::RightTriangle,
            Shape::Frame(_) => ShapeKind::Frame,
            Shape::Annulus(_) => ShapeKind::Annulus,
        }
    }
}

impl Region for Shape {
    #[inline(always)]
    fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Circle(s) => s.contains(p),
            Shape::Square(s) => s.contains(p),
            Shape::Rectangle(s) => s.contains(p),
            Shape::Ellipse(s) => s.contains(p),
            Shape::RightTriangle(s) => s.contains(p),
            Shape::Frame(s) => s.contains(p),
            Shape::Annulus(s) => s.contains(p),
        }
    }

    fn bbox(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bbox(),
            Shape::Square(s) => s.bbox(),
            Shape::Rectangle(s) => s.bbox(),
            Shape::Ellipse(s) => s.bbox(),
            Shape::RightTriangle(s) => s.bbox(),
            Shape::Frame(s) => s.bbox(),
            Shape::Annulus(s) => s.bbox(),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.area(),
            Shape::Square(s) => s.area(),
            Shape::Rectangle(s) => s.area(),
            Shape::Ellipse(s) => s.area(),
            Shape::RightTriangle(s) => s.area(),
            Shape::Frame(s) => s.area(),
            Shape::Annulus(s) => s.area(),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Circle(s) => write!(f, "circle(r={})", s.radius()),
            Shape::Square(s) => write!(f, "square(side={})", s.side()),
            Shape::Rectangle(s) => write!(f, "rectangle({} x {})", s.width(), s.height()),
            Shape::Ellipse(s) => write!(f, "ellipse(a={}, b={})", s.semi_width(), s.semi_height()),
            Shape::RightTriangle(s) => {
                write!(f, "right-triangle(base={}, height={})", s.base(), s.height())
            }
            Shape::Frame(s) => write!(
                f,
                "frame(inner {} x {}, outer {} x {})",
                s.inner_width(),
                s.inner_height(),
                s.outer_width(),
                s.outer_height()
            ),
            Shape::Annulus(s) => write!(
                f,
                "annulus(r_in={}, r_out={})",
                s.inner_radius(),
                s.outer_radius()
            ),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Shape::$variant(s)
                }
            }
        )*
    };
}

impl_from_variant!(Circle, Square, Rectangle, Ellipse, RightTriangle, Frame, Annulus);
