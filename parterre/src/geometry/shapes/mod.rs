mod annulus;
mod circle;
mod ellipse;
mod frame;
mod rectangle;
mod right_triangle;
mod square;

#[doc(inline)]
pub use annulus::Annulus;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use ellipse::Ellipse;
#[doc(inline)]
pub use frame::Frame;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use right_triangle::RightTriangle;
#[doc(inline)]
pub use square::Square;
