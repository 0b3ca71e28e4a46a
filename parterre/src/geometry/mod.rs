pub mod geo_traits;
pub mod primitives;
pub mod shapes;

mod shape;
mod shape_kind;

#[doc(inline)]
pub use shape::Shape;
#[doc(inline)]
pub use shape_kind::ShapeKind;
