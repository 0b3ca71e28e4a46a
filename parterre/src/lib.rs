//! Problem model for placing clearance-constrained circular items inside 2D domains.

/// Geometric primitives and the domain shapes
pub mod geometry;

/// Entities to model a placement problem and its candidate solutions
pub mod entities;

/// Importing instances into and exporting candidates out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Errors raised while validating user supplied input
pub mod error;
