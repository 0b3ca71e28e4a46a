use thiserror::Error;

use crate::geometry::ShapeKind;

/// Errors caused by invalid shape or manifest parameters.
/// These indicate a configuration mistake, retrying will never resolve them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("missing parameter `{param}` for shape kind `{kind}`")]
    MissingParameter {
        kind: ShapeKind,
        param: &'static str,
    },

    #[error("unknown shape kind: `{0}`")]
    UnknownShapeKind(String),
}

pub type InputResult<T> = Result<T, InputError>;

/// Returns a [`InputError::Constraint`] if `value` is not a finite, strictly positive length.
pub(crate) fn ensure_positive(name: &str, value: f64) -> InputResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::Constraint(format!(
            "{name} should be a finite, strictly positive length, got {value}"
        )))
    }
}

/// Returns a [`InputError::Constraint`] unless `inner < outer`.
pub(crate) fn ensure_nested(axis: &str, inner: f64, outer: f64) -> InputResult<()> {
    if inner < outer {
        Ok(())
    } else {
        Err(InputError::Constraint(format!(
            "inner {axis} ({inner}) should be strictly smaller than outer {axis} ({outer})"
        )))
    }
}

/// Returns a [`InputError::Constraint`] if `a * b` overflows.
/// Containment tests and areas multiply lengths, so their products have to stay finite.
pub(crate) fn ensure_finite_product(name: &str, a: f64, b: f64) -> InputResult<()> {
    if (a * b).is_finite() {
        Ok(())
    } else {
        Err(InputError::Constraint(format!(
            "{name} too large: {a} x {b} overflows"
        )))
    }
}
