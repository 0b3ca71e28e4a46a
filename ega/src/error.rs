use std::time::Duration;

use parterre::entities::Candidate;
use parterre::error::InputError;
use parterre::geometry::ShapeKind;
use thiserror::Error;

/// Everything that can go wrong while optimizing a placement.
#[derive(Error, Debug)]
pub enum EGAError {
    /// Invalid shape or manifest, surfaced unchanged and never retried
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The domain is (nearly) impossible to hit by sampling its bounding box
    #[error(
        "rejection sampling found no point inside the {shape} domain after {attempts} attempts"
    )]
    SamplingExhausted { shape: ShapeKind, attempts: usize },

    /// Every attempt ended without a feasible placement
    #[error(
        "no feasible placement found in {attempts} attempts ({elapsed:.2?}), best fitness: {best_fitness:.5}"
    )]
    ConvergenceFailure {
        best_fitness: f64,
        elapsed: Duration,
        attempts: usize,
        best: Box<Candidate>,
    },

    /// The time budget ran out before a feasible placement was found
    #[error(
        "time budget of {budget:.2?} exceeded after {attempts} attempts ({elapsed:.2?}), best fitness: {best_fitness:.5}"
    )]
    TimeBudgetExceeded {
        best_fitness: f64,
        elapsed: Duration,
        budget: Duration,
        attempts: usize,
        best: Box<Candidate>,
    },
}

impl EGAError {
    /// The best (infeasible) candidate, if the error carries one
    pub fn best_candidate(&self) -> Option<&Candidate> {
        match self {
            EGAError::ConvergenceFailure { best, .. }
            | EGAError::TimeBudgetExceeded { best, .. } => Some(best),
            _ => None,
        }
    }
}
