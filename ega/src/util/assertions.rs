use float_cmp::approx_eq;
use log::error;
use parterre::entities::{Candidate, Instance};

use crate::opt::fitness::FitnessEvaluator;

/// Checks whether the cached fitness of a candidate still matches a fresh evaluation of its genes.
pub fn fitness_is_cached_consistently(
    candidate: &Candidate,
    evaluator: &FitnessEvaluator,
    instance: &Instance,
) -> bool {
    let Some(cached) = candidate.fitness() else {
        error!("candidate is not scored");
        return false;
    };
    let fresh = evaluator.score(candidate.genes(), instance);
    if !approx_eq!(f64, cached, fresh) {
        error!("cached fitness {cached} differs from re-evaluated fitness {fresh}");
        return false;
    }
    true
}
