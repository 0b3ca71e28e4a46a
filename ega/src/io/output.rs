use std::time::Duration;

use parterre::entities::{Candidate, Instance};
use parterre::io::export::export_candidate;
use parterre::io::ext_repr::{ExtInstance, ExtPlacement};
use serde::{Deserialize, Serialize};

use crate::config::EGAConfig;
use crate::opt::retry::Solution;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EGAOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: EGAConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub placement: ExtPlacement,
    pub is_feasible: bool,
    pub attempts_used: usize,
    /// Cumulative run time of all attempts in milliseconds
    pub run_time_ms: u64,
}

impl ExtSolution {
    pub fn new(
        instance: &Instance,
        best: &Candidate,
        is_feasible: bool,
        attempts_used: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            placement: export_candidate(instance, best),
            is_feasible,
            attempts_used,
            run_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn from_solution(instance: &Instance, solution: &Solution) -> Self {
        Self::new(
            instance,
            &solution.best,
            solution.is_feasible,
            solution.attempts_used,
            solution.elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parterre::entities::{Gene, ItemKind, Manifest};
    use parterre::geometry::primitives::Point;
    use parterre::geometry::shapes::Square;

    #[test]
    fn run_time_saturates() {
        let kind = ItemKind::try_new(0, "herb", 8, "parsley", 0.4, 1).unwrap();
        let best = Candidate::new(vec![Gene::new(Point(0.0, 0.0), &kind)]).scored(0.0);
        let instance = Instance::new(
            Square::try_new(2.0).unwrap().into(),
            Manifest::try_new(vec![kind]).unwrap(),
        );

        let slow = ExtSolution::new(&instance, &best, true, 1, Duration::MAX);
        assert_eq!(slow.run_time_ms, u64::MAX);

        let quick = ExtSolution::new(&instance, &best, true, 1, Duration::from_micros(2_500));
        assert_eq!(quick.run_time_ms, 2);
    }
}
