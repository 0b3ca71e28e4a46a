use std::time::Duration;

use log::{info, warn};
use parterre::entities::{Candidate, Instance};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::EGAConfig;
use crate::error::EGAError;
use crate::opt::ega_optimizer::{EGAOptimizer, RunResult};

/// A feasible placement, together with what it took to find it.
#[derive(Clone, Debug)]
pub struct Solution {
    pub best: Candidate,
    pub is_feasible: bool,
    pub attempts_used: usize,
    /// Cumulative time over all attempts
    pub elapsed: Duration,
}

/// Bookkeeping of the retry loop, passed by value from one attempt to the next.
#[derive(Clone, Debug, Default)]
pub struct RetryState {
    pub attempts_used: usize,
    pub elapsed: Duration,
    /// Best (infeasible) candidate over all attempts so far
    pub best: Option<Candidate>,
}

impl RetryState {
    pub fn best_fitness(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::NEG_INFINITY, |c| c.score())
    }
}

#[derive(Debug)]
pub enum RetryDecision {
    /// The attempt produced a feasible placement
    Accept(Solution),
    /// The attempt failed, but another one is allowed
    Retry(RetryState),
    /// The attempt failed and no further attempts are allowed
    GiveUp(EGAError),
}

/// Folds the outcome of one attempt into the retry state and decides how to proceed.
pub fn evaluate_attempt(state: RetryState, run: RunResult, config: &EGAConfig) -> RetryDecision {
    let attempts_used = state.attempts_used + 1;
    let elapsed = state.elapsed + run.elapsed;

    if run.is_feasible {
        return RetryDecision::Accept(Solution {
            best: run.best,
            is_feasible: true,
            attempts_used,
            elapsed,
        });
    }

    let best = match state.best {
        Some(prev) if prev.score() >= run.best.score() => prev,
        _ => run.best,
    };
    let best_fitness = best.score();

    if attempts_used >= config.max_retry_attempts {
        return RetryDecision::GiveUp(EGAError::ConvergenceFailure {
            best_fitness,
            elapsed,
            attempts: attempts_used,
            best: Box::new(best),
        });
    }
    if let Some(budget) = config.time_budget() {
        if elapsed >= budget {
            return RetryDecision::GiveUp(EGAError::TimeBudgetExceeded {
                best_fitness,
                elapsed,
                budget,
                attempts: attempts_used,
                best: Box::new(best),
            });
        }
    }

    RetryDecision::Retry(RetryState {
        attempts_used,
        elapsed,
        best: Some(best),
    })
}

/// Runs the genetic algorithm until it produces a feasible placement,
/// for at most `max_retry_attempts` independent attempts.
///
/// Configuration and input errors as well as sampling exhaustion are returned immediately.
/// If no attempt produces a feasible placement, [`EGAError::ConvergenceFailure`]
/// (or [`EGAError::TimeBudgetExceeded`]) is returned, carrying the best infeasible candidate.
pub fn run_optimization(instance: &Instance, config: &EGAConfig) -> Result<Solution, EGAError> {
    config.validate()?;

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut state = RetryState::default();
    loop {
        info!(
            "[EGA] attempt {}/{}",
            state.attempts_used + 1,
            config.max_retry_attempts
        );
        let attempt_rng = SmallRng::seed_from_u64(rng.random());
        let run = EGAOptimizer::new(instance.clone(), *config, attempt_rng)?.solve()?;

        match evaluate_attempt(state, run, config) {
            RetryDecision::Accept(solution) => {
                info!(
                    "[EGA] feasible placement found in attempt {} ({:.3}s total), fitness {:.5}",
                    solution.attempts_used,
                    solution.elapsed.as_secs_f64(),
                    solution.best.score()
                );
                return Ok(solution);
            }
            RetryDecision::Retry(next) => {
                warn!(
                    "[EGA] attempt {} did not converge (best fitness so far {:.5}), retrying",
                    next.attempts_used,
                    next.best_fitness()
                );
                state = next;
            }
            RetryDecision::GiveUp(err) => {
                warn!("[EGA] giving up: {err}");
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parterre::entities::{Gene, ItemKind};
    use parterre::geometry::primitives::Point;

    fn run(fitness: f64, secs: u64) -> RunResult {
        let kind = ItemKind::try_new(0, "herb", 5, "sage", 1.0, 1).unwrap();
        RunResult {
            best: Candidate::new(vec![Gene::new(Point(0.0, 0.0), &kind)]).scored(fitness),
            is_feasible: fitness >= 0.0,
            elapsed: Duration::from_secs(secs),
            n_generations: 1,
            n_evaluations: 10,
        }
    }

    #[test]
    fn feasible_attempt_is_accepted() {
        let config = EGAConfig::default();
        match evaluate_attempt(RetryState::default(), run(0.2, 3), &config) {
            RetryDecision::Accept(sol) => {
                assert_eq!(sol.attempts_used, 1);
                assert_eq!(sol.elapsed, Duration::from_secs(3));
                assert!(sol.is_feasible);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn state_accumulates_and_keeps_the_best() {
        let config = EGAConfig {
            max_retry_attempts: 3,
            ..EGAConfig::default()
        };
        let RetryDecision::Retry(state) = evaluate_attempt(RetryState::default(), run(-2.0, 1), &config)
        else {
            panic!("expected a retry")
        };
        let RetryDecision::Retry(state) = evaluate_attempt(state, run(-5.0, 2), &config) else {
            panic!("expected a retry")
        };
        assert_eq!(state.attempts_used, 2);
        assert_eq!(state.elapsed, Duration::from_secs(3));
        assert_eq!(state.best_fitness(), -2.0);

        match evaluate_attempt(state, run(-1.0, 1), &config) {
            RetryDecision::GiveUp(EGAError::ConvergenceFailure {
                best_fitness,
                elapsed,
                attempts,
                ..
            }) => {
                assert_eq!(best_fitness, -1.0);
                assert_eq!(elapsed, Duration::from_secs(4));
                assert_eq!(attempts, 3);
            }
            other => panic!("expected convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn exhausted_time_budget_stops_retrying() {
        let config = EGAConfig {
            max_retry_attempts: 10,
            time_budget_s: Some(5.0),
            ..EGAConfig::default()
        };
        let decision = evaluate_attempt(RetryState::default(), run(-1.0, 6), &config);
        assert!(matches!(
            decision,
            RetryDecision::GiveUp(EGAError::TimeBudgetExceeded { attempts: 1, .. })
        ));
    }
}
