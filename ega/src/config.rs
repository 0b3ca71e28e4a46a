use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EGAError;
use crate::opt::fitness::SeparationRule;

/// Configuration for the EGA optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EGAConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of candidates in every generation
    pub population_size: usize,
    /// Number of generations bred after the initial population
    pub generation_count: usize,
    /// Probability for every gene of a child to be displaced
    pub mutation_probability: f64,
    /// Standard deviation of the displacement in the first generation,
    /// as a fraction of the largest dimension of the domain's bounding box
    pub initial_mutation_strength: f64,
    /// Standard deviation of the displacement in the last generation, same unit as `initial_mutation_strength`
    pub final_mutation_strength: f64,
    /// Probability for every gene of a child to be inherited from the second parent
    pub crossover_probability: f64,
    /// Number of candidates competing in every tournament
    pub tournament_size: usize,
    /// Fraction of the population carried over unchanged to the next generation
    pub elite_fraction: f64,
    /// Maximum number of full runs before giving up on finding a feasible placement
    pub max_retry_attempts: usize,
    /// Maximum number of rejected points before the rejection sampler gives up
    pub max_sampling_attempts: usize,
    /// Minimum distance required between the centers of two items
    pub separation_rule: SeparationRule,
    /// Once the cumulative time of all attempts exceeds this budget (in seconds), no new attempts are started
    pub time_budget_s: Option<f64>,
}

impl Default for EGAConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            population_size: 60,
            generation_count: 150,
            mutation_probability: 0.1,
            initial_mutation_strength: 0.1,
            final_mutation_strength: 0.002,
            crossover_probability: 0.5,
            tournament_size: 3,
            elite_fraction: 0.1,
            max_retry_attempts: 3,
            max_sampling_attempts: 100_000,
            separation_rule: SeparationRule::Sum,
            time_budget_s: None,
        }
    }
}

impl EGAConfig {
    /// Checks all values are within their allowed range.
    pub fn validate(&self) -> Result<(), EGAError> {
        let invalid = |msg: String| Err(EGAError::InvalidConfig(msg));
        let is_probability = |p: f64| p > 0.0 && p <= 1.0;

        if self.population_size < 2 {
            return invalid(format!(
                "population_size should be at least 2, got {}",
                self.population_size
            ));
        }
        if self.generation_count == 0 {
            return invalid("generation_count should be positive".to_string());
        }
        if self.tournament_size == 0 {
            return invalid("tournament_size should be positive".to_string());
        }
        if self.max_retry_attempts == 0 {
            return invalid("max_retry_attempts should be positive".to_string());
        }
        if self.max_sampling_attempts == 0 {
            return invalid("max_sampling_attempts should be positive".to_string());
        }
        for (name, p) in [
            ("mutation_probability", self.mutation_probability),
            ("crossover_probability", self.crossover_probability),
            ("elite_fraction", self.elite_fraction),
        ] {
            if !is_probability(p) {
                return invalid(format!("{name} should be in (0, 1], got {p}"));
            }
        }
        for (name, s) in [
            ("initial_mutation_strength", self.initial_mutation_strength),
            ("final_mutation_strength", self.final_mutation_strength),
        ] {
            if !(s.is_finite() && s > 0.0) {
                return invalid(format!("{name} should be finite and positive, got {s}"));
            }
        }
        if self.final_mutation_strength > self.initial_mutation_strength {
            return invalid(format!(
                "final_mutation_strength ({}) should not exceed initial_mutation_strength ({})",
                self.final_mutation_strength, self.initial_mutation_strength
            ));
        }
        if let Some(budget) = self.time_budget_s {
            if !(budget.is_finite() && budget > 0.0) {
                return invalid(format!("time_budget_s should be positive, got {budget}"));
            }
        }
        Ok(())
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_s.map(Duration::from_secs_f64)
    }
}
