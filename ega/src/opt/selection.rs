use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use parterre::entities::{Candidate, Population};
use rand::Rng;

/// Number of times the second parent is redrawn when it equals the first one
const MAX_PARENT_REDRAWS: usize = 8;

/// Relative rounding error of `population_size * elite_fraction` that is not counted as a fractional elite
const RELATIVE_TOLERANCE: f64 = 1e-12;

/// Number of elites for a population of `population_size` candidates: `ceil(population_size * elite_fraction)`.
pub fn n_elites(population_size: usize, elite_fraction: f64) -> usize {
    debug_assert!(elite_fraction > 0.0 && elite_fraction <= 1.0);
    let exact = population_size as f64 * elite_fraction;
    // 100 * 0.07 = 7.000000000000001 is treated as 7, anything further above an integer rounds up
    let nearest = exact.round();
    let n = match (exact - nearest).abs() <= exact * RELATIVE_TOLERANCE {
        true => nearest,
        false => exact.ceil(),
    } as usize;
    n.clamp(1, population_size)
}

/// Returns the top `ceil(len * elite_fraction)` candidates by descending score.
/// Ties are resolved by population order (stable sort).
pub fn select_elites(population: &Population, elite_fraction: f64) -> Vec<&Candidate> {
    let n = n_elites(population.len(), elite_fraction);
    population
        .candidates()
        .iter()
        .sorted_by_key(|c| Reverse(OrderedFloat(c.score())))
        .take(n)
        .collect_vec()
}

/// Draws `k` candidates uniformly at random (with replacement) and returns the index of the best one.
/// On ties, the first drawn candidate wins.
pub fn tournament(population: &Population, k: usize, rng: &mut impl Rng) -> usize {
    debug_assert!(k > 0);
    let mut best = rng.random_range(0..population.len());
    for _ in 1..k {
        let challenger = rng.random_range(0..population.len());
        if population.get(challenger).score() > population.get(best).score() {
            best = challenger;
        }
    }
    best
}

/// Selects two distinct parents via tournaments.
/// If the second tournament keeps returning the first parent, a uniformly random other candidate is taken.
pub fn select_parents(population: &Population, k: usize, rng: &mut impl Rng) -> (usize, usize) {
    let first = tournament(population, k, rng);
    if population.len() < 2 {
        return (first, first);
    }
    for _ in 0..MAX_PARENT_REDRAWS {
        let second = tournament(population, k, rng);
        if second != first {
            return (first, second);
        }
    }
    // uniform pick among all candidates except `first`
    let offset = rng.random_range(1..population.len());
    (first, (first + offset) % population.len())
}
