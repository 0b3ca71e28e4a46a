use parterre::entities::Candidate;
use parterre::geometry::Shape;
use parterre::geometry::geo_traits::Region;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::EGAConfig;
use crate::error::EGAError;
use crate::samplers::rejection_sampler::RejectionSampler;

/// Cooling schedule of the mutation strength (the stddev of a gene's displacement).
///
/// Follows an exponential decay over the generations of a run:
///
/// f(0) = init;
/// f(n_generations) = end;
/// f(g) = init * (end/init)^(g/n_generations);
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthSchedule {
    init: f64,
    end: f64,
    n_generations: usize,
}

impl StrengthSchedule {
    pub fn new(init: f64, end: f64, n_generations: usize) -> Self {
        assert!(init > 0.0 && end > 0.0 && end <= init);
        assert!(n_generations > 0);
        Self {
            init,
            end,
            n_generations,
        }
    }

    /// Schedule of the config, with the relative strengths scaled to the largest dimension of the domain.
    pub fn from_config(config: &EGAConfig, shape: &Shape) -> Self {
        let max_dim = shape.bbox().max_dimension();
        Self::new(
            config.initial_mutation_strength * max_dim,
            config.final_mutation_strength * max_dim,
            config.generation_count,
        )
    }

    pub fn strength(&self, generation: usize) -> f64 {
        let pct = f64::min(generation as f64 / self.n_generations as f64, 1.0);
        self.init * (self.end / self.init).powf(pct)
    }
}

/// Displaces genes of freshly bred children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mutator {
    pub probability: f64,
    pub schedule: StrengthSchedule,
}

impl Mutator {
    pub fn new(probability: f64, schedule: StrengthSchedule) -> Self {
        Self {
            probability,
            schedule,
        }
    }

    /// Every gene is, with probability [`Mutator::probability`], displaced by a normally distributed offset
    /// whose stddev follows the cooling schedule.
    /// A displaced gene that ends up outside the domain is re-sampled inside it instead of being clamped.
    ///
    /// Returns the number of mutated genes.
    pub fn mutate(
        &self,
        candidate: &mut Candidate,
        generation: usize,
        sampler: &RejectionSampler,
        rng: &mut impl Rng,
    ) -> Result<usize, EGAError> {
        let normal = Normal::new(0.0, self.schedule.strength(generation))
            .expect("mutation strength should be finite and positive");

        let mut n_mutated = 0;
        for i in 0..candidate.n_genes() {
            if !rng.random_bool(self.probability) {
                continue;
            }
            let gene = candidate.genes()[i];
            let displaced = gene
                .position()
                .translate((normal.sample(rng), normal.sample(rng)));
            let position = match sampler.shape().contains(displaced) {
                true => displaced,
                false => sampler.sample(rng)?,
            };
            candidate.replace_gene(i, gene.relocated(position));
            n_mutated += 1;
        }
        Ok(n_mutated)
    }
}
