use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info};
use parterre::entities::{Candidate, Instance, Population};
use parterre::geometry::geo_traits::Region;
use parterre::util::assertions;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::EGAConfig;
use crate::error::EGAError;
use crate::opt::crossover::uniform_crossover;
use crate::opt::fitness::FitnessEvaluator;
use crate::opt::mutation::{Mutator, StrengthSchedule};
use crate::opt::selection;
use crate::samplers::rejection_sampler::RejectionSampler;
use crate::util::assertions::fitness_is_cached_consistently;

/// Outcome of a single evolutionary run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Best candidate observed over all generations
    pub best: Candidate,
    pub is_feasible: bool,
    pub elapsed: Duration,
    /// Number of generations bred after the initial population
    pub n_generations: usize,
    /// Number of candidates scored during the run
    pub n_evaluations: usize,
}

/// Elitist genetic algorithm: evolves a population of candidate placements for a single run.
pub struct EGAOptimizer {
    pub instance: Instance,
    pub config: EGAConfig,
    pub evaluator: FitnessEvaluator,
    pub mutator: Mutator,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub n_evaluations: usize,
}

impl EGAOptimizer {
    pub fn new(instance: Instance, config: EGAConfig, rng: SmallRng) -> Result<Self, EGAError> {
        config.validate()?;
        let evaluator = FitnessEvaluator::new(config.separation_rule);
        let schedule = StrengthSchedule::from_config(&config, &instance.shape);
        let mutator = Mutator::new(config.mutation_probability, schedule);
        Ok(Self {
            instance,
            config,
            evaluator,
            mutator,
            rng,
            n_evaluations: 0,
        })
    }

    /// Runs `generation_count` generations and returns the best candidate seen in any of them.
    pub fn solve(&mut self) -> Result<RunResult, EGAError> {
        let start = Instant::now();

        let mut population = self.initial_population()?;
        let mut best = population.best().clone();
        debug!(
            "[EGA] gen 0: best {:.5}, mean {:.5}",
            best.score(),
            population.mean_score()
        );

        for generation in 1..=self.config.generation_count {
            population = self.next_generation(&population, generation)?;
            let gen_best = population.best();
            if gen_best.score() > best.score() {
                debug!(
                    "[EGA] gen {}: new best {:.5} (was {:.5}), mean {:.5}",
                    population.generation(),
                    gen_best.score(),
                    best.score(),
                    population.mean_score()
                );
                best = gen_best.clone();
            }
        }

        let is_feasible = self.evaluator.is_feasible(best.genes(), &self.instance);
        let elapsed = start.elapsed();

        info!(
            "[EGA] run finished in {:.3}ms ({} evaluations), best fitness {:.5}, feasible: {}",
            elapsed.as_secs_f64() * 1000.0,
            self.n_evaluations.separate_with_commas(),
            best.score(),
            is_feasible
        );

        Ok(RunResult {
            best,
            is_feasible,
            elapsed,
            n_generations: self.config.generation_count,
            n_evaluations: self.n_evaluations,
        })
    }

    /// Samples and scores `population_size` candidates, in parallel.
    pub fn initial_population(&mut self) -> Result<Population, EGAError> {
        let seeds = self.draw_seeds(self.config.population_size);
        let sampler = RejectionSampler::new(&self.instance.shape, self.config.max_sampling_attempts);
        let (instance, evaluator) = (&self.instance, &self.evaluator);

        info!(
            "[EGA] sampling {} candidates of {} genes in {} (sampling efficiency {:.1}%)",
            seeds.len(),
            instance.total_item_count(),
            instance.shape,
            instance.shape.sampling_efficiency() * 100.0
        );

        let candidates = seeds
            .into_par_iter()
            .map(|seed| -> Result<Candidate, EGAError> {
                let mut rng = SmallRng::seed_from_u64(seed);
                let genes = instance
                    .manifest
                    .gene_template()
                    .map(|kind| sampler.sample_gene(kind, &mut rng))
                    .collect::<Result<Vec<_>, _>>()?;
                let fitness = evaluator.score(&genes, instance);
                Ok(Candidate::new(genes).scored(fitness))
            })
            .collect::<Result<Vec<Candidate>, EGAError>>()?;

        self.n_evaluations += candidates.len();
        debug_assert!(
            candidates
                .iter()
                .all(|c| assertions::candidate_matches_manifest(c, &instance.manifest))
        );

        Ok(Population::new(candidates, 0))
    }

    /// Builds the next generation out of a fully scored one.
    /// The elites are carried over unchanged, the remainder is bred in parallel:
    /// every child is selected, crossed over, mutated and scored by its own task.
    pub fn next_generation(
        &mut self,
        current: &Population,
        generation: usize,
    ) -> Result<Population, EGAError> {
        let elites = selection::select_elites(current, self.config.elite_fraction);
        debug_assert!(elites.iter().all(|e| fitness_is_cached_consistently(
            e,
            &self.evaluator,
            &self.instance
        )));

        let n_children = current.len() - elites.len();
        let seeds = self.draw_seeds(n_children);

        let sampler = RejectionSampler::new(&self.instance.shape, self.config.max_sampling_attempts);
        let (instance, evaluator, mutator, config) =
            (&self.instance, &self.evaluator, &self.mutator, &self.config);

        let children = seeds
            .into_par_iter()
            .map(|seed| -> Result<Candidate, EGAError> {
                let mut rng = SmallRng::seed_from_u64(seed);
                let (i, j) = selection::select_parents(current, config.tournament_size, &mut rng);
                let mut child = uniform_crossover(
                    current.get(i),
                    current.get(j),
                    config.crossover_probability,
                    &mut rng,
                );
                mutator.mutate(&mut child, generation, &sampler, &mut rng)?;
                let fitness = evaluator.score(child.genes(), instance);
                Ok(child.scored(fitness))
            })
            .collect::<Result<Vec<Candidate>, EGAError>>()?;

        self.n_evaluations += children.len();

        let candidates = elites.into_iter().cloned().chain(children).collect_vec();
        Ok(Population::new(candidates, generation))
    }

    /// One seed per parallel task, drawn sequentially so the outcome does not depend on thread scheduling.
    fn draw_seeds(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.rng.random()).collect()
    }
}
