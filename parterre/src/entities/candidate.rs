use crate::entities::Gene;

/// One full proposed placement of all requested items.
///
/// A candidate is built (sampled, or bred and mutated) by a single owner, then scored exactly once
/// with [`Candidate::scored`] before it is published into a [`Population`](crate::entities::Population).
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    genes: Vec<Gene>,
    fitness: Option<f64>,
}

impl Candidate {
    /// Creates an unscored candidate
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn n_genes(&self) -> usize {
        self.genes.len()
    }

    /// Replaces the gene at `index`. Only allowed before the candidate is scored.
    pub fn replace_gene(&mut self, index: usize, gene: Gene) {
        debug_assert!(self.fitness.is_none(), "scored candidates are immutable");
        self.genes[index] = gene;
    }

    /// Attaches the fitness to the candidate, after which it should no longer be modified.
    pub fn scored(mut self, fitness: f64) -> Self {
        debug_assert!(self.fitness.is_none(), "candidate was already scored");
        debug_assert!(!fitness.is_nan(), "fitness is NaN");
        self.fitness = Some(fitness);
        self
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_scored(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness of a scored candidate
    pub fn score(&self) -> f64 {
        self.fitness
            .expect("candidate should be scored before it is compared")
    }
}
