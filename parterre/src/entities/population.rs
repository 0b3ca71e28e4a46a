use ordered_float::OrderedFloat;

use crate::entities::Candidate;
use crate::util::assertions;

/// All candidates of a single generation.
/// An immutable snapshot: the next generation is always a freshly built `Population`.
#[derive(Clone, Debug)]
pub struct Population {
    candidates: Vec<Candidate>,
    generation: usize,
}

impl Population {
    pub fn new(candidates: Vec<Candidate>, generation: usize) -> Self {
        assert!(!candidates.is_empty(), "population cannot be empty");
        debug_assert!(assertions::all_candidates_scored(&candidates));
        Self {
            candidates,
            generation,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Highest scoring candidate, the first one in case of ties
    pub fn best(&self) -> &Candidate {
        self.candidates
            .iter()
            .rev()
            .max_by_key(|c| OrderedFloat(c.score()))
            .expect("population is not empty")
    }

    pub fn mean_score(&self) -> f64 {
        self.candidates.iter().map(|c| c.score()).sum::<f64>() / self.len() as f64
    }
}
