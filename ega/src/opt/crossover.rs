use parterre::entities::Candidate;
use rand::Rng;

/// Builds a single child out of two parents: for every gene index, the child takes the gene of
/// `parent_b` with probability `crossover_probability` and the one of `parent_a` otherwise.
///
/// Both parents place the same gene template, so the child does as well. The child is unscored.
pub fn uniform_crossover(
    parent_a: &Candidate,
    parent_b: &Candidate,
    crossover_probability: f64,
    rng: &mut impl Rng,
) -> Candidate {
    debug_assert_eq!(parent_a.n_genes(), parent_b.n_genes());
    let genes = parent_a
        .genes()
        .iter()
        .zip(parent_b.genes())
        .map(|(a, b)| {
            debug_assert_eq!(a.kind_id(), b.kind_id());
            match rng.random_bool(crossover_probability) {
                true => *b,
                false => *a,
            }
        })
        .collect();
    Candidate::new(genes)
}
