use parterre::entities::{Gene, Instance};
use parterre::geometry::geo_traits::Region;
use serde::{Deserialize, Serialize};

/// Penalty for every gene whose position lies outside the domain
pub const CONTAINMENT_PENALTY: f64 = 1.0;

/// Distance required between the centers of two items, based on their clearance radii.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeparationRule {
    /// The clearance discs of two items may not overlap: `r_i + r_j`
    #[default]
    Sum,
    /// Neither item may sit inside the other's clearance disc: `max(r_i, r_j)`
    Max,
}

impl SeparationRule {
    #[inline(always)]
    pub fn required_distance(&self, r_a: f64, r_b: f64) -> f64 {
        match self {
            SeparationRule::Sum => r_a + r_b,
            SeparationRule::Max => f64::max(r_a, r_b),
        }
    }
}

/// Summary of all constraint violations of a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Violations {
    /// Number of genes outside the domain
    pub n_outside: usize,
    /// Number of pairs closer than their required distance
    pub n_close_pairs: usize,
    /// Sum over all violating pairs of `required distance - actual distance`
    pub overlap: f64,
    /// Smallest `actual distance - required distance` over all pairs, `None` for fewer than two genes
    pub min_slack: Option<f64>,
}

impl Violations {
    pub fn is_feasible(&self) -> bool {
        self.n_outside == 0 && self.n_close_pairs == 0
    }
}

/// Scores candidates on how well they satisfy the containment and separation constraints.
///
/// The score is monotone in the violations:
/// * infeasible candidates score `-(CONTAINMENT_PENALTY * n_outside + overlap) < 0`,
/// * feasible candidates score `s / (1 + s)` in `[0, 1)`, with `s` the smallest pairwise slack.
///
/// So removing or shrinking a violation always increases the score,
/// and any feasible candidate outscores every infeasible one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessEvaluator {
    pub separation_rule: SeparationRule,
}

impl FitnessEvaluator {
    pub fn new(separation_rule: SeparationRule) -> Self {
        Self { separation_rule }
    }

    /// Collects all violations of the genes within the instance's domain.
    pub fn violations(&self, genes: &[Gene], instance: &Instance) -> Violations {
        let shape = &instance.shape;
        let mut v = Violations {
            n_outside: genes
                .iter()
                .filter(|g| !shape.contains(g.position()))
                .count(),
            ..Violations::default()
        };

        for (i, g_i) in genes.iter().enumerate() {
            let p_i = g_i.position();
            for g_j in &genes[i + 1..] {
                let required = self
                    .separation_rule
                    .required_distance(g_i.radius(), g_j.radius());
                let sq_distance = p_i.sq_distance(&g_j.position());
                let slack = sq_distance.sqrt() - required;
                // squared comparison, identical to is_feasible()
                if sq_distance < required * required {
                    v.n_close_pairs += 1;
                    v.overlap += f64::max(-slack, f64::EPSILON);
                }
                v.min_slack = Some(v.min_slack.map_or(slack, |s| f64::min(s, slack)));
            }
        }
        v
    }

    /// Pure function of the genes and the instance: re-scoring an unchanged candidate yields the same value.
    pub fn score(&self, genes: &[Gene], instance: &Instance) -> f64 {
        Self::score_violations(&self.violations(genes, instance))
    }

    pub fn score_violations(v: &Violations) -> f64 {
        match v.is_feasible() {
            true => {
                let s = v.min_slack.unwrap_or(0.0).max(0.0);
                s / (1.0 + s)
            }
            false => -(CONTAINMENT_PENALTY * v.n_outside as f64 + v.overlap),
        }
    }

    /// Cheaper check of both constraints without computing magnitudes.
    /// Compares squared distances and exits on the first violation.
    pub fn is_feasible(&self, genes: &[Gene], instance: &Instance) -> bool {
        let shape = &instance.shape;
        if !genes.iter().all(|g| shape.contains(g.position())) {
            return false;
        }
        genes.iter().enumerate().all(|(i, g_i)| {
            let p_i = g_i.position();
            genes[i + 1..].iter().all(|g_j| {
                let required = self
                    .separation_rule
                    .required_distance(g_i.radius(), g_j.radius());
                p_i.sq_distance(&g_j.position()) >= required * required
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parterre::entities::{ItemKind, Manifest};
    use parterre::geometry::primitives::Point;
    use parterre::geometry::shapes::Circle;

    fn instance(n: usize, radius: f64) -> Instance {
        let kind = ItemKind::try_new(0, "herb", 1, "basil", radius, n).unwrap();
        Instance::new(
            Circle::try_new(10.0).unwrap().into(),
            Manifest::try_new(vec![kind]).unwrap(),
        )
    }

    fn genes(instance: &Instance, positions: &[(f64, f64)]) -> Vec<Gene> {
        let kind = instance.manifest.kind(0);
        positions
            .iter()
            .map(|&p| Gene::new(Point::from(p), kind))
            .collect()
    }

    #[test]
    fn feasible_beats_infeasible() {
        let inst = instance(2, 1.0);
        let eval = FitnessEvaluator::new(SeparationRule::Sum);

        let barely_feasible = genes(&inst, &[(0.0, 0.0), (2.0, 0.0)]);
        let barely_overlapping = genes(&inst, &[(0.0, 0.0), (1.999, 0.0)]);

        assert!(eval.is_feasible(&barely_feasible, &inst));
        assert!(!eval.is_feasible(&barely_overlapping, &inst));
        assert!(eval.score(&barely_feasible, &inst) >= 0.0);
        assert!(eval.score(&barely_overlapping, &inst) < 0.0);
    }

    #[test]
    fn smaller_overlap_scores_higher() {
        let inst = instance(2, 1.0);
        let eval = FitnessEvaluator::new(SeparationRule::Sum);

        let deep = genes(&inst, &[(0.0, 0.0), (0.5, 0.0)]);
        let shallow = genes(&inst, &[(0.0, 0.0), (1.5, 0.0)]);
        assert!(eval.score(&shallow, &inst) > eval.score(&deep, &inst));
    }

    #[test]
    fn fewer_outside_scores_higher() {
        let inst = instance(2, 0.5);
        let eval = FitnessEvaluator::new(SeparationRule::Sum);

        let one_out = genes(&inst, &[(0.0, 0.0), (20.0, 0.0)]);
        let two_out = genes(&inst, &[(-20.0, 0.0), (20.0, 0.0)]);

        let v = eval.violations(&two_out, &inst);
        assert_eq!(v.n_outside, 2);
        assert_eq!(v.n_close_pairs, 0);
        assert!(eval.score(&one_out, &inst) > eval.score(&two_out, &inst));
    }

    #[test]
    fn more_slack_scores_higher_when_feasible() {
        let inst = instance(2, 1.0);
        let eval = FitnessEvaluator::new(SeparationRule::Sum);

        let tight = genes(&inst, &[(0.0, 0.0), (2.5, 0.0)]);
        let loose = genes(&inst, &[(-4.0, 0.0), (4.0, 0.0)]);
        let (s_tight, s_loose) = (eval.score(&tight, &inst), eval.score(&loose, &inst));
        assert!(s_loose > s_tight);
        assert!(s_loose < 1.0);
    }

    #[test]
    fn max_rule_is_more_lenient() {
        let inst = instance(2, 1.0);
        let pair = genes(&inst, &[(0.0, 0.0), (1.5, 0.0)]);

        assert!(!FitnessEvaluator::new(SeparationRule::Sum).is_feasible(&pair, &inst));
        assert!(FitnessEvaluator::new(SeparationRule::Max).is_feasible(&pair, &inst));
    }

    #[test]
    fn single_gene_scores_zero_when_inside() {
        let inst = instance(1, 1.0);
        let eval = FitnessEvaluator::new(SeparationRule::Sum);
        let single = genes(&inst, &[(3.0, 3.0)]);
        assert_eq!(eval.score(&single, &inst), 0.0);
    }
}
