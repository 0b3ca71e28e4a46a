#[cfg(test)]
mod tests {
    use std::path::Path;

    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use ega::EGAError;
    use ega::config::EGAConfig;
    use ega::io;
    use ega::opt::fitness::{FitnessEvaluator, SeparationRule};
    use ega::opt::retry::{Solution, run_optimization};
    use ega::opt::selection::select_elites;
    use ega::samplers::rejection_sampler::RejectionSampler;
    use parterre::entities::{Candidate, Gene, Instance, ItemKind, Manifest, Population};
    use parterre::geometry::Shape;
    use parterre::geometry::geo_traits::Region;
    use parterre::geometry::primitives::Point;
    use parterre::geometry::shapes::{Annulus, Circle, Ellipse, Frame, Rectangle, RightTriangle, Square};
    use parterre::io::import::import_instance;
    use parterre::util::assertions;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn uniform_instance(shape: Shape, quantity: usize, radius: f64) -> Instance {
        let kind = ItemKind::try_new(0, "herb", 1, "chives", radius, quantity).unwrap();
        Instance::new(shape, Manifest::try_new(vec![kind]).unwrap())
    }

    /// Smaller runs, to keep the test suite quick
    fn quick_config() -> EGAConfig {
        EGAConfig {
            population_size: 20,
            generation_count: 30,
            ..EGAConfig::default()
        }
    }

    fn assert_feasible(candidate: &Candidate, instance: &Instance) {
        assert!(assertions::candidate_matches_manifest(candidate, &instance.manifest));
        assert!(assertions::all_genes_contained(candidate, &instance.shape));
        for (a, b) in candidate.genes().iter().tuple_combinations() {
            let distance = a.position().distance(&b.position());
            assert!(
                distance >= a.radius() + b.radius(),
                "items at {:?} and {:?} are too close",
                a.position(),
                b.position()
            );
        }
        assert!(candidate.score() >= 0.0);
    }

    #[test_case(Circle::try_new(3.0).unwrap().into(); "circle")]
    #[test_case(Square::try_new(2.0).unwrap().into(); "square")]
    #[test_case(Rectangle::try_new(5.0, 1.0).unwrap().into(); "rectangle")]
    #[test_case(Ellipse::try_new(4.0, 0.5).unwrap().into(); "ellipse")]
    #[test_case(RightTriangle::try_new(3.0, 7.0).unwrap().into(); "right triangle")]
    #[test_case(Frame::try_new(8.0, 8.0, 10.0, 10.0).unwrap().into(); "thin frame")]
    #[test_case(Annulus::try_new(4.0, 4.5).unwrap().into(); "thin annulus")]
    #[test_case(Circle::try_new(1e150).unwrap().into(); "huge circle")]
    fn sampled_points_are_contained(shape: Shape) {
        let sampler = RejectionSampler::new(&shape, 100_000);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let p = sampler.sample(&mut rng).unwrap();
            assert!(shape.contains(p), "{p} not inside {shape}");
        }
    }

    #[test]
    fn sampler_gives_up_on_degenerate_ring() {
        let shape: Shape = Annulus::try_new(1.0, 1.0 + 1e-9).unwrap().into();
        let sampler = RejectionSampler::new(&shape, 1000);
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(matches!(
            sampler.sample(&mut rng),
            Err(EGAError::SamplingExhausted { attempts: 1000, .. })
        ));
    }

    #[test]
    fn sampling_exhaustion_is_not_retried() {
        init_logger();
        let instance = uniform_instance(Annulus::try_new(1.0, 1.0 + 1e-9).unwrap().into(), 3, 0.1);
        let config = EGAConfig {
            max_sampling_attempts: 1000,
            ..quick_config()
        };
        let result = run_optimization(&instance, &config);
        assert!(matches!(result, Err(EGAError::SamplingExhausted { .. })));
    }

    #[test]
    fn sparse_circle_is_solved() {
        init_logger();
        let instance = uniform_instance(Circle::try_new(10.0).unwrap().into(), 5, 0.5);
        let solution = run_optimization(&instance, &EGAConfig::default()).unwrap();

        assert!(solution.is_feasible);
        assert!(solution.attempts_used >= 1 && solution.attempts_used <= 3);
        assert_eq!(solution.best.n_genes(), 5);
        assert_feasible(&solution.best, &instance);
    }

    #[test]
    fn overcrowded_circle_fails_to_converge() {
        init_logger();
        let instance = uniform_instance(Circle::try_new(1.0).unwrap().into(), 50, 2.0);
        let config = EGAConfig {
            population_size: 10,
            generation_count: 5,
            max_retry_attempts: 2,
            ..EGAConfig::default()
        };

        match run_optimization(&instance, &config) {
            Err(EGAError::ConvergenceFailure {
                best_fitness,
                attempts,
                best,
                ..
            }) => {
                assert_eq!(attempts, 2);
                assert!(best_fitness < 0.0);
                assert_eq!(best.score(), best_fitness);
                assert!(assertions::candidate_matches_manifest(&best, &instance.manifest));
            }
            other => panic!("expected a convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn same_seed_same_placement() {
        init_logger();
        let instance = uniform_instance(Ellipse::try_new(6.0, 3.0).unwrap().into(), 12, 0.6);
        let config = EGAConfig {
            prng_seed: Some(42),
            ..quick_config()
        };

        let a = run_optimization(&instance, &config);
        let b = run_optimization(&instance, &config);
        let best = |r: &Result<Solution, EGAError>| match r {
            Ok(sol) => sol.best.clone(),
            Err(err) => err.best_candidate().cloned().unwrap(),
        };
        assert_eq!(best(&a), best(&b));
    }

    #[test_case(EGAConfig { population_size: 1, ..EGAConfig::default() }; "population too small")]
    #[test_case(EGAConfig { mutation_probability: 1.5, ..EGAConfig::default() }; "mutation probability above one")]
    #[test_case(EGAConfig { crossover_probability: 0.0, ..EGAConfig::default() }; "zero crossover probability")]
    #[test_case(EGAConfig { elite_fraction: -0.1, ..EGAConfig::default() }; "negative elite fraction")]
    #[test_case(EGAConfig { tournament_size: 0, ..EGAConfig::default() }; "empty tournament")]
    #[test_case(EGAConfig { max_retry_attempts: 0, ..EGAConfig::default() }; "no attempts")]
    #[test_case(EGAConfig { final_mutation_strength: 0.5, ..EGAConfig::default() }; "heating schedule")]
    #[test_case(EGAConfig { time_budget_s: Some(0.0), ..EGAConfig::default() }; "zero time budget")]
    fn invalid_config_is_rejected(config: EGAConfig) {
        let instance = uniform_instance(Circle::try_new(10.0).unwrap().into(), 5, 0.5);
        assert!(matches!(
            run_optimization(&instance, &config),
            Err(EGAError::InvalidConfig(_))
        ));
    }

    #[test]
    fn elites_of_hundred() {
        let kind = ItemKind::try_new(0, "herb", 1, "dill", 0.5, 1).unwrap();
        let candidates = (0..100)
            .map(|i| Candidate::new(vec![Gene::new(Point(0.0, 0.0), &kind)]).scored(-(i as f64)))
            .collect_vec();
        let population = Population::new(candidates, 0);

        let elites = select_elites(&population, 0.1);
        assert_eq!(elites.len(), 10);
        let scores = elites.iter().map(|c| c.score()).collect_vec();
        assert_eq!(scores, (0..10).map(|i| -(i as f64)).collect_vec());
    }

    #[test]
    fn rescoring_is_idempotent() {
        let instance = uniform_instance(Square::try_new(4.0).unwrap().into(), 8, 0.5);
        let sampler = RejectionSampler::new(&instance.shape, 1000);
        let evaluator = FitnessEvaluator::new(SeparationRule::Sum);
        let mut rng = SmallRng::seed_from_u64(3);

        let genes = instance
            .manifest
            .gene_template()
            .map(|k| sampler.sample_gene(k, &mut rng).unwrap())
            .collect_vec();
        let first = evaluator.score(&genes, &instance);
        let candidate = Candidate::new(genes).scored(first);

        assert_eq!(evaluator.score(candidate.genes(), &instance), first);
        assert!(ega::util::assertions::fitness_is_cached_consistently(
            &candidate, &evaluator, &instance
        ));
    }

    #[test_case("../assets/herb_spiral.json"; "herb_spiral")]
    #[test_case("../assets/box_border.json"; "box_border")]
    #[test_case("../assets/tree_ring.json"; "tree_ring")]
    #[test_case("../assets/corner_bed.json"; "corner_bed")]
    fn test_instance(instance_path: &str) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        let solution = run_optimization(&instance, &EGAConfig::default())
            .unwrap_or_else(|err| panic!("{instance_path}: {err}"));
        assert!(solution.is_feasible);
        assert_feasible(&solution.best, &instance);
    }
}
