use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use rand::SeedableRng;
use rand::prelude::SmallRng;

use ega::opt::fitness::{FitnessEvaluator, SeparationRule};
use ega::samplers::rejection_sampler::RejectionSampler;
use parterre::entities::{Gene, Instance, ItemKind, Manifest};
use parterre::geometry::Shape;
use parterre::geometry::shapes::{Annulus, Circle, Frame, RightTriangle};

criterion_main!(benches);
criterion_group!(benches, fitness_bench, sampling_bench);

const N_ITEMS: [usize; 3] = [10, 50, 200];

fn create_instance(shape: Shape, n_items: usize) -> Instance {
    let kinds = vec![
        ItemKind::try_new(0, "herb", 1, "oregano", 0.3, n_items / 2).unwrap(),
        ItemKind::try_new(1, "herb", 2, "tarragon", 0.5, n_items - n_items / 2).unwrap(),
    ];
    Instance::new(shape, Manifest::try_new(kinds).unwrap())
}

fn sample_genes(instance: &Instance, rng: &mut SmallRng) -> Vec<Gene> {
    let sampler = RejectionSampler::new(&instance.shape, 100_000);
    instance
        .manifest
        .gene_template()
        .map(|k| sampler.sample_gene(k, rng).unwrap())
        .collect_vec()
}

fn fitness_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let mut rng = SmallRng::seed_from_u64(0);
    let evaluator = FitnessEvaluator::new(SeparationRule::Sum);

    for n_items in N_ITEMS {
        let instance = create_instance(Circle::try_new(20.0).unwrap().into(), n_items);
        let genes = sample_genes(&instance, &mut rng);

        group.bench_with_input(BenchmarkId::new("score", n_items), &genes, |b, genes| {
            b.iter(|| evaluator.score(genes, &instance))
        });
        group.bench_with_input(BenchmarkId::new("is_feasible", n_items), &genes, |b, genes| {
            b.iter(|| evaluator.is_feasible(genes, &instance))
        });
    }
    group.finish();
}

fn sampling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let shapes: [(&str, Shape); 4] = [
        ("circle", Circle::try_new(10.0).unwrap().into()),
        ("right-triangle", RightTriangle::try_new(10.0, 4.0).unwrap().into()),
        ("frame", Frame::try_new(8.0, 8.0, 10.0, 10.0).unwrap().into()),
        ("annulus", Annulus::try_new(9.0, 10.0).unwrap().into()),
    ];

    for (name, shape) in shapes.iter() {
        let sampler = RejectionSampler::new(shape, 100_000);
        let mut rng = SmallRng::seed_from_u64(0);
        group.bench_function(*name, |b| b.iter(|| sampler.sample(&mut rng).unwrap()));
    }
    group.finish();
}
