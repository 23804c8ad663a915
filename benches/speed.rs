use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use hermite_easing::{
    build_figure, default_presets, evaluate_hermite, evaluate_hermite_into,
    HermiteParams, SampleGrid, Style,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_random_params(n: usize, seed: u64) -> Vec<HermiteParams> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            HermiteParams::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            )
        })
        .collect()
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hermite Evaluation");

    // Fixed seed for deterministic results
    const SEED: u64 = 12345;
    const ITERATIONS: usize = 10000;

    let all_params = generate_random_params(ITERATIONS, SEED);

    for num_samples in [10, 200, 1000, 10000] {
        let grid = SampleGrid::linspace(0.0, 1.0, num_samples).unwrap();

        group.bench_function(
            BenchmarkId::new("evaluate_hermite", num_samples),
            |b| {
                let mut local_rng = StdRng::seed_from_u64(SEED + 40000);
                b.iter_with_large_drop(|| {
                    let params = &all_params[local_rng.random_range(0..ITERATIONS)];
                    black_box(evaluate_hermite(&grid, params))
                });
            },
        );

        group.bench_function(
            BenchmarkId::new("evaluate_hermite_into", num_samples),
            |b| {
                let mut local_rng = StdRng::seed_from_u64(SEED + 50000);
                let mut out = Vec::with_capacity(num_samples);
                b.iter(|| {
                    let params = &all_params[local_rng.random_range(0..ITERATIONS)];
                    evaluate_hermite_into(&grid, params, &mut out);
                    black_box(out.last().copied())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_figure(c: &mut Criterion) {
    let presets = default_presets();
    let style = Style::default();

    c.bench_function("build_figure", |b| {
        b.iter_with_large_drop(|| black_box(build_figure(&presets, &style)))
    });
}

criterion_group!(benches, benchmark_evaluate, benchmark_figure);
criterion_main!(benches);
