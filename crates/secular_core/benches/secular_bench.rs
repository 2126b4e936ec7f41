use criterion::{Criterion, black_box, criterion_group, criterion_main};
use secular_core::{
    Couplings, SecularConfig, SeriesLaplace, TwoBodySystem, eigen_decompose, secular_frequencies,
    secular_frequencies_with,
};

fn solve_bench(c: &mut Criterion) {
    let system = TwoBodySystem::jupiter_saturn();
    let config = SecularConfig::default();
    let series = SeriesLaplace::default();

    let mut group = c.benchmark_group("secular_frequencies");
    group.bench_function("jupiter_saturn_quadrature", |b| {
        b.iter(|| {
            secular_frequencies(black_box(&system), black_box(&config))
                .expect("solve should succeed")
        })
    });
    group.bench_function("jupiter_saturn_series", |b| {
        b.iter(|| {
            secular_frequencies_with(black_box(&system), black_box(&config), &series)
                .expect("solve should succeed")
        })
    });
    group.finish();
}

fn eigen_bench(c: &mut Criterion) {
    let system = TwoBodySystem::jupiter_saturn();
    let alpha = system.alpha().expect("valid ratio");
    let matrix = Couplings::compute(&system, alpha, 1.948).matrix();

    let mut group = c.benchmark_group("secular_eigen");
    group.bench_function("decompose_2x2", |b| {
        b.iter(|| eigen_decompose(black_box(&matrix)).expect("real spectrum"))
    });
    group.finish();
}

criterion_group!(benches, solve_bench, eigen_bench);
criterion_main!(benches);
