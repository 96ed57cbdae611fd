use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeans_anim::{cluster, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn benchmark_cluster_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 16;
    let k = 10;
    let sample_sizes = [1_000, 5_000, 10_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
                let config = KMeansConfig::new(k)
                    .with_seed(42)
                    .with_tolerance(1e-4)
                    .with_max_iterations(25);

                b.iter(|| {
                    // Uniform noise may not settle within the bound; the work
                    // measured is the same either way
                    let _ = cluster(black_box(&data.view()), &config);
                });
            },
        );
    }
    group.finish();
}

fn benchmark_cluster_varying_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_k");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 16;
    let cluster_counts = [5, 20, 50];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
            let config = KMeansConfig::new(k)
                .with_seed(42)
                .with_tolerance(1e-4)
                .with_max_iterations(25);

            b.iter(|| {
                let _ = cluster(black_box(&data.view()), &config);
            });
        });
    }
    group.finish();
}

fn benchmark_cluster_varying_dims(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_dims");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let k = 10;
    let dims = [2, 16, 128];

    for n_features in dims.iter() {
        group.throughput(Throughput::Elements(*n_features as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            n_features,
            |b, &n_features| {
                let data = Array2::random((n_samples, n_features), Uniform::new(-1.0, 1.0));
                let config = KMeansConfig::new(k)
                    .with_seed(42)
                    .with_tolerance(1e-4)
                    .with_max_iterations(25);

                b.iter(|| {
                    let _ = cluster(black_box(&data.view()), &config);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_cluster_varying_samples,
    benchmark_cluster_varying_k,
    benchmark_cluster_varying_dims
);
criterion_main!(benches);
