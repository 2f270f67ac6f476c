use adaboost_rust::{AdaBoostModel, ConfigBuilder, WeakLearnerType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use rand::prelude::*;

fn noisy_dataset(num_points: usize, num_features: usize, seed: u64) -> (Array2<f64>, Vec<u32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = Array2::from_shape_fn((num_features, num_points), |_| rng.gen_range(-1.0..1.0));
    let labels = data
        .columns()
        .into_iter()
        .map(|point| {
            let score: f64 = point.iter().enumerate().map(|(j, v)| if j % 2 == 0 { *v } else { -v }).sum();
            if score > 0.0 {
                1
            } else {
                0
            }
        })
        .collect();
    (data, labels)
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");
    group.sample_size(20);

    let (data, labels) = noisy_dataset(1_000, 10, 42);
    for kind in [WeakLearnerType::DecisionStump, WeakLearnerType::Perceptron] {
        let config = ConfigBuilder::new()
            .weak_learner(kind)
            .iterations(20)
            .perceptron_max_iterations(50)
            .build()
            .unwrap();

        group.bench_function(format!("1k_x10_{}", kind), |b| {
            b.iter(|| {
                let mut model = AdaBoostModel::new();
                model.train(black_box(data.view()), &labels, &config).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let (data, labels) = noisy_dataset(1_000, 10, 7);
    let config = ConfigBuilder::new().iterations(50).build().unwrap();
    let mut model = AdaBoostModel::new();
    model.train(data.view(), &labels, &config).unwrap();

    let (test, _) = noisy_dataset(10_000, 10, 8);
    group.bench_function("10k_points_stumps", |b| {
        b.iter(|| model.classify(black_box(test.view())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_training, bench_classify);
criterion_main!(benches);
