//! Common test utilities for pure Rust AdaBoost integration tests.

#![allow(dead_code)]

use ndarray::Array2;
use rand::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Two well separated blobs in two dimensions, one column per point.
///
/// Class 0 sits around (-2, -2) and class 1 around (2, 2); the noise never
/// exceeds 1 so the classes never overlap.
pub fn create_separable_binary(num_points: usize, seed: u64) -> (Array2<f64>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Array2::zeros((2, num_points));
    let mut labels = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let class = (i % 2) as i32;
        let center = if class == 0 { -2.0 } else { 2.0 };
        for feature in 0..2 {
            data[[feature, i]] = center + rng.gen_range(-1.0..1.0);
        }
        labels.push(class);
    }

    (data, labels)
}

/// `num_classes` clusters spread along feature 0, with a noise feature 1.
///
/// Cluster `k` is centered at `5k`; the noise never exceeds 1.
pub fn create_clusters(
    points_per_class: usize,
    num_classes: usize,
    seed: u64,
) -> (Array2<f64>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_points = points_per_class * num_classes;
    let mut data = Array2::zeros((2, num_points));
    let mut labels = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let class = i % num_classes;
        data[[0, i]] = 5.0 * class as f64 + rng.gen_range(-1.0..1.0);
        data[[1, i]] = rng.gen_range(-3.0..3.0);
        labels.push(class);
    }

    (data, labels)
}

/// Noisy binary data where no single threshold is perfect.
pub fn create_noisy_binary(num_points: usize, seed: u64) -> (Array2<f64>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Array2::zeros((3, num_points));
    let mut labels = Vec::with_capacity(num_points);

    for i in 0..num_points {
        for feature in 0..3 {
            data[[feature, i]] = rng.gen_range(-1.0..1.0);
        }
        let score = data[[0, i]] + data[[1, i]] - 0.5 * data[[2, i]];
        let flip = rng.gen_bool(0.1);
        let label = if (score > 0.0) != flip { 1 } else { 0 };
        labels.push(label);
    }

    (data, labels)
}

/// Write `data` (one column per point) as CSV with one point per line,
/// optionally appending a label column.
pub fn write_csv<P: AsRef<Path>, L: Display>(path: P, data: &Array2<f64>, labels: Option<&[L]>) {
    let mut content = String::new();
    for (i, point) in data.columns().into_iter().enumerate() {
        let mut fields: Vec<String> = point.iter().map(|v| v.to_string()).collect();
        if let Some(labels) = labels {
            fields.push(labels[i].to_string());
        }
        content.push_str(&fields.join(","));
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}

/// Write one label per line.
pub fn write_labels<P: AsRef<Path>, L: Display>(path: P, labels: &[L]) {
    let content: String = labels.iter().map(|l| format!("{}\n", l)).collect();
    fs::write(path, content).unwrap();
}

/// Fraction of positions where the two slices agree.
pub fn agreement<L: PartialEq>(a: &[L], b: &[L]) -> f64 {
    let same = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    same as f64 / a.len() as f64
}
