//! Weighted decision stump.
//!
//! A stump splits on a single feature at a single threshold and predicts one
//! class on each side. Training tries every feature and every midpoint
//! between consecutive distinct values, keeping the split with the lowest
//! weighted misclassification.

use crate::core::error::{AdaBoostError, Result};
use crate::core::numeric::argmax;
use crate::core::traits::WeakLearner;
use crate::core::types::{ClassIndex, WeakLearnerType};
use crate::learner::{check_dimensionality, validate_training_input};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stump hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StumpParams {
    /// Minimum number of points on each side of a split
    pub bucket_size: usize,
}

impl Default for StumpParams {
    fn default() -> Self {
        StumpParams { bucket_size: 1 }
    }
}

/// A trained decision stump.
///
/// Points whose split feature is `<= threshold` get `left_class`, all others
/// get `right_class`. When no split beats predicting the majority class, the
/// threshold is `f64::MAX` and both sides predict that class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionStump {
    split_dimension: usize,
    threshold: f64,
    left_class: ClassIndex,
    right_class: ClassIndex,
    num_features: usize,
}

impl DecisionStump {
    /// Feature the stump splits on.
    pub fn split_dimension(&self) -> usize {
        self.split_dimension
    }

    /// Split threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classes predicted below/at and above the threshold.
    pub fn classes(&self) -> (ClassIndex, ClassIndex) {
        (self.left_class, self.right_class)
    }

    fn predict_value(&self, value: f64) -> ClassIndex {
        if value <= self.threshold {
            self.left_class
        } else {
            self.right_class
        }
    }
}

struct Split {
    dimension: usize,
    threshold: f64,
    left_class: ClassIndex,
    right_class: ClassIndex,
    error: f64,
}

fn class_totals(
    labels: ArrayView1<'_, ClassIndex>,
    weights: ArrayView1<'_, f64>,
    num_classes: usize,
) -> Array1<f64> {
    let mut totals = Array1::zeros(num_classes);
    for (&label, &weight) in labels.iter().zip(weights.iter()) {
        totals[label] += weight;
    }
    totals
}

fn best_split_on_feature(
    values: ArrayView1<'_, f64>,
    labels: ArrayView1<'_, ClassIndex>,
    weights: ArrayView1<'_, f64>,
    totals: &Array1<f64>,
    dimension: usize,
    bucket_size: usize,
) -> Option<Split> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let total_weight = totals.sum();
    let mut left = Array1::<f64>::zeros(totals.len());
    let mut best: Option<Split> = None;

    for position in 0..n.saturating_sub(1) {
        let point = order[position];
        left[labels[point]] += weights[point];

        let current = values[point];
        let next = values[order[position + 1]];
        if !current.is_finite() || !next.is_finite() || current >= next {
            continue;
        }
        let left_count = position + 1;
        if left_count < bucket_size || n - left_count < bucket_size {
            continue;
        }

        let right = totals - &left;
        let left_class = argmax(left.view());
        let right_class = argmax(right.view());
        let left_weight = left.sum();
        let error = (left_weight - left[left_class])
            + (total_weight - left_weight - right[right_class]);

        if best.as_ref().map_or(true, |b| error < b.error) {
            best = Some(Split {
                dimension,
                threshold: current / 2.0 + next / 2.0,
                left_class,
                right_class,
                error,
            });
        }
    }

    best
}

impl WeakLearner for DecisionStump {
    type Params = StumpParams;

    const KIND: WeakLearnerType = WeakLearnerType::DecisionStump;

    fn train<R: Rng + ?Sized>(
        data: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, ClassIndex>,
        num_classes: usize,
        weights: ArrayView1<'_, f64>,
        params: &Self::Params,
        _rng: &mut R,
    ) -> Result<Self> {
        validate_training_input(data, labels, num_classes, weights)?;

        let totals = class_totals(labels, weights, num_classes);
        let majority = argmax(totals.view());

        // Predicting the majority everywhere is the baseline every split must beat.
        let mut best = Split {
            dimension: 0,
            threshold: f64::MAX,
            left_class: majority,
            right_class: majority,
            error: totals.sum() - totals[majority],
        };

        for (dimension, values) in data.outer_iter().enumerate() {
            if let Some(split) = best_split_on_feature(
                values,
                labels,
                weights,
                &totals,
                dimension,
                params.bucket_size.max(1),
            ) {
                if split.error < best.error {
                    best = split;
                }
            }
        }

        log::trace!(
            "Stump split on feature {} at {} (weighted error {:.6})",
            best.dimension,
            best.threshold,
            best.error
        );

        Ok(DecisionStump {
            split_dimension: best.dimension,
            threshold: best.threshold,
            left_class: best.left_class,
            right_class: best.right_class,
            num_features: data.nrows(),
        })
    }

    fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        check_dimensionality(self.num_features, data)?;
        Ok(data
            .row(self.split_dimension)
            .iter()
            .map(|&value| self.predict_value(value))
            .collect())
    }

    fn num_features(&self) -> usize {
        self.num_features
    }

    fn validate(&self, num_classes: usize) -> Result<()> {
        crate::ensure!(
            self.split_dimension < self.num_features,
            AdaBoostError::persistence(format!(
                "Stump splits on feature {} but has only {} features",
                self.split_dimension, self.num_features
            ))
        );
        crate::ensure!(
            self.left_class < num_classes && self.right_class < num_classes,
            AdaBoostError::persistence(format!(
                "Stump predicts classes ({}, {}) outside 0..{}",
                self.left_class, self.right_class, num_classes
            ))
        );
        crate::ensure!(
            !self.threshold.is_nan(),
            AdaBoostError::persistence("Stump threshold is NaN")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn train(
        data: ArrayView2<'_, f64>,
        labels: &Array1<ClassIndex>,
        num_classes: usize,
        weights: &Array1<f64>,
    ) -> DecisionStump {
        let mut rng = StdRng::seed_from_u64(0);
        DecisionStump::train(
            data,
            labels.view(),
            num_classes,
            weights.view(),
            &StumpParams::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_separable_split() {
        let data = array![[-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]];
        let labels = array![0, 0, 0, 0, 1, 1, 1, 1];
        let weights = Array1::from_elem(8, 1.0 / 8.0);

        let stump = train(data.view(), &labels, 2, &weights);
        assert_eq!(stump.split_dimension(), 0);
        assert_eq!(stump.threshold(), 0.0);
        assert_eq!(stump.classes(), (0, 1));
        assert_eq!(stump.classify(data.view()).unwrap(), labels);
        assert_eq!(
            stump.classify(array![[-0.9, 0.9]].view()).unwrap(),
            array![0, 1]
        );
    }

    #[test]
    fn test_picks_informative_feature() {
        // Feature 0 is noise, feature 1 separates the classes.
        let data = array![[3.0, 1.0, 2.0, 0.0], [0.1, 0.2, 0.8, 0.9]];
        let labels = array![1, 1, 0, 0];
        let weights = Array1::from_elem(4, 0.25);

        let stump = train(data.view(), &labels, 2, &weights);
        assert_eq!(stump.split_dimension(), 1);
        assert_eq!(stump.classes(), (1, 0));
        assert_eq!(stump.classify(data.view()).unwrap(), labels);
    }

    #[test]
    fn test_weights_steer_the_split() {
        // No threshold separates these; the heavy point must be right.
        let data = array![[0.0, 1.0, 2.0]];
        let labels = array![0, 1, 0];
        let light = train(data.view(), &labels, 2, &array![0.4, 0.2, 0.4]);
        assert_eq!(light.classify(data.view()).unwrap()[1], 0);

        let heavy = train(data.view(), &labels, 2, &array![0.1, 0.8, 0.1]);
        assert_eq!(heavy.classify(data.view()).unwrap()[1], 1);
    }

    #[test]
    fn test_single_class_data() {
        let data = array![[1.0, 2.0, 3.0]];
        let labels = array![2, 2, 2];
        let stump = train(data.view(), &labels, 3, &Array1::from_elem(3, 1.0 / 3.0));
        assert_eq!(stump.classify(array![[100.0]].view()).unwrap(), array![2]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let data = array![[0.0, 1.0]];
        let stump = train(data.view(), &array![0, 1], 2, &array![0.5, 0.5]);
        let err = stump.classify(array![[0.0], [1.0]].view()).unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn test_label_out_of_range() {
        let data = array![[0.0, 1.0]];
        let mut rng = StdRng::seed_from_u64(0);
        let labels = array![0, 5];
        let weights = array![0.5, 0.5];
        let result = DecisionStump::train(
            data.view(),
            labels.view(),
            2,
            weights.view(),
            &StumpParams::default(),
            &mut rng,
        );
        assert!(result.unwrap_err().is_data());
    }

    #[test]
    fn test_threshold_between_extreme_values() {
        let data = array![[-f64::MAX, f64::MAX]];
        let labels = array![0, 1];
        let stump = train(data.view(), &labels, 2, &array![0.5, 0.5]);
        assert_eq!(stump.threshold(), 0.0);
        assert_eq!(stump.classify(data.view()).unwrap(), labels);
    }

    #[test]
    fn test_non_finite_values_never_become_thresholds() {
        let data = array![[0.0, 1.0, f64::NAN, f64::INFINITY]];
        let labels = array![0, 1, 1, 1];
        let stump = train(data.view(), &labels, 2, &Array1::from_elem(4, 0.25));
        assert_eq!(stump.threshold(), 0.5);
        assert_eq!(stump.classify(data.view()).unwrap(), labels);
    }

    #[test]
    fn test_validate_rejects_inconsistent_stump() {
        let data = array![[0.0, 1.0], [1.0, 0.0]];
        let stump = train(data.view(), &array![0, 1], 2, &array![0.5, 0.5]);
        assert!(stump.validate(2).is_ok());

        let mut bad_dimension = stump.clone();
        bad_dimension.split_dimension = 5;
        assert!(bad_dimension.validate(2).unwrap_err().is_persistence());

        let mut bad_class = stump.clone();
        bad_class.right_class = 9;
        assert!(bad_class.validate(2).unwrap_err().is_persistence());

        let mut bad_threshold = stump;
        bad_threshold.threshold = f64::NAN;
        assert!(bad_threshold.validate(2).unwrap_err().is_persistence());
    }
}
