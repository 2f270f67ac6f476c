//! AdaBoost.MH weight matrix.
//!
//! `D[k, i]` is the importance of the question "is point `i` of class `k`?".
//! Rows are classes, columns are points, and the entries always sum to one.

use crate::core::constants::WEIGHT_SUM_EPSILON;
use crate::core::error::{AdaBoostError, Result};
use crate::core::types::ClassIndex;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Distribution over (class, point) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// Uniform distribution: every entry is `1 / (num_points * num_classes)`.
    pub fn uniform(num_classes: usize, num_points: usize) -> Result<Self> {
        if num_classes == 0 || num_points == 0 {
            return Err(AdaBoostError::data(format!(
                "Weight matrix needs at least one class and one point (got {} x {})",
                num_classes, num_points
            )));
        }
        let value = 1.0 / (num_classes * num_points) as f64;
        Ok(WeightMatrix {
            weights: Array2::from_elem((num_classes, num_points), value),
        })
    }

    /// Number of classes (rows).
    pub fn num_classes(&self) -> usize {
        self.weights.nrows()
    }

    /// Number of points (columns).
    pub fn num_points(&self) -> usize {
        self.weights.ncols()
    }

    /// Raw matrix view.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }

    /// Per-point importance, the column sums handed to the weak learner.
    pub fn point_weights(&self) -> Array1<f64> {
        self.weights.sum_axis(Axis(0))
    }

    /// Weighted Hamming error of single-label predictions.
    ///
    /// A correct prediction agrees with the truth on every class. A wrong one
    /// disagrees on exactly two: the true class and the predicted class.
    pub fn weighted_error(
        &self,
        labels: ArrayView1<'_, ClassIndex>,
        predictions: ArrayView1<'_, ClassIndex>,
    ) -> f64 {
        labels
            .iter()
            .zip(predictions.iter())
            .enumerate()
            .filter(|(_, (label, predicted))| label != predicted)
            .map(|(i, (&label, &predicted))| {
                self.weights[[label, i]] + self.weights[[predicted, i]]
            })
            .sum()
    }

    /// Multiply every entry by `exp(-alpha * y * h)` and renormalize.
    ///
    /// `y` and `h` are the ±1 encodings of "true class is k" and "predicted
    /// class is k". Returns the normalization constant `Z`.
    pub fn reweight(
        &mut self,
        alpha: f64,
        labels: ArrayView1<'_, ClassIndex>,
        predictions: ArrayView1<'_, ClassIndex>,
    ) -> Result<f64> {
        let agree = (-alpha).exp();
        let disagree = alpha.exp();

        for (i, mut column) in self.weights.axis_iter_mut(Axis(1)).enumerate() {
            let label = labels[i];
            let predicted = predictions[i];
            for (k, weight) in column.iter_mut().enumerate() {
                let truth = k == label;
                let guess = k == predicted;
                *weight *= if truth == guess { agree } else { disagree };
            }
        }

        let normalizer = self.weights.sum();
        if !normalizer.is_finite() || normalizer <= 0.0 {
            return Err(AdaBoostError::training(format!(
                "Weight renormalization failed (normalizer = {})",
                normalizer
            )));
        }
        self.weights /= normalizer;
        debug_assert!((self.weights.sum() - 1.0).abs() < WEIGHT_SUM_EPSILON);
        Ok(normalizer)
    }
}
