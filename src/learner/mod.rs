//! Weak learners that can be boosted.
//!
//! Both learners implement [`WeakLearner`](crate::core::traits::WeakLearner)
//! and honour per-point weights, which is how the boosting engine steers
//! them towards the points the ensemble still gets wrong.

pub mod perceptron;
pub mod stump;

pub use perceptron::{Perceptron, PerceptronParams};
pub use stump::{DecisionStump, StumpParams};

use crate::core::error::{AdaBoostError, Result};
use crate::core::types::ClassIndex;
use ndarray::{ArrayView1, ArrayView2};

/// Shape and range checks shared by every learner's `train`.
pub(crate) fn validate_training_input(
    data: ArrayView2<'_, f64>,
    labels: ArrayView1<'_, ClassIndex>,
    num_classes: usize,
    weights: ArrayView1<'_, f64>,
) -> Result<()> {
    if data.ncols() == 0 || data.nrows() == 0 {
        return Err(AdaBoostError::data(format!(
            "Cannot train on an empty dataset ({} features x {} points)",
            data.nrows(),
            data.ncols()
        )));
    }
    if labels.len() != data.ncols() {
        return Err(AdaBoostError::data(format!(
            "Number of labels ({}) does not match number of points ({})",
            labels.len(),
            data.ncols()
        )));
    }
    if weights.len() != data.ncols() {
        return Err(AdaBoostError::data(format!(
            "Number of weights ({}) does not match number of points ({})",
            weights.len(),
            data.ncols()
        )));
    }
    if num_classes == 0 {
        return Err(AdaBoostError::data("Number of classes must be at least 1"));
    }
    if let Some(&bad) = labels.iter().find(|&&label| label >= num_classes) {
        return Err(AdaBoostError::data(format!(
            "Label {} is out of range for {} classes",
            bad, num_classes
        )));
    }
    if weights.iter().any(|&w| !w.is_finite() || w < 0.0) {
        return Err(AdaBoostError::data(
            "Point weights must be finite and non-negative",
        ));
    }
    Ok(())
}

/// Dimensionality check shared by every learner's `classify`.
pub(crate) fn check_dimensionality(expected: usize, data: ArrayView2<'_, f64>) -> Result<()> {
    if data.nrows() != expected {
        return Err(AdaBoostError::dimension_mismatch(
            format!("{} features", expected),
            format!("{} features", data.nrows()),
        ));
    }
    Ok(())
}
