//! Weighted multiclass perceptron.
//!
//! One weight vector and bias per class; a point is assigned to the class
//! with the highest activation. Training makes mistake-driven updates scaled
//! by the point's weight, starting from a random initialization drawn from
//! the caller's random source.

use crate::core::error::{AdaBoostError, Result};
use crate::core::numeric::argmax;
use crate::core::traits::WeakLearner;
use crate::core::types::{ClassIndex, WeakLearnerType};
use crate::learner::{check_dimensionality, validate_training_input};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Perceptron hyperparameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptronParams {
    /// Maximum number of passes over the data
    pub max_iterations: usize,
}

impl Default for PerceptronParams {
    fn default() -> Self {
        PerceptronParams {
            max_iterations: 1000,
        }
    }
}

/// A trained multiclass perceptron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    /// `num_classes x num_features`
    weights: Array2<f64>,
    /// One bias per class
    biases: Array1<f64>,
}

impl Perceptron {
    /// Per-class weight vectors, one row per class.
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Per-class biases.
    pub fn biases(&self) -> &Array1<f64> {
        &self.biases
    }

    fn predict_point(&self, point: ArrayView1<'_, f64>) -> ClassIndex {
        let activations = self.weights.dot(&point) + &self.biases;
        argmax(activations.view())
    }
}

impl WeakLearner for Perceptron {
    type Params = PerceptronParams;

    const KIND: WeakLearnerType = WeakLearnerType::Perceptron;

    fn train<R: Rng + ?Sized>(
        data: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, ClassIndex>,
        num_classes: usize,
        weights: ArrayView1<'_, f64>,
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<Self> {
        validate_training_input(data, labels, num_classes, weights)?;

        let num_features = data.nrows();
        let mut perceptron = Perceptron {
            weights: Array2::from_shape_fn((num_classes, num_features), |_| rng.gen::<f64>()),
            biases: Array1::from_shape_fn(num_classes, |_| rng.gen::<f64>()),
        };

        // Steps are relative to the mean weight so that the scale of the
        // boosting distribution does not change how fast training moves.
        let mean_weight = weights.mean().unwrap_or(0.0);
        let scale = if mean_weight > 0.0 { 1.0 / mean_weight } else { 0.0 };

        let mut epochs = 0;
        let mut converged = false;
        while !converged && epochs < params.max_iterations {
            converged = true;
            epochs += 1;

            for (i, point) in data.axis_iter(Axis(1)).enumerate() {
                let predicted = perceptron.predict_point(point);
                let actual = labels[i];
                let step = weights[i] * scale;
                if predicted == actual || step == 0.0 {
                    continue;
                }

                converged = false;
                perceptron
                    .weights
                    .row_mut(predicted)
                    .scaled_add(-step, &point);
                perceptron.weights.row_mut(actual).scaled_add(step, &point);
                perceptron.biases[predicted] -= step;
                perceptron.biases[actual] += step;
            }
        }

        log::trace!(
            "Perceptron finished after {} epochs (converged: {})",
            epochs,
            converged
        );

        Ok(perceptron)
    }

    fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        check_dimensionality(self.num_features(), data)?;
        Ok(data
            .axis_iter(Axis(1))
            .map(|point| self.predict_point(point))
            .collect())
    }

    fn num_features(&self) -> usize {
        self.weights.ncols()
    }

    fn validate(&self, num_classes: usize) -> Result<()> {
        crate::ensure!(
            self.weights.nrows() == num_classes && self.biases.len() == num_classes,
            AdaBoostError::persistence(format!(
                "Perceptron has {} weight rows and {} biases, expected {} classes",
                self.weights.nrows(),
                self.biases.len(),
                num_classes
            ))
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn train_uniform(
        data: ArrayView2<'_, f64>,
        labels: &Array1<ClassIndex>,
        num_classes: usize,
        seed: u64,
    ) -> Perceptron {
        let n = labels.len();
        let weights = Array1::from_elem(n, 1.0 / n as f64);
        let mut rng = StdRng::seed_from_u64(seed);
        Perceptron::train(
            data,
            labels.view(),
            num_classes,
            weights.view(),
            &PerceptronParams::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_linearly_separable_two_class() {
        let data = array![[-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]];
        let labels = array![0, 0, 0, 0, 1, 1, 1, 1];

        let perceptron = train_uniform(data.view(), &labels, 2, 42);
        assert_eq!(perceptron.classify(data.view()).unwrap(), labels);
        assert_eq!(perceptron.weights().dim(), (2, 1));
        assert_eq!(perceptron.biases().len(), 2);
    }

    #[test]
    fn test_three_separable_clusters() {
        let data = array![
            [0.0, 0.2, 5.0, 5.2, 0.0, 0.1],
            [0.0, 0.1, 0.0, 0.2, 5.0, 5.1]
        ];
        let labels = array![0, 0, 1, 1, 2, 2];

        let perceptron = train_uniform(data.view(), &labels, 3, 7);
        assert_eq!(perceptron.classify(data.view()).unwrap(), labels);
    }

    #[test]
    fn test_same_seed_same_model() {
        let data = array![[0.0, 1.0, 2.0, 3.0]];
        let labels = array![0, 1, 0, 1];
        let a = train_uniform(data.view(), &labels, 2, 3);
        let b = train_uniform(data.view(), &labels, 2, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimension_mismatch() {
        let data = array![[0.0, 1.0]];
        let perceptron = train_uniform(data.view(), &array![0, 1], 2, 1);
        assert!(perceptron.classify(array![[0.0], [1.0]].view()).is_err());
    }

    #[test]
    fn test_validate_shapes() {
        let data = array![[0.0, 1.0]];
        let mut perceptron = train_uniform(data.view(), &array![0, 1], 2, 1);
        assert!(perceptron.validate(2).is_ok());
        assert!(perceptron.validate(3).unwrap_err().is_persistence());

        perceptron.biases = array![0.0, 0.0, 0.0];
        assert!(perceptron.validate(2).unwrap_err().is_persistence());
    }
}
