//! Ensemble management for the Pure Rust AdaBoost framework.
//!
//! An ensemble is an ordered list of weak hypotheses with their confidence
//! coefficients. Classification is a weighted vote: every hypothesis adds its
//! alpha to the class it predicts, and the class with the largest total wins.

use crate::core::error::{AdaBoostError, Result};
use crate::core::numeric::argmax;
use crate::core::traits::WeakLearner;
use crate::core::types::ClassIndex;
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One boosting round's contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedHypothesis<W> {
    /// Trained weak learner
    pub hypothesis: W,
    /// Confidence coefficient
    pub alpha: f64,
}

/// Weighted vote over weak hypotheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble<W> {
    num_classes: usize,
    members: Vec<WeightedHypothesis<W>>,
}

/// Summary numbers for an ensemble.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleStatistics {
    /// Number of hypotheses
    pub num_hypotheses: usize,
    /// Sum of all alphas
    pub total_alpha: f64,
    /// Largest single alpha
    pub max_alpha: f64,
    /// Number of classes voted over
    pub num_classes: usize,
}

impl<W: WeakLearner> Ensemble<W> {
    /// Creates an empty ensemble over `num_classes` classes.
    pub fn new(num_classes: usize) -> Self {
        Ensemble {
            num_classes,
            members: Vec::new(),
        }
    }

    /// Appends a hypothesis.
    pub fn push(&mut self, hypothesis: W, alpha: f64) {
        self.members.push(WeightedHypothesis { hypothesis, alpha });
    }

    /// Number of classes voted over.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Number of hypotheses.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when nothing has been trained.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Hypotheses in the order they were added.
    pub fn members(&self) -> &[WeightedHypothesis<W>] {
        &self.members
    }

    /// Accumulated vote of the first `rounds` hypotheses,
    /// `num_classes x num_points`.
    pub fn scores_at_round(&self, data: ArrayView2<'_, f64>, rounds: usize) -> Result<Array2<f64>> {
        if self.is_empty() {
            return Err(AdaBoostError::state(
                "Cannot classify with an empty ensemble; the model has not been trained",
            ));
        }

        let mut scores = Array2::zeros((self.num_classes, data.ncols()));
        for member in self.members.iter().take(rounds) {
            let predictions = member.hypothesis.classify(data)?;
            for (point, &class) in predictions.iter().enumerate() {
                if class >= self.num_classes {
                    return Err(AdaBoostError::internal(format!(
                        "Weak hypothesis predicted class {} of {}",
                        class, self.num_classes
                    )));
                }
                scores[[class, point]] += member.alpha;
            }
        }
        Ok(scores)
    }

    /// Accumulated vote of every hypothesis.
    pub fn scores(&self, data: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        self.scores_at_round(data, self.members.len())
    }

    /// Predict using only the first `rounds` hypotheses.
    pub fn classify_at_round(
        &self,
        data: ArrayView2<'_, f64>,
        rounds: usize,
    ) -> Result<Array1<ClassIndex>> {
        let scores = self.scores_at_round(data, rounds)?;
        let predictions: Vec<ClassIndex> = scores
            .axis_iter(Axis(1))
            .into_par_iter()
            .map(argmax)
            .collect();
        Ok(Array1::from(predictions))
    }

    /// Predict one class per column; ties go to the smallest class index.
    pub fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        self.classify_at_round(data, self.members.len())
    }

    /// Checks structural consistency, e.g. after loading from disk.
    pub fn validate(&self, num_features: usize) -> Result<()> {
        if self.num_classes == 0 {
            return Err(AdaBoostError::persistence("Ensemble has zero classes"));
        }
        for (round, member) in self.members.iter().enumerate() {
            if !member.alpha.is_finite() {
                return Err(AdaBoostError::persistence(format!(
                    "Hypothesis {} has a non-finite alpha ({})",
                    round, member.alpha
                )));
            }
            if member.hypothesis.num_features() != num_features {
                return Err(AdaBoostError::persistence(format!(
                    "Hypothesis {} expects {} features, model dimensionality is {}",
                    round,
                    member.hypothesis.num_features(),
                    num_features
                )));
            }
            member.hypothesis.validate(self.num_classes)?;
        }
        Ok(())
    }

    /// Calculates ensemble statistics.
    pub fn statistics(&self) -> EnsembleStatistics {
        EnsembleStatistics {
            num_hypotheses: self.members.len(),
            total_alpha: self.members.iter().map(|m| m.alpha).sum(),
            max_alpha: self
                .members
                .iter()
                .map(|m| m.alpha)
                .fold(0.0, f64::max),
            num_classes: self.num_classes,
        }
    }
}
