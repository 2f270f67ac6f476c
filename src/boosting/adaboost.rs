//! AdaBoost.MH training loop.
//!
//! Each round fits a weak hypothesis against the current weight matrix,
//! scores it by weighted Hamming error, turns that error into a confidence
//! coefficient, reweights, and appends the hypothesis to the ensemble. The
//! loop ends when the error stops changing, when the iteration cap is hit, or
//! when the weak learner stops being useful.

use crate::boosting::ensemble::Ensemble;
use crate::boosting::weights::WeightMatrix;
use crate::core::constants::MIN_WEIGHTED_ERROR;
use crate::core::error::{AdaBoostError, Result};
use crate::core::traits::WeakLearner;
use crate::core::types::{ClassIndex, RoundRecord, TerminationReason, TrainingSummary};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Confidence coefficient of a hypothesis with weighted error `error`.
pub fn confidence(error: f64) -> f64 {
    0.5 * ((1.0 - error) / error).ln()
}

/// Stopping rules for the round loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostingOptions {
    /// Iteration cap; `None` runs until the tolerance is met
    pub max_iterations: Option<usize>,
    /// Minimum change in weighted error between rounds to keep going
    pub tolerance: f64,
}

/// An AdaBoost.MH classifier over weak learners of type `W`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaBoost<W> {
    tolerance: f64,
    ensemble: Ensemble<W>,
}

impl<W: WeakLearner> AdaBoost<W> {
    /// Train a new classifier.
    ///
    /// `labels` must already be dense class indices below `num_classes`.
    pub fn train<R: Rng + ?Sized>(
        data: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, ClassIndex>,
        num_classes: usize,
        options: &BoostingOptions,
        params: &W::Params,
        rng: &mut R,
    ) -> Result<(Self, TrainingSummary)> {
        if !options.tolerance.is_finite() || options.tolerance < 0.0 {
            return Err(AdaBoostError::invalid_parameter(
                "tolerance",
                options.tolerance.to_string(),
                "must be a finite, non-negative number",
            ));
        }
        if labels.len() != data.ncols() {
            return Err(AdaBoostError::data(format!(
                "Number of labels ({}) does not match number of points ({})",
                labels.len(),
                data.ncols()
            )));
        }
        if let Some(&bad) = labels.iter().find(|&&label| label >= num_classes) {
            return Err(AdaBoostError::data(format!(
                "Label {} is out of range for {} classes",
                bad, num_classes
            )));
        }

        let num_points = data.ncols();
        let mut weights = WeightMatrix::uniform(num_classes, num_points)?;
        let mut ensemble = Ensemble::new(num_classes);
        let mut history = Vec::new();
        let mut hamming_loss_bound = 1.0;
        let mut previous_error: Option<f64> = None;

        log::info!(
            "Training AdaBoost.MH with {} weak learners on {} points ({} features, {} classes)",
            W::KIND,
            num_points,
            data.nrows(),
            num_classes
        );

        let termination = loop {
            let round = history.len() + 1;
            if let Some(max) = options.max_iterations {
                if round > max {
                    break TerminationReason::Exhausted;
                }
            }

            let point_weights = weights.point_weights();
            let hypothesis =
                W::train(data, labels, num_classes, point_weights.view(), params, rng)?;
            let predictions = hypothesis.classify(data)?;
            check_predictions(&predictions, num_points, num_classes)?;

            let error = weights.weighted_error(labels, predictions.view());

            if error >= 0.5 {
                log::debug!(
                    "Round {}: weighted error {:.6} is no better than chance; stopping",
                    round,
                    error
                );
                history.push(RoundRecord {
                    round,
                    error,
                    alpha: 0.0,
                    normalizer: 0.0,
                });
                break TerminationReason::Degenerate;
            }

            let perfect = error == 0.0;
            let alpha = if perfect {
                confidence(MIN_WEIGHTED_ERROR)
            } else {
                confidence(error)
            };

            let normalizer = weights.reweight(alpha, labels, predictions.view())?;
            hamming_loss_bound *= normalizer;
            ensemble.push(hypothesis, alpha);
            history.push(RoundRecord {
                round,
                error,
                alpha,
                normalizer,
            });

            log::debug!(
                "Round {}: weighted error {:.6}, alpha {:.6}, normalizer {:.6}",
                round,
                error,
                alpha,
                normalizer
            );

            if perfect {
                break TerminationReason::PerfectFit;
            }

            if let Some(previous) = previous_error {
                if (error - previous).abs() < options.tolerance {
                    break TerminationReason::Converged;
                }
            }
            previous_error = Some(error);
        };

        if ensemble.is_empty() {
            log::warn!(
                "The first weak hypothesis was no better than chance; the ensemble is empty"
            );
        }

        log::info!(
            "AdaBoost training finished after {} rounds ({}); Hamming loss bound {:.6}",
            ensemble.len(),
            termination,
            hamming_loss_bound
        );

        let summary = TrainingSummary {
            rounds: ensemble.len(),
            termination,
            history,
            hamming_loss_bound,
        };

        Ok((
            AdaBoost {
                tolerance: options.tolerance,
                ensemble,
            },
            summary,
        ))
    }

    /// Predict one dense class per column of `data`.
    pub fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        self.ensemble.classify(data)
    }

    /// Tolerance used during training.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.ensemble.num_classes()
    }

    /// The trained ensemble.
    pub fn ensemble(&self) -> &Ensemble<W> {
        &self.ensemble
    }
}

fn check_predictions(
    predictions: &Array1<ClassIndex>,
    num_points: usize,
    num_classes: usize,
) -> Result<()> {
    if predictions.len() != num_points {
        return Err(AdaBoostError::training(format!(
            "Weak learner returned {} predictions for {} points",
            predictions.len(),
            num_points
        )));
    }
    if let Some(&bad) = predictions.iter().find(|&&class| class >= num_classes) {
        return Err(AdaBoostError::training(format!(
            "Weak learner predicted class {} of {}",
            bad, num_classes
        )));
    }
    Ok(())
}
