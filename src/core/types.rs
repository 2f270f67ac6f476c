//! Core data types for the Pure Rust AdaBoost implementation.
//!
//! This module defines the fundamental aliases and enumerations shared by the
//! boosting engine, the weak learners and the model container.

use crate::core::error::AdaBoostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dense class index in `[0, num_classes)`.
pub type ClassIndex = usize;

/// Feature and weight value type. Boosting weights need double precision
/// because they are repeatedly multiplied by `exp(±alpha)`.
pub type Score = f64;

/// Boosting round counter.
pub type IterationIndex = usize;

/// Supported weak learner kinds.
///
/// The declaration order fixes the persisted tag: `DecisionStump = 0`,
/// `Perceptron = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeakLearnerType {
    /// Single-feature threshold classifier
    DecisionStump,
    /// Multiclass linear perceptron
    Perceptron,
}

impl Default for WeakLearnerType {
    fn default() -> Self {
        WeakLearnerType::DecisionStump
    }
}

impl WeakLearnerType {
    /// Numeric tag used in persisted models.
    pub fn tag(&self) -> u32 {
        match self {
            WeakLearnerType::DecisionStump => 0,
            WeakLearnerType::Perceptron => 1,
        }
    }

    /// Name accepted on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeakLearnerType::DecisionStump => "decision_stump",
            WeakLearnerType::Perceptron => "perceptron",
        }
    }
}

impl fmt::Display for WeakLearnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeakLearnerType {
    type Err = AdaBoostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "decision_stump" => Ok(WeakLearnerType::DecisionStump),
            "perceptron" => Ok(WeakLearnerType::Perceptron),
            other => Err(AdaBoostError::config(format!(
                "Unknown weak learner type '{}'; must be 'decision_stump' or 'perceptron'.",
                other
            ))),
        }
    }
}

/// Why the boosting loop stopped. Every variant is a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Change in weighted error fell below the tolerance
    Converged,
    /// The configured iteration cap was reached
    Exhausted,
    /// The weak learner did no better than chance; its hypothesis was dropped
    Degenerate,
    /// The weak learner made no weighted mistakes; its hypothesis was kept
    PerfectFit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Converged => write!(f, "converged"),
            TerminationReason::Exhausted => write!(f, "exhausted"),
            TerminationReason::Degenerate => write!(f, "degenerate"),
            TerminationReason::PerfectFit => write!(f, "perfect fit"),
        }
    }
}

/// Per-round training record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: IterationIndex,
    /// Weighted Hamming error of the round's hypothesis
    pub error: Score,
    /// Confidence coefficient (0 when the hypothesis was discarded)
    pub alpha: Score,
    /// Normalization constant of the reweighting step (0 when skipped)
    pub normalizer: Score,
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of hypotheses kept in the ensemble
    pub rounds: usize,
    /// Why the loop stopped
    pub termination: TerminationReason,
    /// One record per fitted hypothesis, including a discarded final one
    pub history: Vec<RoundRecord>,
    /// Product of the normalizers; an upper bound on the training Hamming loss
    pub hamming_loss_bound: Score,
}
