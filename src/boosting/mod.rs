//! Boosting for Pure Rust AdaBoost.
//!
//! This module contains the AdaBoost.MH round loop, the class-by-point
//! weight matrix it maintains, and the weighted-vote ensemble it produces.

pub mod adaboost;
pub mod ensemble;
pub mod weights;

pub use adaboost::{confidence, AdaBoost, BoostingOptions};
pub use ensemble::{Ensemble, EnsembleStatistics, WeightedHypothesis};
pub use weights::WeightMatrix;
