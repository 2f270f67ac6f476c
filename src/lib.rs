//! # Pure Rust AdaBoost
//!
//! A pure Rust implementation of AdaBoost.MH, the multiclass variant of
//! adaptive boosting. Weak classifiers are trained one round at a time against
//! a reweighted view of the training data and combined into a weighted vote.
//!
//! ## Features
//!
//! - **Pluggable weak learners**: anything implementing [`WeakLearner`] can be
//!   boosted; decision stumps and perceptrons are included.
//! - **Arbitrary labels**: raw labels of any hashable type are mapped to dense
//!   class indices and back.
//! - **Persistence**: trained models round-trip through bincode or JSON.
//! - **Command-line tool**: the `adaboost` binary trains, applies and saves
//!   models from CSV files.
//!
//! ## Quick Start
//!
//! ```rust
//! use adaboost_rust::{AdaBoostModel, ConfigBuilder};
//! use ndarray::array;
//!
//! # fn main() -> adaboost_rust::Result<()> {
//! // One feature row, one column per point.
//! let data = array![[-1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0]];
//! let labels = ["neg", "neg", "neg", "neg", "pos", "pos", "pos", "pos"];
//!
//! let config = ConfigBuilder::new().iterations(10).tolerance(1e-10).build()?;
//! let mut model = AdaBoostModel::new();
//! let summary = model.train(data.view(), &labels, &config)?;
//! assert_eq!(summary.rounds, 1);
//!
//! let predictions = model.classify(array![[-0.9, 0.9]].view())?;
//! assert_eq!(predictions, vec!["neg", "pos"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Data layout
//!
//! Every matrix has one column per point and one row per feature. The boosting
//! weight matrix has one row per class and one column per point.

#![doc(html_root_url = "https://docs.rs/adaboost-rust/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Label handling and dataset I/O
pub mod dataset;

// Weak learners
pub mod learner;

// Boosting engine and ensemble
pub mod boosting;

// Model container and persistence
pub mod model;

// Serialization formats
pub mod io;

// Evaluation metrics
pub mod metrics;

// Command-line front end
#[cfg(feature = "csv")]
#[cfg_attr(docsrs, doc(cfg(feature = "csv")))]
pub mod cli;

// Re-export core functionality for convenience
pub use self::core::{
    constants::*,
    error::{AdaBoostError, Result},
    traits::*,
    types::*,
};

// Re-export configuration functionality
pub use config::{BoostingConfig, ConfigBuilder};

// Re-export dataset functionality
pub use dataset::{normalize_labels, revert_labels, LabelMapping};

// Re-export weak learners
pub use learner::{DecisionStump, Perceptron, PerceptronParams, StumpParams};

// Re-export boosting functionality
pub use boosting::{AdaBoost, BoostingOptions, Ensemble, WeightMatrix};

// Re-export the model
pub use model::{AdaBoostModel, BoostedEnsemble};

// Version information
pub use self::core::constants::ADABOOST_RUST_VERSION as VERSION;

/// Initialize the AdaBoost library.
///
/// Sets up `env_logger` (honouring `RUST_LOG`, defaulting to `info`). Nothing
/// else depends on it; calling it is optional and idempotent.
///
/// # Examples
///
/// ```rust
/// fn main() -> adaboost_rust::Result<()> {
///     adaboost_rust::init()?;
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    self::core::initialize_core()
}

/// Check if the library has been initialized.
pub fn is_initialized() -> bool {
    self::core::is_core_initialized()
}
