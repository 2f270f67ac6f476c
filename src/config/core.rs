//! Core configuration structures and implementation for Pure Rust AdaBoost.
//!
//! This module provides the training configuration and its builder, along
//! with validation and TOML/JSON file support.

use crate::core::constants::*;
use crate::core::error::{AdaBoostError, Result};
use crate::core::types::WeakLearnerType;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Training configuration for an AdaBoost model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostingConfig {
    /// Maximum number of boosting iterations (0 runs until convergence).
    /// Signed so that a negative request can be reported instead of wrapped.
    pub iterations: i64,
    /// Tolerance for the change in weighted training error between rounds
    pub tolerance: f64,
    /// Weak learner used in every round
    pub weak_learner: WeakLearnerType,
    /// Seed of the random source handed to the weak learners
    pub random_seed: u64,
    /// Maximum perceptron epochs per round
    pub perceptron_max_iterations: usize,
    /// Minimum number of points on each side of a stump split
    pub stump_bucket_size: usize,
}

impl Default for BoostingConfig {
    fn default() -> Self {
        BoostingConfig {
            iterations: DEFAULT_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            weak_learner: WeakLearnerType::DecisionStump,
            random_seed: DEFAULT_RANDOM_SEED,
            perceptron_max_iterations: DEFAULT_PERCEPTRON_MAX_ITERATIONS,
            stump_bucket_size: DEFAULT_STUMP_BUCKET_SIZE,
        }
    }
}

impl BoostingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.iterations < 0 {
            return Err(AdaBoostError::config(format!(
                "Invalid number of iterations ({}) specified! Must be greater than or equal to 0.",
                self.iterations
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(AdaBoostError::invalid_parameter(
                "tolerance",
                self.tolerance.to_string(),
                "must be a finite, non-negative number",
            ));
        }

        if self.perceptron_max_iterations == 0 {
            return Err(AdaBoostError::invalid_parameter(
                "perceptron_max_iterations",
                "0",
                "must be at least 1",
            ));
        }

        if self.stump_bucket_size == 0 {
            return Err(AdaBoostError::invalid_parameter(
                "stump_bucket_size",
                "0",
                "must be at least 1",
            ));
        }

        Ok(())
    }

    /// Iteration cap as an unsigned count; `None` means unbounded.
    pub fn max_iterations(&self) -> Result<Option<usize>> {
        self.validate()?;
        Ok(match self.iterations {
            0 => None,
            n => Some(n as usize),
        })
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AdaBoostError::config(format!("Failed to read config file: {}", e)))?;

        let config: BoostingConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| AdaBoostError::config(format!("Failed to parse JSON config: {}", e)))?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(AdaBoostError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(AdaBoostError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override fields from `ADABOOST_*` environment variables.
    ///
    /// Values are parsed but not validated; call [`validate`](Self::validate)
    /// once every override has been applied.
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ADABOOST_ITERATIONS") {
            self.iterations = val
                .parse()
                .map_err(|_| AdaBoostError::config("Invalid ADABOOST_ITERATIONS"))?;
        }

        if let Ok(val) = std::env::var("ADABOOST_TOLERANCE") {
            self.tolerance = val
                .parse()
                .map_err(|_| AdaBoostError::config("Invalid ADABOOST_TOLERANCE"))?;
        }

        if let Ok(val) = std::env::var("ADABOOST_WEAK_LEARNER") {
            self.weak_learner = val.parse()?;
        }

        if let Ok(val) = std::env::var("ADABOOST_SEED") {
            self.random_seed = val
                .parse()
                .map_err(|_| AdaBoostError::config("Invalid ADABOOST_SEED"))?;
        }

        Ok(())
    }
}

/// Builder for [`BoostingConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: BoostingConfig,
}

impl ConfigBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap (0 = until convergence)
    pub fn iterations(mut self, iterations: i64) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the weak learner kind
    pub fn weak_learner(mut self, weak_learner: WeakLearnerType) -> Self {
        self.config.weak_learner = weak_learner;
        self
    }

    /// Set the random seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    /// Set the perceptron epoch cap
    pub fn perceptron_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.perceptron_max_iterations = max_iterations;
        self
    }

    /// Set the minimum number of points per stump side
    pub fn stump_bucket_size(mut self, bucket_size: usize) -> Self {
        self.config.stump_bucket_size = bucket_size;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<BoostingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Return the configuration without validation
    pub fn build_unchecked(self) -> BoostingConfig {
        self.config
    }
}
