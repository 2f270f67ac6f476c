//! System constants and configuration defaults for Pure Rust AdaBoost.

/// Default maximum number of boosting iterations.
/// Zero means "run until the tolerance is met".
pub const DEFAULT_ITERATIONS: i64 = 1000;

/// Default tolerance on the change of weighted training error between rounds.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default random seed for weak learners that need randomness.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Default maximum number of perceptron epochs per boosting round.
pub const DEFAULT_PERCEPTRON_MAX_ITERATIONS: usize = 1000;

/// Default minimum number of points on each side of a decision stump split.
pub const DEFAULT_STUMP_BUCKET_SIZE: usize = 1;

/// Weighted error substituted for an exactly zero error when computing the
/// confidence of a perfect hypothesis, keeping alpha finite.
pub const MIN_WEIGHTED_ERROR: f64 = 1e-10;

/// Slack allowed when checking that a weight matrix sums to one.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Library version string.
pub const ADABOOST_RUST_VERSION: &str = env!("CARGO_PKG_VERSION");
