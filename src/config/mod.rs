//! Configuration management for Pure Rust AdaBoost.
//!
//! Training parameters live in [`BoostingConfig`], which can be built in code
//! through [`ConfigBuilder`], loaded from TOML or JSON, and overridden from
//! the environment.

pub mod core;

pub use self::core::{BoostingConfig, ConfigBuilder};

