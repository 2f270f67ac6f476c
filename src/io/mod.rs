//! Input/Output operations for Pure Rust AdaBoost.
//!
//! This module reads and writes trained models. Tabular data loading lives
//! in [`crate::dataset`].

pub mod format;

pub use format::{load_from_path, save_to_path, SerializationFormat};
