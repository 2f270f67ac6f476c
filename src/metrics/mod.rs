//! Evaluation metrics for AdaBoost models.
//!
//! # Examples
//!
//! ```rust
//! use adaboost_rust::metrics::accuracy;
//!
//! # fn example() -> adaboost_rust::Result<()> {
//! let predictions = vec!["cat", "dog", "dog"];
//! let labels = vec!["cat", "dog", "cat"];
//! let score = accuracy(&predictions, &labels)?;
//! assert!((score - 2.0 / 3.0).abs() < 1e-12);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod classification;

pub use classification::{accuracy, confusion_matrix};
