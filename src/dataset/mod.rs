//! Dataset handling for Pure Rust AdaBoost.
//!
//! Datasets are dense `f64` matrices with one column per point and one row
//! per feature. This module provides label normalization and, with the `csv`
//! feature, loading and saving of delimited text files.

pub mod labels;

#[cfg(feature = "csv")]
#[cfg_attr(docsrs, doc(cfg(feature = "csv")))]
pub mod csv;

pub use labels::{normalize_labels, revert_labels, LabelMapping};

#[cfg(feature = "csv")]
pub use self::csv::{save_labels, CsvConfig, CsvLoader};

use crate::core::error::{AdaBoostError, Result};
use ndarray::ArrayView2;

/// Check that a label vector has one entry per data column.
pub fn check_label_count(data: ArrayView2<'_, f64>, num_labels: usize) -> Result<()> {
    if data.ncols() != num_labels {
        return Err(AdaBoostError::data(format!(
            "Number of labels ({}) does not match number of points ({})",
            num_labels,
            data.ncols()
        )));
    }
    Ok(())
}
