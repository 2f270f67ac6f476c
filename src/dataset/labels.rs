//! Label normalization.
//!
//! Training labels may be any comparable value (integers, strings, ...). The
//! boosting engine only works with dense class indices `0..K`, so labels are
//! mapped on the way in and reverted on the way out.

use crate::core::error::{AdaBoostError, Result};
use crate::core::types::ClassIndex;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered mapping from dense class index to the raw label it stands for.
///
/// Position `k` holds the raw label of class `k`. The mapping is built once
/// from the training labels and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMapping<L> {
    labels: Vec<L>,
}

impl<L> LabelMapping<L> {
    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True for the mapping of an untrained model.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Raw label of a dense class index.
    pub fn raw_label(&self, class: ClassIndex) -> Option<&L> {
        self.labels.get(class)
    }

    /// Raw labels in class-index order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<L: PartialEq> LabelMapping<L> {
    /// Dense class index of a raw label, if it was seen during training.
    pub fn class_of(&self, label: &L) -> Option<ClassIndex> {
        self.labels.iter().position(|l| l == label)
    }
}

impl<L> Default for LabelMapping<L> {
    fn default() -> Self {
        LabelMapping { labels: Vec::new() }
    }
}

/// Map raw labels to dense class indices in order of first appearance.
///
/// # Errors
///
/// Returns a data error if `raw_labels` is empty.
pub fn normalize_labels<L>(raw_labels: &[L]) -> Result<(Array1<ClassIndex>, LabelMapping<L>)>
where
    L: Clone + Eq + Hash,
{
    if raw_labels.is_empty() {
        return Err(AdaBoostError::data("Cannot normalize an empty label vector"));
    }

    let mut index: HashMap<&L, ClassIndex> = HashMap::new();
    let mut mapping = Vec::new();
    let dense = raw_labels
        .iter()
        .map(|label| {
            *index.entry(label).or_insert_with(|| {
                mapping.push(label.clone());
                mapping.len() - 1
            })
        })
        .collect::<Array1<ClassIndex>>();

    log::debug!(
        "Normalized {} labels into {} classes",
        raw_labels.len(),
        mapping.len()
    );

    Ok((dense, LabelMapping { labels: mapping }))
}

/// Map dense class indices back to raw labels.
///
/// # Errors
///
/// Returns a data error if an index is outside the mapping. Indices produced
/// by a trained model never are.
pub fn revert_labels<L: Clone>(
    dense_labels: ArrayView1<'_, ClassIndex>,
    mapping: &LabelMapping<L>,
) -> Result<Vec<L>> {
    dense_labels
        .iter()
        .map(|&class| {
            mapping.raw_label(class).cloned().ok_or_else(|| {
                AdaBoostError::data(format!(
                    "Class index {} is outside the label mapping of {} classes",
                    class,
                    mapping.len()
                ))
            })
        })
        .collect()
}
