//! Core trait definitions for Pure Rust AdaBoost.
//!
//! [`WeakLearner`] is the seam between the boosting engine and the concrete
//! classifiers it combines. The engine only ever trains a learner and asks it
//! to classify; it never looks inside.

use crate::core::error::Result;
use crate::core::types::{ClassIndex, WeakLearnerType};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A classifier that can be boosted.
///
/// Data is laid out one column per point and one row per feature.
pub trait WeakLearner: Sized + Debug + Clone + Serialize + DeserializeOwned {
    /// Hyperparameters needed to train one instance.
    type Params: Debug + Clone;

    /// Persisted kind tag of this learner.
    const KIND: WeakLearnerType;

    /// Train a new hypothesis.
    ///
    /// `weights` holds one non-negative importance per point; the learner is
    /// expected to favour getting heavy points right.
    fn train<R: Rng + ?Sized>(
        data: ArrayView2<'_, f64>,
        labels: ArrayView1<'_, ClassIndex>,
        num_classes: usize,
        weights: ArrayView1<'_, f64>,
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<Self>;

    /// Predict one dense class index per column of `data`.
    fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>>;

    /// Number of features this hypothesis was trained on.
    fn num_features(&self) -> usize;

    /// Check internal consistency of a deserialized hypothesis.
    ///
    /// A hypothesis that passes can classify any data with
    /// [`num_features`](Self::num_features) rows without panicking, and only
    /// ever predicts classes below `num_classes`.
    fn validate(&self, num_classes: usize) -> Result<()>;
}
