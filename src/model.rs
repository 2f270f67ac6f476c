//! Trained AdaBoost models and their persistence.
//!
//! A model binds exactly one weak-learner kind to its trained ensemble, the
//! label mapping used to translate predictions back to raw labels, and the
//! number of features it was trained on.

use crate::boosting::{AdaBoost, BoostingOptions, EnsembleStatistics};
use crate::config::BoostingConfig;
use crate::core::error::{AdaBoostError, Result};
use crate::core::types::{ClassIndex, TrainingSummary, WeakLearnerType};
use crate::dataset::{check_label_count, normalize_labels, revert_labels, LabelMapping};
use crate::io::{load_from_path, save_to_path};
use crate::learner::{DecisionStump, Perceptron, PerceptronParams, StumpParams};
use ndarray::{Array1, ArrayView2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::path::Path;

/// A boosted ensemble over one concrete weak-learner kind.
///
/// Variant order fixes the persisted tag: 0 is the decision stump, 1 the
/// perceptron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoostedEnsemble {
    /// Ensemble of decision stumps
    DecisionStump(AdaBoost<DecisionStump>),
    /// Ensemble of perceptrons
    Perceptron(AdaBoost<Perceptron>),
}

impl BoostedEnsemble {
    /// Weak-learner kind of this ensemble.
    pub fn kind(&self) -> WeakLearnerType {
        match self {
            BoostedEnsemble::DecisionStump(_) => WeakLearnerType::DecisionStump,
            BoostedEnsemble::Perceptron(_) => WeakLearnerType::Perceptron,
        }
    }

    /// Predict one dense class per column.
    pub fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        match self {
            BoostedEnsemble::DecisionStump(model) => model.classify(data),
            BoostedEnsemble::Perceptron(model) => model.classify(data),
        }
    }

    /// Number of classes voted over.
    pub fn num_classes(&self) -> usize {
        match self {
            BoostedEnsemble::DecisionStump(model) => model.num_classes(),
            BoostedEnsemble::Perceptron(model) => model.num_classes(),
        }
    }

    /// Summary numbers of the underlying ensemble.
    pub fn statistics(&self) -> EnsembleStatistics {
        match self {
            BoostedEnsemble::DecisionStump(model) => model.ensemble().statistics(),
            BoostedEnsemble::Perceptron(model) => model.ensemble().statistics(),
        }
    }

    fn validate(&self, dimensionality: usize) -> Result<()> {
        match self {
            BoostedEnsemble::DecisionStump(model) => model.ensemble().validate(dimensionality),
            BoostedEnsemble::Perceptron(model) => model.ensemble().validate(dimensionality),
        }
    }
}

/// On-disk layout: label mapping, tagged ensemble, dimensionality.
#[derive(Serialize, Deserialize)]
struct PersistedModel<L> {
    mappings: LabelMapping<L>,
    ensemble: BoostedEnsemble,
    dimensionality: usize,
}

/// An AdaBoost classifier over raw labels of type `L`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaBoostModel<L> {
    mappings: LabelMapping<L>,
    ensemble: Option<BoostedEnsemble>,
    dimensionality: usize,
}

impl<L> Default for AdaBoostModel<L> {
    fn default() -> Self {
        AdaBoostModel {
            mappings: LabelMapping::default(),
            ensemble: None,
            dimensionality: 0,
        }
    }
}

impl<L> AdaBoostModel<L> {
    /// Create an untrained model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `train` or `load` has populated the model.
    pub fn is_trained(&self) -> bool {
        self.ensemble.is_some()
    }

    /// Weak-learner kind of the trained ensemble.
    pub fn weak_learner_type(&self) -> Option<WeakLearnerType> {
        self.ensemble.as_ref().map(BoostedEnsemble::kind)
    }

    /// Number of features the model was trained on.
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Mapping from dense class index to raw label.
    pub fn mappings(&self) -> &LabelMapping<L> {
        &self.mappings
    }

    /// The trained ensemble, if any.
    pub fn ensemble(&self) -> Option<&BoostedEnsemble> {
        self.ensemble.as_ref()
    }

    /// Predict dense class indices, one per column of `data`.
    pub fn classify_dense(&self, data: ArrayView2<'_, f64>) -> Result<Array1<ClassIndex>> {
        let ensemble = self.ensemble.as_ref().ok_or_else(|| {
            AdaBoostError::state("Cannot classify with a model that has not been trained")
        })?;

        if data.nrows() != self.dimensionality {
            return Err(AdaBoostError::dimension_mismatch(
                format!("{} features", self.dimensionality),
                format!("{} features", data.nrows()),
            ));
        }

        ensemble.classify(data)
    }
}

impl<L: Clone + Eq + Hash> AdaBoostModel<L> {
    /// Train on `data` (one column per point) with one raw label per point.
    ///
    /// Any previously trained ensemble is discarded first.
    pub fn train(
        &mut self,
        data: ArrayView2<'_, f64>,
        raw_labels: &[L],
        config: &BoostingConfig,
    ) -> Result<TrainingSummary> {
        let max_iterations = config.max_iterations()?;
        check_label_count(data, raw_labels.len())?;
        if data.nrows() == 0 {
            return Err(AdaBoostError::data("Training data has no features"));
        }

        self.ensemble = None;
        let (labels, mappings) = normalize_labels(raw_labels)?;
        let num_classes = mappings.len();
        let options = BoostingOptions {
            max_iterations,
            tolerance: config.tolerance,
        };
        let mut rng = StdRng::seed_from_u64(config.random_seed);

        let (ensemble, summary) = match config.weak_learner {
            WeakLearnerType::DecisionStump => {
                let params = StumpParams {
                    bucket_size: config.stump_bucket_size,
                };
                let (model, summary) = AdaBoost::<DecisionStump>::train(
                    data,
                    labels.view(),
                    num_classes,
                    &options,
                    &params,
                    &mut rng,
                )?;
                (BoostedEnsemble::DecisionStump(model), summary)
            }
            WeakLearnerType::Perceptron => {
                let params = PerceptronParams {
                    max_iterations: config.perceptron_max_iterations,
                };
                let (model, summary) = AdaBoost::<Perceptron>::train(
                    data,
                    labels.view(),
                    num_classes,
                    &options,
                    &params,
                    &mut rng,
                )?;
                (BoostedEnsemble::Perceptron(model), summary)
            }
        };

        self.mappings = mappings;
        self.dimensionality = data.nrows();
        self.ensemble = Some(ensemble);
        Ok(summary)
    }

    /// Predict raw labels, one per column of `data`.
    pub fn classify(&self, data: ArrayView2<'_, f64>) -> Result<Vec<L>> {
        let dense = self.classify_dense(data)?;
        revert_labels(dense.view(), &self.mappings)
    }
}

impl<L: Clone + Serialize + DeserializeOwned> AdaBoostModel<L> {
    /// Write the model to `path`; `.json` selects JSON, anything else bincode.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let ensemble = self
            .ensemble
            .clone()
            .ok_or_else(|| AdaBoostError::state("Cannot save a model that has not been trained"))?;

        let persisted = PersistedModel {
            mappings: self.mappings.clone(),
            ensemble,
            dimensionality: self.dimensionality,
        };
        save_to_path(&persisted, path)?;

        let kind = persisted.ensemble.kind();
        log::info!(
            "Saved {} model (tag {}) to {}",
            kind,
            kind.tag(),
            path.display()
        );
        Ok(())
    }

    /// Read a model previously written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let persisted: PersistedModel<L> = load_from_path(path)?;

        if persisted.dimensionality == 0 {
            return Err(AdaBoostError::persistence(
                "Stored model has zero dimensionality",
            ));
        }
        if persisted.mappings.len() != persisted.ensemble.num_classes() {
            return Err(AdaBoostError::persistence(format!(
                "Stored label mapping has {} entries but the ensemble votes over {} classes",
                persisted.mappings.len(),
                persisted.ensemble.num_classes()
            )));
        }
        persisted.ensemble.validate(persisted.dimensionality)?;

        log::info!(
            "Loaded {} model from {} ({} features, {} classes)",
            persisted.ensemble.kind(),
            path.display(),
            persisted.dimensionality,
            persisted.mappings.len()
        );

        Ok(AdaBoostModel {
            mappings: persisted.mappings,
            ensemble: Some(persisted.ensemble),
            dimensionality: persisted.dimensionality,
        })
    }
}
