//! Command-line front end for training and applying AdaBoost models.
//!
//! The binary is a thin wrapper around [`CliOptions::parse`] and [`run`]; the
//! logic lives here so it can be tested without spawning a process.

use crate::config::BoostingConfig;
use crate::core::error::{AdaBoostError, Result};
use crate::core::types::{TrainingSummary, WeakLearnerType};
use crate::dataset::{save_labels, CsvLoader};
use crate::model::AdaBoostModel;
use std::path::PathBuf;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
adaboost: train and apply AdaBoost.MH multiclass classifiers

Train a model with --training_file (-t). Labels come from --labels_file (-l);
without one, the last column of the training set is used. Alternately, load a
model with --input_model_file (-m). A trained or loaded model classifies the
points of --test_file (-T) and writes one predicted label per line to
--output_file (-o). --output_model_file (-M) saves the model.

Options:
  -t, --training_file <FILE>       training set (CSV, one point per line)
  -l, --labels_file <FILE>         labels for the training set
  -m, --input_model_file <FILE>    previously saved model
  -M, --output_model_file <FILE>   where to save the model (.json or binary)
  -T, --test_file <FILE>           points to classify
  -o, --output_file <FILE>         where to write predicted labels
  -i, --iterations <N>             maximum boosting rounds, 0 = until convergence [default: 1000]
  -e, --tolerance <X>              tolerance for the change in weighted error [default: 1e-10]
  -w, --weak_learner <NAME>        'decision_stump' or 'perceptron' [default: decision_stump]
  -s, --seed <N>                   random seed for the weak learners
  -c, --config <FILE>              TOML or JSON training configuration
  -v, --verbose                    log every boosting round
  -h, --help                       print this message
";

/// Parsed command-line options.
///
/// Options that were not given stay `None` so that the warnings about
/// ignored options only fire for what the user actually typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Training set
    pub training_file: Option<PathBuf>,
    /// Labels for the training set
    pub labels_file: Option<PathBuf>,
    /// Previously saved model
    pub input_model_file: Option<PathBuf>,
    /// Where to save the model
    pub output_model_file: Option<PathBuf>,
    /// Points to classify
    pub test_file: Option<PathBuf>,
    /// Where to write predictions
    pub output_file: Option<PathBuf>,
    /// Maximum boosting rounds
    pub iterations: Option<i64>,
    /// Convergence tolerance
    pub tolerance: Option<f64>,
    /// Weak learner name
    pub weak_learner: Option<String>,
    /// Random seed
    pub seed: Option<u64>,
    /// Training configuration file
    pub config_file: Option<PathBuf>,
    /// Log every round
    pub verbose: bool,
    /// Print usage and exit
    pub help: bool,
}

/// What a [`run`] produced.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Present when a model was trained
    pub summary: Option<TrainingSummary>,
    /// Present when a test set was classified
    pub predictions: Option<Vec<String>>,
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        AdaBoostError::config(format!("Invalid value '{}' for --{}", value, name))
    })
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    ///
    /// Accepts `--name value`, `--name=value` and `-x value`.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().map(|arg| -> String { arg.into() });

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            let name = match flag.as_str() {
                "-t" | "--training_file" => "training_file",
                "-l" | "--labels_file" => "labels_file",
                "-m" | "--input_model_file" => "input_model_file",
                "-M" | "--output_model_file" => "output_model_file",
                "-T" | "--test_file" => "test_file",
                "-o" | "--output_file" => "output_file",
                "-i" | "--iterations" => "iterations",
                "-e" | "--tolerance" => "tolerance",
                "-w" | "--weak_learner" => "weak_learner",
                "-s" | "--seed" => "seed",
                "-c" | "--config" => "config",
                "-v" | "--verbose" => {
                    options.verbose = true;
                    continue;
                }
                "-h" | "--help" => {
                    options.help = true;
                    continue;
                }
                other => {
                    return Err(AdaBoostError::config(format!("Unknown option '{}'", other)))
                }
            };

            let value = match inline {
                Some(value) => value,
                None => args.next().ok_or_else(|| {
                    AdaBoostError::config(format!("Option --{} requires a value", name))
                })?,
            };

            match name {
                "training_file" => options.training_file = Some(value.into()),
                "labels_file" => options.labels_file = Some(value.into()),
                "input_model_file" => options.input_model_file = Some(value.into()),
                "output_model_file" => options.output_model_file = Some(value.into()),
                "test_file" => options.test_file = Some(value.into()),
                "output_file" => options.output_file = Some(value.into()),
                "iterations" => options.iterations = Some(parse_value(name, &value)?),
                "tolerance" => options.tolerance = Some(parse_value(name, &value)?),
                "weak_learner" => options.weak_learner = Some(value),
                "seed" => options.seed = Some(parse_value(name, &value)?),
                _ => options.config_file = Some(value.into()),
            }
        }

        Ok(options)
    }

    /// Check option combinations.
    ///
    /// Contradictory or invalid combinations are errors; options that will be
    /// ignored are returned as warnings.
    pub fn validate(&self) -> Result<Vec<String>> {
        let training = self.training_file.is_some();
        let loading = self.input_model_file.is_some();

        if training && loading {
            return Err(AdaBoostError::config(
                "Only one of --training_file or --input_model_file may be specified!",
            ));
        }
        if !training && !loading {
            return Err(AdaBoostError::config(
                "Either --training_file or --input_model_file must be specified!",
            ));
        }
        if let Some(name) = &self.weak_learner {
            name.parse::<WeakLearnerType>()?;
        }
        if let Some(iterations) = self.iterations {
            if iterations < 0 {
                return Err(AdaBoostError::config(format!(
                    "Invalid number of iterations ({}) specified! Must be greater than or equal to 0.",
                    iterations
                )));
            }
        }

        let mut warnings = Vec::new();
        if self.labels_file.is_some() && !training {
            warnings.push(
                "--labels_file ignored, because --training_file was not passed.".to_string(),
            );
        }
        if loading && self.weak_learner.is_some() {
            warnings.push(
                "--weak_learner ignored because --input_model_file is specified.".to_string(),
            );
        }
        if self.tolerance.is_some() && !training {
            warnings
                .push("--tolerance ignored, because --training_file was not passed.".to_string());
        }
        if self.iterations.is_some() && !training {
            warnings
                .push("--iterations ignored, because --training_file was not passed.".to_string());
        }
        if self.output_model_file.is_none() && self.output_file.is_none() {
            warnings.push(
                "Neither --output_model_file nor --output_file are specified; no results will be saved."
                    .to_string(),
            );
        }
        if self.output_file.is_some() && self.test_file.is_none() {
            warnings
                .push("--output_file ignored because --test_file is not specified.".to_string());
        }

        Ok(warnings)
    }

    /// Training configuration: config file, then `ADABOOST_*` variables, then flags.
    pub fn boosting_config(&self) -> Result<BoostingConfig> {
        let mut config = match &self.config_file {
            Some(path) => BoostingConfig::load_from_file(path)?,
            None => BoostingConfig::default(),
        };
        config.apply_environment_overrides()?;

        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(name) = &self.weak_learner {
            config.weak_learner = name.parse()?;
        }
        if let Some(seed) = self.seed {
            config.random_seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Train or load a model, classify the test set, and save what was asked for.
pub fn run(options: &CliOptions) -> Result<RunOutcome> {
    for warning in options.validate()? {
        log::warn!("{}", warning);
    }

    let loader = CsvLoader::new();
    let mut outcome = RunOutcome::default();

    let model = match (&options.training_file, &options.input_model_file) {
        (Some(training_file), _) => {
            let config = options.boosting_config()?;
            let (data, labels) = match &options.labels_file {
                Some(labels_file) => (
                    loader.load_matrix(training_file)?,
                    loader.load_labels(labels_file)?,
                ),
                None => loader.load_labeled(training_file)?,
            };

            let mut model = AdaBoostModel::new();
            let summary = model.train(data.view(), &labels, &config)?;
            outcome.summary = Some(summary);
            model
        }
        (None, Some(input_model_file)) => AdaBoostModel::<String>::load(input_model_file)?,
        (None, None) => {
            return Err(AdaBoostError::config(
                "Either --training_file or --input_model_file must be specified!",
            ))
        }
    };

    if let Some(test_file) = &options.test_file {
        let test_data = loader.load_matrix(test_file)?;
        if test_data.nrows() != model.dimensionality() {
            return Err(AdaBoostError::dimension_mismatch(
                format!("model dimensionality {}", model.dimensionality()),
                format!("test data dimensionality {}", test_data.nrows()),
            ));
        }

        let predictions = model.classify(test_data.view())?;
        if let Some(output_file) = &options.output_file {
            save_labels(output_file, &predictions)?;
            log::info!(
                "Wrote {} predictions to {}",
                predictions.len(),
                output_file.display()
            );
        }
        outcome.predictions = Some(predictions);
    }

    if let Some(output_model_file) = &options.output_model_file {
        model.save(output_model_file)?;
    }

    Ok(outcome)
}
