//! End-to-end tests of the command-line workflow.

use adaboost_rust::cli::{run, CliOptions};
use adaboost_rust::*;
use tempfile::TempDir;

mod common;
use common::*;

fn options(args: &[String]) -> CliOptions {
    CliOptions::parse(args.iter().cloned()).unwrap()
}

fn path_arg(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

#[test]
fn test_train_with_labels_in_last_column() {
    let temp_dir = TempDir::new().unwrap();
    let (data, labels) = create_separable_binary(30, 4);
    write_csv(temp_dir.path().join("train.csv"), &data, Some(labels.as_slice()));
    write_csv(temp_dir.path().join("test.csv"), &data, None::<&[i32]>);

    let outcome = run(&options(&[
        "-t".into(),
        path_arg(&temp_dir, "train.csv"),
        "-T".into(),
        path_arg(&temp_dir, "test.csv"),
        "-o".into(),
        path_arg(&temp_dir, "predictions.csv"),
        "-M".into(),
        path_arg(&temp_dir, "model.bin"),
    ]))
    .unwrap();

    let summary = outcome.summary.unwrap();
    assert_eq!(summary.termination, TerminationReason::PerfectFit);

    let expected: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    assert_eq!(outcome.predictions.unwrap(), expected);

    let written = std::fs::read_to_string(temp_dir.path().join("predictions.csv")).unwrap();
    let written: Vec<&str> = written.lines().collect();
    assert_eq!(written, expected);

    let model = AdaBoostModel::<String>::load(temp_dir.path().join("model.bin")).unwrap();
    assert_eq!(model.dimensionality(), 2);
}

#[test]
fn test_separate_labels_file_and_model_reuse() {
    let temp_dir = TempDir::new().unwrap();
    let (data, labels) = create_clusters(6, 3, 8);
    write_csv(temp_dir.path().join("train.csv"), &data, None::<&[usize]>);
    write_labels(temp_dir.path().join("labels.csv"), &labels);

    let trained = run(&options(&[
        "--training_file".into(),
        path_arg(&temp_dir, "train.csv"),
        "--labels_file".into(),
        path_arg(&temp_dir, "labels.csv"),
        "--weak_learner=perceptron".into(),
        "--iterations=5".into(),
        "--output_model_file".into(),
        path_arg(&temp_dir, "model.json"),
        "--test_file".into(),
        path_arg(&temp_dir, "train.csv"),
    ]))
    .unwrap();
    assert!(trained.summary.is_some());

    let reused = run(&options(&[
        "-m".into(),
        path_arg(&temp_dir, "model.json"),
        "-T".into(),
        path_arg(&temp_dir, "train.csv"),
    ]))
    .unwrap();
    assert!(reused.summary.is_none());
    assert_eq!(reused.predictions, trained.predictions);
}

#[test]
fn test_test_set_dimensionality_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let (data, labels) = create_separable_binary(10, 2);
    write_csv(temp_dir.path().join("train.csv"), &data, Some(labels.as_slice()));

    let (wide, _) = create_noisy_binary(5, 2);
    write_csv(temp_dir.path().join("test.csv"), &wide, None::<&[i32]>);

    let err = run(&options(&[
        "-t".into(),
        path_arg(&temp_dir, "train.csv"),
        "-T".into(),
        path_arg(&temp_dir, "test.csv"),
    ]))
    .unwrap_err();
    assert!(err.is_data());
}

#[test]
fn test_fatal_option_errors() {
    let temp_dir = TempDir::new().unwrap();
    let (data, labels) = create_separable_binary(10, 2);
    write_csv(temp_dir.path().join("train.csv"), &data, Some(labels.as_slice()));

    let negative = run(&options(&[
        "-t".into(),
        path_arg(&temp_dir, "train.csv"),
        "-i".into(),
        "-1".into(),
    ]))
    .unwrap_err();
    assert!(negative.is_configuration());

    let unknown = run(&options(&[
        "-t".into(),
        path_arg(&temp_dir, "train.csv"),
        "-w".into(),
        "svm".into(),
    ]))
    .unwrap_err();
    assert!(unknown.is_configuration());

    let missing = run(&options(&["-T".into(), path_arg(&temp_dir, "train.csv")])).unwrap_err();
    assert!(missing.is_configuration());
}

#[test]
fn test_config_file_with_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .iterations(3)
        .weak_learner(WeakLearnerType::Perceptron)
        .random_seed(5)
        .build()
        .unwrap();
    let config_path = temp_dir.path().join("adaboost.toml");
    config.save_to_file(&config_path).unwrap();

    let parsed = options(&[
        "-t".into(),
        path_arg(&temp_dir, "train.csv"),
        "-c".into(),
        config_path.to_string_lossy().into_owned(),
        "-i".into(),
        "7".into(),
    ]);
    let resolved = parsed.boosting_config().unwrap();
    assert_eq!(resolved.iterations, 7);
    assert_eq!(resolved.weak_learner, WeakLearnerType::Perceptron);
    assert_eq!(resolved.random_seed, 5);
}
