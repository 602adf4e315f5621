//! Model training: split the dataset, fit the forest, score the holdout.

mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dataset::{self, Dataset, Label};
use crate::features::{self, FeatureVector, SignalRules};
use crate::forest::{ForestParams, RandomForest};
use crate::split::train_test_split;

pub use error::TrainError;

/// Split parameters (`[training]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSettings {
    /// Fraction of rows held out for accuracy measurement.
    pub test_fraction: f64,
    /// Seed for the split and the forest.
    pub seed: u64,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Summary of one training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub rows: usize,
    pub benign: usize,
    pub phishing: usize,
    pub train_size: usize,
    pub test_size: usize,
    /// Holdout rows the model labeled correctly.
    pub correct: usize,
    /// Holdout accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// SHA-256 of the dataset file, when trained from a file.
    pub fingerprint: Option<String>,
}

impl TrainingReport {
    pub fn accuracy_percent(&self) -> f64 {
        self.accuracy * 100.0
    }
}

#[derive(Debug)]
pub struct TrainedModel {
    pub forest: RandomForest,
    pub report: TrainingReport,
}

/// Train on an in-memory dataset.
pub fn train(
    dataset: &Dataset,
    settings: &TrainingSettings,
    params: &ForestParams,
    rules: &SignalRules,
) -> Result<TrainedModel, TrainError> {
    let split = train_test_split(dataset.len(), settings.test_fraction, settings.seed)?;

    let samples = dataset.samples();
    let x: Vec<FeatureVector> = samples
        .iter()
        .map(|s| features::evaluate(&s.url, rules).features)
        .collect();
    let y: Vec<Label> = samples.iter().map(|s| s.label).collect();

    let x_train: Vec<FeatureVector> = split.train.iter().map(|&i| x[i]).collect();
    let y_train: Vec<Label> = split.train.iter().map(|&i| y[i]).collect();
    let forest = RandomForest::fit(&x_train, &y_train, params, settings.seed)?;

    let x_test: Vec<FeatureVector> = split.test.iter().map(|&i| x[i]).collect();
    let predicted = forest.predict_batch(&x_test)?;
    let correct = predicted
        .iter()
        .zip(&split.test)
        .filter(|(label, &i)| **label == y[i])
        .count();
    let test_size = split.test.len();
    let (benign, phishing) = dataset.class_counts();

    let report = TrainingReport {
        rows: dataset.len(),
        benign,
        phishing,
        train_size: split.train.len(),
        test_size,
        correct,
        accuracy: correct as f64 / test_size as f64,
        fingerprint: None,
    };
    tracing::info!(
        rows = report.rows,
        train = report.train_size,
        test = report.test_size,
        accuracy = report.accuracy,
        "trained phishing classifier"
    );
    Ok(TrainedModel { forest, report })
}

/// Load `path` and train on it, recording the file's fingerprint.
pub fn train_from_path(
    path: &Path,
    settings: &TrainingSettings,
    params: &ForestParams,
    rules: &SignalRules,
) -> Result<TrainedModel, TrainError> {
    let dataset = Dataset::load(path)?;
    tracing::debug!("loaded {} rows from {}", dataset.len(), path.display());

    let mut model = train(&dataset, settings, params, rules)?;
    model.report.fingerprint = match dataset::sha256_path(path) {
        Ok(digest) => Some(digest),
        Err(err) => {
            tracing::warn!("could not fingerprint {}: {:#}", path.display(), err);
            None
        }
    };
    Ok(model)
}
