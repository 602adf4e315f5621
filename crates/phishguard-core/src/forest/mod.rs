//! Random forest over URL feature vectors, backed by smartcore.
//!
//! [`Classifier`] is the seam the predictor depends on; [`RandomForest`]
//! adapts smartcore's `RandomForestClassifier` to it.

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::error::Failed;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::dataset::Label;
use crate::features::{FeatureVector, FEATURE_COUNT};

type Forest = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// Anything that can label a feature vector.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Label;
}

/// Forest hyperparameters (`[forest]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestParams {
    pub n_trees: usize,
    /// Maximum tree depth; unlimited when absent.
    pub max_depth: Option<usize>,
    /// Nodes with fewer rows than this become leaves.
    pub min_samples_split: usize,
    /// Features drawn per split; `floor(sqrt(7))` when absent.
    pub max_features: Option<usize>,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            max_features: None,
        }
    }
}

impl ForestParams {
    pub fn features_per_split(&self) -> usize {
        self.max_features
            .unwrap_or_else(|| (FEATURE_COUNT as f64).sqrt() as usize)
            .clamp(1, FEATURE_COUNT)
    }

    fn to_smartcore(&self, seed: u64) -> Result<RandomForestClassifierParameters, FitError> {
        let n_trees = match u16::try_from(self.n_trees) {
            Ok(0) => return Err(FitError::NoTrees),
            Ok(n) => n,
            Err(_) => return Err(FitError::TooManyTrees(self.n_trees)),
        };
        let mut params = RandomForestClassifierParameters::default()
            .with_n_trees(n_trees)
            .with_m(self.features_per_split())
            .with_min_samples_split(self.min_samples_split)
            .with_seed(seed);
        if let Some(depth) = self.max_depth {
            params = params.with_max_depth(u16::try_from(depth).unwrap_or(u16::MAX));
        }
        Ok(params)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("cannot fit a forest on an empty training set")]
    EmptyTrainingSet,
    #[error("feature rows ({rows}) and labels ({labels}) differ in length")]
    LengthMismatch { rows: usize, labels: usize },
    #[error("n_trees must be at least 1")]
    NoTrees,
    #[error("n_trees must be at most {}, got {0}", u16::MAX)]
    TooManyTrees(usize),
    #[error("smartcore random forest failed")]
    Model(#[from] Failed),
}

fn matrix(rows: &[FeatureVector]) -> DenseMatrix<f64> {
    let values: Vec<Vec<f64>> = rows.iter().map(|r| r.values().to_vec()).collect();
    DenseMatrix::from_2d_vec(&values)
}

pub struct RandomForest {
    model: Forest,
    n_trees: usize,
}

impl std::fmt::Debug for RandomForest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomForest")
            .field("n_trees", &self.n_trees)
            .finish_non_exhaustive()
    }
}

impl RandomForest {
    /// Fit a forest. The same `seed`, rows and params always give the same
    /// forest.
    pub fn fit(
        x: &[FeatureVector],
        y: &[Label],
        params: &ForestParams,
        seed: u64,
    ) -> Result<Self, FitError> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch {
                rows: x.len(),
                labels: y.len(),
            });
        }
        if x.is_empty() {
            return Err(FitError::EmptyTrainingSet);
        }
        let sc_params = params.to_smartcore(seed)?;

        let targets: Vec<i32> = y.iter().map(|l| l.index() as i32).collect();
        let model = Forest::fit(&matrix(x), &targets, sc_params)?;

        tracing::debug!(
            trees = params.n_trees,
            rows = x.len(),
            features_per_split = params.features_per_split(),
            "fitted random forest"
        );
        Ok(Self {
            model,
            n_trees: params.n_trees,
        })
    }

    /// Label many rows in one call.
    pub fn predict_batch(&self, rows: &[FeatureVector]) -> Result<Vec<Label>, FitError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let predicted = self.model.predict(&matrix(rows))?;
        Ok(predicted.into_iter().map(label_of).collect())
    }
}

fn label_of(class: i32) -> Label {
    if class == Label::Phishing.index() as i32 {
        Label::Phishing
    } else {
        Label::Benign
    }
}

impl Classifier for RandomForest {
    fn predict(&self, features: &FeatureVector) -> Label {
        match self.predict_batch(std::slice::from_ref(features)) {
            Ok(labels) => labels.first().copied().unwrap_or(Label::Benign),
            Err(err) => {
                tracing::warn!("forest prediction failed, treating as benign: {err:#}");
                Label::Benign
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extract_features;

    fn training_set() -> (Vec<FeatureVector>, Vec<Label>) {
        let benign = [
            "https://example.com",
            "https://docs.rs/serde",
            "https://github.com/rust-lang",
            "https://www.wikipedia.org",
            "https://crates.io",
            "https://news.ycombinator.com",
        ];
        let phishing = [
            "http://192.168.2.4/login@paypal",
            "http://bit.ly/free-gift-card-now",
            "http://secure-update-account-verify.example.tk/x",
            "http://10.0.0.1/bank",
            "http://goo.gl/a1b2",
            "http://login.apple.id.verify-me.co/session",
        ];
        let mut x = Vec::new();
        let mut y = Vec::new();
        for url in benign {
            x.push(extract_features(url));
            y.push(Label::Benign);
        }
        for url in phishing {
            x.push(extract_features(url));
            y.push(Label::Phishing);
        }
        (x, y)
    }

    #[test]
    fn default_features_per_split_is_sqrt() {
        assert_eq!(ForestParams::default().features_per_split(), 2);
        let all = ForestParams {
            max_features: Some(50),
            ..ForestParams::default()
        };
        assert_eq!(all.features_per_split(), FEATURE_COUNT);
    }

    #[test]
    fn smartcore_params_follow_config() {
        let p = ForestParams::default().to_smartcore(42).unwrap();
        assert_eq!(p.n_trees, 100);
        assert_eq!(p.m, Some(2));
        assert_eq!(p.seed, 42);
        assert_eq!(p.max_depth, None);

        let shallow = ForestParams {
            max_depth: Some(4),
            ..ForestParams::default()
        };
        assert_eq!(shallow.to_smartcore(0).unwrap().max_depth, Some(4));
    }

    #[test]
    fn separates_https_from_http_training_rows() {
        let (x, y) = training_set();
        let forest = RandomForest::fit(&x, &y, &ForestParams::default(), 42).unwrap();
        let predicted = forest.predict_batch(&x).unwrap();
        let correct = predicted.iter().zip(&y).filter(|(p, l)| p == l).count();
        assert!(correct >= 11, "only {correct}/12 training rows correct");
        assert_eq!(
            forest.predict(&extract_features("http://172.16.0.9/verify@bank")),
            Label::Phishing
        );
        assert_eq!(
            forest.predict(&extract_features("https://crates.io")),
            Label::Benign
        );
    }

    #[test]
    fn deterministic_for_seed() {
        let (x, y) = training_set();
        let params = ForestParams::default();
        let a = RandomForest::fit(&x, &y, &params, 9).unwrap();
        let b = RandomForest::fit(&x, &y, &params, 9).unwrap();
        let urls: Vec<_> = ["http://a.b.c.d", "https://z.com/-", "http://bit.ly"]
            .into_iter()
            .map(extract_features)
            .collect();
        assert_eq!(a.predict_batch(&urls).unwrap(), b.predict_batch(&urls).unwrap());
    }

    #[test]
    fn empty_batch_predicts_nothing() {
        let (x, y) = training_set();
        let forest = RandomForest::fit(&x, &y, &ForestParams::default(), 1).unwrap();
        assert!(forest.predict_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        let params = ForestParams::default();
        assert!(matches!(
            RandomForest::fit(&[], &[], &params, 0),
            Err(FitError::EmptyTrainingSet)
        ));
        let x = vec![extract_features("http://a")];
        assert!(matches!(
            RandomForest::fit(&x, &[], &params, 0),
            Err(FitError::LengthMismatch { rows: 1, labels: 0 })
        ));
        let none = ForestParams {
            n_trees: 0,
            ..ForestParams::default()
        };
        assert!(matches!(
            RandomForest::fit(&x, &[Label::Benign], &none, 0),
            Err(FitError::NoTrees)
        ));
        let huge = ForestParams {
            n_trees: 70_000,
            ..ForestParams::default()
        };
        assert!(matches!(
            RandomForest::fit(&x, &[Label::Benign], &huge, 0),
            Err(FitError::TooManyTrees(70_000))
        ));
    }
}
