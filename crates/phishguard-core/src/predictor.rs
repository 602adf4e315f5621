//! Per-request URL checks against a trained model.
//!
//! [`AppContext`] is created once at startup and owns the model for the rest
//! of the session; each [`AppContext::check`] call is independent.
//!
//! The label comes from the model while the explanation comes from fixed
//! rules, so a phishing verdict can carry an empty explanation when none of
//! the rules fire. That case is kept as-is and logged.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::config::PhishguardConfig;
use crate::dataset::Label;
use crate::features::{self, FeatureVector, Signal, SignalRules};
use crate::forest::{Classifier, RandomForest};
use crate::trainer::{self, TrainingReport};

/// Explanation line for benign verdicts.
pub const SAFE_EXPLANATION: &str =
    "This URL seems completely safe. No suspicious features detected.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("Please enter a URL!")]
    EmptyInput,
}

/// Reject input that is empty or only whitespace.
pub fn validate_input(input: &str) -> Result<(), CheckError> {
    if input.trim().is_empty() {
        Err(CheckError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Outcome of checking one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub url: String,
    pub label: Label,
    pub features: FeatureVector,
    /// Rules that fired; only populated for phishing verdicts.
    pub signals: Vec<Signal>,
}

impl Verdict {
    pub fn headline(&self) -> &'static str {
        match self.label {
            Label::Phishing => "Phishing URL Detected!",
            Label::Benign => "This URL is Safe.",
        }
    }

    /// Lines for the explanation area.
    pub fn explanation(&self) -> Vec<&'static str> {
        match self.label {
            Label::Phishing => self.signals.iter().map(|s| s.warning()).collect(),
            Label::Benign => vec![SAFE_EXPLANATION],
        }
    }

    pub fn summary(&self) -> VerdictSummary<'_> {
        VerdictSummary {
            url: &self.url,
            label: self.label,
            headline: self.headline(),
            features: self.features.named().map(|(s, v)| (s.name(), v)).collect(),
            explanation: self.explanation(),
        }
    }
}

/// Serializable view of a [`Verdict`].
#[derive(Debug, Serialize)]
pub struct VerdictSummary<'a> {
    pub url: &'a str,
    pub label: Label,
    pub headline: &'static str,
    pub features: Vec<(&'static str, f64)>,
    pub explanation: Vec<&'static str>,
}

/// Session state: the trained model plus the rules it was trained with.
pub struct AppContext<C = RandomForest> {
    model: C,
    rules: SignalRules,
    report: TrainingReport,
}

impl AppContext<RandomForest> {
    /// Train from `dataset` using the config's split, forest and signal settings.
    pub fn train(cfg: &PhishguardConfig, dataset: &Path) -> Result<Self> {
        let trained =
            trainer::train_from_path(dataset, &cfg.training, &cfg.forest, &cfg.signals)
                .with_context(|| format!("train model from {}", dataset.display()))?;
        Ok(Self::new(trained.forest, cfg.signals.clone(), trained.report))
    }
}

impl<C: Classifier> AppContext<C> {
    pub fn new(model: C, rules: SignalRules, report: TrainingReport) -> Self {
        Self {
            model,
            rules,
            report,
        }
    }

    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// Classify `input`. Whitespace-only input is rejected before the model
    /// is consulted.
    pub fn check(&self, input: &str) -> Result<Verdict, CheckError> {
        validate_input(input)?;

        let evaluation = features::evaluate(input, &self.rules);
        let label = self.model.predict(&evaluation.features);

        let signals = match label {
            Label::Phishing => evaluation.fired,
            Label::Benign => Vec::new(),
        };
        if label.is_phishing() && signals.is_empty() {
            tracing::warn!("{input} classified phishing but no explanation rule fired");
        }
        tracing::debug!(url = input, %label, "checked url");

        Ok(Verdict {
            url: input.to_string(),
            label,
            features: evaluation.features,
            signals,
        })
    }
}
