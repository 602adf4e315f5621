use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::features::SignalRules;
use crate::forest::ForestParams;
use crate::trainer::TrainingSettings;

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Labeled CSV used for training; relative paths resolve against the cwd.
    pub dataset_path: PathBuf,
    /// Split fraction and seed.
    #[serde(default)]
    pub training: TrainingSettings,
    /// Random forest hyperparameters.
    #[serde(default)]
    pub forest: ForestParams,
    /// Thresholds for lexical signals and explanations.
    #[serde(default)]
    pub signals: SignalRules,
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("phishing_dataset.csv"),
            training: TrainingSettings::default(),
            forest: ForestParams::default(),
            signals: SignalRules::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishguardConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PhishguardConfig::default();
        assert_eq!(cfg.dataset_path, PathBuf::from("phishing_dataset.csv"));
        assert_eq!(cfg.training.seed, 42);
        assert!((cfg.training.test_fraction - 0.2).abs() < 1e-12);
        assert_eq!(cfg.forest.n_trees, 100);
        assert_eq!(cfg.signals.long_url_length, 75);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PhishguardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: PhishguardConfig = toml::from_str(r#"dataset_path = "/data/urls.csv""#).unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from("/data/urls.csv"));
        assert_eq!(cfg.training, TrainingSettings::default());
        assert_eq!(cfg.forest, ForestParams::default());
        assert_eq!(cfg.signals, SignalRules::default());
    }

    #[test]
    fn config_toml_custom_sections() {
        let toml = r#"
            dataset_path = "urls.csv"

            [training]
            test_fraction = 0.25
            seed = 7

            [forest]
            n_trees = 50
            max_depth = 12
            max_features = 3

            [signals]
            many_hyphens = 5
            shorteners = ["bit.ly", "t.co"]
        "#;
        let cfg: PhishguardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.training.seed, 7);
        assert!((cfg.training.test_fraction - 0.25).abs() < 1e-12);
        assert_eq!(cfg.forest.n_trees, 50);
        assert_eq!(cfg.forest.max_depth, Some(12));
        assert_eq!(cfg.forest.min_samples_split, 2);
        assert_eq!(cfg.forest.features_per_split(), 3);
        assert_eq!(cfg.signals.many_hyphens, 5);
        assert_eq!(cfg.signals.long_url_length, 75);
        assert_eq!(cfg.signals.shorteners, vec!["bit.ly", "t.co"]);
    }
}
