//! Error type for dataset loading.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("open dataset {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed CSV (bad quoting, ragged rows, invalid UTF-8).
    #[error("parse dataset CSV")]
    Csv(#[from] csv::Error),
    /// Header row lacks a required column.
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}
