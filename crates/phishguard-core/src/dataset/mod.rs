//! Labeled URL datasets.
//!
//! A dataset is a CSV with a header row containing at least `URL` and
//! `Label` columns. A row is phishing when its label is exactly `phishing`;
//! every other label is benign.

mod error;
mod fingerprint;

use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use error::DatasetError;
pub use fingerprint::sha256_path;

const URL_COLUMN: &str = "URL";
const LABEL_COLUMN: &str = "Label";
const PHISHING: &str = "phishing";

/// Binary class of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Benign,
    Phishing,
}

impl Label {
    /// Maps a `Label` column value to a class.
    pub fn from_column(value: &str) -> Self {
        if value == PHISHING {
            Label::Phishing
        } else {
            Label::Benign
        }
    }

    pub fn is_phishing(self) -> bool {
        self == Label::Phishing
    }

    /// Class index used by the classifier (benign = 0, phishing = 1).
    pub fn index(self) -> usize {
        match self {
            Label::Benign => 0,
            Label::Phishing => 1,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Benign => write!(f, "benign"),
            Label::Phishing => write!(f, "phishing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub url: String,
    pub label: Label,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Load a dataset from a CSV file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader. Columns beyond `URL` and `Label` are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let url_idx = column_index(&headers, URL_COLUMN)?;
        let label_idx = column_index(&headers, LABEL_COLUMN)?;

        let mut samples = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let url = record.get(url_idx).unwrap_or_default();
            let label = record.get(label_idx).unwrap_or_default();
            samples.push(Sample {
                url: url.to_string(),
                label: Label::from_column(label),
            });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of (benign, phishing) rows.
    pub fn class_counts(&self) -> (usize, usize) {
        let phishing = self.samples.iter().filter(|s| s.label.is_phishing()).count();
        (self.samples.len() - phishing, phishing)
    }
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DatasetError::MissingColumn(name))
}
