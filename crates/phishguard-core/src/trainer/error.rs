//! Error type for model training.

use crate::dataset::DatasetError;
use crate::forest::FitError;
use crate::split::SplitError;

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("split dataset")]
    Split(#[from] SplitError),
    #[error("fit random forest")]
    Fit(#[from] FitError),
}
