pub mod config;
pub mod logging;

pub mod dataset;
pub mod features;
pub mod forest;
pub mod predictor;
pub mod split;
pub mod trainer;
