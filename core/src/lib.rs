pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod predict;
pub mod types;

pub use api::{SeriesClassifier, SUPPORTED_MODALITY};
pub use config::{ModelKwargs, MomoConfig, DEFAULT_CONFIG_PATH};
pub use error::{MomoError, Result};
pub use extraction::{DicomGatherer, MetadataGatherer};
pub use predict::{Prediction, PredictionRequest, ScriptPredictor, SeriesPredictor};
pub use types::*;
