//! Network prediction for a single series
//!
//! The classification network itself lives outside this crate. A
//! [`SeriesPredictor`] receives everything known about the series and
//! returns the network's verdict.

mod script;

pub use script::ScriptPredictor;

use crate::config::MomoConfig;
use crate::error::Result;
use std::path::Path;

/// Inputs for one series prediction
#[derive(Debug, Clone, Copy)]
pub struct PredictionRequest<'a> {
    pub study_modality: &'a str,
    pub series_description: &'a str,
    pub series_modality: &'a str,

    /// Representative file of the series
    pub file_name: &'a Path,

    pub series_id: &'a str,

    /// Mapfile selected for the modality
    pub mapfile: &'a str,

    /// Network selected for the modality
    pub network: &'a str,

    pub verbose: bool,

    /// Configuration the request was built from; its kwargs are forwarded
    pub config: &'a MomoConfig,
}

/// Raw network output for a series
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Prediction {
    /// Whether the series was suitable for classification
    pub eligibility: bool,

    /// Probability of the predicted class
    pub probability: f64,

    /// Network class label, before any body-part translation
    #[serde(rename = "prediction")]
    pub label: String,
}

/// Runs the classification network for one series
pub trait SeriesPredictor {
    fn predict(&self, request: &PredictionRequest<'_>) -> Result<Prediction>;
}
