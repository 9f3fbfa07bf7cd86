use serde::Serialize;
use std::path::Path;

/// Output columns, in the order they are written
pub const RESULT_COLUMNS: [&str; 5] = [
    "series_instance_uid",
    "dir_path",
    "eligibility",
    "prediction",
    "probability",
];

/// Prediction result for a single series directory
///
/// Field order matches [`RESULT_COLUMNS`] and is the serialization order
/// for both CSV and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    /// Series Instance UID of the predicted series
    pub series_instance_uid: String,

    /// Series directory as given on input
    pub dir_path: String,

    /// Whether the predictor considered the series suitable for classification
    pub eligibility: bool,

    /// Predicted label; `None` when the label has no body-part mapping
    pub prediction: Option<String>,

    /// Probability of the predicted class, in [0, 1]
    pub probability: f64,
}

impl SeriesResult {
    /// Creates a result for a series directory
    pub fn new(
        series_instance_uid: impl Into<String>,
        dir_path: &Path,
        eligibility: bool,
        prediction: Option<String>,
        probability: f64,
    ) -> Self {
        Self {
            series_instance_uid: series_instance_uid.into(),
            dir_path: dir_path.display().to_string(),
            eligibility,
            prediction,
            probability,
        }
    }
}
