use thiserror::Error;

/// Result type for momo operations
pub type Result<T> = std::result::Result<T, MomoError>;

/// Error types for momo operations
#[derive(Error, Debug)]
pub enum MomoError {
    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Gathered metadata did not describe exactly one series
    #[error("Expected exactly one series, found {file_names} file name(s) and {series_ids} series id(s)")]
    SeriesCount { file_names: usize, series_ids: usize },

    /// A required metadata field was not gathered
    #[error("Metadata field not found: {0}")]
    MissingMeta(String),

    /// Modality is not supported for prediction
    #[error("Unsupported modality: {0}")]
    UnsupportedModality(String),

    /// No network or mapfile configured for a modality
    #[error("No {table} entry configured for modality {modality}")]
    MissingModel { table: String, modality: String },

    /// The network predictor failed
    #[error("Prediction error: {0}")]
    PredictionError(String),

    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for MomoError {
    fn from(s: String) -> Self {
        MomoError::PredictionError(s)
    }
}

impl From<&str> for MomoError {
    fn from(s: &str) -> Self {
        MomoError::PredictionError(s.to_string())
    }
}

// Convert rust-ini errors
impl From<ini::Error> for MomoError {
    fn from(e: ini::Error) -> Self {
        match e {
            ini::Error::Io(io) => MomoError::IoError(io),
            ini::Error::Parse(parse) => parse.into(),
        }
    }
}

impl From<ini::ParseError> for MomoError {
    fn from(e: ini::ParseError) -> Self {
        MomoError::ConfigError(format!("{}", e))
    }
}
