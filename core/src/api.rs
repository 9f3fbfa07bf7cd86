use crate::config::{MomoConfig, DEFAULT_CONFIG_PATH};
use crate::error::{MomoError, Result};
use crate::extraction::tags::SERIES_MODALITY_KEY;
use crate::extraction::{DicomGatherer, MetadataGatherer};
use crate::predict::{PredictionRequest, ScriptPredictor, SeriesPredictor};
use crate::types::{LabelMode, SeriesResult};
use log::debug;
use std::path::{Path, PathBuf};

/// The only modality the body-part network supports
pub const SUPPORTED_MODALITY: &str = "MR";

/// Placeholder sent as the series description; the network ignores it
const IGNORED_DESCRIPTION: &str = "dummy";

/// Predicts the body part of one DICOM series directory
///
/// Ties together configuration loading, metadata gathering and network
/// prediction. Configuration is re-read from disk on every call.
///
/// # Example
///
/// ```no_run
/// use momo_core::{LabelMode, SeriesClassifier};
/// use std::path::Path;
///
/// let classifier = SeriesClassifier::new(LabelMode::BodyPart);
/// let result = classifier.predict_series(Path::new("study/series1"), false)?;
/// println!("{:?}", result.prediction);
/// # Ok::<(), momo_core::MomoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeriesClassifier<G = DicomGatherer, P = ScriptPredictor> {
    gatherer: G,
    predictor: P,
    config_path: PathBuf,
    label_mode: LabelMode,
}

impl SeriesClassifier {
    /// Creates a classifier reading DICOM headers from disk and running the
    /// configured network script, with config at `./default_config.ini`
    pub fn new(label_mode: LabelMode) -> Self {
        Self::with_collaborators(DicomGatherer, ScriptPredictor, label_mode)
    }
}

impl<G: MetadataGatherer, P: SeriesPredictor> SeriesClassifier<G, P> {
    /// Creates a classifier from explicit collaborators
    pub fn with_collaborators(gatherer: G, predictor: P, label_mode: LabelMode) -> Self {
        Self {
            gatherer,
            predictor,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            label_mode,
        }
    }

    /// Builder: Read configuration from `path` instead of the default
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    /// Predicts a single series directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be loaded
    /// - The directory does not hold exactly one series
    /// - The series modality is not exactly one "MR" entry
    /// - No network or mapfile is configured for the modality
    /// - The gatherer or predictor fails
    pub fn predict_series(&self, series_path: &Path, verbose: bool) -> Result<SeriesResult> {
        let config = MomoConfig::from_config(&self.config_path)?;

        let gathered = self
            .gatherer
            .gather(series_path, &config.known_metas, verbose)?;
        if gathered.file_names.len() != 1 || gathered.series_ids.len() != 1 {
            return Err(MomoError::SeriesCount {
                file_names: gathered.file_names.len(),
                series_ids: gathered.series_ids.len(),
            });
        }

        let modalities = gathered
            .values(SERIES_MODALITY_KEY)
            .ok_or_else(|| MomoError::MissingMeta(SERIES_MODALITY_KEY.to_string()))?;
        let modality = match modalities {
            [item] if item.value == SUPPORTED_MODALITY => item.value.as_str(),
            [item] => return Err(MomoError::UnsupportedModality(item.value.clone())),
            items => {
                return Err(MomoError::UnsupportedModality(format!(
                    "expected one {} entry, found {}",
                    SERIES_MODALITY_KEY,
                    items.len()
                )))
            }
        };

        let mapfile = config.kwargs.mapfile_for(modality)?;
        let network = config.kwargs.network_for(modality)?;
        debug!(
            "Using network '{}' and mapfile '{}' for modality {}",
            network, mapfile, modality
        );

        let series_id = &gathered.series_ids[0];
        let prediction = self.predictor.predict(&PredictionRequest {
            study_modality: modality,
            series_description: IGNORED_DESCRIPTION,
            series_modality: modality,
            file_name: &gathered.file_names[0],
            series_id,
            mapfile,
            network,
            verbose,
            config: &config,
        })?;

        Ok(SeriesResult::new(
            series_id.as_str(),
            series_path,
            prediction.eligibility,
            self.label_mode.apply(&prediction.label),
            prediction.probability,
        ))
    }
}
