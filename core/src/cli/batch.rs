use crate::error::{MomoError, Result};
use crate::types::SeriesResult;
use log::{debug, error};
use std::path::{Path, PathBuf};

/// A series directory that could not be predicted
#[derive(Debug)]
pub struct SeriesFailure {
    pub dir_path: PathBuf,
    pub error: MomoError,
}

/// Results of a batch run
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful results, in processing order
    pub results: Vec<SeriesResult>,

    /// Failed directories, in processing order
    pub failures: Vec<SeriesFailure>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

/// Predicts every directory in order, isolating per-series failures
///
/// `predict` is called once per directory. Each success is handed to
/// `on_success` before the next directory is processed; failures from
/// either are logged with the directory path and the run continues.
pub fn run_batch<F, S>(series_dirs: &[PathBuf], mut predict: F, mut on_success: S) -> BatchOutcome
where
    F: FnMut(&Path) -> Result<SeriesResult>,
    S: FnMut(&SeriesResult) -> Result<()>,
{
    let mut outcome = BatchOutcome::default();

    for series_dir in series_dirs {
        debug!("Predicting series '{}'", series_dir.display());

        match predict(series_dir) {
            Ok(result) => {
                if let Err(e) = on_success(&result) {
                    error!(
                        "Error writing result for series '{}': {}",
                        series_dir.display(),
                        e
                    );
                }
                outcome.results.push(result);
            }
            Err(e) => {
                error!("Error predicting series '{}': {}", series_dir.display(), e);
                outcome.failures.push(SeriesFailure {
                    dir_path: series_dir.clone(),
                    error: e,
                });
            }
        }
    }

    outcome
}
