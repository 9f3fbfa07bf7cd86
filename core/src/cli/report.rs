use crate::cli::batch::BatchOutcome;
use crate::error::{MomoError, Result};
use crate::types::{SeriesResult, RESULT_COLUMNS};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV writer for series results
///
/// The header is written on creation, so an empty run still produces a
/// valid file. Each row is flushed as soon as it is written.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReport<File> {
    /// Creates (or truncates) a CSV file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvReport<W> {
    /// Wraps a writer and writes the header row
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(RESULT_COLUMNS)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Appends one result row
    pub fn write(&mut self, result: &SeriesResult) -> Result<()> {
        self.writer.serialize(result)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| MomoError::IoError(e.into_error()))
    }
}

/// Serializes results as a single JSON array
pub fn results_to_json(results: &[SeriesResult]) -> Result<String> {
    Ok(serde_json::to_string(results)?)
}

/// Text summary of a batch run
pub struct BatchSummary<'a> {
    outcome: &'a BatchOutcome,
}

impl<'a> BatchSummary<'a> {
    /// Creates a new summary
    pub fn new(outcome: &'a BatchOutcome) -> Self {
        Self { outcome }
    }
}

impl<'a> fmt::Display for BatchSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} series: {} succeeded, {} failed",
            self.outcome.processed(),
            self.outcome.results.len(),
            self.outcome.failures.len()
        )?;
        for failure in &self.outcome.failures {
            write!(
                f,
                "\n  {}: {}",
                failure.dir_path.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}
