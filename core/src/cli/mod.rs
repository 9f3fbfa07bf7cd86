pub mod batch;
pub mod discovery;
pub mod report;

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{ArgGroup, Parser};
use discovery::SeriesSource;
use env_logger::Target;
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line arguments for momo
#[derive(Parser, Debug)]
#[command(name = "momo")]
#[command(
    about = "Predict body part for MRI series under a given directory and optionally write results to a CSV file"
)]
#[command(version)]
#[command(group(
    ArgGroup::new("paths")
        .required(true)
        .args(["study_dirs", "series_dirs"])
))]
pub struct Cli {
    /// One or more directory paths containing DICOM series directories
    #[arg(long, num_args = 1.., value_name = "DIR")]
    pub study_dirs: Vec<PathBuf>,

    /// One or more DICOM series directory paths containing DICOM image files
    #[arg(long, num_args = 1.., value_name = "DIR")]
    pub series_dirs: Vec<PathBuf>,

    /// Optional CSV file where results will be written
    #[arg(long, value_name = "FILE")]
    pub csv_file: Option<PathBuf>,

    /// Prediction configuration file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Disable log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns where series directories come from
    pub fn source(&self) -> SeriesSource {
        if !self.study_dirs.is_empty() {
            SeriesSource::Studies(self.study_dirs.clone())
        } else {
            SeriesSource::Series(self.series_dirs.clone())
        }
    }

    /// Log level selected by `--debug` and `--quiet`; quiet wins
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Initializes `env_logger` at the given level, writing to `target`
pub fn setup_logging(level: LevelFilter, target: Target) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(target)
        .init();
}
