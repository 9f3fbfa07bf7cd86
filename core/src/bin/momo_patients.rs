use clap::Parser;
use env_logger::Target;
use log::error;
use momo_core::cli::batch::run_batch;
use momo_core::cli::discovery::SeriesSource;
use momo_core::cli::report::{BatchSummary, CsvReport};
use momo_core::cli::setup_logging;
use momo_core::{LabelMode, SeriesClassifier, DEFAULT_CONFIG_PATH};
use std::path::PathBuf;
use std::process;

/// CLI tool for predicting raw network labels for every series of a set of patients
#[derive(Parser, Debug)]
#[command(name = "momo-patients")]
#[command(about = "Predict network labels for all MRI series under patient directories and write them to a CSV file")]
#[command(version)]
struct Cli {
    /// Patient directories; series are found at <PATIENT_DIR>/<study>/<series>
    #[arg(value_name = "PATIENT_DIR", required = true, num_args = 1..)]
    patient_dirs: Vec<PathBuf>,

    /// CSV file where results will be written
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,

    /// Prediction configuration file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Progress and per-series errors both go to stdout
    setup_logging(
        if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        },
        Target::Stdout,
    );

    let mut report = match CsvReport::create(&cli.csv_file) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to open {}: {}", cli.csv_file.display(), e);
            eprintln!("Error: Failed to open {}: {}", cli.csv_file.display(), e);
            process::exit(1);
        }
    };

    let series_dirs = SeriesSource::Patients(cli.patient_dirs.clone()).discover();
    println!("Found {} series directories", series_dirs.len());

    let classifier = SeriesClassifier::new(LabelMode::Raw).with_config_path(cli.config.clone());
    let outcome = run_batch(
        &series_dirs,
        |dir| {
            println!("Processing {}", dir.display());
            classifier.predict_series(dir, false)
        },
        |result| report.write(result),
    );

    println!("{}", BatchSummary::new(&outcome));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_dirs_then_csv_file() {
        let cli = Cli::try_parse_from(["momo-patients", "p1", "p2", "out.csv"]).unwrap();

        assert_eq!(
            cli.patient_dirs,
            vec![PathBuf::from("p1"), PathBuf::from("p2")]
        );
        assert_eq!(cli.csv_file, PathBuf::from("out.csv"));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_csv_file_required() {
        assert!(Cli::try_parse_from(["momo-patients", "p1"]).is_err());
        assert!(Cli::try_parse_from(["momo-patients"]).is_err());
    }
}
