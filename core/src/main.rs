use clap::Parser;
use env_logger::Target;
use log::{error, info};
use momo_core::cli::batch::run_batch;
use momo_core::cli::report::{results_to_json, BatchSummary, CsvReport};
use momo_core::cli::{setup_logging, Cli};
use momo_core::{LabelMode, SeriesClassifier};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.log_level(), Target::Stderr);

    let mut csv_report = match &cli.csv_file {
        Some(path) => match CsvReport::create(path) {
            Ok(report) => Some(report),
            Err(e) => {
                error!("Failed to open {}: {}", path.display(), e);
                eprintln!("Error: Failed to open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => None,
    };

    let series_dirs = cli.source().discover();
    info!("Found {} series directories", series_dirs.len());

    let classifier = SeriesClassifier::new(LabelMode::BodyPart).with_config_path(cli.config.clone());
    let outcome = run_batch(
        &series_dirs,
        |dir| classifier.predict_series(dir, false),
        |result| match csv_report.as_mut() {
            Some(report) => report.write(result),
            None => Ok(()),
        },
    );

    info!("{}", BatchSummary::new(&outcome));

    match results_to_json(&outcome.results) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize to JSON: {}", e);
            eprintln!("Error: Failed to serialize to JSON: {}", e);
            process::exit(1);
        }
    }
}
