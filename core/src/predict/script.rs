use super::{Prediction, PredictionRequest, SeriesPredictor};
use crate::error::{MomoError, Result};
use log::debug;
use std::process::{Command, Stdio};

/// Predictor that delegates inference to the configured network script
///
/// The script is invoked once per series as
///
/// ```text
/// [interpreter] <network_script> --study-modality MR --series-description <desc>
///     --series-modality MR --file <path> --series-id <uid> --mapfile <mapfile>
///     --network <network> [--verbose] [--<kwarg> <value> ...]
/// ```
///
/// and must print a JSON object as its last non-empty line of stdout:
/// `{"eligibility": true, "probability": 0.97, "prediction": "MRWB"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptPredictor;

impl ScriptPredictor {
    fn command(request: &PredictionRequest<'_>) -> Command {
        let config = request.config;
        let mut command = match &config.interpreter {
            Some(interpreter) => {
                let mut c = Command::new(interpreter);
                c.arg(&config.network_script);
                c
            }
            None => Command::new(&config.network_script),
        };

        command
            .arg("--study-modality")
            .arg(request.study_modality)
            .arg("--series-description")
            .arg(request.series_description)
            .arg("--series-modality")
            .arg(request.series_modality)
            .arg("--file")
            .arg(request.file_name)
            .arg("--series-id")
            .arg(request.series_id)
            .arg("--mapfile")
            .arg(request.mapfile)
            .arg("--network")
            .arg(request.network);

        if request.verbose {
            command.arg("--verbose");
        }
        for (key, value) in &config.kwargs.extra {
            command.arg(format!("--{}", key)).arg(value);
        }

        command.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        command
    }
}

impl SeriesPredictor for ScriptPredictor {
    fn predict(&self, request: &PredictionRequest<'_>) -> Result<Prediction> {
        let script = &request.config.network_script;
        debug!(
            "Running {} for series {}",
            script.display(),
            request.series_id
        );

        let output = Self::command(request).output().map_err(|e| {
            MomoError::PredictionError(format!("Failed to run {}: {}", script.display(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MomoError::PredictionError(format!(
                "{} exited with {}: {}",
                script.display(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_output(&stdout)
    }
}

/// Parses the prediction from the last non-empty line of script output
fn parse_output(stdout: &str) -> Result<Prediction> {
    let line = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or("Network script produced no output")?;

    let prediction: Prediction = serde_json::from_str(line).map_err(|e| {
        MomoError::PredictionError(format!("Invalid network script output '{}': {}", line, e))
    })?;

    if !(0.0..=1.0).contains(&prediction.probability) {
        return Err(MomoError::PredictionError(format!(
            "Probability out of range: {}",
            prediction.probability
        )));
    }
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelKwargs, MomoConfig};
    use rstest::rstest;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[rstest]
    #[case(
        r#"{"eligibility": true, "probability": 0.9, "prediction": "MRWB"}"#,
        true,
        0.9,
        "MRWB"
    )]
    #[case(
        "loading weights\n{\"eligibility\": false, \"probability\": 0.0, \"prediction\": \"MRS\"}\n\n",
        false,
        0.0,
        "MRS"
    )]
    fn test_parse_output(
        #[case] stdout: &str,
        #[case] eligibility: bool,
        #[case] probability: f64,
        #[case] label: &str,
    ) {
        let prediction = parse_output(stdout).unwrap();
        assert_eq!(prediction.eligibility, eligibility);
        assert_eq!(prediction.probability, probability);
        assert_eq!(prediction.label, label);
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case(r#"{"eligibility": true, "probability": 1.5, "prediction": "MRWB"}"#)]
    #[case(r#"{"eligibility": true, "prediction": "MRWB"}"#)]
    fn test_parse_output_invalid(#[case] stdout: &str) {
        assert!(matches!(
            parse_output(stdout),
            Err(MomoError::PredictionError(_))
        ));
    }

    fn config_for(script: PathBuf, extra: &[(&str, &str)]) -> MomoConfig {
        MomoConfig {
            mapfile: None,
            network: None,
            network_script: script,
            interpreter: Some("sh".to_string()),
            known_metas: Vec::new(),
            verbose: false,
            local: true,
            split_mode: true,
            kwargs: ModelKwargs {
                extra: extra
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..ModelKwargs::default()
            },
        }
    }

    fn request<'a>(config: &'a MomoConfig, file_name: &'a Path) -> PredictionRequest<'a> {
        PredictionRequest {
            study_modality: "MR",
            series_description: "dummy",
            series_modality: "MR",
            file_name,
            series_id: "1.2.3",
            mapfile: "MR.csv",
            network: "MR.pt",
            verbose: false,
            config,
        }
    }

    fn write_script(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("predict.sh");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_script_receives_arguments() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            &dir,
            "printf '{\"eligibility\": true, \"probability\": 0.75, \"prediction\": \"%s\"}\\n' \"$*\"\n",
        );
        let config = config_for(script, &[("device", "cpu")]);
        let file_name = Path::new("/data/series/img1.dcm");

        let prediction = ScriptPredictor.predict(&request(&config, file_name)).unwrap();

        assert!(prediction.eligibility);
        assert_eq!(prediction.probability, 0.75);
        assert!(prediction.label.contains("--study-modality MR"));
        assert!(prediction.label.contains("--file /data/series/img1.dcm"));
        assert!(prediction.label.contains("--series-id 1.2.3"));
        assert!(prediction.label.contains("--mapfile MR.csv"));
        assert!(prediction.label.contains("--network MR.pt"));
        assert!(prediction.label.contains("--device cpu"));
        assert!(!prediction.label.contains("--verbose"));
    }

    #[cfg(unix)]
    #[test]
    fn test_script_failure_reports_stderr() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "echo 'weights not found' >&2\nexit 3\n");
        let config = config_for(script, &[]);

        let err = ScriptPredictor
            .predict(&request(&config, Path::new("img.dcm")))
            .unwrap_err();

        assert!(err.to_string().contains("weights not found"));
    }

    #[test]
    fn test_missing_interpreter() {
        let mut config = config_for(PathBuf::from("predict.sh"), &[]);
        config.interpreter = Some("/nonexistent/interpreter".to_string());

        let result = ScriptPredictor.predict(&request(&config, Path::new("img.dcm")));
        assert!(matches!(result, Err(MomoError::PredictionError(_))));
    }
}
