//! Prediction configuration
//!
//! Settings are read from an INI file with the following sections:
//!
//! ```ini
//! [general]
//! network_script = ./predict_network.py
//! interpreter = python3
//! mapfile = ./mapfiles/default.csv
//! network = ./networks/default.pt
//! verbose = false
//! local = true
//! split_mode = true
//!
//! [known_metas]
//! Series Modality = 0008|0060
//! Series Instance UID = 0020|000E
//!
//! [mapfiles]
//! MR = ./mapfiles/MR.csv
//!
//! [networks]
//! MR = ./networks/MR.pt
//!
//! [kwargs]
//! device = cpu
//! ```

use crate::error::{MomoError, Result};
use crate::extraction::tags::{parse_tag_key, DEFAULT_KNOWN_METAS};
use crate::types::KnownMeta;
use ini::{Ini, Properties};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration file read when no other path is given
pub const DEFAULT_CONFIG_PATH: &str = "./default_config.ini";

const GENERAL_SECTION: &str = "general";
const KNOWN_METAS_SECTION: &str = "known_metas";
const MAPFILES_SECTION: &str = "mapfiles";
const NETWORKS_SECTION: &str = "networks";
const KWARGS_SECTION: &str = "kwargs";

/// Settings for one prediction call
#[derive(Debug, Clone, PartialEq)]
pub struct MomoConfig {
    /// Default mapfile, used by predictors that do not split by modality
    pub mapfile: Option<String>,

    /// Default network identifier
    pub network: Option<String>,

    /// Executable running network inference
    pub network_script: PathBuf,

    /// Interpreter used to launch `network_script`, if it is not directly executable
    pub interpreter: Option<String>,

    /// Metadata fields to gather from each series
    pub known_metas: Vec<KnownMeta>,

    pub verbose: bool,

    /// Whether networks are loaded from local files
    pub local: bool,

    /// Whether network/mapfile are selected per modality
    pub split_mode: bool,

    /// Keyword arguments forwarded to the predictor
    pub kwargs: ModelKwargs,
}

/// Keyword arguments forwarded to the network predictor
///
/// Holds the per-modality `mapfiles` and `networks` tables plus any
/// free-form extras from the `[kwargs]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelKwargs {
    pub mapfiles: BTreeMap<String, String>,
    pub networks: BTreeMap<String, String>,
    pub extra: BTreeMap<String, String>,
}

impl ModelKwargs {
    /// Returns the mapfile configured for a modality
    pub fn mapfile_for(&self, modality: &str) -> Result<&str> {
        lookup(&self.mapfiles, MAPFILES_SECTION, modality)
    }

    /// Returns the network configured for a modality
    pub fn network_for(&self, modality: &str) -> Result<&str> {
        lookup(&self.networks, NETWORKS_SECTION, modality)
    }
}

fn lookup<'a>(table: &'a BTreeMap<String, String>, name: &str, modality: &str) -> Result<&'a str> {
    table
        .get(modality)
        .map(String::as_str)
        .ok_or_else(|| MomoError::MissingModel {
            table: name.to_string(),
            modality: modality.to_string(),
        })
}

impl MomoConfig {
    /// Loads configuration from an INI file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if
    /// `[general] network_script` is missing, or if a value is malformed.
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => MomoError::ConfigError(format!(
                "Failed to read {}: {}",
                path.display(),
                io
            )),
            other => other.into(),
        })?;
        Self::from_ini(&ini)
    }

    /// Parses configuration from INI text
    pub fn from_ini_str(contents: &str) -> Result<Self> {
        let ini = Ini::load_from_str(contents)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let general = ini.section(Some(GENERAL_SECTION)).ok_or_else(|| {
            MomoError::ConfigError(format!("Missing [{}] section", GENERAL_SECTION))
        })?;

        let network_script = general
            .get("network_script")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                MomoError::ConfigError(format!("Missing {}.network_script", GENERAL_SECTION))
            })?;

        Ok(Self {
            mapfile: get_non_empty(general, "mapfile"),
            network: get_non_empty(general, "network"),
            network_script,
            interpreter: get_non_empty(general, "interpreter"),
            known_metas: parse_known_metas(ini.section(Some(KNOWN_METAS_SECTION)))?,
            verbose: get_bool(general, "verbose")?,
            local: get_bool(general, "local")?,
            split_mode: get_bool(general, "split_mode")?,
            kwargs: ModelKwargs {
                mapfiles: section_table(ini, MAPFILES_SECTION),
                networks: section_table(ini, NETWORKS_SECTION),
                extra: section_table(ini, KWARGS_SECTION),
            },
        })
    }
}

fn get_non_empty(props: &Properties, key: &str) -> Option<String> {
    props
        .get(key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses a boolean the way INI files usually spell them; missing keys are `false`
fn get_bool(props: &Properties, key: &str) -> Result<bool> {
    let Some(raw) = props.get(key) else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        other => Err(MomoError::ConfigError(format!(
            "Invalid boolean for {}.{}: {}",
            GENERAL_SECTION, key, other
        ))),
    }
}

fn section_table(ini: &Ini, section: &str) -> BTreeMap<String, String> {
    ini.section(Some(section))
        .map(|props| {
            props
                .iter()
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_known_metas(section: Option<&Properties>) -> Result<Vec<KnownMeta>> {
    let Some(props) = section else {
        return Ok(DEFAULT_KNOWN_METAS
            .iter()
            .map(|(name, tag)| KnownMeta::new(*name, *tag))
            .collect());
    };

    props
        .iter()
        .map(|(name, key)| {
            parse_tag_key(key)
                .map(|tag| KnownMeta::new(name.trim(), tag))
                .ok_or_else(|| {
                    MomoError::ConfigError(format!(
                        "Invalid tag key for known meta '{}': {}",
                        name, key
                    ))
                })
        })
        .collect()
}
