use crate::error::Result;
use crate::types::{GatheredSeries, KnownMeta, MetaItem};
use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_object::OpenFileOptions;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::tags::{get_string_value, SERIES_INSTANCE_UID};

/// Source of per-series metadata for a directory
///
/// Implementations report every series found under `data_root`; callers
/// decide how many series they accept.
pub trait MetadataGatherer {
    /// Gathers the `known_metas` fields of every series under `data_root`
    fn gather(
        &self,
        data_root: &Path,
        known_metas: &[KnownMeta],
        verbose: bool,
    ) -> Result<GatheredSeries>;
}

/// Gathers series metadata by reading DICOM headers from disk
///
/// Only files directly inside the directory are considered. Pixel data
/// is never loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomGatherer;

impl MetadataGatherer for DicomGatherer {
    fn gather(
        &self,
        data_root: &Path,
        known_metas: &[KnownMeta],
        verbose: bool,
    ) -> Result<GatheredSeries> {
        let mut files = collect_dicom_files(data_root)?;
        files.sort();
        if verbose {
            debug!(
                "Found {} candidate DICOM files in {}",
                files.len(),
                data_root.display()
            );
        }

        // Series UID -> first file and its metadata values
        let mut series: BTreeMap<String, (PathBuf, Vec<(String, String)>)> = BTreeMap::new();

        for path in files {
            let dcm = match OpenFileOptions::new().read_until(PIXEL_DATA).open_file(&path) {
                Ok(dcm) => dcm,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let Some(series_id) = get_string_value(&dcm, SERIES_INSTANCE_UID) else {
                warn!("Skipping {}: no Series Instance UID", path.display());
                continue;
            };

            if series.contains_key(&series_id) {
                continue;
            }

            let values = known_metas
                .iter()
                .filter_map(|meta| {
                    get_string_value(&dcm, meta.tag).map(|value| (meta.name.clone(), value))
                })
                .collect();
            series.insert(series_id, (path, values));
        }

        let mut gathered = GatheredSeries::default();
        for (series_id, (path, values)) in series {
            for (name, value) in values {
                gathered
                    .meta
                    .entry(name)
                    .or_default()
                    .push(MetaItem::new(series_id.clone(), value));
            }
            gathered.file_names.push(path);
            gathered.series_ids.push(series_id);
        }

        if verbose {
            debug!(
                "Gathered {} series from {}",
                gathered.series_ids.len(),
                data_root.display()
            );
        }
        Ok(gathered)
    }
}

/// Lists the DICOM files directly inside a directory
///
/// Files with a `.dcm` or `.dicom` extension are accepted as-is. Any other
/// file (`.IMA`, UID-named, extensionless) is accepted when it carries a
/// DICOM header.
pub fn collect_dicom_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && (has_dicom_extension(&path) || is_dicom_file(&path)) {
            files.push(path);
        }
    }

    Ok(files)
}

fn has_dicom_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom"))
        .unwrap_or(false)
}

/// Checks if a file has a DICOM header
///
/// DICOM files carry a 128-byte preamble followed by the 4-byte "DICM" magic.
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}
