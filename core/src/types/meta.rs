use dicom_core::Tag;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A metadata field to gather from each series, by display name and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownMeta {
    pub name: String,
    pub tag: Tag,
}

impl KnownMeta {
    pub fn new(name: impl Into<String>, tag: Tag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

/// One gathered metadata value, tagged with the series it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaItem {
    pub series_id: String,
    pub value: String,
}

impl MetaItem {
    pub fn new(series_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            value: value.into(),
        }
    }
}

/// Gathered metadata: field name → one item per series holding the field
pub type SeriesMetadata = BTreeMap<String, Vec<MetaItem>>;

/// Everything the metadata gatherer found under a directory
///
/// `file_names` and `series_ids` are parallel: entry `i` of each
/// describes the same series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatheredSeries {
    /// Metadata field values across all series
    pub meta: SeriesMetadata,

    /// One representative file per series
    pub file_names: Vec<PathBuf>,

    /// Series Instance UID per series
    pub series_ids: Vec<String>,
}

impl GatheredSeries {
    /// Returns the values gathered for a field, if any were found
    pub fn values(&self, field: &str) -> Option<&[MetaItem]> {
        self.meta.get(field).map(Vec::as_slice)
    }
}
