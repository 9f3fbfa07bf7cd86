use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use regex::Regex;
use std::sync::OnceLock;

// Identification Tags
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);

// Description Tags
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

// Modality Tags
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Anatomical Tags
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);

/// Metadata field name holding the modality of a series
pub const SERIES_MODALITY_KEY: &str = "Series Modality";

/// Metadata field name holding the Series Instance UID
pub const SERIES_INSTANCE_UID_KEY: &str = "Series Instance UID";

/// Metadata fields gathered when the configuration does not list any
pub const DEFAULT_KNOWN_METAS: [(&str, Tag); 5] = [
    ("Study Description", STUDY_DESCRIPTION),
    ("Series Description", SERIES_DESCRIPTION),
    (SERIES_MODALITY_KEY, MODALITY),
    (SERIES_INSTANCE_UID_KEY, SERIES_INSTANCE_UID),
    ("Body Part Examined", BODY_PART_EXAMINED),
];

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string.
/// Padding (spaces and NUL) is stripped.
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
}

/// Parses a tag key as written in configuration files
///
/// Accepts `gggg|eeee`, `gggg,eeee` and `(gggg,eeee)` with hexadecimal
/// group and element numbers.
pub fn parse_tag_key(key: &str) -> Option<Tag> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = REGEX.get_or_init(|| {
        Regex::new(r"^\(?\s*([0-9A-Fa-f]{4})\s*[|,]\s*([0-9A-Fa-f]{4})\s*\)?$")
            .expect("Failed to compile regex")
    });

    let caps = regex.captures(key.trim())?;
    let group = u16::from_str_radix(&caps[1], 16).ok()?;
    let element = u16::from_str_radix(&caps[2], 16).ok()?;
    Some(Tag(group, element))
}
