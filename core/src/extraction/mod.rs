pub mod gather;
pub mod tags;

pub use gather::{collect_dicom_files, is_dicom_file, DicomGatherer, MetadataGatherer};
pub use tags::*;
