//! Core type definitions for series prediction
//!
//! This module provides the fundamental types used throughout the momo library:
//! - [`BodyPart`]: Body parts recognised by the MR classification network
//! - [`LabelMode`]: How raw network labels are reported
//! - [`SeriesResult`]: One output record per predicted series
//! - [`GatheredSeries`], [`KnownMeta`], [`MetaItem`]: Metadata gathered from series directories

mod enums;
mod meta;
mod record;

pub use enums::{BodyPart, LabelMode};
pub use meta::{GatheredSeries, KnownMeta, MetaItem, SeriesMetadata};
pub use record::{SeriesResult, RESULT_COLUMNS};
