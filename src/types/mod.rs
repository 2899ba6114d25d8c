//! Core types for the collation engine.
//!
//! This module provides the data model the engine moves data through:
//! - [`HeaderRecord`] is the raw hardware descriptor read off a channelizer
//!   interface
//! - [`StreamSegment`] is the merger's transient run of same-destination
//!   headers
//! - [`ChannelSubband`] is a finalized, validated contiguous channel range
//! - [`FrequencyBand`] / [`BandTable`] is the ordered output handed to the
//!   metadata-serving layer
//! - [`ChannelizerCalibration`] carries the constants for the
//!   channel-to-frequency transform
//! - [`AntennaTuning`] keys one hardware unit
//!
//! Everything here is created fresh per collation request. Only
//! `StreamSegment` is ever mutated, and only inside a single merger scan.

mod antlo;
mod band;
mod calibration;
mod header;
mod segment;
mod subband;

// Re-export all public types
pub use antlo::AntennaTuning;
pub use band::{BandTable, FrequencyBand};
pub use calibration::ChannelizerCalibration;
pub use header::HeaderRecord;
pub use segment::StreamSegment;
pub use subband::ChannelSubband;
