//! Collation engine for FPGA channelizer ("F-Engine") packet streams.
//!
//! `fengband` turns the raw, ordered per-channel packet-destination
//! headers read off channelizer boards into a compact list of contiguous
//! channel ranges ("subbands"), each tagged with its destination address
//! and physical frequency extent.
//!
//! # Pipeline
//!
//! - **Merge**: coalesce runs of same-destination first-headers into
//!   stream segments ([`merge_headers`])
//! - **Finalize**: validate each segment into a whole-packet-stream
//!   [`ChannelSubband`] ([`finalize_segment`])
//! - **Map**: place sorted subbands on the sky using the unit's
//!   calibration constants ([`map_frequency_bands`])
//! - **Orchestrate**: run the pipeline per unit with unit-level fault
//!   isolation and guaranteed transport teardown ([`Collator`])
//!
//! Hardware access goes through the [`ChannelizerUnit`] and
//! [`UnitCatalog`] traits; drivers implement them, tests mock them.
//!
//! # Example
//!
//! ```rust,no_run
//! use fengband::{Collator, UnitCatalog};
//!
//! async fn run(catalog: &mut impl UnitCatalog) -> fengband::Result<()> {
//!     let antennas = vec!["1a".to_string(), "1c".to_string()];
//!     let tunings = vec!["b".to_string()];
//!
//!     let report = Collator::collate(catalog, &antennas, &tunings).await?;
//!     for (key, table) in report.bands() {
//!         println!("{key}: {} band(s)", table.len());
//!     }
//!     for key in report.unavailable() {
//!         println!("{key}: unavailable");
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg(test)]
pub mod test_utils;
pub mod types;

// Collation pipeline
pub mod collator;
pub mod finalize;
pub mod mapper;
pub mod merge;

// Hardware seam
pub mod unit;

// Core exports
pub use error::*;
pub use types::*;

// Pipeline exports
pub use collator::{CollationOutcome, CollationReport, Collator, collate_unit};
pub use finalize::finalize_segment;
pub use mapper::map_frequency_bands;
pub use merge::merge_headers;

// Hardware seam exports
pub use unit::{ChannelizerUnit, UnitCatalog};
