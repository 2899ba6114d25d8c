//! Collaborator traits at the hardware seam
//!
//! The engine never talks to FPGA transports directly. It consumes two
//! traits: [`ChannelizerUnit`] for one board's read-and-interpret path and
//! [`UnitCatalog`] for unit enumeration and tuning-level queries. Hardware
//! drivers implement these; tests substitute deterministic mocks.

use std::collections::BTreeMap;

use crate::types::{AntennaTuning, HeaderRecord};
use crate::Result;

/// One FPGA channelizer board associated with an (antenna, tuning) pair
///
/// All queries are blocking hardware I/O surfaced as futures; the engine
/// defines no timeout policy of its own, so implementations (or their
/// callers) are expected to bound these calls.
#[async_trait::async_trait]
pub trait ChannelizerUnit: Send {
    /// Hostname of the board, used in logs and error context
    fn host(&self) -> &str;

    /// Number of network egress interfaces on the board
    fn interface_count(&self) -> usize;

    /// Whether the given interface's ethernet output is enabled
    ///
    /// Read from the interface's control register. A failure here makes
    /// the whole unit unavailable: partial success with unknown interface
    /// state is worse than skipping the unit.
    async fn interface_enabled(&mut self, interface: usize) -> Result<bool>;

    /// Ordered packet-destination header records for one interface
    ///
    /// Records arrive in ascending channel order; the merger relies on
    /// this and does not re-sort.
    async fn read_headers(&mut self, interface: usize) -> Result<Vec<HeaderRecord>>;

    /// Total channel count of the board's spectral decomposition
    async fn channel_count(&mut self) -> Result<u32>;

    /// Bandwidth of one channel; signed, negative for inverted spectra
    async fn channel_bandwidth(&mut self) -> Result<f64>;

    /// Channelizer sync time, if the board exposes one
    ///
    /// A failed register read yields `None`, never an error.
    async fn sync_time(&mut self) -> Option<i64>;

    /// Release the board's transport resources
    ///
    /// Idempotent and non-throwing by contract. The orchestrator calls
    /// this on every exit path, success or failure.
    async fn disconnect(&mut self);
}

/// Observatory-level catalog of channelizer units and tunings
#[async_trait::async_trait]
pub trait UnitCatalog: Send {
    /// Concrete unit type handed back by enumeration
    type Unit: ChannelizerUnit;

    /// Map the requested (antenna, tuning) pairs to hardware units
    ///
    /// Pairs with no configured hardware are simply absent from the map;
    /// that is not an error.
    async fn units(
        &mut self,
        antennas: &[String],
        tunings: &[String],
    ) -> Result<BTreeMap<AntennaTuning, Self::Unit>>;

    /// Current sky frequency of the given tuning's local oscillator
    async fn sky_frequency(&mut self, tuning: &str) -> Result<f64>;
}
