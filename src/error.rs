//! Error types for the collation engine.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context: the unit host, the interface index, and for data-integrity
//! violations the exact operands the hardware reported.
//!
//! ## Error Categories
//!
//! - **Transient unavailability**: hardware I/O failures reading interface
//!   enablement, packet headers, calibration constants, or the tuning's sky
//!   frequency. The orchestrator recovers at the unit level: the unit is
//!   reported unavailable and collation continues.
//! - **Data integrity violation**: headers that cannot be reconciled into a
//!   whole number of packet streams. A more severe, unit-scoped fatal
//!   condition, surfaced as an explicit per-unit failure so callers can
//!   tell "no data available" from "corrupt data detected".
//!
//! Use [`CollationError::is_transient`] to classify:
//!
//! ```rust
//! use fengband::CollationError;
//!
//! let error = CollationError::header_query("rfsoc1-1", 0);
//! assert!(error.is_transient());
//! ```

use thiserror::Error;

/// Result type alias for collation operations.
pub type Result<T, E = CollationError> = std::result::Result<T, E>;

/// Main error type for collation operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CollationError {
    #[error("Failed to query ethernet status of {host}[{interface}]")]
    InterfaceQuery {
        host: String,
        interface: usize,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to query headers of {host}[{interface}]")]
    HeaderQuery {
        host: String,
        interface: usize,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to query calibration constants of {host}: {reason}")]
    Calibration {
        host: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to query sky frequency for tuning {tuning}")]
    SkyFrequency {
        tuning: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(
        "Read headers from {host} that indicate non-integer number of streams: \
         {width} / {channels_per_packet} = {quotient}"
    )]
    NonIntegerStreamCount { host: String, width: u32, channels_per_packet: u32, quotient: f64 },
}

impl CollationError {
    /// Returns whether this error models a transient hardware I/O fault.
    ///
    /// Transient errors cause the unit to be reported unavailable and
    /// skipped; non-transient errors signal corrupt hardware state and are
    /// surfaced as an explicit per-unit failure.
    pub fn is_transient(&self) -> bool {
        match self {
            CollationError::InterfaceQuery { .. } => true,
            CollationError::HeaderQuery { .. } => true,
            CollationError::Calibration { .. } => true,
            CollationError::SkyFrequency { .. } => true,
            CollationError::NonIntegerStreamCount { .. } => false,
        }
    }

    /// Helper constructor for interface-enablement query failures.
    pub fn interface_query(host: impl Into<String>, interface: usize) -> Self {
        CollationError::InterfaceQuery { host: host.into(), interface, source: None }
    }

    /// Helper constructor for interface-enablement query failures with a
    /// transport source.
    pub fn interface_query_with_source(
        host: impl Into<String>,
        interface: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        CollationError::InterfaceQuery { host: host.into(), interface, source: Some(source) }
    }

    /// Helper constructor for header query failures.
    pub fn header_query(host: impl Into<String>, interface: usize) -> Self {
        CollationError::HeaderQuery { host: host.into(), interface, source: None }
    }

    /// Helper constructor for header query failures with a transport source.
    pub fn header_query_with_source(
        host: impl Into<String>,
        interface: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        CollationError::HeaderQuery { host: host.into(), interface, source: Some(source) }
    }

    /// Helper constructor for calibration query failures.
    pub fn calibration(host: impl Into<String>, reason: impl Into<String>) -> Self {
        CollationError::Calibration { host: host.into(), reason: reason.into(), source: None }
    }

    /// Helper constructor for sky-frequency query failures.
    pub fn sky_frequency(tuning: impl Into<String>) -> Self {
        CollationError::SkyFrequency { tuning: tuning.into(), source: None }
    }

    /// Helper constructor for the non-integer stream-count violation.
    ///
    /// Carries both operands and the real-valued quotient the hardware
    /// state implies, so the failure message reads like the register dump.
    pub fn non_integer_stream_count(
        host: impl Into<String>,
        width: u32,
        channels_per_packet: u32,
    ) -> Self {
        CollationError::NonIntegerStreamCount {
            host: host.into(),
            width,
            channels_per_packet,
            quotient: width as f64 / channels_per_packet as f64,
        }
    }
}
