//! Calibration constants for the channel-to-frequency transform

use serde::{Deserialize, Serialize};

/// Per-unit constants needed to place subbands on the sky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelizerCalibration {
    /// Total channel count of the unit's spectral decomposition
    pub channel_count: u32,

    /// Bandwidth of one channel; signed, negative for inverted spectra
    pub channel_bandwidth: f64,

    /// Sky frequency the tuning's local oscillator is centered on
    pub sky_frequency: f64,
}

impl ChannelizerCalibration {
    /// Channelizer center channel, as a real value
    ///
    /// Real-valued division on purpose: odd channel counts yield a
    /// half-channel center.
    pub fn center_channel(&self) -> f64 {
        self.channel_count as f64 / 2.0
    }
}
