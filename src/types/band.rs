//! Frequency bands and the ordered band table

use serde::{Deserialize, Serialize};

/// A channel subband enriched with its physical frequency extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Position in the unit's `start`-sorted band table
    pub index: usize,

    /// First channel index (inclusive)
    pub channel_start: u32,

    /// One past the last channel index (exclusive)
    pub channel_stop: u32,

    /// Packet destination address
    pub address: String,

    /// Lower frequency edge, same units as the calibration constants
    pub frequency_start: f64,

    /// Upper frequency edge
    pub frequency_stop: f64,
}

/// Ordered table of frequency bands for one (antenna, tuning) pair
///
/// Entries are keyed by their 0-based index in ascending `channel_start`
/// order. An empty table is a normal outcome for a unit whose interfaces
/// are all disabled or idle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    bands: Vec<FrequencyBand>,
}

impl BandTable {
    /// Build a table from bands already in index order
    pub fn new(bands: Vec<FrequencyBand>) -> Self {
        debug_assert!(bands.iter().enumerate().all(|(i, b)| b.index == i));
        Self { bands }
    }

    /// Number of bands in the table
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the table has no bands
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Band at the given table index
    pub fn get(&self, index: usize) -> Option<&FrequencyBand> {
        self.bands.get(index)
    }

    /// Iterate bands in table order
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyBand> {
        self.bands.iter()
    }
}

impl<'a> IntoIterator for &'a BandTable {
    type Item = &'a FrequencyBand;
    type IntoIter = std::slice::Iter<'a, FrequencyBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
