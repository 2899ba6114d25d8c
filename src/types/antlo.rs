//! Antenna/tuning pair keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifying one channelizer unit: an antenna paired with a
/// local-oscillator tuning
///
/// Ordered so that aggregated results iterate deterministically by
/// antenna, then tuning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AntennaTuning {
    /// Antenna name, e.g. `"1a"`
    pub antenna_name: String,

    /// Tuning (LO) identifier, e.g. `"b"`
    pub tuning_id: String,
}

impl AntennaTuning {
    /// Create a key from an antenna name and tuning identifier
    pub fn new(antenna_name: impl Into<String>, tuning_id: impl Into<String>) -> Self {
        Self { antenna_name: antenna_name.into(), tuning_id: tuning_id.into() }
    }

    /// Observatory catalog spelling: lowercase antenna, uppercase tuning
    pub fn catalog_name(&self) -> String {
        format!("{}{}", self.antenna_name.to_lowercase(), self.tuning_id.to_uppercase())
    }
}

impl fmt::Display for AntennaTuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.antenna_name, self.tuning_id)
    }
}
