//! Packet-destination header records read off channelizer hardware

use serde::{Deserialize, Serialize};

/// One packet-destination descriptor reported by a channelizer interface
///
/// This is the raw hardware record the collation engine interprets.
/// Records for a single interface arrive in ascending channel order;
/// the merger relies on that ordering and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Hardware marked this header slot as populated
    pub valid: bool,

    /// This is the initial packet header of a logical stream
    ///
    /// Headers where `first` (or `valid`) is false carry no boundary
    /// information and are skipped during merging.
    pub first: bool,

    /// Packet destination, e.g. an IPv4 address string
    pub destination_address: String,

    /// Channel index at which this packet header begins
    pub start_channel: u32,

    /// Channels carried per packet
    pub channels_per_packet: u32,

    /// 8-bit sample packing (false means higher precision)
    pub bit_depth_flag: bool,
}

impl HeaderRecord {
    /// Whether this record contributes a stream boundary
    pub fn is_boundary(&self) -> bool {
        self.valid && self.first
    }
}
