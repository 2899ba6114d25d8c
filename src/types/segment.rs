//! In-progress header runs owned by the stream merger

use super::HeaderRecord;

/// A run of same-destination first-headers, open during a single
/// interface scan
///
/// Mutable only while the merger's fold holds it; once emitted it is
/// handed to the finalizer and never touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSegment {
    /// Destination shared by every header merged into this run
    pub destination_address: String,

    /// Channel index of the opening header, fixed once opened
    pub start_channel: u32,

    /// Channel index of the most recently merged header
    pub last_seen_channel: u32,

    /// Channels per packet, fixed from the opening header
    pub channels_per_packet: u32,

    /// Sample packing flag, fixed from the opening header
    pub bit_depth_flag: bool,
}

impl StreamSegment {
    /// Open a segment from the first header of a new run
    pub fn open(record: &HeaderRecord) -> Self {
        Self {
            destination_address: record.destination_address.clone(),
            start_channel: record.start_channel,
            last_seen_channel: record.start_channel,
            channels_per_packet: record.channels_per_packet,
            bit_depth_flag: record.bit_depth_flag,
        }
    }

    /// Extend the run with another same-destination header
    pub fn extend(&mut self, record: &HeaderRecord) {
        self.last_seen_channel = record.start_channel;
    }
}
