//! Finalized channel subbands

use serde::{Deserialize, Serialize};

/// One contiguous, validated channel range routed to a single destination
///
/// Produced by the finalizer from a [`StreamSegment`](super::StreamSegment);
/// immutable from then on. `stop` is exclusive and always greater than
/// `start`, and `stop - start` divides evenly into `packet_stream_count`
/// whole packet streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSubband {
    /// Packet destination for every channel in the range
    pub destination_address: String,

    /// First channel index (inclusive)
    pub start: u32,

    /// One past the last channel index (exclusive)
    pub stop: u32,

    /// Number of whole packet streams covering the range
    pub packet_stream_count: u32,
}

impl ChannelSubband {
    /// Channel width of the subband
    pub fn width(&self) -> u32 {
        self.stop - self.start
    }
}
