//! Stream finalizer: segments to validated channel subbands
//!
//! Converts each merged segment into an immutable [`ChannelSubband`],
//! rejecting hardware state that does not divide into a whole number of
//! packet streams.

use crate::types::{ChannelSubband, StreamSegment};
use crate::{CollationError, Result};

/// Validate a merged segment and produce its channel subband.
///
/// The segment's exclusive stop is one packet past the last header seen:
/// `last_seen_channel + channels_per_packet`. If the resulting width is
/// not a multiple of `channels_per_packet`, the headers describe a
/// fractional packet stream, hardware/driver state that cannot be
/// reconciled, and the data-integrity error is returned with the unit
/// host and both operands.
///
/// A header claiming zero channels per packet is the same class of
/// irreconcilable state and gets the same error (with an infinite or NaN
/// quotient), rather than dividing by zero.
pub fn finalize_segment(segment: &StreamSegment, host: &str) -> Result<ChannelSubband> {
    let stop = segment.last_seen_channel + segment.channels_per_packet;
    let width = stop - segment.start_channel;

    if segment.channels_per_packet == 0 || width % segment.channels_per_packet != 0 {
        return Err(CollationError::non_integer_stream_count(
            host,
            width,
            segment.channels_per_packet,
        ));
    }

    Ok(ChannelSubband {
        destination_address: segment.destination_address.clone(),
        start: segment.start_channel,
        stop,
        packet_stream_count: width / segment.channels_per_packet,
    })
}
