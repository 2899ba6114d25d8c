//! Stream merger: header records to coalesced segments
//!
//! Scans one interface's ordered header sequence and coalesces runs of
//! same-destination first-headers into [`StreamSegment`]s. Written as an
//! explicit fold over the records with a `(completed, open)` accumulator,
//! so the single-open-segment rule lives in the accumulator type rather
//! than in hidden loop state.

use crate::types::{HeaderRecord, StreamSegment};

/// Fold accumulator: the segments closed so far plus the one still open.
#[derive(Debug, Default)]
struct MergeState {
    completed: Vec<StreamSegment>,
    open: Option<StreamSegment>,
}

impl MergeState {
    fn step(mut self, record: &HeaderRecord) -> Self {
        match self.open.as_mut() {
            None => {
                self.open = Some(StreamSegment::open(record));
            }
            Some(segment) if segment.destination_address == record.destination_address => {
                segment.extend(record);
            }
            Some(_) => {
                // Address changed: close the current run, open a new one
                self.completed.extend(self.open.take());
                self.open = Some(StreamSegment::open(record));
            }
        }
        self
    }

    fn finish(mut self) -> Vec<StreamSegment> {
        self.completed.extend(self.open.take());
        self.completed
    }
}

/// Coalesce one interface's ordered header records into stream segments.
///
/// Only records with `valid && first` contribute; everything else carries
/// no boundary information and is skipped. An empty result means the
/// interface is enabled but idle, which is a normal outcome, not an error.
///
/// The merge test is destination-address equality ONLY. The hardware
/// header format has no end-of-segment marker, so two non-adjacent runs
/// sharing an address merge into one segment, and channel contiguity is
/// never verified here. That matches the hardware's observed behavior and
/// must not be tightened without confirmation that real boards never emit
/// non-adjacent repeats; inconsistent `channels_per_packet` across a run
/// is caught later by the finalizer.
pub fn merge_headers(records: &[HeaderRecord]) -> Vec<StreamSegment> {
    records
        .iter()
        .filter(|record| record.is_boundary())
        .fold(MergeState::default(), MergeState::step)
        .finish()
}
