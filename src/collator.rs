//! Collation orchestrator
//!
//! Drives the full pipeline (enablement query, header read, merge,
//! finalize, frequency mapping) per hardware unit and aggregates one
//! outcome per (antenna, tuning) pair. Owns the partial-failure policy:
//!
//! - transient hardware I/O faults make a unit [`Unavailable`] and the
//!   remaining units carry on
//! - a data-integrity violation is recorded as an explicit [`Corrupt`]
//!   outcome for that unit, again without stopping the others
//! - an enabled-but-idle or all-disabled unit yields an empty band table,
//!   which is a normal result
//!
//! Every unit handle is disconnected on every exit path; disconnect is
//! idempotent and non-throwing by contract, so no teardown error handling
//! is needed here.
//!
//! [`Unavailable`]: CollationOutcome::Unavailable
//! [`Corrupt`]: CollationOutcome::Corrupt

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use crate::finalize::finalize_segment;
use crate::mapper::map_frequency_bands;
use crate::merge::merge_headers;
use crate::types::{AntennaTuning, BandTable, ChannelSubband, ChannelizerCalibration};
use crate::unit::{ChannelizerUnit, UnitCatalog};
use crate::{CollationError, Result};

/// Result of collating one (antenna, tuning) pair
#[derive(Debug)]
pub enum CollationOutcome {
    /// Collation succeeded; the table may be empty for an idle unit
    Bands {
        /// Ordered frequency-band table
        table: BandTable,
        /// Channelizer sync time, when the board exposes one
        sync_time: Option<i64>,
    },

    /// The unit could not be read (transient hardware I/O fault)
    Unavailable,

    /// The unit reported a channel layout that cannot be reconciled
    /// into whole packet streams
    Corrupt(CollationError),
}

impl CollationOutcome {
    /// Band table, when collation succeeded
    pub fn bands(&self) -> Option<&BandTable> {
        match self {
            CollationOutcome::Bands { table, .. } => Some(table),
            _ => None,
        }
    }

    /// Whether the unit was skipped as unavailable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CollationOutcome::Unavailable)
    }
}

/// Aggregated collation result, one outcome per requested pair
///
/// Pairs with no configured hardware are absent entirely; every pair with
/// hardware appears exactly once, so callers can distinguish "not
/// configured", "no data available", and "corrupt data detected".
#[derive(Debug, Default)]
pub struct CollationReport {
    outcomes: BTreeMap<AntennaTuning, CollationOutcome>,
}

impl CollationReport {
    /// Outcome for one pair, if its hardware was configured
    pub fn get(&self, key: &AntennaTuning) -> Option<&CollationOutcome> {
        self.outcomes.get(key)
    }

    /// Iterate all outcomes in key order
    pub fn iter(&self) -> impl Iterator<Item = (&AntennaTuning, &CollationOutcome)> {
        self.outcomes.iter()
    }

    /// Iterate successfully collated band tables in key order
    pub fn bands(&self) -> impl Iterator<Item = (&AntennaTuning, &BandTable)> {
        self.outcomes.iter().filter_map(|(key, outcome)| Some((key, outcome.bands()?)))
    }

    /// Pairs skipped because their unit was unavailable
    pub fn unavailable(&self) -> impl Iterator<Item = &AntennaTuning> {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.is_unavailable().then_some(key))
    }

    /// Pairs whose unit reported irreconcilable state, with the error
    pub fn failures(&self) -> impl Iterator<Item = (&AntennaTuning, &CollationError)> {
        self.outcomes.iter().filter_map(|(key, outcome)| match outcome {
            CollationOutcome::Corrupt(error) => Some((key, error)),
            _ => None,
        })
    }

    /// Number of pairs with configured hardware
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no requested pair had configured hardware
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Stateless collation entry point
///
/// The orchestrator holds no state of its own; everything lives for one
/// [`collate`](Collator::collate) call.
pub struct Collator;

impl Collator {
    /// Collate every requested (antenna, tuning) pair into a report.
    ///
    /// Units are processed sequentially; each unit's handle is released
    /// before the next is touched. A failed sky-frequency query marks all
    /// of that tuning's pairs unavailable, since the frequency mapping
    /// cannot be anchored without it.
    pub async fn collate<C>(
        catalog: &mut C,
        antennas: &[String],
        tunings: &[String],
    ) -> Result<CollationReport>
    where
        C: UnitCatalog,
    {
        let units = catalog.units(antennas, tunings).await?;
        info!("Collating {} configured unit(s) across {} tuning(s)", units.len(), tunings.len());

        // One sky-frequency query per distinct tuning, up front
        let mut tuning_sky_freq: BTreeMap<String, Option<f64>> = BTreeMap::new();
        for key in units.keys() {
            if tuning_sky_freq.contains_key(&key.tuning_id) {
                continue;
            }
            let freq = match catalog.sky_frequency(&key.tuning_id).await {
                Ok(freq) => Some(freq),
                Err(error) => {
                    warn!("Sky frequency query failed for tuning {}: {}", key.tuning_id, error);
                    None
                }
            };
            tuning_sky_freq.insert(key.tuning_id.clone(), freq);
        }

        let mut report = CollationReport::default();
        for (key, mut unit) in units {
            let outcome = match tuning_sky_freq.get(&key.tuning_id).copied().flatten() {
                None => CollationOutcome::Unavailable,
                Some(sky_frequency) => match collate_unit(&mut unit, sky_frequency).await {
                    Ok((table, sync_time)) => {
                        debug!("Collated {} band(s) for {}", table.len(), key);
                        CollationOutcome::Bands { table, sync_time }
                    }
                    Err(error) if error.is_transient() => {
                        warn!("Unit for {} unavailable: {}", key, error);
                        CollationOutcome::Unavailable
                    }
                    Err(fault) => {
                        error!("Unit for {} reported corrupt state: {}", key, fault);
                        CollationOutcome::Corrupt(fault)
                    }
                },
            };

            // Release the transport on every path, success or failure
            unit.disconnect().await;
            report.outcomes.insert(key, outcome);
        }

        info!(
            "Collation finished: {} collated, {} unavailable, {} corrupt",
            report.bands().count(),
            report.unavailable().count(),
            report.failures().count()
        );
        Ok(report)
    }
}

/// Collate a single unit into its band table.
///
/// Queries interface enablement first; any enablement failure makes the
/// whole unit unavailable rather than risking partial output from unknown
/// interface state. Subbands from all enabled interfaces are concatenated
/// and re-sorted by start channel before frequency mapping, so interface
/// processing order never shows in the output.
pub async fn collate_unit<U>(unit: &mut U, sky_frequency: f64) -> Result<(BandTable, Option<i64>)>
where
    U: ChannelizerUnit,
{
    let host = unit.host().to_string();

    let mut enabled = Vec::with_capacity(unit.interface_count());
    for interface in 0..unit.interface_count() {
        enabled.push(unit.interface_enabled(interface).await?);
    }

    let mut subbands: Vec<ChannelSubband> = Vec::new();
    if enabled.iter().any(|&e| e) {
        for (interface, &is_enabled) in enabled.iter().enumerate() {
            if !is_enabled {
                continue;
            }
            let headers = unit.read_headers(interface).await?;
            debug!("{}[{}]: {} header record(s)", host, interface, headers.len());

            for segment in merge_headers(&headers) {
                subbands.push(finalize_segment(&segment, &host)?);
            }
        }
    } else {
        warn!("Ethernet outputs of {} are all disabled: {:?}", host, enabled);
    }

    subbands.sort_by_key(|subband| subband.start);

    let calibration = ChannelizerCalibration {
        channel_count: unit.channel_count().await?,
        channel_bandwidth: unit.channel_bandwidth().await?,
        sky_frequency,
    };

    let table = map_frequency_bands(&subbands, &calibration);
    let sync_time = unit.sync_time().await;
    Ok((table, sync_time))
}
