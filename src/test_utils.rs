//! Test utilities: deterministic in-memory channelizer mocks
//!
//! [`MockUnit`] and [`MockCatalog`] implement the hardware seam traits
//! with scripted responses, so the orchestrator's partial-failure policy
//! and scoped-disconnect obligation can be asserted without hardware.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::{AntennaTuning, HeaderRecord};
use crate::unit::{ChannelizerUnit, UnitCatalog};
use crate::{CollationError, Result};

/// Scripted channelizer board
#[derive(Debug, Clone)]
pub struct MockUnit {
    host: String,
    channel_count: u32,
    channel_bandwidth: f64,
    interfaces: Vec<(bool, Vec<HeaderRecord>)>,
    fail_enablement: bool,
    fail_headers: bool,
    sync_time: Option<i64>,
    header_reads: usize,
    disconnects: Arc<AtomicUsize>,
}

impl MockUnit {
    pub fn new(host: &str, channel_count: u32, channel_bandwidth: f64) -> Self {
        Self {
            host: host.to_string(),
            channel_count,
            channel_bandwidth,
            interfaces: Vec::new(),
            fail_enablement: false,
            fail_headers: false,
            sync_time: None,
            header_reads: 0,
            disconnects: Arc::default(),
        }
    }

    /// Add an interface with its enablement flag and header sequence
    pub fn with_interface(mut self, enabled: bool, headers: Vec<HeaderRecord>) -> Self {
        self.interfaces.push((enabled, headers));
        self
    }

    /// Make every enablement register read fail
    pub fn with_failing_enablement(mut self) -> Self {
        if self.interfaces.is_empty() {
            self.interfaces.push((true, Vec::new()));
        }
        self.fail_enablement = true;
        self
    }

    /// Make every header read fail
    pub fn with_failing_headers(mut self) -> Self {
        if self.interfaces.is_empty() {
            self.interfaces.push((true, Vec::new()));
        }
        self.fail_headers = true;
        self
    }

    pub fn with_sync_time(mut self, sync_time: i64) -> Self {
        self.sync_time = Some(sync_time);
        self
    }

    /// Number of header reads issued against this unit
    pub fn header_reads(&self) -> usize {
        self.header_reads
    }

    /// Shared disconnect counter (cloned into catalog-owned units)
    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    fn share_disconnects(&mut self, counter: Arc<AtomicUsize>) {
        self.disconnects = counter;
    }
}

#[async_trait::async_trait]
impl ChannelizerUnit for MockUnit {
    fn host(&self) -> &str {
        &self.host
    }

    fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    async fn interface_enabled(&mut self, interface: usize) -> Result<bool> {
        if self.fail_enablement {
            return Err(CollationError::interface_query(&self.host, interface));
        }
        Ok(self.interfaces[interface].0)
    }

    async fn read_headers(&mut self, interface: usize) -> Result<Vec<HeaderRecord>> {
        self.header_reads += 1;
        if self.fail_headers {
            return Err(CollationError::header_query(&self.host, interface));
        }
        Ok(self.interfaces[interface].1.clone())
    }

    async fn channel_count(&mut self) -> Result<u32> {
        Ok(self.channel_count)
    }

    async fn channel_bandwidth(&mut self) -> Result<f64> {
        Ok(self.channel_bandwidth)
    }

    async fn sync_time(&mut self) -> Option<i64> {
        self.sync_time
    }

    async fn disconnect(&mut self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Scripted observatory catalog
#[derive(Debug, Default)]
pub struct MockCatalog {
    units: BTreeMap<AntennaTuning, MockUnit>,
    sky_frequencies: BTreeMap<String, f64>,
    disconnects: Arc<AtomicUsize>,
}

impl MockCatalog {
    /// Register a unit for an (antenna, tuning) pair
    pub fn with_unit(mut self, key: AntennaTuning, mut unit: MockUnit) -> Self {
        unit.share_disconnects(Arc::clone(&self.disconnects));
        self.units.insert(key, unit);
        self
    }

    /// Register a tuning's sky frequency
    pub fn with_sky_frequency(mut self, tuning: &str, frequency: f64) -> Self {
        self.sky_frequencies.insert(tuning.to_string(), frequency);
        self
    }

    /// Counter incremented once per unit disconnect
    pub fn disconnect_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.disconnects)
    }
}

#[async_trait::async_trait]
impl UnitCatalog for MockCatalog {
    type Unit = MockUnit;

    async fn units(
        &mut self,
        antennas: &[String],
        tunings: &[String],
    ) -> Result<BTreeMap<AntennaTuning, MockUnit>> {
        Ok(self
            .units
            .iter()
            .filter(|(key, _)| {
                antennas.contains(&key.antenna_name) && tunings.contains(&key.tuning_id)
            })
            .map(|(key, unit)| (key.clone(), unit.clone()))
            .collect())
    }

    async fn sky_frequency(&mut self, tuning: &str) -> Result<f64> {
        self.sky_frequencies
            .get(tuning)
            .copied()
            .ok_or_else(|| CollationError::sky_frequency(tuning))
    }
}
