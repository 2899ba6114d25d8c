//! Frequency mapper: channel subbands to physical frequency bands
//!
//! Pure coordinate transform from channel-index space to sky frequency,
//! driven by the unit's calibration constants. No error conditions
//! originate here; inputs are already validated by the finalizer.

use crate::types::{BandTable, ChannelSubband, ChannelizerCalibration, FrequencyBand};

/// Map a unit's `start`-sorted subbands to an indexed frequency-band table.
///
/// All arithmetic is `f64`. The half-channel offsets (`+0.5` on the band
/// center, `-0.5` against the channelizer center) are part of the hardware
/// frequency convention and must not be simplified away: together they
/// place a full-range subband's center exactly on the tuning's sky
/// frequency.
pub fn map_frequency_bands(
    subbands: &[ChannelSubband],
    calibration: &ChannelizerCalibration,
) -> BandTable {
    let center_channel = calibration.center_channel();
    let chan_bw = calibration.channel_bandwidth;

    let bands = subbands
        .iter()
        .enumerate()
        .map(|(index, subband)| {
            let width = (subband.stop - subband.start) as f64;
            let band_center_chan = width / 2.0 + subband.start as f64 + 0.5;
            let band_center_freq =
                calibration.sky_frequency + (band_center_chan - center_channel - 0.5) * chan_bw;

            FrequencyBand {
                index,
                channel_start: subband.start,
                channel_stop: subband.stop,
                address: subband.destination_address.clone(),
                frequency_start: band_center_freq - chan_bw * width / 2.0,
                frequency_stop: band_center_freq + chan_bw * width / 2.0,
            }
        })
        .collect();

    BandTable::new(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn subband(start: u32, stop: u32) -> ChannelSubband {
        ChannelSubband {
            destination_address: "10.0.0.1".to_string(),
            start,
            stop,
            packet_stream_count: 1,
        }
    }

    #[test]
    fn worked_example_full_range() {
        // N=1024, bw=1.0, f_LO=1000.0, subband [0, 1024):
        // band_center_chan = 512.5, band_center_freq = 1000.0
        let calibration = ChannelizerCalibration {
            channel_count: 1024,
            channel_bandwidth: 1.0,
            sky_frequency: 1000.0,
        };
        let table = map_frequency_bands(&[subband(0, 1024)], &calibration);

        assert_eq!(table.len(), 1);
        let band = table.get(0).unwrap();
        assert_eq!(band.index, 0);
        assert_eq!(band.channel_start, 0);
        assert_eq!(band.channel_stop, 1024);
        assert_eq!(band.frequency_start, 488.0);
        assert_eq!(band.frequency_stop, 1512.0);
    }

    #[test]
    fn full_range_subband_brackets_sky_frequency_symmetrically() {
        let calibration = ChannelizerCalibration {
            channel_count: 4096,
            channel_bandwidth: 0.25e6,
            sky_frequency: 1.4e9,
        };
        let table = map_frequency_bands(&[subband(0, 4096)], &calibration);
        let band = table.get(0).unwrap();

        let below = calibration.sky_frequency - band.frequency_start;
        let above = band.frequency_stop - calibration.sky_frequency;
        assert_eq!(below, above);
    }

    #[test]
    fn negative_bandwidth_inverts_edges() {
        let calibration = ChannelizerCalibration {
            channel_count: 1024,
            channel_bandwidth: -1.0,
            sky_frequency: 1000.0,
        };
        let table = map_frequency_bands(&[subband(0, 1024)], &calibration);
        let band = table.get(0).unwrap();

        // Inverted spectrum: the "start" edge sits above the "stop" edge
        assert_eq!(band.frequency_start, 1512.0);
        assert_eq!(band.frequency_stop, 488.0);
    }

    #[test]
    fn empty_subband_list_maps_to_empty_table() {
        let calibration = ChannelizerCalibration {
            channel_count: 1024,
            channel_bandwidth: 1.0,
            sky_frequency: 1000.0,
        };
        let table = map_frequency_bands(&[], &calibration);
        assert!(table.is_empty());
    }

    #[test]
    fn indices_follow_input_order() {
        let calibration = ChannelizerCalibration {
            channel_count: 1024,
            channel_bandwidth: 1.0,
            sky_frequency: 1000.0,
        };
        let table = map_frequency_bands(&[subband(0, 16), subband(16, 24)], &calibration);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).unwrap().channel_start, 0);
        assert_eq!(table.get(1).unwrap().channel_start, 16);
        assert_eq!(table.get(1).unwrap().index, 1);
    }

    proptest! {
        #[test]
        fn prop_band_width_scales_with_channel_width(
            start in 0u32..2048u32,
            width in 1u32..2048u32,
            chan_bw in -2.0f64..2.0f64,
            sky_freq in 0.0f64..1e6f64,
        ) {
            prop_assume!(chan_bw != 0.0);
            let calibration = ChannelizerCalibration {
                channel_count: 4096,
                channel_bandwidth: chan_bw,
                sky_frequency: sky_freq,
            };
            let table = map_frequency_bands(&[subband(start, start + width)], &calibration);
            let band = table.get(0).unwrap();

            let freq_width = band.frequency_stop - band.frequency_start;
            prop_assert!((freq_width - chan_bw * width as f64).abs() < 1e-6 * chan_bw.abs().max(1.0));
        }
    }
}
