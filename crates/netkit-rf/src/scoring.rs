// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{Band, NeighborNetwork, RadarHistory};

use crate::dfs::assess_radar_risk;

/// Scores a single channel on a single band, base 100 bounded to `[0,100]`,
/// penalized for co-channel and adjacent-channel interference and DFS risk.
pub fn channel_score(
    band: Band,
    channel: u16,
    neighbors: &[NeighborNetwork],
    radar_history: Option<&RadarHistory>,
) -> f64 {
    let same_band: Vec<&NeighborNetwork> = neighbors.iter().filter(|n| n.band == band).collect();
    let co_channel: Vec<&&NeighborNetwork> = same_band.iter().filter(|n| n.channel == channel).collect();

    let mut score = 100.0;
    score -= 20.0 * co_channel.len() as f64;

    if band.is_2_4ghz() {
        let near_count = same_band
            .iter()
            .filter(|n| n.channel != channel && (n.channel as i32 - channel as i32).unsigned_abs() <= 2)
            .count();
        score -= 10.0 * near_count as f64;
    }

    let dfs_risk = assess_radar_risk(band, channel, None, radar_history);
    score -= dfs_risk.penalty();

    let max_utilization = co_channel.iter().map(|n| n.utilization_pct).fold(0.0_f64, f64::max);
    score -= 0.2 * max_utilization;

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_model::{Bssid, Ssid};

    fn neighbor(channel: u16, band: Band, utilization: f64) -> NeighborNetwork {
        NeighborNetwork {
            bssid: Bssid::parse("11:22:33:44:55:66").unwrap(),
            ssid: Ssid::new("neighbor").unwrap(),
            band,
            channel,
            rssi: -70,
            utilization_pct: utilization,
        }
    }

    #[test]
    fn no_neighbors_perfect_score() {
        assert_eq!(channel_score(Band::Band2_4GHz, 1, &[], None), 100.0);
    }

    #[test]
    fn co_channel_neighbor_penalized() {
        let neighbors = vec![neighbor(6, Band::Band2_4GHz, 50.0)];
        let score = channel_score(Band::Band2_4GHz, 6, &neighbors, None);
        assert!((score - (100.0 - 20.0 - 0.2 * 50.0)).abs() < 1e-9);
    }

    #[test]
    fn adjacent_channel_penalty_only_on_2_4ghz() {
        let neighbors = vec![neighbor(7, Band::Band2_4GHz, 0.0)];
        let score_24 = channel_score(Band::Band2_4GHz, 6, &neighbors, None);
        assert!((score_24 - 90.0).abs() < 1e-9);

        let neighbors5 = vec![neighbor(38, Band::Band5GHz, 0.0)];
        let score_5 = channel_score(Band::Band5GHz, 36, &neighbors5, None);
        assert_eq!(score_5, 100.0);
    }
}
