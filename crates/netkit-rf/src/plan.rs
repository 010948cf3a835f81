// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use netkit_model::{ApCluster, Bssid, NeighborNetwork, RadarHistory, RegulatoryDomain};

use crate::constraints::ChannelPlanningConstraints;
use crate::dfs::assess_radar_risk;
use crate::scoring::channel_score;

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelAssignment {
    pub bssid: Bssid,
    pub channel: u16,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlan {
    pub assignments: Vec<ChannelAssignment>,
    pub co_channel_interference: f64,
    pub adjacent_channel_interference: f64,
    pub score: f64,
}

/// Plans channel assignments for every BSS in `clusters` whose band matches
/// `constraints.band`, using a greedy algorithm: score every candidate
/// channel, commit the highest-scoring one, then move to the next BSS.
pub fn plan_channels<R: RegulatoryDomain>(
    clusters: &[ApCluster],
    constraints: &ChannelPlanningConstraints,
    regulatory_domain: &R,
    neighbors: &[NeighborNetwork],
    radar_history: Option<&RadarHistory>,
) -> ChannelPlan {
    let available: Vec<u16> = regulatory_domain
        .channels_for_band(constraints.band, constraints.allow_dfs)
        .into_iter()
        .collect();

    let bssids: Vec<Bssid> = clusters
        .iter()
        .flat_map(|c| c.bssids.iter())
        .filter(|b| b.band == constraints.band)
        .map(|b| b.bssid)
        .collect();

    // Per-BSSID, per-channel score table (neighbor interference doesn't
    // depend on which BSSID we're placing, only on the channel).
    let channel_scores: BTreeMap<u16, f64> = available
        .iter()
        .map(|&ch| (ch, channel_score(constraints.band, ch, neighbors, radar_history)))
        .collect();

    // Sort most-constrained first: fewest channels scoring >= 70. Channel
    // scores here don't vary per BSSID (neighbor interference is
    // BSSID-independent), so this is a stable no-op today; it is kept
    // because a future per-BSSID channel mask (e.g. radio capability)
    // would make it discriminating again.
    let mut ordered = bssids;
    ordered.sort_by_key(|_bssid| channel_scores.values().filter(|&&s| s >= 70.0).count());

    let mut assigned_count: BTreeMap<u16, usize> = available.iter().map(|&ch| (ch, 0)).collect();
    let mut assignments = Vec::new();

    for bssid in ordered {
        let best = available
            .iter()
            .filter(|&&ch| assigned_count.get(&ch).copied().unwrap_or(0) < constraints.max_ap_count_per_channel)
            .map(|&ch| {
                let base = *channel_scores.get(&ch).unwrap_or(&0.0);
                let adjusted = base - 10.0 * assigned_count.get(&ch).copied().unwrap_or(0) as f64;
                (ch, adjusted, base)
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((channel, _adjusted, base_score)) = best {
            *assigned_count.entry(channel).or_insert(0) += 1;
            assignments.push(ChannelAssignment { bssid, channel, score: base_score });
        }
    }

    let co_channel_interference = mean_co_channel_interference(&assigned_count);
    let adjacent_channel_interference = if constraints.band.is_2_4ghz() {
        mean_adjacent_channel_interference(&assignments)
    } else {
        0.0
    };

    let dfs_penalty = assignments
        .iter()
        .map(|a| assess_radar_risk(constraints.band, a.channel, None, radar_history).penalty())
        .fold(0.0_f64, f64::max);

    let score = (100.0 - 40.0 * co_channel_interference - 20.0 * adjacent_channel_interference - dfs_penalty).clamp(0.0, 100.0);

    ChannelPlan { assignments, co_channel_interference, adjacent_channel_interference, score }
}

fn mean_co_channel_interference(assigned_count: &BTreeMap<u16, usize>) -> f64 {
    let used: Vec<usize> = assigned_count.values().copied().filter(|&c| c > 0).collect();
    if used.is_empty() {
        return 0.0;
    }
    let sum: f64 = used.iter().map(|&c| (c as f64 - 1.0) / c as f64).sum();
    sum / used.len() as f64
}

fn mean_adjacent_channel_interference(assignments: &[ChannelAssignment]) -> f64 {
    let mut pairs = 0usize;
    let mut sum = 0.0;
    for i in 0..assignments.len() {
        for j in (i + 1)..assignments.len() {
            let delta = (assignments[i].channel as i32 - assignments[j].channel as i32).unsigned_abs();
            if delta == 1 || delta == 2 {
                sum += 1.0 / delta as f64;
                pairs += 1;
            }
        }
    }
    if pairs == 0 {
        0.0
    } else {
        sum / pairs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_model::{
        AuthType, Band, BssObservation, Bssid, ChannelWidth, SecurityFingerprint, Ssid, TableRegulatoryDomain,
    };
    use std::collections::{BTreeMap, BTreeSet};

    fn bss(bssid: &str, band: Band) -> BssObservation {
        BssObservation {
            bssid: Bssid::parse(bssid).unwrap(),
            ssid: Ssid::new("home").unwrap(),
            band,
            channel: 1,
            channel_width: ChannelWidth::Mhz20,
            rssi: -50,
            fingerprint: SecurityFingerprint::new(AuthType::Open, BTreeSet::new(), false, None).unwrap(),
            wps_info: None,
            pmf_capable: false,
            management_cipher: None,
        }
    }

    fn domain_24ghz() -> TableRegulatoryDomain {
        let mut non_dfs = BTreeMap::new();
        non_dfs.insert(Band::Band2_4GHz, [1u16, 6, 11].into_iter().collect());
        TableRegulatoryDomain { name: "test".into(), non_dfs_channels: non_dfs, dfs_channels: BTreeMap::new() }
    }

    // three BSS, one cluster, 2.4 GHz, no neighbors,
    // maxApCountPerChannel = 1.
    #[test]
    fn scenario_channel_plan_2_4ghz() {
        let bssids = vec![
            bss("AA:BB:CC:DD:EE:01", Band::Band2_4GHz),
            bss("AA:BB:CC:DD:EE:02", Band::Band2_4GHz),
            bss("AA:BB:CC:DD:EE:03", Band::Band2_4GHz),
        ];
        let cluster = ApCluster::new("c1", Ssid::new("home").unwrap(), bssids).unwrap();
        let constraints = ChannelPlanningConstraints { band: Band::Band2_4GHz, max_ap_count_per_channel: 1, ..Default::default() };
        let plan = plan_channels(std::slice::from_ref(&cluster), &constraints, &domain_24ghz(), &[], None);

        let mut channels: Vec<u16> = plan.assignments.iter().map(|a| a.channel).collect();
        channels.sort_unstable();
        assert_eq!(channels, vec![1, 6, 11]);
        assert_eq!(plan.adjacent_channel_interference, 0.0);
        assert_eq!(plan.co_channel_interference, 0.0);
        assert!(plan.score >= 95.0, "score={}", plan.score);
    }

    #[test]
    fn no_channel_exceeds_max_ap_count() {
        let bssids = vec![
            bss("AA:BB:CC:DD:EE:01", Band::Band2_4GHz),
            bss("AA:BB:CC:DD:EE:02", Band::Band2_4GHz),
        ];
        let cluster = ApCluster::new("c1", Ssid::new("home").unwrap(), bssids).unwrap();
        let constraints = ChannelPlanningConstraints { band: Band::Band2_4GHz, max_ap_count_per_channel: 1, ..Default::default() };
        let plan = plan_channels(std::slice::from_ref(&cluster), &constraints, &domain_24ghz(), &[], None);

        let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
        for a in &plan.assignments {
            *counts.entry(a.channel).or_insert(0) += 1;
        }
        assert!(counts.values().all(|&c| c <= 1));
    }
}
