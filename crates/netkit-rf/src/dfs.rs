// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{Band, RadarHistory};

/// DFS risk tier for a given channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DfsRisk {
    None,
    Low,
    Medium,
    High,
}

impl DfsRisk {
    /// Score penalty applied in per-channel scoring.
    pub fn penalty(self) -> f64 {
        match self {
            DfsRisk::None => 0.0,
            DfsRisk::Low => 5.0,
            DfsRisk::Medium => 10.0,
            DfsRisk::High => 15.0,
        }
    }
}

/// Static DFS risk table, keyed by channel range on 5 GHz. `current_channel`
/// is accepted but unused, retained for a future channel-scoped risk model.
fn static_risk(band: Band, channel: u16, _current_channel: Option<u16>) -> DfsRisk {
    if !band.is_5ghz() {
        return DfsRisk::None;
    }
    match channel {
        52..=64 => DfsRisk::Medium,
        100..=144 => DfsRisk::Low,
        _ => DfsRisk::None,
    }
}

/// Bins observed radar events per month into a risk tier, overriding the
/// static table when radar history is available for this channel.
fn risk_from_events_per_month(events_per_month: f64) -> DfsRisk {
    if events_per_month >= 4.0 {
        DfsRisk::High
    } else if events_per_month >= 1.0 {
        DfsRisk::Medium
    } else if events_per_month >= 0.2 {
        DfsRisk::Low
    } else {
        DfsRisk::None
    }
}

/// Assesses radar risk for `channel` on `band`, consulting `radar_history`
/// when present and overriding the static table.
pub fn assess_radar_risk(
    band: Band,
    channel: u16,
    current_channel: Option<u16>,
    radar_history: Option<&RadarHistory>,
) -> DfsRisk {
    if let Some(history) = radar_history {
        if let Some(events) = history.events_per_month(channel) {
            return risk_from_events_per_month(events);
        }
    }
    static_risk(band, channel, current_channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_model::RadarEvent;

    #[test]
    fn static_table_bins() {
        assert_eq!(assess_radar_risk(Band::Band5GHz, 52, None, None), DfsRisk::Medium);
        assert_eq!(assess_radar_risk(Band::Band5GHz, 100, None, None), DfsRisk::Low);
        assert_eq!(assess_radar_risk(Band::Band5GHz, 36, None, None), DfsRisk::None);
        assert_eq!(assess_radar_risk(Band::Band2_4GHz, 1, None, None), DfsRisk::None);
    }

    #[test]
    fn radar_history_overrides_static_table() {
        let history = RadarHistory { events: vec![RadarEvent { channel: 36, events_per_month: 5.0 }] };
        assert_eq!(assess_radar_risk(Band::Band5GHz, 36, None, Some(&history)), DfsRisk::High);
    }

    #[test]
    fn current_channel_is_ignored() {
        assert_eq!(
            assess_radar_risk(Band::Band5GHz, 52, Some(36), None),
            assess_radar_risk(Band::Band5GHz, 52, Some(100), None)
        );
    }
}
