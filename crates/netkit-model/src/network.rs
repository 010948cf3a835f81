// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::{BTreeMap, BTreeSet};

use crate::band::Band;
use crate::bss::{Bssid, Ssid};
use crate::cluster::ApCluster;
use crate::error::{NetKitError, Result};

/// A foreign network's BSS, observed only for interference/overlap
/// purposes (it is not part of any `ApCluster` the caller manages).
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborNetwork {
    pub bssid: Bssid,
    pub ssid: Ssid,
    pub band: Band,
    pub channel: u16,
    pub rssi: i32,
    pub utilization_pct: f64,
}

/// A regulatory domain's view of channel availability. The planner queries
/// both methods; neither is assumed to agree with the other beyond what a
/// concrete implementation documents.
pub trait RegulatoryDomain {
    fn channels_for_band(&self, band: Band, include_dfs: bool) -> BTreeSet<u16>;
    fn requires_dfs(&self, band: Band, channel: u16) -> bool;
}

/// A straightforward table-driven `RegulatoryDomain`, sufficient for the
/// common case of a fixed per-band channel list plus a DFS sub-range.
#[derive(Debug, Clone)]
pub struct TableRegulatoryDomain {
    pub name: String,
    pub non_dfs_channels: BTreeMap<Band, BTreeSet<u16>>,
    pub dfs_channels: BTreeMap<Band, BTreeSet<u16>>,
}

impl RegulatoryDomain for TableRegulatoryDomain {
    fn channels_for_band(&self, band: Band, include_dfs: bool) -> BTreeSet<u16> {
        let mut channels = self.non_dfs_channels.get(&band).cloned().unwrap_or_default();
        if include_dfs {
            if let Some(dfs) = self.dfs_channels.get(&band) {
                channels.extend(dfs.iter().copied());
            }
        }
        channels
    }

    fn requires_dfs(&self, band: Band, channel: u16) -> bool {
        self.dfs_channels.get(&band).map(|s| s.contains(&channel)).unwrap_or(false)
    }
}

/// Observed radar events for a channel over a trailing window, used to
/// override the static DFS risk table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarEvent {
    pub channel: u16,
    pub events_per_month: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RadarHistory {
    pub events: Vec<RadarEvent>,
}

impl RadarHistory {
    pub fn events_per_month(&self, channel: u16) -> Option<f64> {
        self.events.iter().find(|e| e.channel == channel).map(|e| e.events_per_month)
    }
}

/// Root input to every engine in this crate family: the full set of
/// observed clusters, foreign-network neighbors, and the regulatory
/// context they were observed under.
pub struct NetworkObservation<R: RegulatoryDomain> {
    pub clusters: Vec<ApCluster>,
    pub neighbor_networks: Vec<NeighborNetwork>,
    pub regulatory_domain: R,
    pub radar_history: Option<RadarHistory>,
}

impl<R: RegulatoryDomain> NetworkObservation<R> {
    pub fn new(
        clusters: Vec<ApCluster>,
        neighbor_networks: Vec<NeighborNetwork>,
        regulatory_domain: R,
        radar_history: Option<RadarHistory>,
    ) -> Result<Self> {
        if clusters.is_empty() {
            return Err(NetKitError::invalid("clusters", "network observation must contain at least one cluster"));
        }
        Ok(NetworkObservation { clusters, neighbor_networks, regulatory_domain, radar_history })
    }

    pub fn all_bss(&self) -> impl Iterator<Item = &crate::bss::BssObservation> {
        self.clusters.iter().flat_map(|c| c.bssids.iter())
    }
}
