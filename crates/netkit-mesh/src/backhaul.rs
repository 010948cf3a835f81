// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::graph::SpanningTree;
use crate::topology::MeshTopology;

/// Five-tier backhaul quality rating for a mesh fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BackhaulTier {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

fn wired_pct(topology: &MeshTopology) -> f64 {
    if topology.nodes.is_empty() {
        return 0.0;
    }
    let wired = topology.nodes.iter().filter(|n| n.is_wired).count();
    100.0 * wired as f64 / topology.nodes.len() as f64
}

fn avg_link_quality(topology: &MeshTopology) -> f64 {
    if topology.links.is_empty() {
        return 1.0;
    }
    topology.links.iter().map(|l| l.quality).sum::<f64>() / topology.links.len() as f64
}

/// Rates overall backhaul quality for a mesh fabric.
/// `has_dedicated_backhaul` reflects whether the fabric uses a radio or
/// wired link reserved for inter-node traffic, which is not derivable
/// from node/link records alone.
pub fn backhaul_quality(topology: &MeshTopology, has_dedicated_backhaul: bool) -> BackhaulTier {
    let wired = wired_pct(topology);
    if wired >= 100.0 {
        return BackhaulTier::Excellent;
    }
    if wired >= 75.0 || has_dedicated_backhaul {
        return BackhaulTier::Good;
    }

    let max_hop_count = SpanningTree::build(topology).map(|t| t.max_hop_count()).unwrap_or(0);
    let quality = avg_link_quality(topology);

    if (max_hop_count <= 2 && quality >= 0.6) || quality >= 0.5 {
        return BackhaulTier::Fair;
    }
    if quality < 0.5 || max_hop_count > 3 {
        return BackhaulTier::Poor;
    }
    BackhaulTier::Critical
}
