// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::graph::SpanningTree;
use crate::topology::{MeshLink, MeshTopology};

#[derive(Debug, Clone, PartialEq)]
pub struct BottleneckLink {
    pub from: String,
    pub to: String,
    pub impact: f64,
}

fn is_bottleneck(link: &MeshLink) -> bool {
    link.throughput_mbps < 100.0 || link.quality < 0.5 || link.latency_ms > 20.0 || link.flagged
}

/// The "downstream" side of a link is the endpoint farther from the
/// fabric's root in the spanning tree; its subtree is what the link
/// carries traffic for.
fn downstream_side<'a>(tree: &SpanningTree, link: &'a MeshLink) -> &'a str {
    let from_depth = tree.depth.get(&link.from).copied().unwrap_or(0);
    let to_depth = tree.depth.get(&link.to).copied().unwrap_or(0);
    if to_depth >= from_depth {
        &link.to
    } else {
        &link.from
    }
}

/// Detects bottleneck links and ranks them by impact. Impact
/// combines the fraction of the fabric downstream of the link with the
/// link's own quality shortfall.
pub fn detect_bottlenecks(topology: &MeshTopology) -> Vec<BottleneckLink> {
    let total = topology.nodes.len().max(1);
    let tree = SpanningTree::build(topology);

    let mut bottlenecks: Vec<BottleneckLink> = topology
        .links
        .iter()
        .filter(|l| is_bottleneck(l))
        .map(|l| {
            let downstream = tree.as_ref().map(|t| t.subtree_size(downstream_side(t, l))).unwrap_or(1);
            let impact = 0.6 * (downstream as f64 / total as f64) + 0.4 * (1.0 - l.quality);
            BottleneckLink { from: l.from.clone(), to: l.to.clone(), impact }
        })
        .collect();

    bottlenecks.sort_by(|a, b| b.impact.partial_cmp(&a.impact).unwrap_or(std::cmp::Ordering::Equal));
    bottlenecks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::MeshNode;

    fn node(id: &str, is_root: bool) -> MeshNode {
        MeshNode { id: id.to_string(), is_root, is_wired: false }
    }

    fn link(from: &str, to: &str, quality: f64, throughput: f64, latency: f64) -> MeshLink {
        MeshLink { from: from.to_string(), to: to.to_string(), quality, throughput_mbps: throughput, latency_ms: latency, flagged: false }
    }

    #[test]
    fn weak_link_to_large_subtree_ranks_first() {
        let topo = MeshTopology::new(
            vec![node("root", true), node("a", false), node("b", false), node("c", false)],
            vec![
                link("root", "a", 0.3, 50.0, 5.0),
                link("a", "b", 0.95, 600.0, 2.0),
                link("a", "c", 0.95, 600.0, 2.0),
            ],
        ).unwrap();
        let bottlenecks = detect_bottlenecks(&topo);
        assert_eq!(bottlenecks.len(), 1);
        assert_eq!(bottlenecks[0].from, "root");
        assert_eq!(bottlenecks[0].to, "a");
    }

    #[test]
    fn healthy_links_are_not_bottlenecks() {
        let topo = MeshTopology::new(vec![node("root", true), node("a", false)], vec![link("root", "a", 0.95, 600.0, 2.0)]).unwrap();
        assert!(detect_bottlenecks(&topo).is_empty());
    }
}
