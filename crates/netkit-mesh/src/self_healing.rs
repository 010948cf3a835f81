// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::graph::SpanningTree;
use crate::topology::MeshTopology;

#[derive(Debug, Clone, PartialEq)]
pub enum FailureScenario {
    SingleNodeFailure(String),
    SingleLinkFailure(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailureImpact {
    pub scenario: FailureScenario,
    pub recoverable: bool,
    pub service_impact: f64,
    pub recovery_time_secs: Option<f64>,
}

/// Simulates one failure scenario against a fabric.
/// `has_redundancy` reflects whether [`crate::graph::detect_loops`] found
/// a back-edge or multiple roots covering the failed element — recovery
/// analysis does not re-derive it, since the caller already ran loop
/// detection and can reuse its result.
pub fn analyze_failure(topology: &MeshTopology, scenario: &FailureScenario, has_redundancy: bool) -> FailureImpact {
    let total = topology.nodes.len().max(1);
    let tree = SpanningTree::build(topology);

    match scenario {
        FailureScenario::SingleNodeFailure(id) => {
            let is_root = topology.node(id).map(|n| n.is_root).unwrap_or(false);
            let recoverable = if is_root { topology.root_count() > 1 } else { has_redundancy };

            let downstream_fraction = tree.as_ref().map(|t| t.subtree_size(id) as f64 / total as f64).unwrap_or(0.0);
            let severity = if recoverable { 0.5 } else { 1.0 };
            let service_impact = downstream_fraction * severity;

            FailureImpact {
                scenario: scenario.clone(),
                recoverable,
                service_impact,
                recovery_time_secs: recoverable.then_some(60.0),
            }
        }
        FailureScenario::SingleLinkFailure(a, b) => {
            let recoverable = has_redundancy;
            let downstream_fraction = tree
                .as_ref()
                .map(|t| {
                    let depth_a = t.depth.get(a).copied().unwrap_or(0);
                    let depth_b = t.depth.get(b).copied().unwrap_or(0);
                    let child = if depth_b >= depth_a { b } else { a };
                    t.subtree_size(child) as f64 / total as f64
                })
                .unwrap_or(0.0);
            let severity = if recoverable { 0.3 } else { 1.0 };
            let service_impact = downstream_fraction * severity;

            FailureImpact {
                scenario: scenario.clone(),
                recoverable,
                service_impact,
                recovery_time_secs: recoverable.then_some(30.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{MeshLink, MeshNode};

    fn node(id: &str, is_root: bool) -> MeshNode {
        MeshNode { id: id.to_string(), is_root, is_wired: false }
    }

    fn link(from: &str, to: &str) -> MeshLink {
        MeshLink { from: from.to_string(), to: to.to_string(), quality: 0.9, throughput_mbps: 500.0, latency_ms: 2.0, flagged: false }
    }

    #[test]
    fn single_root_node_failure_is_unrecoverable_without_redundancy() {
        let topo = MeshTopology::new(vec![node("root", true), node("a", false)], vec![link("root", "a")]).unwrap();
        let impact = analyze_failure(&topo, &FailureScenario::SingleNodeFailure("root".to_string()), false);
        assert!(!impact.recoverable);
        assert_eq!(impact.service_impact, 1.0);
        assert_eq!(impact.recovery_time_secs, None);
    }

    #[test]
    fn dual_root_node_failure_is_recoverable() {
        let topo = MeshTopology::new(
            vec![node("root1", true), node("root2", true), node("a", false)],
            vec![link("root1", "a"), link("root2", "a")],
        ).unwrap();
        let impact = analyze_failure(&topo, &FailureScenario::SingleNodeFailure("root1".to_string()), false);
        assert!(impact.recoverable);
        assert_eq!(impact.recovery_time_secs, Some(60.0));
    }

    #[test]
    fn link_failure_with_redundancy_uses_reduced_severity() {
        let topo = MeshTopology::new(
            vec![node("root", true), node("a", false), node("b", false)],
            vec![link("root", "a"), link("a", "b")],
        ).unwrap();
        let impact = analyze_failure(&topo, &FailureScenario::SingleLinkFailure("a".to_string(), "b".to_string()), true);
        assert!(impact.recoverable);
        assert_eq!(impact.recovery_time_secs, Some(30.0));
        assert!((impact.service_impact - 0.3 * (1.0 / 3.0)).abs() < 1e-9);
    }
}
