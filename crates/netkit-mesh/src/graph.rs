// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::topology::MeshTopology;
use std::collections::{BTreeMap, BTreeSet};

/// A BFS spanning tree rooted at the topology's first `ROOT` node (or, if
/// none is marked, the first node declared). Used to compute hop counts
/// and downstream-node counts for bottleneck and self-healing analysis.
pub struct SpanningTree {
    pub parent: BTreeMap<String, String>,
    pub children: BTreeMap<String, Vec<String>>,
    pub depth: BTreeMap<String, usize>,
}

impl SpanningTree {
    pub fn build(topology: &MeshTopology) -> Option<Self> {
        let root = topology.roots().first().map(|n| n.id.clone()).or_else(|| topology.nodes.first().map(|n| n.id.clone()))?;
        let adj = topology.adjacency();

        let mut parent = BTreeMap::new();
        let mut children: BTreeMap<String, Vec<String>> = topology.nodes.iter().map(|n| (n.id.clone(), Vec::new())).collect();
        let mut depth = BTreeMap::new();
        let mut visited = BTreeSet::new();

        let mut queue = std::collections::VecDeque::new();
        queue.push_back(root.clone());
        visited.insert(root.clone());
        depth.insert(root.clone(), 0);

        while let Some(current) = queue.pop_front() {
            let current_depth = depth[&current];
            if let Some(neighbors) = adj.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        parent.insert(neighbor.clone(), current.clone());
                        children.get_mut(&current).unwrap().push(neighbor.clone());
                        depth.insert(neighbor.clone(), current_depth + 1);
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        Some(SpanningTree { parent, children, depth })
    }

    pub fn max_hop_count(&self) -> usize {
        self.depth.values().copied().max().unwrap_or(0)
    }

    /// Size (inclusive) of the subtree rooted at `id`, i.e. the number of
    /// nodes that become unreachable from the root if `id` is removed.
    pub fn subtree_size(&self, id: &str) -> usize {
        1 + self.children.get(id).map(|kids| kids.iter().map(|c| self.subtree_size(c)).sum()).unwrap_or(0)
    }
}

/// A structural finding from the loop-detection traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopFinding {
    /// A back-edge was found during the undirected DFS: these node ids,
    /// in traversal order, form (or close) a cycle.
    SimpleCycle(Vec<String>),
    /// More than one `ROOT` node exists, providing redundant paths.
    RedundantPaths(Vec<String>),
}

/// Undirected DFS with recursion-stack tracking, skipping the edge back
/// to the immediate traversal parent. Any other edge into an
/// already-on-stack node is a back-edge and reports a `SimpleCycle`.
pub fn detect_loops(topology: &MeshTopology) -> Vec<LoopFinding> {
    let adj = topology.adjacency();
    let mut findings = Vec::new();
    let mut visited = BTreeSet::new();

    for node in &topology.nodes {
        if visited.contains(&node.id) {
            continue;
        }
        let mut stack = Vec::new();
        dfs_visit(&node.id, None, &adj, &mut visited, &mut stack, &mut findings);
    }

    let roots = topology.roots();
    if roots.len() > 1 {
        findings.push(LoopFinding::RedundantPaths(roots.iter().map(|n| n.id.clone()).collect()));
    }

    findings
}

fn dfs_visit(
    node: &str,
    parent: Option<&str>,
    adj: &BTreeMap<String, Vec<String>>,
    visited: &mut BTreeSet<String>,
    stack: &mut Vec<String>,
    findings: &mut Vec<LoopFinding>,
) {
    visited.insert(node.to_string());
    stack.push(node.to_string());

    if let Some(neighbors) = adj.get(node) {
        for neighbor in neighbors {
            if Some(neighbor.as_str()) == parent {
                continue;
            }
            if stack.contains(neighbor) {
                findings.push(LoopFinding::SimpleCycle(stack.clone()));
            } else if !visited.contains(neighbor) {
                dfs_visit(neighbor, Some(node), adj, visited, stack, findings);
            }
        }
    }

    stack.pop();
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
    fn tree_topology_has_no_cycle() {
        let topo = MeshTopology::new(
            vec![node("root", true), node("a", false), node("b", false)],
            vec![link("root", "a"), link("root", "b")],
        ).unwrap();
        let findings = detect_loops(&topo);
        assert!(findings.is_empty());
    }

    #[test]
    fn triangle_reports_simple_cycle() {
        let topo = MeshTopology::new(
            vec![node("root", true), node("a", false), node("b", false)],
            vec![link("root", "a"), link("a", "b"), link("b", "root")],
        ).unwrap();
        let findings = detect_loops(&topo);
        assert!(findings.iter().any(|f| matches!(f, LoopFinding::SimpleCycle(_))));
    }

    #[test]
    fn two_roots_report_redundant_paths() {
        let topo = MeshTopology::new(
            vec![node("root1", true), node("root2", true), node("leaf", false)],
            vec![link("root1", "leaf"), link("root2", "leaf")],
        ).unwrap();
        let findings = detect_loops(&topo);
        assert!(findings.iter().any(|f| matches!(f, LoopFinding::RedundantPaths(_))));
    }

    #[test]
    fn subtree_size_counts_descendants_inclusive() {
        let topo = MeshTopology::new(
            vec![node("root", true), node("a", false), node("b", false)],
            vec![link("root", "a"), link("a", "b")],
        ).unwrap();
        let tree = SpanningTree::build(&topo).unwrap();
        assert_eq!(tree.subtree_size("a"), 2);
        assert_eq!(tree.subtree_size("root"), 3);
        assert_eq!(tree.max_hop_count(), 2);
    }
}
