// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::error::{NetKitError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// One node in a mesh fabric, identified by a caller-assigned string id
/// (typically a BSSID or serial number).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub id: String,
    pub is_root: bool,
    pub is_wired: bool,
}

/// A backhaul link between two nodes. Links are undirected; `from`/`to`
/// carry no directionality beyond identifying the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshLink {
    pub from: String,
    pub to: String,
    pub quality: f64,
    pub throughput_mbps: f64,
    pub latency_ms: f64,
    pub flagged: bool,
}

/// A mesh fabric: nodes plus the links between them, treated as an
/// undirected graph by every engine in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTopology {
    pub nodes: Vec<MeshNode>,
    pub links: Vec<MeshLink>,
}

impl MeshTopology {
    pub fn new(nodes: Vec<MeshNode>, links: Vec<MeshLink>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(NetKitError::invalid("nodes", "topology must have at least one node"));
        }
        let ids: BTreeSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        for link in &links {
            if !ids.contains(link.from.as_str()) || !ids.contains(link.to.as_str()) {
                return Err(NetKitError::invalid("links", "must reference declared node ids"));
            }
        }
        Ok(MeshTopology { nodes, links })
    }

    pub fn roots(&self) -> Vec<&MeshNode> {
        self.nodes.iter().filter(|n| n.is_root).collect()
    }

    pub fn root_count(&self) -> usize {
        self.roots().len()
    }

    pub fn node(&self, id: &str) -> Option<&MeshNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Undirected adjacency, node id -> neighbor ids, in insertion order
    /// per node (a `BTreeMap` only for deterministic key iteration; the
    /// neighbor lists themselves preserve link-declaration order).
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        let mut adj: BTreeMap<String, Vec<String>> = self.nodes.iter().map(|n| (n.id.clone(), Vec::new())).collect();
        for link in &self.links {
            adj.entry(link.from.clone()).or_default().push(link.to.clone());
            adj.entry(link.to.clone()).or_default().push(link.from.clone());
        }
        adj
    }

    pub fn node_ids(&self) -> BTreeSet<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn link_between(&self, a: &str, b: &str) -> Option<&MeshLink> {
        self.links.iter().find(|l| (l.from == a && l.to == b) || (l.from == b && l.to == a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, is_root: bool) -> MeshNode {
        MeshNode { id: id.to_string(), is_root, is_wired: false }
    }

    fn link(from: &str, to: &str) -> MeshLink {
        MeshLink { from: from.to_string(), to: to.to_string(), quality: 0.9, throughput_mbps: 500.0, latency_ms: 2.0, flagged: false }
    }

    #[test]
    fn adjacency_is_undirected() {
        let topo = MeshTopology::new(vec![node("root", true), node("leaf", false)], vec![link("root", "leaf")]).unwrap();
        let adj = topo.adjacency();
        assert_eq!(adj["root"], vec!["leaf".to_string()]);
        assert_eq!(adj["leaf"], vec!["root".to_string()]);
    }

    #[test]
    fn root_count_reflects_multiple_roots() {
        let topo = MeshTopology::new(vec![node("root1", true), node("root2", true), node("leaf", false)], vec![]).unwrap();
        assert_eq!(topo.root_count(), 2);
    }
}
