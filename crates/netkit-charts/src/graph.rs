// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::error::{NetKitError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphData {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl GraphData {
    /// A node/edge diagram — a mesh topology or correlation network —
    /// rendered generically. Every edge must reference declared nodes.
    pub fn new(nodes: Vec<String>, edges: Vec<(String, String)>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(NetKitError::invalid("nodes", "must be non-empty"));
        }
        for (a, b) in &edges {
            if !nodes.contains(a) || !nodes.contains(b) {
                return Err(NetKitError::invalid("edges", "must reference declared nodes"));
            }
        }
        Ok(GraphData { nodes, edges })
    }
}
