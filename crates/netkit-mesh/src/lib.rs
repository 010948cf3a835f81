// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Mesh analyzer (C6): backhaul quality rating, bottleneck-link ranking,
//! loop detection, and self-healing failure simulation over a mesh
//! fabric's node/link topology.

pub mod backhaul;
pub mod bottleneck;
pub mod graph;
pub mod self_healing;
pub mod topology;

pub use backhaul::{backhaul_quality, BackhaulTier};
pub use bottleneck::{detect_bottlenecks, BottleneckLink};
pub use graph::{detect_loops, LoopFinding, SpanningTree};
pub use self_healing::{analyze_failure, FailureImpact, FailureScenario};
pub use topology::{MeshLink, MeshNode, MeshTopology};
