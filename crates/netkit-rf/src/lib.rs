// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! RF optimization engine (C4): plans channel assignments and channel
//! widths across a multi-AP cluster, respecting regulatory and DFS
//! constraints.

pub mod constraints;
pub mod dfs;
pub mod plan;
pub mod scoring;
pub mod width;

pub use constraints::ChannelPlanningConstraints;
pub use dfs::{assess_radar_risk, DfsRisk};
pub use plan::{plan_channels, ChannelAssignment, ChannelPlan};
pub use scoring::channel_score;
pub use width::{optimize_width, WidthRecommendation};
