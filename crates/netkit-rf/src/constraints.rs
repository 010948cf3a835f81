// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{Band, ChannelWidth};

/// Tunable constraints the channel planner operates under.
#[derive(Debug, Clone)]
pub struct ChannelPlanningConstraints {
    pub band: Band,
    pub preferred_width: Option<ChannelWidth>,
    pub preferred_widths: Vec<ChannelWidth>,
    pub allow_dfs: bool,
    pub allows_40mhz_in_2_4ghz: bool,
    pub max_ap_count_per_channel: usize,
}

impl Default for ChannelPlanningConstraints {
    fn default() -> Self {
        ChannelPlanningConstraints {
            band: Band::Band5GHz,
            preferred_width: None,
            preferred_widths: Vec::new(),
            allow_dfs: false,
            allows_40mhz_in_2_4ghz: false,
            max_ap_count_per_channel: usize::MAX,
        }
    }
}
