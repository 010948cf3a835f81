// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::error::{NetKitError, Result};
use netkit_model::{Band, ChannelWidth};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelOccupancy {
    pub channel: u16,
    pub width: ChannelWidth,
    pub utilization_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDiagramData {
    pub band: Band,
    pub channels: Vec<ChannelOccupancy>,
}

impl ChannelDiagramData {
    pub fn new(band: Band, channels: Vec<ChannelOccupancy>) -> Result<Self> {
        if channels.is_empty() {
            return Err(NetKitError::invalid("channels", "must be non-empty"));
        }
        if channels.iter().any(|c| !(0.0..=100.0).contains(&c.utilization_pct)) {
            return Err(NetKitError::invalid("channels", "utilization_pct must be within 0..=100"));
        }
        Ok(ChannelDiagramData { band, channels })
    }
}
