// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::error::{NetKitError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapData {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<f64>,
}

impl HeatmapData {
    pub fn new(width: usize, height: usize, cells: Vec<f64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(NetKitError::invalid("dimensions", "width and height must be non-zero"));
        }
        if cells.len() != width * height {
            return Err(NetKitError::invalid("cells", "length must equal width * height"));
        }
        Ok(HeatmapData { width, height, cells })
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }
}
