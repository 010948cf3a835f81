// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::error::{NetKitError, Result};

/// One `(timestamp, value)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub timestamp_ms: i64,
    pub value: f64,
}

/// An ordered sequence of samples for a single named metric. Timestamps
/// are strictly non-decreasing and every value is finite; both are
/// enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub metric_name: String,
    data_points: Vec<DataPoint>,
}

impl TimeSeries {
    pub fn new(metric_name: impl Into<String>, data_points: Vec<DataPoint>) -> Result<Self> {
        for point in &data_points {
            if !point.value.is_finite() {
                return Err(NetKitError::invalid("data_points", "all values must be finite"));
            }
        }
        for pair in data_points.windows(2) {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                return Err(NetKitError::invalid("data_points", "timestamps must be non-decreasing"));
            }
        }
        Ok(TimeSeries { metric_name: metric_name.into(), data_points })
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.data_points.iter().map(|p| p.value).collect()
    }
}

/// A single RF measurement at a location, for spatial interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPoint {
    pub x: f64,
    pub y: f64,
    pub rssi: i32,
    pub timestamp_ms: i64,
}

impl ScanPoint {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_value() {
        let points = vec![DataPoint { timestamp_ms: 0, value: f64::NAN }];
        assert!(TimeSeries::new("rssi", points).is_err());
    }

    #[test]
    fn rejects_decreasing_timestamps() {
        let points = vec![
            DataPoint { timestamp_ms: 10, value: 1.0 },
            DataPoint { timestamp_ms: 5, value: 2.0 },
        ];
        assert!(TimeSeries::new("rssi", points).is_err());
    }

    #[test]
    fn accepts_equal_timestamps() {
        let points = vec![
            DataPoint { timestamp_ms: 10, value: 1.0 },
            DataPoint { timestamp_ms: 10, value: 2.0 },
        ];
        assert!(TimeSeries::new("rssi", points).is_ok());
    }
}
