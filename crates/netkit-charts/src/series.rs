// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::{ColorScheme, HexColor};
use netkit_model::error::{NetKitError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartData {
    pub name: String,
    pub points: Vec<Point>,
    pub color: HexColor,
}

impl LineChartData {
    pub fn new(name: impl Into<String>, points: Vec<Point>, color: HexColor) -> Result<Self> {
        if points.is_empty() {
            return Err(NetKitError::invalid("points", "series must be non-empty"));
        }
        Ok(LineChartData { name: name.into(), points, color })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaChartData {
    pub name: String,
    pub points: Vec<Point>,
    pub baseline: f64,
    pub color: HexColor,
}

impl AreaChartData {
    pub fn new(name: impl Into<String>, points: Vec<Point>, baseline: f64, color: HexColor) -> Result<Self> {
        if points.is_empty() {
            return Err(NetKitError::invalid("points", "series must be non-empty"));
        }
        Ok(AreaChartData { name: name.into(), points, baseline, color })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeriesChartData {
    pub series: Vec<LineChartData>,
}

impl MultiSeriesChartData {
    /// Builds a multi-series chart, assigning each series a color from
    /// `scheme` in declaration order (cycling past the palette's length).
    pub fn new(named_series: Vec<(String, Vec<Point>)>, scheme: ColorScheme) -> Result<Self> {
        if named_series.is_empty() {
            return Err(NetKitError::invalid("named_series", "must contain at least one series"));
        }
        let series = named_series
            .into_iter()
            .enumerate()
            .map(|(i, (name, points))| LineChartData::new(name, points, scheme.color_for_index(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiSeriesChartData { series })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_series() {
        let color = HexColor::new("#000000").unwrap();
        assert!(LineChartData::new("rssi", vec![], color).is_err());
    }

    #[test]
    fn multi_series_cycles_palette() {
        let series = (0..7).map(|i| (format!("s{i}"), vec![Point { x: 0.0, y: 0.0 }])).collect();
        let chart = MultiSeriesChartData::new(series, ColorScheme::Default).unwrap();
        assert_eq!(chart.series.len(), 7);
        assert_eq!(chart.series[0].color, chart.series[5].color);
    }
}
