// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::{ColorScheme, HexColor};
use netkit_model::error::{NetKitError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: HexColor,
}

impl BarChartData {
    pub fn new(categories: Vec<String>, values: Vec<f64>, color: HexColor) -> Result<Self> {
        if categories.is_empty() {
            return Err(NetKitError::invalid("categories", "must be non-empty"));
        }
        if categories.len() != values.len() {
            return Err(NetKitError::invalid("values", "must match categories length"));
        }
        Ok(BarChartData { categories, values, color })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    pub fn new(labeled_values: Vec<(String, f64)>, scheme: ColorScheme) -> Result<Self> {
        if labeled_values.is_empty() {
            return Err(NetKitError::invalid("labeled_values", "must be non-empty"));
        }
        if labeled_values.iter().any(|(_, v)| *v < 0.0) {
            return Err(NetKitError::invalid("labeled_values", "slice values must be non-negative"));
        }
        let slices = labeled_values
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| PieSlice { label, value, color: scheme.color_for_index(i) })
            .collect();
        Ok(PieChartData { slices })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlotData {
    pub points: Vec<(f64, f64)>,
    pub color: HexColor,
}

impl ScatterPlotData {
    pub fn new(points: Vec<(f64, f64)>, color: HexColor) -> Result<Self> {
        if points.is_empty() {
            return Err(NetKitError::invalid("points", "must be non-empty"));
        }
        Ok(ScatterPlotData { points, color })
    }
}

/// The five-number summary behind a single box-plot glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotData {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxPlotData {
    pub fn new(min: f64, q1: f64, median: f64, q3: f64, max: f64) -> Result<Self> {
        if !(min <= q1 && q1 <= median && median <= q3 && q3 <= max) {
            return Err(NetKitError::invalid("quintiles", "must satisfy min <= q1 <= median <= q3 <= max"));
        }
        Ok(BoxPlotData { min, q1, median, q3, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_requires_matching_lengths() {
        let color = HexColor::new("#123456").unwrap();
        assert!(BarChartData::new(vec!["a".to_string()], vec![1.0, 2.0], color).is_err());
    }

    #[test]
    fn pie_chart_rejects_negative_slice() {
        let result = PieChartData::new(vec![("a".to_string(), -1.0)], ColorScheme::Default);
        assert!(result.is_err());
    }

    #[test]
    fn box_plot_rejects_out_of_order_quintiles() {
        assert!(BoxPlotData::new(5.0, 1.0, 2.0, 3.0, 4.0).is_err());
    }

    #[test]
    fn box_plot_accepts_ordered_quintiles() {
        assert!(BoxPlotData::new(1.0, 2.0, 3.0, 4.0, 5.0).is_ok());
    }
}
