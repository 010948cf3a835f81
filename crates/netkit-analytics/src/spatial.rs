// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::ScanPoint;
use std::collections::BTreeMap;

const DEFAULT_NO_SIGNAL_RSSI_DBM: f64 = -100.0;

/// `NEAREST_NEIGHBOR(p)`: the RSSI of the closest scan point,
/// or a default of -100 dBm when there are none to interpolate from.
pub fn nearest_neighbor(x: f64, y: f64, scans: &[ScanPoint]) -> f64 {
    scans
        .iter()
        .min_by(|a, b| a.distance_to(x, y).partial_cmp(&b.distance_to(x, y)).unwrap_or(std::cmp::Ordering::Equal))
        .map(|p| f64::from(p.rssi))
        .unwrap_or(DEFAULT_NO_SIGNAL_RSSI_DBM)
}

/// `BILINEAR(p)`: inverse-distance weighting over the 4
/// nearest scan points, with `1/(d+0.001)` weights to avoid division by
/// zero at coincident points.
pub fn bilinear(x: f64, y: f64, scans: &[ScanPoint]) -> f64 {
    if scans.is_empty() {
        return DEFAULT_NO_SIGNAL_RSSI_DBM;
    }
    let mut by_distance: Vec<&ScanPoint> = scans.iter().collect();
    by_distance.sort_by(|a, b| a.distance_to(x, y).partial_cmp(&b.distance_to(x, y)).unwrap_or(std::cmp::Ordering::Equal));
    by_distance.truncate(4);

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for point in by_distance {
        let weight = 1.0 / (point.distance_to(x, y) + 0.001);
        weighted_sum += weight * f64::from(point.rssi);
        weight_total += weight;
    }
    weighted_sum / weight_total
}

pub const DEFAULT_IDW_POWER: f64 = 2.0;
pub const DEFAULT_IDW_MAX_DIST_M: f64 = 50.0;

/// `IDW(p, power, maxDist)`: inverse-distance-weighted mean
/// over scans within `max_dist`. A scan within 1cm of `p` short-circuits
/// to that scan's exact RSSI.
pub fn idw(x: f64, y: f64, scans: &[ScanPoint], power: f64, max_dist: f64) -> f64 {
    let in_range: Vec<&ScanPoint> = scans.iter().filter(|p| p.distance_to(x, y) <= max_dist).collect();
    if in_range.is_empty() {
        return DEFAULT_NO_SIGNAL_RSSI_DBM;
    }
    if let Some(coincident) = in_range.iter().find(|p| p.distance_to(x, y) < 0.01) {
        return f64::from(coincident.rssi);
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for point in in_range {
        let weight = 1.0 / point.distance_to(x, y).powf(power);
        weighted_sum += weight * f64::from(point.rssi);
        weight_total += weight;
    }
    weighted_sum / weight_total
}

/// `KRIGING`, documented as currently equivalent to IDW — a
/// preserved approximation, not a distinct semivariogram model.
pub fn kriging(x: f64, y: f64, scans: &[ScanPoint], power: f64, max_dist: f64) -> f64 {
    idw(x, y, scans, power, max_dist)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Heatmap grid dimensions for a region of `bounds` sampled at
/// `resolution` (distance units per cell).
pub fn heatmap_grid_dimensions(bounds: Bounds, resolution: f64) -> (usize, usize) {
    let width = (1.0_f64).max((bounds.width / resolution).ceil()) as usize;
    let height = (1.0_f64).max((bounds.height / resolution).ceil()) as usize;
    (width, height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CoverageLevel {
    NoSignal,
    VeryPoor,
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageThresholds {
    pub excellent_dbm: i32,
    pub good_dbm: i32,
    pub fair_dbm: i32,
    pub poor_dbm: i32,
    pub very_poor_dbm: i32,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        CoverageThresholds { excellent_dbm: -50, good_dbm: -60, fair_dbm: -70, poor_dbm: -80, very_poor_dbm: -90 }
    }
}

pub fn classify_coverage(rssi: f64, thresholds: &CoverageThresholds) -> CoverageLevel {
    if rssi >= f64::from(thresholds.excellent_dbm) {
        CoverageLevel::Excellent
    } else if rssi >= f64::from(thresholds.good_dbm) {
        CoverageLevel::Good
    } else if rssi >= f64::from(thresholds.fair_dbm) {
        CoverageLevel::Fair
    } else if rssi >= f64::from(thresholds.poor_dbm) {
        CoverageLevel::Poor
    } else if rssi >= f64::from(thresholds.very_poor_dbm) {
        CoverageLevel::VeryPoor
    } else {
        CoverageLevel::NoSignal
    }
}

/// Coverage-quality percentages across a grid of cell RSSI values.
pub fn categorize_coverage(cell_rssi: &[f64], thresholds: &CoverageThresholds) -> BTreeMap<CoverageLevel, f64> {
    if cell_rssi.is_empty() {
        return BTreeMap::new();
    }
    let mut counts: BTreeMap<CoverageLevel, usize> = BTreeMap::new();
    for &rssi in cell_rssi {
        *counts.entry(classify_coverage(rssi, thresholds)).or_insert(0) += 1;
    }
    counts.into_iter().map(|(level, count)| (level, 100.0 * count as f64 / cell_rssi.len() as f64)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(x: f64, y: f64, rssi: i32) -> ScanPoint {
        ScanPoint { x, y, rssi, timestamp_ms: 0 }
    }

    #[test]
    fn nearest_neighbor_picks_closest_point() {
        let scans = vec![scan(0.0, 0.0, -40), scan(10.0, 10.0, -80)];
        assert_eq!(nearest_neighbor(1.0, 1.0, &scans), -40.0);
    }

    #[test]
    fn nearest_neighbor_defaults_when_empty() {
        assert_eq!(nearest_neighbor(0.0, 0.0, &[]), DEFAULT_NO_SIGNAL_RSSI_DBM);
    }

    #[test]
    fn idw_short_circuits_on_coincident_scan() {
        let scans = vec![scan(5.0, 5.0, -55), scan(50.0, 50.0, -90)];
        assert_eq!(idw(5.0, 5.0, &scans, DEFAULT_IDW_POWER, DEFAULT_IDW_MAX_DIST_M), -55.0);
    }

    #[test]
    fn idw_ignores_scans_beyond_max_dist() {
        let scans = vec![scan(0.0, 0.0, -40)];
        assert_eq!(idw(1000.0, 1000.0, &scans, DEFAULT_IDW_POWER, DEFAULT_IDW_MAX_DIST_M), DEFAULT_NO_SIGNAL_RSSI_DBM);
    }

    #[test]
    fn kriging_matches_idw() {
        let scans = vec![scan(0.0, 0.0, -40), scan(10.0, 0.0, -60)];
        assert_eq!(
            kriging(5.0, 0.0, &scans, DEFAULT_IDW_POWER, DEFAULT_IDW_MAX_DIST_M),
            idw(5.0, 0.0, &scans, DEFAULT_IDW_POWER, DEFAULT_IDW_MAX_DIST_M)
        );
    }

    #[test]
    fn grid_dimensions_round_up() {
        assert_eq!(heatmap_grid_dimensions(Bounds { width: 21.0, height: 5.0 }, 10.0), (3, 1));
    }

    #[test]
    fn coverage_percentages_sum_to_one_hundred() {
        let thresholds = CoverageThresholds::default();
        let percentages = categorize_coverage(&[-45.0, -55.0, -65.0, -95.0], &thresholds);
        let total: f64 = percentages.values().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
