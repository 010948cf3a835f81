// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::stats_util::{mean, std_dev};
use netkit_model::error::{NetKitError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Sturges-rule bin count, `ceil(1 + log2(n))`.
fn sturges_bin_count(n: usize) -> usize {
    (1.0 + (n as f64).log2()).ceil().max(1.0) as usize
}

/// Builds a histogram over `values`. A `None` bin count falls
/// back to the Sturges rule; a constant-valued series gets a single
/// unit-width bin centered on the value.
pub fn build_histogram(values: &[f64], bin_count: Option<usize>) -> Result<Histogram> {
    if values.is_empty() {
        return Err(NetKitError::insufficient("build_histogram", 1, 0));
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        let edges = vec![min - 0.5, min + 0.5];
        return Ok(Histogram { bin_edges: edges, counts: vec![values.len()] });
    }

    let bins = bin_count.unwrap_or_else(|| sturges_bin_count(values.len()));
    let width = (max - min) / bins as f64;
    let bin_edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { bin_edges, counts })
}

/// Gaussian-kernel density estimate with Silverman's rule-of-thumb
/// bandwidth, evaluated over an extended data range.
pub struct KernelDensityEstimate {
    pub bandwidth: f64,
    pub eval_points: Vec<f64>,
    pub density: Vec<f64>,
}

fn interquartile_range(sorted: &[f64]) -> f64 {
    let q1 = percentile(sorted, 25.0);
    let q3 = percentile(sorted, 75.0);
    q3 - q1
}

/// Linear-interpolation percentile over an already-sorted slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

fn silverman_bandwidth(values: &[f64], sorted: &[f64]) -> f64 {
    let sigma = std_dev(values);
    let iqr = interquartile_range(sorted);
    let spread = if iqr > 0.0 { sigma.min(iqr / 1.34) } else { sigma };
    0.9 * spread * (values.len() as f64).powf(-1.0 / 5.0)
}

fn gaussian_kernel(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

pub fn estimate_density(values: &[f64], resolution: usize) -> Result<KernelDensityEstimate> {
    if values.len() < 2 {
        return Err(NetKitError::insufficient("estimate_density", 2, values.len()));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let bandwidth = silverman_bandwidth(values, &sorted).max(1e-9);
    let min = sorted[0];
    let max = *sorted.last().unwrap();
    let range = (max - min).max(1e-9);
    let lo = min - 0.1 * range;
    let hi = max + 0.1 * range;

    let eval_points: Vec<f64> = (0..resolution)
        .map(|i| lo + (hi - lo) * i as f64 / (resolution.max(2) - 1) as f64)
        .collect();

    let n = values.len() as f64;
    let density = eval_points
        .iter()
        .map(|&x| values.iter().map(|&xi| gaussian_kernel((x - xi) / bandwidth)).sum::<f64>() / (n * bandwidth))
        .collect();

    Ok(KernelDensityEstimate { bandwidth, eval_points, density })
}

/// IQR-rule outlier indices. Requires at least 4 samples.
pub fn detect_outliers(values: &[f64], k: f64) -> Result<Vec<usize>> {
    if values.len() < 4 {
        return Err(NetKitError::insufficient("detect_outliers", 4, values.len()));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower = q1 - k * iqr;
    let upper = q3 + k * iqr;

    Ok(values.iter().enumerate().filter(|(_, &v)| v < lower || v > upper).map(|(i, _)| i).collect())
}

pub const DEFAULT_OUTLIER_MULTIPLIER: f64 = 1.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_series_gets_single_unit_bin() {
        let hist = build_histogram(&[5.0, 5.0, 5.0], None).unwrap();
        assert_eq!(hist.counts, vec![3]);
        assert_eq!(hist.bin_edges, vec![4.5, 5.5]);
    }

    #[test]
    fn sturges_rule_bin_count() {
        assert_eq!(sturges_bin_count(16), 5);
        assert_eq!(sturges_bin_count(1), 1);
    }

    #[test]
    fn obvious_outlier_detected() {
        let mut values = vec![10.0, 11.0, 12.0, 9.0, 10.0, 11.0];
        values.push(1000.0);
        let outliers = detect_outliers(&values, DEFAULT_OUTLIER_MULTIPLIER).unwrap();
        assert_eq!(outliers, vec![6]);
    }

    #[test]
    fn too_few_samples_errors() {
        assert!(detect_outliers(&[1.0, 2.0], DEFAULT_OUTLIER_MULTIPLIER).is_err());
    }

    #[test]
    fn kde_bandwidth_is_positive() {
        let values = vec![1.0, 2.0, 2.0, 3.0, 4.0, 10.0];
        let kde = estimate_density(&values, 50).unwrap();
        assert!(kde.bandwidth > 0.0);
        assert_eq!(kde.eval_points.len(), 50);
        assert_eq!(kde.density.len(), 50);
    }
}
