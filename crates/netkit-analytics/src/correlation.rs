// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::stats_util::{mean, rank, std_dev, two_tailed_p_from_z, variance};
use netkit_model::error::{NetKitError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
    Kendall,
}

impl CorrelationMethod {
    fn min_sample_size(self) -> usize {
        match self {
            CorrelationMethod::Pearson => 10,
            CorrelationMethod::Spearman => 10,
            CorrelationMethod::Kendall => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CorrelationStrength {
    Negligible,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    fn from_magnitude(abs_r: f64) -> Self {
        if abs_r >= 0.9 {
            CorrelationStrength::VeryStrong
        } else if abs_r >= 0.7 {
            CorrelationStrength::Strong
        } else if abs_r >= 0.5 {
            CorrelationStrength::Moderate
        } else if abs_r >= 0.3 {
            CorrelationStrength::Weak
        } else if abs_r >= 0.1 {
            CorrelationStrength::VeryWeak
        } else {
            CorrelationStrength::Negligible
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationDirection {
    Positive,
    Negative,
    Flat,
}

impl CorrelationDirection {
    fn from_coefficient(r: f64) -> Self {
        if r > 0.1 {
            CorrelationDirection::Positive
        } else if r < -0.1 {
            CorrelationDirection::Negative
        } else {
            CorrelationDirection::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult {
    pub coefficient: f64,
    pub p_value: f64,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if variance(x) == 0.0 || variance(y) == 0.0 {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);
    let cov: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - mx) * (yi - my)).sum::<f64>() / x.len() as f64;
    (cov / (std_dev(x) * std_dev(y))).clamp(-1.0, 1.0)
}

/// Two-tailed p-value for a Pearson-style correlation coefficient, via
/// the t-statistic `r*sqrt((n-2)/(1-r^2))` under a normal approximation.
fn t_test_p_value(r: f64, n: usize) -> f64 {
    if n <= 2 || r.abs() >= 1.0 {
        return 0.0;
    }
    let t = r * ((n - 2) as f64 / (1.0 - r * r)).sqrt();
    two_tailed_p_from_z(t)
}

fn kendall_tau(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let mut concordant = 0i64;
    let mut discordant = 0i64;
    for i in 0..n {
        for j in (i + 1)..n {
            if x[i] == x[j] || y[i] == y[j] {
                continue;
            }
            let sign = (x[i] - x[j]).signum() * (y[i] - y[j]).signum();
            if sign > 0.0 {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }
    let total = concordant + discordant;
    if total == 0 {
        0.0
    } else {
        (concordant - discordant) as f64 / total as f64
    }
}

fn kendall_p_value(tau: f64, n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let z = 3.0 * tau * (n * (n - 1)) as f64 / (2.0 * (2 * n + 5)) as f64;
    let z = z.sqrt().copysign(z);
    two_tailed_p_from_z(z)
}

/// Computes a correlation coefficient and significance for two equal-length
/// series. Returns `coefficient=0` when either series has zero
/// variance rather than erroring.
pub fn calculate_correlation(x: &[f64], y: &[f64], method: CorrelationMethod) -> Result<CorrelationResult> {
    if x.len() != y.len() {
        return Err(NetKitError::invalid("y", "must be the same length as x"));
    }
    let required = method.min_sample_size();
    if x.len() < required {
        return Err(NetKitError::insufficient("calculate_correlation", required, x.len()));
    }

    let (coefficient, p_value) = match method {
        CorrelationMethod::Pearson => {
            let r = pearson_r(x, y);
            (r, t_test_p_value(r, x.len()))
        }
        CorrelationMethod::Spearman => {
            let rx = rank(x);
            let ry = rank(y);
            let r = pearson_r(&rx, &ry);
            (r, t_test_p_value(r, x.len()))
        }
        CorrelationMethod::Kendall => {
            let tau = kendall_tau(x, y);
            (tau, kendall_p_value(tau, x.len()))
        }
    };

    Ok(CorrelationResult {
        coefficient,
        p_value,
        strength: CorrelationStrength::from_magnitude(coefficient.abs()),
        direction: CorrelationDirection::from_coefficient(coefficient),
    })
}

/// A symmetric matrix of pairwise correlations across named metric series.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pairs: BTreeMap<(String, String), CorrelationResult>,
}

impl CorrelationMatrix {
    /// Symmetric lookup of a correlation between two metrics by name,
    /// trying both key orders.
    pub fn get_correlation(&self, a: &str, b: &str) -> Option<CorrelationResult> {
        self.pairs
            .get(&(a.to_string(), b.to_string()))
            .or_else(|| self.pairs.get(&(b.to_string(), a.to_string())))
            .copied()
    }
}

/// Builds the full pairwise correlation matrix over `metrics`, all series
/// equal-length. Requires at least two metrics.
pub fn correlation_matrix(metrics: &BTreeMap<String, Vec<f64>>, method: CorrelationMethod) -> Result<CorrelationMatrix> {
    if metrics.len() < 2 {
        return Err(NetKitError::insufficient("correlation_matrix", 2, metrics.len()));
    }
    let names: Vec<&String> = metrics.keys().collect();
    let len = metrics.values().next().map(|v| v.len()).unwrap_or(0);
    if metrics.values().any(|v| v.len() != len) {
        return Err(NetKitError::invalid("metrics", "all series must be equal-length"));
    }

    let mut pairs = BTreeMap::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            let result = calculate_correlation(&metrics[names[i]], &metrics[names[j]], method)?;
            pairs.insert((names[i].clone(), names[j].clone()), result);
        }
    }

    Ok(CorrelationMatrix { pairs })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pearson correlation on a perfect line.
    #[test]
    fn scenario_pearson_perfect_line() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..10).map(|i| 2.0 * i as f64 + 1.0).collect();
        let result = calculate_correlation(&x, &y, CorrelationMethod::Pearson).unwrap();
        assert!((result.coefficient - 1.0).abs() < 1e-9);
        assert_eq!(result.strength, CorrelationStrength::VeryStrong);
        assert_eq!(result.direction, CorrelationDirection::Positive);
    }

    #[test]
    fn zero_variance_series_yields_zero_coefficient() {
        let x = vec![5.0; 12];
        let y: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let result = calculate_correlation(&x, &y, CorrelationMethod::Pearson).unwrap();
        assert_eq!(result.coefficient, 0.0);
    }

    #[test]
    fn below_minimum_sample_size_errors() {
        let x = vec![1.0; 3];
        let y = vec![2.0; 3];
        assert!(calculate_correlation(&x, &y, CorrelationMethod::Pearson).is_err());
    }

    #[test]
    fn kendall_perfect_agreement_is_one() {
        let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let result = calculate_correlation(&x, &y, CorrelationMethod::Kendall).unwrap();
        assert_eq!(result.coefficient, 1.0);
    }

    #[test]
    fn matrix_lookup_is_symmetric() {
        let mut metrics = BTreeMap::new();
        metrics.insert("rssi".to_string(), (0..10).map(|i| i as f64).collect());
        metrics.insert("snr".to_string(), (0..10).map(|i| i as f64 * 2.0).collect());
        let matrix = correlation_matrix(&metrics, CorrelationMethod::Pearson).unwrap();
        let a = matrix.get_correlation("rssi", "snr").unwrap();
        let b = matrix.get_correlation("snr", "rssi").unwrap();
        assert_eq!(a.coefficient, b.coefficient);
    }
}
