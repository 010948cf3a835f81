// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Improved,
    Degraded,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Significance {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricComparison {
    pub metric: String,
    pub change: f64,
    pub change_pct: f64,
    pub direction: ChangeDirection,
    pub significance: Significance,
}

fn significance_from_pct(abs_change_pct: f64, threshold_pct: f64) -> Significance {
    if abs_change_pct >= 5.0 * threshold_pct {
        Significance::VeryHigh
    } else if abs_change_pct >= 3.0 * threshold_pct {
        Significance::High
    } else if abs_change_pct >= 1.5 * threshold_pct {
        Significance::Moderate
    } else if abs_change_pct >= threshold_pct {
        Significance::Low
    } else {
        Significance::None
    }
}

/// Compares `current` metrics against a `baseline`. Only
/// metrics present in both maps are compared. `higher_is_better` marks
/// which metrics improve by increasing; metrics absent from it default to
/// higher-is-better.
pub fn compare_to_baseline(
    current: &BTreeMap<String, f64>,
    baseline: &BTreeMap<String, f64>,
    higher_is_better: &BTreeMap<String, bool>,
    significance_threshold_pct: f64,
) -> Vec<MetricComparison> {
    let mut comparisons = Vec::new();

    for (metric, &current_value) in current {
        let Some(&baseline_value) = baseline.get(metric) else { continue };
        let change = current_value - baseline_value;
        let change_pct = if baseline_value == 0.0 {
            if current_value == 0.0 {
                0.0
            } else {
                f64::INFINITY.copysign(change)
            }
        } else {
            change / baseline_value.abs() * 100.0
        };

        let higher_better = *higher_is_better.get(metric).unwrap_or(&true);
        let direction = if change_pct.abs() < 5.0 {
            ChangeDirection::Stable
        } else if (change > 0.0) == higher_better {
            ChangeDirection::Improved
        } else {
            ChangeDirection::Degraded
        };

        comparisons.push(MetricComparison {
            metric: metric.clone(),
            change,
            change_pct,
            direction,
            significance: significance_from_pct(change_pct.abs(), significance_threshold_pct),
        });
    }

    comparisons
}

pub const DEFAULT_SIGNIFICANCE_THRESHOLD_PCT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GapPriority {
    Low,
    Medium,
    High,
    Critical,
}

fn gap_priority(achievement: f64) -> GapPriority {
    if achievement < 0.5 {
        GapPriority::Critical
    } else if achievement < 0.7 {
        GapPriority::High
    } else if achievement < 0.85 {
        GapPriority::Medium
    } else {
        GapPriority::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkGrade {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

fn benchmark_grade(score: f64) -> BenchmarkGrade {
    if score >= 90.0 {
        BenchmarkGrade::Excellent
    } else if score >= 75.0 {
        BenchmarkGrade::Good
    } else if score >= 60.0 {
        BenchmarkGrade::Fair
    } else if score >= 40.0 {
        BenchmarkGrade::Poor
    } else {
        BenchmarkGrade::Critical
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricGap {
    pub metric: String,
    pub achievement: f64,
    pub priority: GapPriority,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub score: f64,
    pub grade: BenchmarkGrade,
    pub gaps: Vec<MetricGap>,
}

/// Benchmarks `current` against `optimal` targets. Metrics
/// listed in `lower_is_better` (e.g. latency) invert the achievement
/// ratio; everything else is higher-is-better.
pub fn benchmark(
    current: &BTreeMap<String, f64>,
    optimal: &BTreeMap<String, f64>,
    lower_is_better: &[String],
) -> BenchmarkResult {
    let mut achievements = Vec::new();
    for (metric, &current_value) in current {
        let Some(&optimal_value) = optimal.get(metric) else { continue };
        let raw = if lower_is_better.iter().any(|m| m == metric) {
            if current_value == 0.0 {
                1.0
            } else {
                optimal_value / current_value
            }
        } else if optimal_value == 0.0 {
            1.0
        } else {
            current_value / optimal_value
        };
        let achievement = raw.clamp(0.0, 1.0);
        achievements.push(MetricGap { metric: metric.clone(), achievement, priority: gap_priority(achievement) });
    }

    let score = if achievements.is_empty() {
        0.0
    } else {
        100.0 * achievements.iter().map(|g| g.achievement).sum::<f64>() / achievements.len() as f64
    };

    BenchmarkResult { score, grade: benchmark_grade(score), gaps: achievements }
}

fn normalize_metric(name: &str, value: f64) -> f64 {
    match name {
        "rssi" => ((value + 90.0) / 60.0 * 100.0).clamp(0.0, 100.0),
        "snr" => (value / 50.0 * 100.0).clamp(0.0, 100.0),
        "throughput" => (value / 100.0 * 100.0).clamp(0.0, 100.0),
        _ => value.clamp(0.0, 100.0),
    }
}

/// Weighted composite health score over named metrics.
pub fn health_score(metrics: &BTreeMap<String, f64>, weights: &BTreeMap<String, f64>) -> f64 {
    let total_weight: f64 = metrics.keys().filter_map(|m| weights.get(m)).sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted_sum: f64 =
        metrics.iter().filter_map(|(m, &v)| weights.get(m).map(|&w| normalize_metric(m, v) * w)).sum();
    (weighted_sum / total_weight).clamp(0.0, 100.0)
}
