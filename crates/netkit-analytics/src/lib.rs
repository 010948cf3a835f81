// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Analytics engine: statistical analyzer (C8, correlation/distribution/
//! outliers), comparative analyzer (C9, baseline diffs/benchmarks/health
//! score), and time-series/spatial analyzer (C10, LTTB downsampling,
//! spatial interpolation, coverage categorization).

pub mod comparative;
pub mod correlation;
pub mod distribution;
pub mod lttb;
pub mod spatial;
mod stats_util;

pub use comparative::{
    benchmark, compare_to_baseline, health_score, BenchmarkGrade, BenchmarkResult, ChangeDirection, GapPriority,
    MetricComparison, MetricGap, Significance, DEFAULT_SIGNIFICANCE_THRESHOLD_PCT,
};
pub use correlation::{
    calculate_correlation, correlation_matrix, CorrelationDirection, CorrelationMatrix, CorrelationMethod,
    CorrelationResult, CorrelationStrength,
};
pub use distribution::{build_histogram, detect_outliers, estimate_density, Histogram, KernelDensityEstimate, DEFAULT_OUTLIER_MULTIPLIER};
pub use lttb::lttb_downsample;
pub use spatial::{
    bilinear, categorize_coverage, classify_coverage, heatmap_grid_dimensions, idw, kriging, nearest_neighbor, Bounds,
    CoverageLevel, CoverageThresholds, DEFAULT_IDW_MAX_DIST_M, DEFAULT_IDW_POWER,
};
