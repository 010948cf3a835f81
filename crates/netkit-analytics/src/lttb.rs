// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::DataPoint;

fn triangle_area(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    0.5 * ((b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1)).abs()
}

fn as_xy(point: &DataPoint) -> (f64, f64) {
    (point.timestamp_ms as f64, point.value)
}

/// Largest-Triangle-Three-Buckets downsampling. Preserves the
/// first and last points, and within each bucket keeps the point that
/// forms the largest triangle with the previously-selected point and the
/// mean of the following bucket — this is what keeps peaks and troughs
/// instead of averaging them away.
pub fn lttb_downsample(points: &[DataPoint], target_points: usize) -> Vec<DataPoint> {
    if target_points >= points.len() || target_points < 3 {
        return points.to_vec();
    }

    let mut sampled = Vec::with_capacity(target_points);
    sampled.push(points[0]);

    let bucket_size = (points.len() - 2) as f64 / (target_points - 2) as f64;
    let mut selected_idx = 0usize;

    for i in 0..(target_points - 2) {
        let range_start = (i as f64 * bucket_size) as usize + 1;
        let range_end = (((i + 1) as f64 * bucket_size) as usize + 1).min(points.len() - 1);

        let avg_range_start = range_end;
        let avg_range_end = ((((i + 2) as f64) * bucket_size) as usize + 1).min(points.len());
        let avg_range_end = avg_range_end.max(avg_range_start + 1).min(points.len());

        let avg_slice = &points[avg_range_start..avg_range_end];
        let avg_point = if avg_slice.is_empty() {
            as_xy(&points[points.len() - 1])
        } else {
            let (sx, sy) = avg_slice.iter().fold((0.0, 0.0), |(sx, sy), p| {
                let (x, y) = as_xy(p);
                (sx + x, sy + y)
            });
            (sx / avg_slice.len() as f64, sy / avg_slice.len() as f64)
        };

        let point_a = as_xy(&points[selected_idx]);
        let mut best_area = -1.0;
        let mut best_idx = range_start.min(points.len() - 1);
        for j in range_start..range_end.max(range_start + 1).min(points.len()) {
            let area = triangle_area(point_a, as_xy(&points[j]), avg_point);
            if area > best_area {
                best_area = area;
                best_idx = j;
            }
        }

        sampled.push(points[best_idx]);
        selected_idx = best_idx;
    }

    sampled.push(points[points.len() - 1]);
    sampled
}
