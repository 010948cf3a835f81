// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::Bssid;

/// One candidate AP as it would look to a client if steered there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApCandidate {
    pub bssid: Bssid,
    pub rssi: i32,
    pub utilization_pct: f64,
    pub client_count: u32,
    pub is_current: bool,
}

/// Scores an AP candidate for a client, base 50.
pub fn ap_score(candidate: &ApCandidate) -> f64 {
    let mut score = 50.0;
    score += if candidate.rssi >= -60 {
        30.0
    } else if candidate.rssi >= -70 {
        20.0
    } else if candidate.rssi >= -75 {
        10.0
    } else {
        0.0
    };
    score -= 20.0 * (candidate.utilization_pct / 100.0);
    score -= 15.0 * (f64::from(candidate.client_count) / 20.0);
    if candidate.is_current {
        score += 15.0;
    }
    score
}

/// Steer iff the winning candidate clears a 10-point margin over the
/// current AP, its RSSI is at least -75 dBm, and it differs from current.
pub fn recommend_ap(candidates: &[ApCandidate]) -> Option<Bssid> {
    let current = candidates.iter().find(|c| c.is_current)?;
    let current_score = ap_score(current);

    let best = candidates
        .iter()
        .map(|c| (c.bssid, ap_score(c), c.rssi))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

    if best.0 != current.bssid && (best.1 - current_score) >= 10.0 && best.2 >= -75 {
        Some(best.0)
    } else {
        None
    }
}
