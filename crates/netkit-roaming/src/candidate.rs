// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::Bssid;

/// RSSI at which a current link is considered an imminent failure,
/// overriding the normal improvement thresholds.
pub const IMMINENT_FAILURE_RSSI_DBM: i32 = -85;
/// Minimum RSSI improvement a candidate must offer absent an emergency.
pub const MIN_RSSI_IMPROVEMENT_DB: i32 = 10;
/// Minimum SNR improvement a candidate must offer absent an emergency.
pub const MIN_SNR_IMPROVEMENT_DB: f64 = 5.0;

/// The client's present attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentLink {
    pub rssi: i32,
    pub snr: f64,
}

/// A neighbor BSS the client could roam to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamingCandidate {
    pub bssid: Bssid,
    pub rssi: i32,
    pub snr: f64,
    pub load_pct: f64,
}

fn rssi_improvement(current: &CurrentLink, candidate: &RoamingCandidate) -> i32 {
    candidate.rssi - current.rssi
}

fn snr_improvement(current: &CurrentLink, candidate: &RoamingCandidate) -> f64 {
    candidate.snr - current.snr
}

fn meets_thresholds(current: &CurrentLink, candidate: &RoamingCandidate) -> bool {
    rssi_improvement(current, candidate) >= MIN_RSSI_IMPROVEMENT_DB
        && snr_improvement(current, candidate) >= MIN_SNR_IMPROVEMENT_DB
}

/// Scores a candidate on 100, weighted by how far it clears the RSSI and
/// SNR improvement thresholds, with a smaller term for its
/// reported load. Weights (60/30/10) are derived from those thresholds
/// rather than independently invented: RSSI improvement is the primary
/// roaming trigger, SNR improvement the secondary confirming signal, and
/// load a tie-breaker among otherwise-qualifying candidates.
pub fn score_candidate(current: &CurrentLink, candidate: &RoamingCandidate) -> f64 {
    let rssi_term = (f64::from(rssi_improvement(current, candidate)) / f64::from(MIN_RSSI_IMPROVEMENT_DB)).clamp(0.0, 1.5);
    let snr_term = (snr_improvement(current, candidate) / MIN_SNR_IMPROVEMENT_DB).clamp(0.0, 1.5);
    let load_term = (1.0 - candidate.load_pct / 100.0).clamp(0.0, 1.0);

    (100.0 * (0.6 * rssi_term + 0.3 * snr_term + 0.1 * load_term)).clamp(0.0, 100.0)
}

/// Why a roaming recommendation was (or was not) made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoamingReason {
    ImminentFailure,
    MeetsThresholds,
    NoSuitableCandidate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamingRecommendation {
    pub candidate: Option<Bssid>,
    pub reason: RoamingReason,
}

/// Recommends a roaming target. Below the imminent-failure floor the
/// client steers to the best-scoring candidate regardless of threshold;
/// otherwise only candidates clearing both improvement thresholds are
/// eligible.
pub fn recommend_roam(current: &CurrentLink, candidates: &[RoamingCandidate]) -> RoamingRecommendation {
    if current.rssi < IMMINENT_FAILURE_RSSI_DBM {
        let best = candidates.iter().max_by(|a, b| {
            score_candidate(current, a).partial_cmp(&score_candidate(current, b)).unwrap_or(std::cmp::Ordering::Equal)
        });
        return match best {
            Some(c) => RoamingRecommendation { candidate: Some(c.bssid), reason: RoamingReason::ImminentFailure },
            None => RoamingRecommendation { candidate: None, reason: RoamingReason::NoSuitableCandidate },
        };
    }

    let best_eligible = candidates
        .iter()
        .filter(|c| meets_thresholds(current, c))
        .max_by(|a, b| {
            score_candidate(current, a).partial_cmp(&score_candidate(current, b)).unwrap_or(std::cmp::Ordering::Equal)
        });

    match best_eligible {
        Some(c) => RoamingRecommendation { candidate: Some(c.bssid), reason: RoamingReason::MeetsThresholds },
        None => RoamingRecommendation { candidate: None, reason: RoamingReason::NoSuitableCandidate },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bssid(s: &str) -> Bssid {
        Bssid::parse(s).unwrap()
    }

    #[test]
    fn imminent_failure_steers_regardless_of_threshold() {
        let current = CurrentLink { rssi: -90, snr: 10.0 };
        let candidates = vec![RoamingCandidate { bssid: bssid("AA:BB:CC:DD:EE:01"), rssi: -88, snr: 11.0, load_pct: 50.0 }];
        let rec = recommend_roam(&current, &candidates);
        assert_eq!(rec.candidate, Some(bssid("AA:BB:CC:DD:EE:01")));
        assert_eq!(rec.reason, RoamingReason::ImminentFailure);
    }

    #[test]
    fn healthy_link_requires_both_thresholds() {
        let current = CurrentLink { rssi: -65, snr: 25.0 };
        let weak_candidate = RoamingCandidate { bssid: bssid("AA:BB:CC:DD:EE:01"), rssi: -60, snr: 27.0, load_pct: 10.0 };
        assert_eq!(recommend_roam(&current, &[weak_candidate]).reason, RoamingReason::NoSuitableCandidate);

        let strong_candidate = RoamingCandidate { bssid: bssid("AA:BB:CC:DD:EE:02"), rssi: -50, snr: 32.0, load_pct: 10.0 };
        let rec = recommend_roam(&current, &[weak_candidate, strong_candidate]);
        assert_eq!(rec.candidate, Some(bssid("AA:BB:CC:DD:EE:02")));
    }

    #[test]
    fn no_candidates_yields_no_suitable_candidate() {
        let current = CurrentLink { rssi: -90, snr: 10.0 };
        let rec = recommend_roam(&current, &[]);
        assert_eq!(rec.reason, RoamingReason::NoSuitableCandidate);
        assert_eq!(rec.candidate, None);
    }
}
