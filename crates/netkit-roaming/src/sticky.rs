// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// One monitoring window's roaming outcome for a client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamingWindow {
    pub roamed: bool,
    /// The largest RSSI improvement (dB) any candidate offered during
    /// this window, if any candidates were observed at all.
    pub best_candidate_delta_db: Option<f64>,
}

/// A client that qualifies for roaming (a candidate exists at least
/// [`crate::candidate::MIN_RSSI_IMPROVEMENT_DB`] dB better) but doesn't
/// roam, in two consecutive windows, is "sticky".
pub fn is_sticky_client(windows: &[RoamingWindow]) -> bool {
    let qualifying_no_roam = |w: &RoamingWindow| !w.roamed && w.best_candidate_delta_db.unwrap_or(0.0) >= 10.0;

    windows.len() >= 2 && windows[windows.len() - 2..].iter().all(qualifying_no_roam)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_consecutive_missed_opportunities_is_sticky() {
        let windows = vec![
            RoamingWindow { roamed: false, best_candidate_delta_db: Some(12.0) },
            RoamingWindow { roamed: false, best_candidate_delta_db: Some(11.0) },
        ];
        assert!(is_sticky_client(&windows));
    }

    #[test]
    fn roaming_in_between_resets_stickiness() {
        let windows = vec![
            RoamingWindow { roamed: false, best_candidate_delta_db: Some(12.0) },
            RoamingWindow { roamed: true, best_candidate_delta_db: Some(11.0) },
        ];
        assert!(!is_sticky_client(&windows));
    }

    #[test]
    fn no_qualifying_candidates_is_not_sticky() {
        let windows = vec![
            RoamingWindow { roamed: false, best_candidate_delta_db: Some(3.0) },
            RoamingWindow { roamed: false, best_candidate_delta_db: None },
        ];
        assert!(!is_sticky_client(&windows));
    }

    #[test]
    fn single_window_is_insufficient_history() {
        let windows = vec![RoamingWindow { roamed: false, best_candidate_delta_db: Some(20.0) }];
        assert!(!is_sticky_client(&windows));
    }
}
