// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Roaming advisor (C7): candidate scoring against RSSI/SNR improvement
//! thresholds, imminent-failure override, and sticky-client detection.

pub mod candidate;
pub mod sticky;

pub use candidate::{
    recommend_roam, score_candidate, CurrentLink, RoamingCandidate, RoamingReason, RoamingRecommendation,
    IMMINENT_FAILURE_RSSI_DBM, MIN_RSSI_IMPROVEMENT_DB, MIN_SNR_IMPROVEMENT_DB,
};
pub use sticky::{is_sticky_client, RoamingWindow};
