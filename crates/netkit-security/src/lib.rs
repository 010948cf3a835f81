// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Security scoring (C2) and risk prioritization (C3): derives per-BSS and
//! network-wide security posture from parsed IE fingerprints, WPS
//! configuration, and PMF status, then ranks findings into an action plan.

pub mod issues;
pub mod network_analysis;
pub mod risk;
pub mod score;
pub mod wps_risk;

pub use issues::{SecurityIssue, Severity};
pub use network_analysis::{analyze_network, detect_cluster_issues, score_and_analyze, ComplianceLevel, NetworkSecurityAnalysis};
pub use risk::{prioritize, total_risk, Effort, Impact, Likelihood, OverallRiskLevel, PrioritizedRisk};
pub use score::{detect_bss_issues, score_bss, BssSecurityScore, SecurityLevel};
pub use wps_risk::{evaluate_wps_risk, WpsRiskTier};
