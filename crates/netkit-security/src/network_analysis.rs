// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeMap;

use netkit_model::ApCluster;

use crate::issues::{SecurityIssue, Severity};
use crate::score::{score_bss, BssSecurityScore, SecurityLevel};
use crate::wps_risk::WpsRiskTier;

/// Network-wide compliance tier, computed from `(modern_pct, wps_issue_pct)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplianceLevel {
    NonCompliant,
    Low,
    Moderate,
    High,
    Full,
}

fn compliance_level(modern_pct: f64, wps_issue_pct: f64) -> ComplianceLevel {
    if modern_pct >= 1.0 && wps_issue_pct == 0.0 {
        ComplianceLevel::Full
    } else if modern_pct >= 0.8 && wps_issue_pct < 0.2 {
        ComplianceLevel::High
    } else if modern_pct >= 0.6 && wps_issue_pct < 0.5 {
        ComplianceLevel::Moderate
    } else if modern_pct >= 0.3 {
        ComplianceLevel::Low
    } else {
        ComplianceLevel::NonCompliant
    }
}

/// Aggregated security posture over a set of per-BSS scores.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSecurityAnalysis {
    pub scores: Vec<BssSecurityScore>,
    pub mean_security_score: f64,
    pub mean_wps_risk: f64,
    pub worst_threat_level: Option<Severity>,
    pub security_level_histogram: BTreeMap<&'static str, usize>,
    pub critical_wps_count: usize,
    pub compliance: ComplianceLevel,
    pub cluster_issues: Vec<SecurityIssue>,
}

fn level_label(level: SecurityLevel) -> &'static str {
    match level {
        SecurityLevel::Insecure => "INSECURE",
        SecurityLevel::Weak => "WEAK",
        SecurityLevel::Fair => "FAIR",
        SecurityLevel::Good => "GOOD",
        SecurityLevel::Excellent => "EXCELLENT",
    }
}

/// Aggregates a set of already-computed per-BSS scores into a network-wide
/// posture. Cluster-wide issues (`InconsistentSecurityAcrossAps`,
/// `MissingRoamingOptimizations`) are folded in from `clusters` when given.
pub fn analyze_network(scores: Vec<BssSecurityScore>, clusters: &[ApCluster]) -> NetworkSecurityAnalysis {
    let n = scores.len().max(1) as f64;
    let mean_security_score = scores.iter().map(|s| s.overall).sum::<f64>() / n;
    let mean_wps_risk = scores.iter().map(|s| s.wps_risk).sum::<f64>() / n;

    let worst_threat_level = scores.iter().flat_map(|s| s.issues.iter().map(SecurityIssue::severity)).max();

    let mut histogram = BTreeMap::new();
    for s in &scores {
        *histogram.entry(level_label(s.level)).or_insert(0) += 1;
    }

    let critical_wps_count = scores.iter().filter(|s| s.wps_risk_tier == WpsRiskTier::Critical).count();

    let modern_count = clusters
        .iter()
        .flat_map(|c| c.bssids.iter())
        .filter(|b| b.fingerprint.auth_type().is_modern())
        .count();
    let total_bss: usize = clusters.iter().map(|c| c.bssids.len()).sum();
    let modern_pct = if total_bss == 0 { 1.0 } else { modern_count as f64 / total_bss as f64 };

    let significant_wps_count = scores
        .iter()
        .filter(|s| matches!(s.wps_risk_tier, WpsRiskTier::Medium | WpsRiskTier::MediumHigh | WpsRiskTier::High | WpsRiskTier::Critical))
        .count();
    let wps_issue_pct = if scores.is_empty() { 0.0 } else { significant_wps_count as f64 / scores.len() as f64 };

    let compliance = compliance_level(modern_pct, wps_issue_pct);

    let cluster_issues = clusters.iter().flat_map(detect_cluster_issues).collect();

    NetworkSecurityAnalysis {
        scores,
        mean_security_score,
        mean_wps_risk,
        worst_threat_level,
        security_level_histogram: histogram,
        critical_wps_count,
        compliance,
        cluster_issues,
    }
}

/// Detects cluster-wide issues that need more than one BSS to evaluate:
/// inconsistent security configuration across the APs of a multi-AP
/// cluster, and the absence of roaming optimizations on a multi-AP
/// deployment (802.11k/v/r support is not modeled as an input field, so
/// this is inferred purely from cluster shape).
pub fn detect_cluster_issues(cluster: &ApCluster) -> Vec<SecurityIssue> {
    let mut issues = Vec::new();
    if !cluster.is_multi_ap() {
        return issues;
    }

    let distinct_fingerprints: std::collections::BTreeSet<_> = cluster
        .bssids
        .iter()
        .map(|b| (b.fingerprint.auth_type(), b.pmf_capable))
        .collect();
    if distinct_fingerprints.len() > 1 {
        issues.push(SecurityIssue::InconsistentSecurityAcrossAps(
            cluster.ssid.to_string(),
            cluster.bssids.len(),
        ));
    }

    issues.push(SecurityIssue::MissingRoamingOptimizations);
    issues
}

/// Convenience: scores every BSS in `clusters` and aggregates in one call.
pub fn score_and_analyze(clusters: &[ApCluster]) -> NetworkSecurityAnalysis {
    let scores: Vec<BssSecurityScore> = clusters.iter().flat_map(|c| c.bssids.iter()).map(score_bss).collect();
    analyze_network(scores, clusters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_model::{AuthType, Band, Bssid, ChannelWidth, CipherSuite, SecurityFingerprint, Ssid};
    use std::collections::BTreeSet;

    fn bss(bssid: &str, auth: AuthType, pmf_capable: bool) -> netkit_model::BssObservation {
        let mut ciphers = BTreeSet::new();
        if auth != AuthType::Open {
            ciphers.insert(CipherSuite::Ccmp);
        }
        netkit_model::BssObservation {
            bssid: Bssid::parse(bssid).unwrap(),
            ssid: Ssid::new("home").unwrap(),
            band: Band::Band5GHz,
            channel: 36,
            channel_width: ChannelWidth::Mhz80,
            rssi: -50,
            fingerprint: SecurityFingerprint::new(auth, ciphers, pmf_capable && auth.requires_pmf(), None).unwrap(),
            wps_info: None,
            pmf_capable,
            management_cipher: None,
        }
    }

    // single-BSS WPA3 network should be FULL compliance.
    #[test]
    fn single_excellent_bss_is_full_compliance() {
        let b = bss("AA:BB:CC:DD:EE:01", AuthType::Wpa3Sae, true);
        let cluster = ApCluster::new("c1", b.ssid.clone(), vec![b]).unwrap();
        let analysis = score_and_analyze(std::slice::from_ref(&cluster));
        assert_eq!(analysis.compliance, ComplianceLevel::Full);
    }

    #[test]
    fn inconsistent_fingerprints_flagged() {
        let c1 = bss("AA:BB:CC:DD:EE:01", AuthType::Wpa3Sae, true);
        let c2 = bss("AA:BB:CC:DD:EE:02", AuthType::Wpa2Psk, false);
        let cluster = ApCluster::new("c1", Ssid::new("home").unwrap(), vec![c1, c2]).unwrap();
        let issues = detect_cluster_issues(&cluster);
        assert!(issues.iter().any(|i| matches!(i, SecurityIssue::InconsistentSecurityAcrossAps(_, _))));
    }
}
