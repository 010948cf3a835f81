// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{AuthType, BssObservation, CipherSuite};

use crate::issues::{SecurityIssue, Severity};
use crate::wps_risk::{evaluate_wps_risk, WpsRiskTier};

/// Security level bins over `overall`. The bin boundaries are the
/// lower-inclusive edges: `EXCELLENT >= 0.90`, ..., `INSECURE < 0.30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SecurityLevel {
    Insecure,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl SecurityLevel {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 0.90 {
            SecurityLevel::Excellent
        } else if overall >= 0.70 {
            SecurityLevel::Good
        } else if overall >= 0.50 {
            SecurityLevel::Fair
        } else if overall >= 0.30 {
            SecurityLevel::Weak
        } else {
            SecurityLevel::Insecure
        }
    }
}

/// Full per-BSS scoring result.
#[derive(Debug, Clone, PartialEq)]
pub struct BssSecurityScore {
    pub bssid: netkit_model::Bssid,
    pub auth_score: f64,
    pub cipher_score: f64,
    pub mgmt_score: f64,
    pub overall: f64,
    pub level: SecurityLevel,
    pub wps_risk: f64,
    pub wps_risk_tier: WpsRiskTier,
    pub issues: Vec<SecurityIssue>,
}

fn authentication_score(bss: &BssObservation) -> f64 {
    let baseline = f64::from(bss.fingerprint.auth_type().baseline_score()) / 100.0;
    let penalty = if bss.fingerprint.transition_mode().is_some() { 0.1 } else { 0.0 };
    (baseline - penalty).max(0.0)
}

fn cipher_strength_score(bss: &BssObservation) -> f64 {
    let max_strength = bss
        .fingerprint
        .cipher_set()
        .iter()
        .map(|c| c.strength())
        .max()
        .unwrap_or(0);
    let base = f64::from(max_strength) / 100.0;
    let penalty = if bss.fingerprint.is_mixed_weakening() { 0.15 } else { 0.0 };
    (base - penalty).max(0.0)
}

fn management_protection_score(bss: &BssObservation) -> f64 {
    let base = if !bss.pmf_capable {
        0.0
    } else if !bss.fingerprint.pmf_required() {
        0.5
    } else {
        1.0
    };
    let multiplier = match bss.management_cipher {
        Some(cipher) => f64::from(cipher.strength()) / 100.0,
        None => 0.6,
    };
    base * multiplier
}

/// Scores a single BSS observation.
pub fn score_bss(bss: &BssObservation) -> BssSecurityScore {
    let auth = authentication_score(bss);
    let cipher = cipher_strength_score(bss);
    let mgmt = management_protection_score(bss);
    let overall = (0.40 * auth + 0.35 * cipher + 0.25 * mgmt).clamp(0.0, 1.0);
    let (wps_risk, wps_risk_tier) = evaluate_wps_risk(bss.wps_info.as_ref());

    BssSecurityScore {
        bssid: bss.bssid,
        auth_score: auth,
        cipher_score: cipher,
        mgmt_score: mgmt,
        overall,
        level: SecurityLevel::from_overall(overall),
        wps_risk,
        wps_risk_tier,
        issues: detect_bss_issues(bss, wps_risk_tier),
    }
}

/// Detects per-BSS security issues. Cluster-wide issues
/// (`InconsistentSecurityAcrossAps`, `MissingRoamingOptimizations`) are
/// detected separately in `network_analysis`, since they need more than
/// one BSS to evaluate.
pub fn detect_bss_issues(bss: &BssObservation, wps_tier: WpsRiskTier) -> Vec<SecurityIssue> {
    let mut issues = Vec::new();
    let fp = &bss.fingerprint;
    let auth = fp.auth_type();

    if fp.cipher_set().contains(&CipherSuite::Wep40) || fp.cipher_set().contains(&CipherSuite::Wep104) {
        issues.push(SecurityIssue::WepInUse);
    }
    if fp.cipher_set().contains(&CipherSuite::Tkip) {
        issues.push(SecurityIssue::TkipInUse);
    }
    for cipher in fp.cipher_set() {
        let is_wep_or_tkip = matches!(cipher, CipherSuite::Wep40 | CipherSuite::Wep104 | CipherSuite::Tkip);
        if cipher.is_weak() && !is_wep_or_tkip {
            issues.push(SecurityIssue::LegacyCipher(*cipher));
        }
    }

    if auth != AuthType::Open && auth != AuthType::Wep && !bss.pmf_capable {
        issues.push(SecurityIssue::PmfDisabledOnProtectedNetwork(auth));
    }

    if let Some(mc) = bss.management_cipher {
        if !mc.is_management_cipher() || mc == CipherSuite::BipCmac128 {
            issues.push(SecurityIssue::WeakGroupMgmtCipher);
        }
    }

    if auth == AuthType::Open && fp.transition_mode().is_none() {
        issues.push(SecurityIssue::OpenNetworkWithoutOwe);
    }

    if let Some((from, to)) = fp.transition_mode() {
        if from == AuthType::Owe && to == AuthType::Open {
            issues.push(SecurityIssue::OweTransitionWithOpenSideVisible(bss.ssid.to_string()));
        } else {
            issues.push(SecurityIssue::TransitionalMode(from, to));
        }
    }

    if auth == AuthType::Wpa3Enterprise192 {
        let has_suite_b = fp.strongest_cipher() == Some(CipherSuite::Gcmp256)
            && bss.management_cipher == Some(CipherSuite::BipGmac256);
        if !has_suite_b {
            issues.push(SecurityIssue::SuiteBMissingForHighSecurityClaim);
        }
    }

    if auth.is_deprecated() {
        issues.push(SecurityIssue::DeprecatedAuthType(auth));
    }

    match wps_tier {
        WpsRiskTier::Critical | WpsRiskTier::High => issues.push(SecurityIssue::WpsPinEnabled),
        WpsRiskTier::MediumHigh | WpsRiskTier::Medium => issues.push(SecurityIssue::WpsUnknownOrRiskyMode),
        WpsRiskTier::Low | WpsRiskTier::None => {}
    }

    issues
}

pub fn worst_severity(issues: &[SecurityIssue]) -> Option<Severity> {
    issues.iter().map(SecurityIssue::severity).max()
}
