// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{AuthType, CipherSuite};

/// Closed severity ordering: `INFO < LOW < MEDIUM < HIGH < CRITICAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

/// A detected security issue on a BSS or across a network. Each variant
/// carries a fixed severity and a recommendation string.
#[derive(Debug, Clone, PartialEq)]
pub enum SecurityIssue {
    WepInUse,
    TkipInUse,
    LegacyCipher(CipherSuite),
    PmfDisabledOnProtectedNetwork(AuthType),
    WeakGroupMgmtCipher,
    OpenNetworkWithoutOwe,
    OweTransitionWithOpenSideVisible(String),
    SuiteBMissingForHighSecurityClaim,
    TransitionalMode(AuthType, AuthType),
    WpsPinEnabled,
    WpsUnknownOrRiskyMode,
    MissingRoamingOptimizations,
    InconsistentSecurityAcrossAps(String, usize),
    DeprecatedAuthType(AuthType),
}

impl SecurityIssue {
    pub fn severity(&self) -> Severity {
        match self {
            SecurityIssue::WepInUse => Severity::Critical,
            SecurityIssue::TkipInUse => Severity::High,
            SecurityIssue::LegacyCipher(_) => Severity::High,
            SecurityIssue::PmfDisabledOnProtectedNetwork(auth) => {
                if auth.is_wpa3() {
                    Severity::Critical
                } else {
                    Severity::Medium
                }
            }
            SecurityIssue::WeakGroupMgmtCipher => Severity::Medium,
            SecurityIssue::OpenNetworkWithoutOwe => Severity::High,
            SecurityIssue::OweTransitionWithOpenSideVisible(_) => Severity::Medium,
            SecurityIssue::SuiteBMissingForHighSecurityClaim => Severity::Medium,
            SecurityIssue::TransitionalMode(_, _) => Severity::Low,
            SecurityIssue::WpsPinEnabled => Severity::Critical,
            SecurityIssue::WpsUnknownOrRiskyMode => Severity::Medium,
            SecurityIssue::MissingRoamingOptimizations => Severity::Info,
            SecurityIssue::InconsistentSecurityAcrossAps(_, _) => Severity::Medium,
            SecurityIssue::DeprecatedAuthType(_) => Severity::High,
        }
    }

    pub fn recommendation(&self) -> String {
        match self {
            SecurityIssue::WepInUse => {
                "Disable WEP; it is trivially breakable and should never be deployed.".to_string()
            }
            SecurityIssue::TkipInUse => {
                "Disable TKIP; migrate all clients to CCMP or a GCMP variant.".to_string()
            }
            SecurityIssue::LegacyCipher(c) => format!("Retire legacy cipher {:?} in favor of CCMP/GCMP.", c),
            SecurityIssue::PmfDisabledOnProtectedNetwork(auth) => {
                format!("Enable Protected Management Frames; {:?} should require PMF.", auth)
            }
            SecurityIssue::WeakGroupMgmtCipher => {
                "Upgrade the group management cipher to a BIP-GMAC variant.".to_string()
            }
            SecurityIssue::OpenNetworkWithoutOwe => {
                "Deploy OWE to provide encryption on this open network.".to_string()
            }
            SecurityIssue::OweTransitionWithOpenSideVisible(ssid) => {
                format!("Hide the open-side SSID '{}' of this OWE transition BSS once clients have migrated.", ssid)
            }
            SecurityIssue::SuiteBMissingForHighSecurityClaim => {
                "Deploy WPA3-Enterprise 192-bit (Suite B) ciphers to match the claimed security tier.".to_string()
            }
            SecurityIssue::TransitionalMode(from, to) => {
                format!("Retire transitional mode {:?}/{:?} once legacy clients are migrated.", from, to)
            }
            SecurityIssue::WpsPinEnabled => {
                "Disable WPS PIN; it is vulnerable to brute-force recovery of the network key.".to_string()
            }
            SecurityIssue::WpsUnknownOrRiskyMode => {
                "Review WPS configuration; its risk profile could not be confirmed as safe.".to_string()
            }
            SecurityIssue::MissingRoamingOptimizations => {
                "Enable 802.11k/v/r roaming optimizations for a better client experience.".to_string()
            }
            SecurityIssue::InconsistentSecurityAcrossAps(ssid, count) => {
                format!("{} APs broadcasting SSID '{}' disagree on security configuration; align them.", count, ssid)
            }
            SecurityIssue::DeprecatedAuthType(auth) => {
                format!("Retire deprecated auth type {:?} in favor of WPA2 or WPA3.", auth)
            }
        }
    }
}
