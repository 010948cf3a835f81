// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::Bssid;

use crate::issues::Severity;
use crate::network_analysis::{ComplianceLevel, NetworkSecurityAnalysis};
use crate::wps_risk::WpsRiskTier;

/// Impact scale, highest severity first so a derived `Ord` sorts
/// "ascending" in variant-declaration order, i.e. most-impactful first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
    Negligible,
}

impl Impact {
    pub fn score(self) -> f64 {
        match self {
            Impact::Critical => 1.0,
            Impact::High => 0.7,
            Impact::Medium => 0.4,
            Impact::Low => 0.2,
            Impact::Negligible => 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Likelihood {
    Certain,
    Likely,
    Possible,
    Unlikely,
    Rare,
}

impl Likelihood {
    pub fn score(self) -> f64 {
        match self {
            Likelihood::Certain => 1.0,
            Likelihood::Likely => 0.7,
            Likelihood::Possible => 0.5,
            Likelihood::Unlikely => 0.3,
            Likelihood::Rare => 0.1,
        }
    }
}

/// Effort scale, least effort first so a derived `Ord` sorts ascending by
/// effort (cheapest mitigations first on a tie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    /// Penalty multiplier applied to `risk_score` to get `priority_score`.
    pub fn multiplier(self) -> f64 {
        match self {
            Effort::Low => 1.0,
            Effort::Medium => 0.8,
            Effort::High => 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrioritizedRisk {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mitigation_steps: Vec<String>,
    pub affected_bssids: Vec<Bssid>,
    pub impact: Impact,
    pub likelihood: Likelihood,
    pub effort: Effort,
}

impl PrioritizedRisk {
    pub fn risk_score(&self) -> f64 {
        self.impact.score() * self.likelihood.score()
    }

    pub fn priority_score(&self) -> f64 {
        self.risk_score() * self.effort.multiplier()
    }
}

/// Network-wide risk level bins over `total_risk_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverallRiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl OverallRiskLevel {
    pub fn from_total(total: f64) -> Self {
        if total >= 0.8 {
            OverallRiskLevel::Critical
        } else if total >= 0.6 {
            OverallRiskLevel::High
        } else if total >= 0.4 {
            OverallRiskLevel::Medium
        } else if total >= 0.2 {
            OverallRiskLevel::Low
        } else {
            OverallRiskLevel::Minimal
        }
    }
}

/// Generates the prioritized remediation plan for a `NetworkSecurityAnalysis`
/// and sorts it per the invariant: `(risk_score desc, effort asc,
/// impact desc)`.
pub fn prioritize(analysis: &NetworkSecurityAnalysis) -> Vec<PrioritizedRisk> {
    let mut risks = Vec::new();

    if matches!(analysis.worst_threat_level, Some(Severity::Critical)) {
        risks.push(PrioritizedRisk {
            id: "NET_CRITICAL_THREAT".to_string(),
            title: "Critical network-wide security threat detected".to_string(),
            description: "At least one BSS carries a critical severity security issue.".to_string(),
            mitigation_steps: vec!["Triage and remediate all CRITICAL-severity issues immediately.".to_string()],
            affected_bssids: analysis.scores.iter().map(|s| s.bssid).collect(),
            impact: Impact::Critical,
            likelihood: Likelihood::Certain,
            effort: Effort::Medium,
        });
    }

    if analysis.compliance == ComplianceLevel::NonCompliant || analysis.compliance == ComplianceLevel::Low {
        risks.push(PrioritizedRisk {
            id: "NET_LOW_COMPLIANCE".to_string(),
            title: "Network security compliance is low".to_string(),
            description: "The network's modern-security adoption and WPS hygiene fall short of a compliant baseline.".to_string(),
            mitigation_steps: vec![
                "Migrate all APs to WPA2 or better.".to_string(),
                "Disable or lock down WPS on every AP.".to_string(),
            ],
            affected_bssids: analysis.scores.iter().map(|s| s.bssid).collect(),
            impact: Impact::High,
            likelihood: Likelihood::Likely,
            effort: Effort::High,
        });
    }

    if analysis.mean_security_score < 0.50 {
        risks.push(PrioritizedRisk {
            id: "NET_MIN_SECURITY".to_string(),
            title: "Mean security score below acceptable minimum".to_string(),
            description: "Average per-BSS security score is below 50%.".to_string(),
            mitigation_steps: vec!["Review and uplift the lowest-scoring BSS configurations first.".to_string()],
            affected_bssids: analysis.scores.iter().filter(|s| s.overall < 0.5).map(|s| s.bssid).collect(),
            impact: Impact::High,
            likelihood: Likelihood::Likely,
            effort: Effort::Medium,
        });
    }

    for score in &analysis.scores {
        if score.wps_risk >= 0.6 {
            risks.push(PrioritizedRisk {
                id: format!("BSS_WPS_{}", score.bssid),
                title: format!("WPS risk on {}", score.bssid),
                description: "This BSS's WPS configuration carries significant brute-force risk.".to_string(),
                mitigation_steps: vec!["Disable WPS PIN entry, or lock the device if disabling is unavailable.".to_string()],
                affected_bssids: vec![score.bssid],
                impact: if score.wps_risk_tier == WpsRiskTier::Critical { Impact::Critical } else { Impact::High },
                likelihood: Likelihood::Likely,
                effort: Effort::Low,
            });
        }

        if score.cipher_score < 0.4 {
            risks.push(PrioritizedRisk {
                id: format!("BSS_WEAK_CIPHER_{}", score.bssid),
                title: format!("Weak cipher suite on {}", score.bssid),
                description: "This BSS's strongest cipher is weak or undermined by a mixed-weakening configuration.".to_string(),
                mitigation_steps: vec!["Retire WEP/TKIP ciphers; require CCMP or a GCMP variant only.".to_string()],
                affected_bssids: vec![score.bssid],
                impact: Impact::High,
                likelihood: Likelihood::Possible,
                effort: Effort::Medium,
            });
        }

        if score.mgmt_score < 0.5 {
            risks.push(PrioritizedRisk {
                id: format!("BSS_MISSING_PMF_{}", score.bssid),
                title: format!("Management frames unprotected on {}", score.bssid),
                description: "This BSS does not adequately protect management frames.".to_string(),
                mitigation_steps: vec!["Enable and require Protected Management Frames (802.11w).".to_string()],
                affected_bssids: vec![score.bssid],
                impact: Impact::Medium,
                likelihood: Likelihood::Possible,
                effort: Effort::Low,
            });
        }

        if matches!(score.level, crate::score::SecurityLevel::Insecure) {
            risks.push(PrioritizedRisk {
                id: format!("BSS_CRITICAL_THREAT_{}", score.bssid),
                title: format!("Critical per-BSS security threat on {}", score.bssid),
                description: "This BSS's overall security score is in the INSECURE band.".to_string(),
                mitigation_steps: vec!["Treat this BSS as compromised-by-design until reconfigured.".to_string()],
                affected_bssids: vec![score.bssid],
                impact: Impact::Critical,
                likelihood: Likelihood::Certain,
                effort: Effort::Medium,
            });
        }
    }

    risks.sort_by(|a, b| {
        b.risk_score()
            .partial_cmp(&a.risk_score())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.effort.cmp(&b.effort))
            .then(a.impact.cmp(&b.impact))
    });

    risks
}

/// `total_risk_score = clamp(sum(impact.score) / n, 0, 1)` over the
/// prioritized plan, plus its overall level bin.
pub fn total_risk(risks: &[PrioritizedRisk]) -> (f64, OverallRiskLevel) {
    if risks.is_empty() {
        return (0.0, OverallRiskLevel::Minimal);
    }
    let total = (risks.iter().map(|r| r.impact.score()).sum::<f64>() / risks.len() as f64).clamp(0.0, 1.0);
    (total, OverallRiskLevel::from_total(total))
}
