// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::Bssid;

/// Observed load on a single AP, the unit load-balancing reasons about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApLoad {
    pub bssid: Bssid,
    pub client_count: u32,
    pub utilization_pct: f64,
    pub airtime_pct: f64,
}

/// Imbalance severity classification over the combined CV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImbalanceClass {
    Balanced,
    Moderate,
    Significant,
    Severe,
}

impl ImbalanceClass {
    pub fn from_factor(factor: f64) -> Self {
        if factor < 0.3 {
            ImbalanceClass::Balanced
        } else if factor < 0.5 {
            ImbalanceClass::Moderate
        } else if factor < 0.7 {
            ImbalanceClass::Significant
        } else {
            ImbalanceClass::Severe
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadBalanceAnalysis {
    pub imbalance_factor: f64,
    pub classification: ImbalanceClass,
    pub overloaded: Vec<Bssid>,
    pub underutilized: Vec<Bssid>,
}

fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt() / mean
}

/// Analyzes load distribution across a fleet of APs. The
/// combined imbalance factor is the weighted mean (0.4/0.4/0.2) of the
/// coefficient of variation on client count, utilization, and airtime.
pub fn analyze_load_balance(loads: &[ApLoad]) -> LoadBalanceAnalysis {
    let client_counts: Vec<f64> = loads.iter().map(|l| f64::from(l.client_count)).collect();
    let utilizations: Vec<f64> = loads.iter().map(|l| l.utilization_pct).collect();
    let airtimes: Vec<f64> = loads.iter().map(|l| l.airtime_pct).collect();

    let cv_clients = coefficient_of_variation(&client_counts);
    let cv_util = coefficient_of_variation(&utilizations);
    let cv_airtime = coefficient_of_variation(&airtimes);

    let imbalance_factor = (0.4 * cv_clients + 0.4 * cv_util + 0.2 * cv_airtime).clamp(0.0, 2.0);
    let classification = ImbalanceClass::from_factor(imbalance_factor);

    let mean_clients = client_counts.iter().sum::<f64>() / client_counts.len().max(1) as f64;
    let mean_util = utilizations.iter().sum::<f64>() / utilizations.len().max(1) as f64;

    let overloaded = loads
        .iter()
        .filter(|l| f64::from(l.client_count) > 1.5 * mean_clients || l.utilization_pct > 1.3 * mean_util)
        .map(|l| l.bssid)
        .collect();
    let underutilized = loads
        .iter()
        .filter(|l| f64::from(l.client_count) < 0.5 * mean_clients || l.utilization_pct < 0.5 * mean_util)
        .map(|l| l.bssid)
        .collect();

    LoadBalanceAnalysis { imbalance_factor, classification, overloaded, underutilized }
}

/// Traffic class affecting move priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficClass {
    BestEffort,
    Video,
    Voip,
}

/// Priority (0-100) for moving a client off an overloaded AP.
pub fn client_move_priority(rssi_current: i32, rssi_target: i32, traffic: TrafficClass) -> f64 {
    let delta = rssi_target - rssi_current;
    let mut score = 50.0;
    score += if delta >= 15 {
        30.0
    } else if delta >= 10 {
        20.0
    } else if delta >= 5 {
        10.0
    } else {
        -20.0
    };
    if rssi_current < -75 {
        score += 15.0;
    }
    match traffic {
        TrafficClass::Voip => score += 10.0,
        TrafficClass::Video => score += 5.0,
        TrafficClass::BestEffort => {}
    }
    score.clamp(0.0, 100.0)
}
