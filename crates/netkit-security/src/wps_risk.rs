// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{WpsInfo, WpsState};

/// Risk tier returned alongside the numeric WPS risk score. `MediumHigh`
/// is a distinct tier from `Medium`/`High`, giving locked-but-PIN-capable
/// devices their own row in the risk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WpsRiskTier {
    None,
    Low,
    Medium,
    MediumHigh,
    High,
    Critical,
}

/// Evaluates the deterministic WPS risk table keyed on
/// `(supports_pin, locked, wps_state)`.
///
/// `locked: None` (unreported) is treated as `false` — unknown lock state
/// is scored as if unlocked, the conservative reading for a security tool.
/// The table's explicit rows leave one combination unstated: PIN-incapable,
/// unlocked, `NotConfigured`, with at least one non-PIN config method
/// present (e.g. push-button only). That case is scored `Low` (0.2), the
/// same as the locked row, rather than `Medium`, since no PIN-configured
/// state exists to worry about.
pub fn evaluate_wps_risk(wps_info: Option<&WpsInfo>) -> (f64, WpsRiskTier) {
    let Some(info) = wps_info else {
        return (0.0, WpsRiskTier::None);
    };

    let supports_pin = info.supports_pin();
    let locked = info.locked.unwrap_or(false);
    let configured = matches!(info.wps_state, WpsState::Configured);

    if !supports_pin && !configured && info.config_methods.is_empty() {
        return (0.0, WpsRiskTier::None);
    }
    if supports_pin && !locked && configured {
        return (1.0, WpsRiskTier::Critical);
    }
    if supports_pin && !locked && !configured {
        return (0.8, WpsRiskTier::High);
    }
    if supports_pin && locked {
        return (0.6, WpsRiskTier::MediumHigh);
    }
    if !supports_pin && !locked && configured {
        return (0.4, WpsRiskTier::Medium);
    }
    (0.2, WpsRiskTier::Low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn info(methods: BTreeSet<netkit_model::WpsConfigMethod>, state: WpsState, locked: Option<bool>) -> WpsInfo {
        WpsInfo {
            config_methods: methods,
            wps_state: state,
            locked,
            device_name: None,
            manufacturer: None,
            model_name: None,
            version: None,
        }
    }

    #[test]
    fn no_wps_is_zero_risk() {
        assert_eq!(evaluate_wps_risk(None), (0.0, WpsRiskTier::None));
    }

    #[test]
    fn pin_unlocked_configured_is_critical() {
        let i = info(netkit_model::WpsConfigMethod::from_bitmask(0x0004), WpsState::Configured, Some(false));
        assert_eq!(evaluate_wps_risk(Some(&i)), (1.0, WpsRiskTier::Critical));
    }

    #[test]
    fn pin_unlocked_not_configured_is_high() {
        let i = info(netkit_model::WpsConfigMethod::from_bitmask(0x0004), WpsState::NotConfigured, Some(false));
        assert_eq!(evaluate_wps_risk(Some(&i)), (0.8, WpsRiskTier::High));
    }

    #[test]
    fn pin_locked_is_medium_high_regardless_of_state() {
        let i = info(netkit_model::WpsConfigMethod::from_bitmask(0x0004), WpsState::Configured, Some(true));
        assert_eq!(evaluate_wps_risk(Some(&i)), (0.6, WpsRiskTier::MediumHigh));
    }

    #[test]
    fn no_pin_unlocked_configured_is_medium() {
        let i = info(netkit_model::WpsConfigMethod::from_bitmask(0x0080), WpsState::Configured, Some(false));
        assert_eq!(evaluate_wps_risk(Some(&i)), (0.4, WpsRiskTier::Medium));
    }

    #[test]
    fn no_pin_locked_is_low() {
        let i = info(netkit_model::WpsConfigMethod::from_bitmask(0x0080), WpsState::NotConfigured, Some(true));
        assert_eq!(evaluate_wps_risk(Some(&i)), (0.2, WpsRiskTier::Low));
    }

    #[test]
    fn disabled_empty_is_zero() {
        let i = info(BTreeSet::new(), WpsState::NotConfigured, Some(false));
        assert_eq!(evaluate_wps_risk(Some(&i)), (0.0, WpsRiskTier::None));
    }
}
