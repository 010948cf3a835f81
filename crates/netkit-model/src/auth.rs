// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A BSS authentication/key-management type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthType {
    Open,
    Owe,
    Wep,
    WpaPsk,
    Wpa2Psk,
    Wpa2Enterprise,
    Wpa3Sae,
    Wpa3Enterprise,
    Wpa3Enterprise192,
}

impl AuthType {
    /// Whether this auth type requires Protected Management Frames.
    pub fn requires_pmf(self) -> bool {
        matches!(
            self,
            AuthType::Owe
                | AuthType::Wpa3Sae
                | AuthType::Wpa3Enterprise
                | AuthType::Wpa3Enterprise192
        )
    }

    /// Baseline authentication score on a 0-100 scale, the input to
    /// security scoring's authentication sub-score.
    pub fn baseline_score(self) -> u8 {
        match self {
            AuthType::Open => 0,
            AuthType::Wep => 5,
            AuthType::Owe => 55,
            AuthType::WpaPsk => 35,
            AuthType::Wpa2Psk => 65,
            AuthType::Wpa2Enterprise => 75,
            AuthType::Wpa3Sae => 95,
            AuthType::Wpa3Enterprise => 97,
            AuthType::Wpa3Enterprise192 => 100,
        }
    }

    /// Auth types considered deprecated for `DeprecatedAuthType` issue
    /// detection.
    pub fn is_deprecated(self) -> bool {
        matches!(self, AuthType::Wep | AuthType::WpaPsk)
    }

    pub fn is_wpa3(self) -> bool {
        matches!(
            self,
            AuthType::Wpa3Sae | AuthType::Wpa3Enterprise | AuthType::Wpa3Enterprise192
        )
    }

    pub fn is_wpa2(self) -> bool {
        matches!(self, AuthType::Wpa2Psk | AuthType::Wpa2Enterprise)
    }

    /// Whether this auth type is considered "modern" for compliance-tier
    /// and `modernPct` purposes (WPA2 or better, OWE for open deployments).
    pub fn is_modern(self) -> bool {
        matches!(
            self,
            AuthType::Owe
                | AuthType::Wpa2Psk
                | AuthType::Wpa2Enterprise
                | AuthType::Wpa3Sae
                | AuthType::Wpa3Enterprise
                | AuthType::Wpa3Enterprise192
        )
    }
}
