// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A cipher suite as observed in a BSS's security fingerprint.
///
/// Strength indices below are fixed points from the scoring spec, not a
/// derived formula: `WEP_40 = 0`, `TKIP = 15`, `CCMP = 70`, `GCMP_256 = 95`,
/// `BIP_GMAC_256 = 98`. The remaining suites are interpolated to stay
/// monotonic with their family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CipherSuite {
    Wep40,
    Wep104,
    Tkip,
    Ccmp,
    Gcmp,
    Gcmp256,
    BipCmac128,
    BipGmac128,
    BipGmac256,
}

impl CipherSuite {
    /// Strength index on a 0-100 scale, used directly by security scoring.
    pub fn strength(self) -> u8 {
        match self {
            CipherSuite::Wep40 => 0,
            CipherSuite::Wep104 => 5,
            CipherSuite::Tkip => 15,
            CipherSuite::Ccmp => 70,
            CipherSuite::Gcmp => 80,
            CipherSuite::Gcmp256 => 95,
            CipherSuite::BipCmac128 => 60,
            CipherSuite::BipGmac128 => 85,
            CipherSuite::BipGmac256 => 98,
        }
    }

    /// Ciphers considered legacy/weak enough to trigger `WepInUse`,
    /// `TkipInUse`, or `LegacyCipher` issues, and the "mixed weakening"
    /// penalty when coexisting with a strong cipher.
    pub fn is_weak(self) -> bool {
        matches!(
            self,
            CipherSuite::Wep40 | CipherSuite::Wep104 | CipherSuite::Tkip
        )
    }

    /// Management-frame-protection ciphers (BIP family), as opposed to
    /// data-confidentiality ciphers.
    pub fn is_management_cipher(self) -> bool {
        matches!(
            self,
            CipherSuite::BipCmac128 | CipherSuite::BipGmac128 | CipherSuite::BipGmac256
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_strength_points() {
        assert_eq!(CipherSuite::Wep40.strength(), 0);
        assert_eq!(CipherSuite::Tkip.strength(), 15);
        assert_eq!(CipherSuite::Ccmp.strength(), 70);
        assert_eq!(CipherSuite::Gcmp256.strength(), 95);
        assert_eq!(CipherSuite::BipGmac256.strength(), 98);
    }

    #[test]
    fn weak_classification() {
        assert!(CipherSuite::Wep40.is_weak());
        assert!(CipherSuite::Tkip.is_weak());
        assert!(!CipherSuite::Ccmp.is_weak());
    }
}
