// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeSet;

use crate::auth::AuthType;
use crate::cipher::CipherSuite;
use crate::error::{NetKitError, Result};

/// Immutable security fingerprint of a single BSS.
///
/// Invariants, enforced at construction: `cipher_set` is non-empty for any
/// `auth_type != OPEN`; `pmf_required` implies `auth_type` is neither `OPEN`
/// nor `WEP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFingerprint {
    auth_type: AuthType,
    cipher_set: BTreeSet<CipherSuite>,
    pmf_required: bool,
    transition_mode: Option<(AuthType, AuthType)>,
}

impl SecurityFingerprint {
    pub fn new(
        auth_type: AuthType,
        cipher_set: BTreeSet<CipherSuite>,
        pmf_required: bool,
        transition_mode: Option<(AuthType, AuthType)>,
    ) -> Result<Self> {
        if auth_type != AuthType::Open && cipher_set.is_empty() {
            return Err(NetKitError::invalid(
                "cipher_set",
                "must be non-empty for any auth_type other than OPEN",
            ));
        }
        if pmf_required && matches!(auth_type, AuthType::Open | AuthType::Wep) {
            return Err(NetKitError::invalid(
                "pmf_required",
                "cannot be set for OPEN or WEP auth types",
            ));
        }
        Ok(SecurityFingerprint { auth_type, cipher_set, pmf_required, transition_mode })
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn cipher_set(&self) -> &BTreeSet<CipherSuite> {
        &self.cipher_set
    }

    pub fn pmf_required(&self) -> bool {
        self.pmf_required
    }

    pub fn transition_mode(&self) -> Option<(AuthType, AuthType)> {
        self.transition_mode
    }

    /// Strongest cipher present in the set, or `None` for an open network.
    pub fn strongest_cipher(&self) -> Option<CipherSuite> {
        self.cipher_set.iter().max_by_key(|c| c.strength()).copied()
    }

    /// True if a weak cipher coexists with a strong one ("mixed
    /// weakening").
    pub fn is_mixed_weakening(&self) -> bool {
        let has_weak = self.cipher_set.iter().any(|c| c.is_weak());
        let has_strong = self.cipher_set.iter().any(|c| !c.is_weak());
        has_weak && has_strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_network_allows_empty_ciphers() {
        let fp = SecurityFingerprint::new(AuthType::Open, BTreeSet::new(), false, None);
        assert!(fp.is_ok());
    }

    #[test]
    fn protected_network_requires_ciphers() {
        let fp = SecurityFingerprint::new(AuthType::Wpa2Psk, BTreeSet::new(), false, None);
        assert!(fp.is_err());
    }

    #[test]
    fn pmf_required_rejects_open_and_wep() {
        let mut ciphers = BTreeSet::new();
        ciphers.insert(CipherSuite::Wep40);
        assert!(SecurityFingerprint::new(AuthType::Wep, ciphers, true, None).is_err());
    }

    #[test]
    fn mixed_weakening_detected() {
        let mut ciphers = BTreeSet::new();
        ciphers.insert(CipherSuite::Tkip);
        ciphers.insert(CipherSuite::Ccmp);
        let fp = SecurityFingerprint::new(AuthType::Wpa2Psk, ciphers, false, None).unwrap();
        assert!(fp.is_mixed_weakening());
    }
}
