// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeSet;

/// A single WPS configuration method, keyed to its bit position in the
/// 16-bit `configMethods` bitmask. Unknown bits are ignored by
/// `WpsConfigMethod::from_bitmask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WpsConfigMethod {
    Usb,
    Ethernet,
    Label,
    Display,
    ExternalNfcToken,
    IntegratedNfcToken,
    NfcInterface,
    PushButton,
    Keypad,
    VirtualDisplay,
    PhysicalDisplay,
}

impl WpsConfigMethod {
    const fn bit(self) -> u16 {
        match self {
            WpsConfigMethod::Usb => 0x0001,
            WpsConfigMethod::Ethernet => 0x0002,
            WpsConfigMethod::Label => 0x0004,
            WpsConfigMethod::Display => 0x0008,
            WpsConfigMethod::ExternalNfcToken => 0x0010,
            WpsConfigMethod::IntegratedNfcToken => 0x0020,
            WpsConfigMethod::NfcInterface => 0x0040,
            WpsConfigMethod::PushButton => 0x0080,
            WpsConfigMethod::Keypad => 0x0100,
            WpsConfigMethod::VirtualDisplay => 0x2000,
            WpsConfigMethod::PhysicalDisplay => 0x4000,
        }
    }

    const ALL: [WpsConfigMethod; 11] = [
        WpsConfigMethod::Usb,
        WpsConfigMethod::Ethernet,
        WpsConfigMethod::Label,
        WpsConfigMethod::Display,
        WpsConfigMethod::ExternalNfcToken,
        WpsConfigMethod::IntegratedNfcToken,
        WpsConfigMethod::NfcInterface,
        WpsConfigMethod::PushButton,
        WpsConfigMethod::Keypad,
        WpsConfigMethod::VirtualDisplay,
        WpsConfigMethod::PhysicalDisplay,
    ];

    /// Parses the 16-bit `configMethods` bitmask. Unknown bits are
    /// silently ignored.
    pub fn from_bitmask(mask: u16) -> BTreeSet<WpsConfigMethod> {
        Self::ALL.iter().copied().filter(|m| mask & m.bit() != 0).collect()
    }

    /// Methods that imply PIN entry is possible, used by WPS risk scoring's
    /// `supports_pin` predicate.
    pub fn is_pin_method(self) -> bool {
        matches!(
            self,
            WpsConfigMethod::Label
                | WpsConfigMethod::Display
                | WpsConfigMethod::Keypad
                | WpsConfigMethod::VirtualDisplay
                | WpsConfigMethod::PhysicalDisplay
        )
    }
}

/// WPS provisioning state, encoded on the wire as an integer: 1 =
/// `NotConfigured`, 2 = `Configured`. Any other value decodes to
/// `NotConfigured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WpsState {
    NotConfigured,
    Configured,
}

impl WpsState {
    pub fn from_wire(value: i32) -> Self {
        match value {
            2 => WpsState::Configured,
            _ => WpsState::NotConfigured,
        }
    }
}

/// Observed WPS configuration of a BSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WpsInfo {
    pub config_methods: BTreeSet<WpsConfigMethod>,
    pub wps_state: WpsState,
    pub locked: Option<bool>,
    pub device_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub version: Option<String>,
}

impl WpsInfo {
    pub fn supports_pin(&self) -> bool {
        self.config_methods.iter().any(|m| m.is_pin_method())
    }
}
