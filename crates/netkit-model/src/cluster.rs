// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::bss::{BssObservation, Ssid};
use crate::error::{NetKitError, Result};

/// A cluster of BSS observations sharing a single SSID, i.e. a multi-AP
/// (or single-AP) Wi-Fi network as seen by the collector.
#[derive(Debug, Clone, PartialEq)]
pub struct ApCluster {
    pub cluster_id: String,
    pub ssid: Ssid,
    pub bssids: Vec<BssObservation>,
}

impl ApCluster {
    pub fn new(cluster_id: impl Into<String>, ssid: Ssid, bssids: Vec<BssObservation>) -> Result<Self> {
        if bssids.is_empty() {
            return Err(NetKitError::invalid("bssids", "cluster must contain at least one BSS"));
        }
        for bss in &bssids {
            if bss.ssid != ssid {
                return Err(NetKitError::invalid(
                    "bssids",
                    format!("BSS {} has SSID '{}', expected '{}'", bss.bssid, bss.ssid, ssid),
                ));
            }
        }
        Ok(ApCluster { cluster_id: cluster_id.into(), ssid, bssids })
    }

    pub fn is_multi_ap(&self) -> bool {
        self.bssids.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthType;
    use crate::band::{Band, ChannelWidth};
    use crate::bss::Bssid;
    use crate::fingerprint::SecurityFingerprint;
    use std::collections::BTreeSet;

    fn obs(bssid: &str, ssid: &str) -> BssObservation {
        BssObservation {
            bssid: Bssid::parse(bssid).unwrap(),
            ssid: Ssid::new(ssid).unwrap(),
            band: Band::Band5GHz,
            channel: 36,
            channel_width: ChannelWidth::Mhz80,
            rssi: -50,
            fingerprint: SecurityFingerprint::new(AuthType::Open, BTreeSet::new(), false, None).unwrap(),
            wps_info: None,
            pmf_capable: false,
            management_cipher: None,
        }
    }

    #[test]
    fn rejects_empty_cluster() {
        assert!(ApCluster::new("c1", Ssid::new("home").unwrap(), vec![]).is_err());
    }

    #[test]
    fn rejects_mismatched_ssid() {
        let bssids = vec![obs("AA:BB:CC:DD:EE:01", "home"), obs("AA:BB:CC:DD:EE:02", "other")];
        assert!(ApCluster::new("c1", Ssid::new("home").unwrap(), bssids).is_err());
    }

    #[test]
    fn multi_ap_flag() {
        let single = ApCluster::new("c1", Ssid::new("home").unwrap(), vec![obs("AA:BB:CC:DD:EE:01", "home")]).unwrap();
        assert!(!single.is_multi_ap());
        let multi = ApCluster::new(
            "c2",
            Ssid::new("home").unwrap(),
            vec![obs("AA:BB:CC:DD:EE:01", "home"), obs("AA:BB:CC:DD:EE:02", "home")],
        )
        .unwrap();
        assert!(multi.is_multi_ap());
    }
}
