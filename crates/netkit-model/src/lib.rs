// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Shared domain model for the NetKit analytical engines: BSS, fingerprint,
//! cluster, band, cipher, auth type, regulatory domain, plus the caller-
//! injected `Logger` capability and the one `NetKitError` type every
//! fallible entry point in the workspace returns.
//!
//! All types here are immutable value objects; equality is structural.
//! Nothing in this crate performs I/O or owns long-lived state.

pub mod auth;
pub mod band;
pub mod bss;
pub mod cipher;
pub mod cluster;
pub mod error;
pub mod fingerprint;
pub mod logger;
pub mod network;
pub mod timeseries;

pub use auth::AuthType;
pub use band::{Band, ChannelWidth};
pub use bss::{Bssid, BssObservation, Ssid};
pub use cipher::CipherSuite;
pub use cluster::ApCluster;
pub use error::{NetKitError, Result};
pub use fingerprint::SecurityFingerprint;
pub use logger::{LogFacadeLogger, Logger};
pub use network::{NeighborNetwork, NetworkObservation, RadarEvent, RadarHistory, RegulatoryDomain, TableRegulatoryDomain};
pub use timeseries::{DataPoint, ScanPoint, TimeSeries};
pub use wps::{WpsConfigMethod, WpsInfo, WpsState};

pub mod wps;
