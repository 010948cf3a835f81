// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Client steering and load-balancing engine (C5): band and AP steering
//! recommendations for individual clients, and fleet-wide load-imbalance
//! analysis across a cluster of APs.

pub mod ap_steering;
pub mod band_steering;
pub mod load_balance;

pub use ap_steering::{ap_score, recommend_ap, ApCandidate};
pub use band_steering::{band_score, recommend_band, BandCandidate, ClientCapabilities};
pub use load_balance::{
    analyze_load_balance, client_move_priority, ApLoad, ImbalanceClass, LoadBalanceAnalysis, TrafficClass,
};
