// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! NetKit: a platform-independent library for turning observational data
//! about Wi-Fi deployments into quantitative assessments — security
//! scores, RF optimization plans, roaming advice, anomaly reports, and
//! comparative benchmarks. No packets are sent or received; every engine
//! here is a pure function over caller-supplied, pre-collected
//! measurements.
//!
//! This crate re-exports the public surface of every leaf engine so a
//! caller can depend on `netkit` alone, the way depending on `wlan-sme`
//! alone brings in the pieces of `wlan-rsn` a client needs without a
//! direct dependency on it.

pub mod model {
    pub use netkit_model::*;
}

pub mod security {
    pub use netkit_security::*;
}

pub mod rf {
    pub use netkit_rf::*;
}

pub mod steering {
    pub use netkit_steering::*;
}

pub mod mesh {
    pub use netkit_mesh::*;
}

pub mod roaming {
    pub use netkit_roaming::*;
}

pub mod analytics {
    pub use netkit_analytics::*;
}

pub mod charts {
    pub use netkit_charts::*;
}
