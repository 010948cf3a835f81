// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use failure::Fail;

/// Every fallible NetKit entry point returns one of these two kinds.
///
/// There is no third "unexpected" variant: domain anomalies (constant-valued
/// series, empty IDW neighborhoods, a zero baseline) are never errors, they
/// are sentinel values or structured findings returned inside `Ok`.
#[derive(Debug, Fail)]
pub enum NetKitError {
    #[fail(display = "invalid input: {} ({})", field, reason)]
    InvalidInput { field: &'static str, reason: String },

    #[fail(display = "insufficient data for {}: need {}, have {}", method, required, have)]
    InsufficientData { method: &'static str, required: usize, have: usize },
}

impl NetKitError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NetKitError::InvalidInput { field, reason: reason.into() }
    }

    pub fn insufficient(method: &'static str, required: usize, have: usize) -> Self {
        NetKitError::InsufficientData { method, required, have }
    }
}

pub type Result<T> = std::result::Result<T, NetKitError>;
