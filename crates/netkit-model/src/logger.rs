// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// Caller-injected logging capability. No engine constructs a default
/// instance; it is always passed in, and the core only ever calls `warn`,
/// at most once per caught parser failure at the external-collaborator
/// boundary (malformed WPS IE, corrupt IE bytes).
pub trait Logger {
    fn trace(&self, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str, cause: Option<&dyn std::error::Error>);
    fn error(&self, message: &str, cause: Option<&dyn std::error::Error>);
}

/// Adapter forwarding to the ambient `log` facade. Provided for
/// convenience; callers wire it in explicitly, it is never reached for by
/// an engine implicitly.
pub struct LogFacadeLogger;

impl Logger for LogFacadeLogger {
    fn trace(&self, message: &str) {
        log::trace!("{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warn(&self, message: &str, cause: Option<&dyn std::error::Error>) {
        match cause {
            Some(e) => log::warn!("{}: {}", message, e),
            None => log::warn!("{}", message),
        }
    }

    fn error(&self, message: &str, cause: Option<&dyn std::error::Error>) {
        match cause {
            Some(e) => log::error!("{}: {}", message, e),
            None => log::error!("{}", message),
        }
    }
}
