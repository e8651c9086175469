// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

#[allow(clippy::module_inception)]
pub mod app;
pub mod cli_parser;
pub mod config;
pub mod console;
pub mod logging;
pub mod output;

pub use config::AppConfig;

/// `ExitStatus` represents the exit states that will be return to the OS after termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// At least one record type has been resolved.
    Ok = 0,
    /// CLI argument parsing failed.
    CliParsingFailed = 1,
    /// Invalid record type or domain name.
    ConfigParsingFailed = 2,
    /// An unrecoverable error occurred, e.g. the resolver could not be created.
    UnrecoverableError = 3,
    /// Every requested record type failed.
    Failed = 10,
    /// Cancelled by the user.
    Abort = 12,
}
