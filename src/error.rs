// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

#[derive(Debug, Error)]
/// Main Error type of this crate.
///
/// Failures of single lookups are not represented here, cf. [`crate::resolver::LookupError`].
pub enum Error {
    #[error("Invalid record type: {token}")]
    InvalidRecordType { token: String },
    #[error("Invalid domain '{domain}': {why}")]
    InvalidDomain { domain: String, why: &'static str },
    #[error("failed to parse '{what}' to {to} because {why}")]
    ParserError {
        what: String,
        to: &'static str,
        why: String,
    },
    #[error("failed to create resolver")]
    ResolverError {
        #[from]
        source: hickory_resolver::ResolveError,
    },
    #[error("failed to execute IO operation")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize to JSON")]
    SerJsonError {
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether this error stems from invalid user input, i.e., a bad record type or domain.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidRecordType { .. } | Error::InvalidDomain { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
