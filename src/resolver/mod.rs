// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::future::Future;
use std::net::IpAddr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use tracing::{debug, trace};

pub use error::LookupError;

use crate::resources::rdata::RData;
use crate::{RecordType, Result};

pub mod error;

pub type LookupResult = std::result::Result<Vec<RData>, LookupError>;

/// Capability to resolve a name for a single record type.
///
/// Implementations return the answer section as is; filtering and normalization happen in
/// [`crate::lookup`].
pub trait Resolve {
    fn resolve(&self, name: &str, record_type: RecordType) -> impl Future<Output = LookupResult>;
}

/// Resolver backed by `hickory-resolver` using its default options.
pub struct SystemResolver {
    inner: TokioResolver,
    source: Source,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    SystemConfig,
    NameServer(IpAddr),
}

impl SystemResolver {
    /// Creates a resolver from local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`.
    pub fn from_system_config() -> Result<SystemResolver> {
        let inner = TokioResolver::builder_tokio()?.build();
        debug!("Created resolver from system configuration.");

        Ok(SystemResolver {
            inner,
            source: Source::SystemConfig,
        })
    }

    /// Creates a resolver sending all queries to `ip` on port 53 via UDP with TCP fallback.
    pub fn with_nameserver(ip: IpAddr) -> SystemResolver {
        let name_servers = NameServerConfigGroup::from_ips_clear(&[ip], 53, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), name_servers);
        let inner = TokioResolver::builder_with_config(config, TokioConnectionProvider::default()).build();
        debug!("Created resolver for nameserver {}.", ip);

        SystemResolver {
            inner,
            source: Source::NameServer(ip),
        }
    }
}

impl Resolve for SystemResolver {
    async fn resolve(&self, name: &str, record_type: RecordType) -> LookupResult {
        trace!("Sending {} query for '{}' to {}.", record_type, name, self);
        let lookup = self
            .inner
            .lookup(name, record_type.into())
            .await
            .map_err(|err| LookupError::from_resolve_error(err, record_type))?;

        Ok(lookup.iter().cloned().collect())
    }
}

impl fmt::Display for SystemResolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.source {
            Source::SystemConfig => f.write_str("system nameservers"),
            Source::NameServer(ip) => write!(f, "nameserver {}", ip),
        }
    }
}
