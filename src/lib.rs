// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! dnsly looks up the common DNS record types of a domain in one go.
//!
//! The library side is small: a [`QueryRequest`] names a domain and an ordered set of
//! [`RecordType`]s, [`lookup::lookup`] resolves each type in turn against any [`resolver::Resolve`]
//! implementation and collects the normalized answers into a [`QueryReport`].
//!
//! # Example
//! ```no_run
//! # use dnsly::{lookup, QueryRequest, RecordType};
//! # use dnsly::resolver::SystemResolver;
//! # async fn run() -> dnsly::Result<()> {
//! let resolver = SystemResolver::from_system_config()?;
//! let request = QueryRequest::new("example.com", vec![RecordType::A, RecordType::MX])?;
//! let report = lookup::lookup(&resolver, &request).await;
//! for result in report.iter() {
//!     println!("{}: {:?}", result.record_type(), result.records());
//! }
//! # Ok(())
//! # }
//! ```

pub use error::{Error, Result};
pub use query::QueryRequest;
pub use report::{QueryReport, RecordResult};
pub use resources::RecordType;

#[cfg(feature = "app-cli")]
pub mod app;
pub mod error;
pub mod lookup;
pub mod query;
pub mod report;
pub mod resolver;
pub mod resources;
#[cfg(test)]
pub(crate) mod utils;
