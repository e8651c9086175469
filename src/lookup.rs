// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Runs the lookups of a [`QueryRequest`].
//!
//! Record types are queried one after another. A failure of one record type is captured in its
//! [`RecordResult`] and never stops the lookups of the remaining types.

use tracing::{debug, info};

use crate::resolver::Resolve;
use crate::resources::rdata::{self, RData};
use crate::{QueryReport, QueryRequest, RecordResult, RecordType};

pub async fn lookup<R: Resolve>(resolver: &R, request: &QueryRequest) -> QueryReport {
    info!(
        "Looking up {} record types for '{}'.",
        request.num_record_types(),
        request.domain()
    );
    let mut report = QueryReport::new(request.domain());

    for record_type in request.record_types() {
        let result = lookup_record_type(resolver, request, *record_type).await;
        report.add(result);
    }

    info!(
        "Finished lookups for '{}' with {} of {} successful.",
        request.domain(),
        report.num_successes(),
        report.len()
    );
    report
}

pub async fn lookup_record_type<R: Resolve>(
    resolver: &R,
    request: &QueryRequest,
    record_type: RecordType,
) -> RecordResult {
    let name = request.query_name(record_type);
    match resolver.resolve(&name, record_type).await {
        Ok(answers) => {
            let records = normalize(&answers, record_type);
            debug!("{} lookup for '{}' returned {} records.", record_type, name, records.len());
            RecordResult::resolved(record_type, records)
        }
        Err(err) => {
            debug!("{} lookup for '{}' failed: {}", record_type, name, err);
            RecordResult::failed(record_type, err)
        }
    }
}

/// Renders the answers of `record_type` as text; answers of other types, e.g. a CNAME chain, are dropped.
pub fn normalize(answers: &[RData], record_type: RecordType) -> Vec<String> {
    answers
        .iter()
        .filter(|x| rdata::record_type(x) == Some(record_type))
        .filter_map(rdata::to_canonical_string)
        .collect()
}
