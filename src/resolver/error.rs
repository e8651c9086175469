// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::proto::ProtoErrorKind;
use hickory_resolver::{ResolveError, ResolveErrorKind};
use serde::Serialize;
use thiserror::Error;

use crate::RecordType;

/// Failure of a single lookup.
///
/// The kinds stay distinct because users need to tell a missing domain from a missing record type
/// or an unreachable nameserver.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LookupError {
    #[error("Domain does not exist")]
    NxDomain,
    #[error("No {record_type} records found")]
    NoRecords { record_type: RecordType },
    #[error("DNS query timed out")]
    Timeout,
    #[error("DNS error: {reason}")]
    ResolveError { reason: String },
}

impl LookupError {
    pub fn from_resolve_error(error: ResolveError, record_type: RecordType) -> Self {
        // NXDOMAIN is a special case of "no records found", so it must be checked first
        if error.is_nx_domain() {
            return LookupError::NxDomain;
        }
        if error.is_no_records_found() {
            return LookupError::NoRecords { record_type };
        }
        match error.kind() {
            ResolveErrorKind::Proto(proto_error) if matches!(proto_error.kind(), ProtoErrorKind::Timeout) => {
                LookupError::Timeout
            }
            _ => LookupError::ResolveError {
                reason: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use hickory_resolver::proto::op::{Query, ResponseCode};
    use hickory_resolver::proto::rr::Name;
    use hickory_resolver::proto::ProtoError;
    use spectral::prelude::*;

    use super::*;

    fn negative_response(response_code: ResponseCode, record_type: RecordType) -> ResolveError {
        let query = Query::query(Name::from_str("example.com.").unwrap(), record_type.into());
        ResolveError::from(ProtoError::nx_error(
            Box::new(query),
            None,
            None,
            None,
            response_code,
            false,
            None,
        ))
    }

    #[test]
    fn nx_domain_is_recognized() {
        crate::utils::tests::logging::init();
        let error = negative_response(ResponseCode::NXDomain, RecordType::A);

        let lookup_error = LookupError::from_resolve_error(error, RecordType::A);

        assert_that(&lookup_error).is_equal_to(LookupError::NxDomain);
        assert_that(&lookup_error.to_string()).is_equal_to("Domain does not exist".to_string());
    }

    #[test]
    fn empty_answer_is_no_records() {
        crate::utils::tests::logging::init();
        let error = negative_response(ResponseCode::NoError, RecordType::MX);

        let lookup_error = LookupError::from_resolve_error(error, RecordType::MX);

        assert_that(&lookup_error).is_equal_to(LookupError::NoRecords {
            record_type: RecordType::MX,
        });
        assert_that(&lookup_error.to_string()).is_equal_to("No MX records found".to_string());
    }

    #[test]
    fn timeout_is_recognized() {
        crate::utils::tests::logging::init();
        let error = ResolveError::from(ProtoError::from(ProtoErrorKind::Timeout));

        let lookup_error = LookupError::from_resolve_error(error, RecordType::A);

        assert_that(&lookup_error).is_equal_to(LookupError::Timeout);
    }

    #[test]
    fn other_errors_keep_reason() {
        crate::utils::tests::logging::init();
        let error = ResolveError::from("no connections available");

        let lookup_error = LookupError::from_resolve_error(error, RecordType::MX);

        assert_that(&lookup_error.to_string()).starts_with("DNS error: ");
        assert_that(&lookup_error.to_string()).contains("no connections available");
    }

    #[test]
    fn user_facing_texts_differ_per_kind() {
        crate::utils::tests::logging::init();

        assert_that(&LookupError::NxDomain.to_string()).is_equal_to("Domain does not exist".to_string());
        assert_that(
            &LookupError::NoRecords {
                record_type: RecordType::MX,
            }
            .to_string(),
        )
        .is_equal_to("No MX records found".to_string());
        assert_that(&LookupError::Timeout.to_string()).is_equal_to("DNS query timed out".to_string());
    }
}
