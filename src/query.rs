// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::net::IpAddr;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Error, RecordType, Result};

/// Wildcard token selecting all supported record types.
pub static ALL_TOKEN: &str = "ALL";

static MAX_DOMAIN_LEN: usize = 253;

lazy_static! {
    static ref DOMAIN_REGEX: Regex =
        Regex::new(r"^(?:[a-zA-Z0-9_](?:[a-zA-Z0-9_-]{0,61}[a-zA-Z0-9_])?\.)+[a-zA-Z]{2,63}$").unwrap(); // Safe unwrap, because the pattern is static
}

/// QueryRequest asks for the records of one domain for an ordered set of record types.
///
/// # Example
/// ```
/// # use dnsly::{QueryRequest, RecordType};
/// let request = QueryRequest::from_tokens("example.com", "a,MX").unwrap();
/// assert_eq!(request.record_types(), &[RecordType::A, RecordType::MX]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    domain: String,
    record_types: Vec<RecordType>,
}

impl QueryRequest {
    /// Creates a new request; duplicate record types collapse to their first occurrence.
    pub fn new<S: Into<String>, T: IntoIterator<Item = RecordType>>(domain: S, record_types: T) -> Result<QueryRequest> {
        let domain = domain.into();
        validate_domain(&domain)?;

        let mut unique = Vec::new();
        for record_type in record_types {
            if !unique.contains(&record_type) {
                unique.push(record_type);
            }
        }

        Ok(QueryRequest {
            domain,
            record_types: unique,
        })
    }

    /// Creates a new request from comma separated record type tokens like `A,MX` or `ALL`.
    pub fn from_tokens<S: Into<String>>(domain: S, tokens: &str) -> Result<QueryRequest> {
        let record_types = parse_record_types(tokens)?;
        QueryRequest::new(domain, record_types)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn record_types(&self) -> &[RecordType] {
        &self.record_types
    }

    pub fn num_record_types(&self) -> usize {
        self.record_types.len()
    }

    /// Returns the name to query for `record_type`.
    ///
    /// For PTR lookups of an IP address this is the reverse name, otherwise the domain itself.
    pub fn query_name(&self, record_type: RecordType) -> String {
        if !record_type.is_ptr() {
            return self.domain.clone();
        }
        match IpAddr::from_str(self.domain.trim_end_matches('.')) {
            Ok(ip) => reverse_name(ip),
            Err(_) => self.domain.clone(),
        }
    }
}

/// Parses comma separated record type tokens; `ALL` expands to [`RecordType::ALL`].
///
/// Duplicates are kept; [`QueryRequest::new`] removes them.
pub fn parse_record_types(tokens: &str) -> Result<Vec<RecordType>> {
    let mut record_types = Vec::new();
    for token in tokens.split(',').map(str::trim) {
        if token.eq_ignore_ascii_case(ALL_TOKEN) {
            record_types.extend_from_slice(&RecordType::ALL);
        } else {
            record_types.push(RecordType::from_str(token)?);
        }
    }

    Ok(record_types)
}

/// Checks that `domain` is either an IP address or a syntactically valid host name.
pub fn validate_domain(domain: &str) -> Result<()> {
    let invalid = |why: &'static str| Error::InvalidDomain {
        domain: domain.to_string(),
        why,
    };

    let name = domain.strip_suffix('.').unwrap_or(domain);
    if name.is_empty() {
        return Err(invalid("domain is empty"));
    }
    if name.len() > MAX_DOMAIN_LEN {
        return Err(invalid("domain is longer than 253 characters"));
    }
    if IpAddr::from_str(name).is_ok() || DOMAIN_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(invalid("invalid domain format"))
    }
}

/// Builds the `in-addr.arpa.` or `ip6.arpa.` name for a reverse lookup of `ip`.
pub fn reverse_name(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(ip) => {
            let octets: Vec<_> = ip.octets().iter().rev().map(ToString::to_string).collect();
            format!("{}.in-addr.arpa.", octets.join("."))
        }
        IpAddr::V6(ip) => {
            let nibbles: Vec<_> = ip
                .octets()
                .iter()
                .rev()
                .flat_map(|x| [x & 0x0f, x >> 4])
                .map(|x| format!("{:x}", x))
                .collect();
            format!("{}.ip6.arpa.", nibbles.join("."))
        }
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn tokens_keep_request_order() {
        crate::utils::tests::logging::init();

        let request = QueryRequest::from_tokens("example.com", "MX,a");

        assert_that(&request)
            .is_ok()
            .map(|x| &x.record_types)
            .is_equal_to(vec![RecordType::MX, RecordType::A]);
    }

    #[test]
    fn all_expands_to_eight_types() {
        crate::utils::tests::logging::init();

        let request = QueryRequest::from_tokens("example.com", "all").unwrap();

        assert_that(&request.record_types().to_vec()).is_equal_to(RecordType::ALL.to_vec());
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        crate::utils::tests::logging::init();

        let request = QueryRequest::from_tokens("example.com", "MX,ALL,A").unwrap();

        assert_that(&request.num_record_types()).is_equal_to(8);
        assert_that(&request.record_types()[0]).is_equal_to(RecordType::MX);
        assert_that(&request.record_types()[1]).is_equal_to(RecordType::A);
    }

    #[test]
    fn invalid_token_is_rejected() {
        crate::utils::tests::logging::init();

        let res = parse_record_types("A,SRV");

        assert_that(&res).is_err();
        assert_that(&res.unwrap_err().is_invalid_argument()).is_true();
    }

    #[test]
    fn empty_token_is_rejected() {
        crate::utils::tests::logging::init();

        assert_that(&parse_record_types("A,,MX")).is_err();
        assert_that(&parse_record_types("")).is_err();
    }

    #[test]
    fn valid_domains() {
        crate::utils::tests::logging::init();

        for domain in &[
            "example.com",
            "example.com.",
            "www.sub-domain.example.co.uk",
            "_dmarc.example.com",
            "nonexistent-domain-xyz.invalid",
            "8.8.8.8",
            "2001:4860:4860::8888",
        ] {
            asserting(domain).that(&validate_domain(domain)).is_ok();
        }
    }

    #[test]
    fn invalid_domains() {
        crate::utils::tests::logging::init();
        let too_long = format!("{}.com", "a.".repeat(130));

        for domain in &["", ".", "localhost", "-example.com", "exa mple.com", "example.c0m", too_long.as_str()] {
            asserting(domain).that(&validate_domain(domain)).is_err();
        }
    }

    #[test]
    fn ptr_of_ip_queries_reverse_name() {
        crate::utils::tests::logging::init();

        let request = QueryRequest::new("8.8.4.4", vec![RecordType::A, RecordType::PTR]).unwrap();

        assert_that(&request.query_name(RecordType::PTR)).is_equal_to("4.4.8.8.in-addr.arpa.".to_string());
        assert_that(&request.query_name(RecordType::A)).is_equal_to("8.8.4.4".to_string());
    }

    #[test]
    fn ptr_of_name_queries_name() {
        crate::utils::tests::logging::init();

        let request = QueryRequest::new("example.com", vec![RecordType::PTR]).unwrap();

        assert_that(&request.query_name(RecordType::PTR)).is_equal_to("example.com".to_string());
    }

    #[test]
    fn reverse_name_ipv6() {
        crate::utils::tests::logging::init();

        let name = reverse_name(IpAddr::from_str("2001:db8::567:89ab").unwrap());

        assert_that(&name)
            .is_equal_to("b.a.9.8.7.6.5.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.".to_string());
    }
}
