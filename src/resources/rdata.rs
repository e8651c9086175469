// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Canonical text representations of answer records.

use hickory_resolver::proto::rr::rdata::{MX, SOA, TXT};
pub use hickory_resolver::proto::rr::RData;

use crate::RecordType;

/// Returns the record type of `rdata` if it is one of the supported types.
pub fn record_type(rdata: &RData) -> Option<RecordType> {
    match rdata {
        RData::A(_) => Some(RecordType::A),
        RData::AAAA(_) => Some(RecordType::AAAA),
        RData::CNAME(_) => Some(RecordType::CNAME),
        RData::MX(_) => Some(RecordType::MX),
        RData::NS(_) => Some(RecordType::NS),
        RData::TXT(_) => Some(RecordType::TXT),
        RData::SOA(_) => Some(RecordType::SOA),
        RData::PTR(_) => Some(RecordType::PTR),
        _ => None,
    }
}

/// Renders `rdata` as text, e.g. `10 mail.example.com.` for an MX record.
///
/// Returns `None` for record types dnsly does not present.
pub fn to_canonical_string(rdata: &RData) -> Option<String> {
    let str = match rdata {
        RData::A(a) => a.to_string(),
        RData::AAAA(aaaa) => aaaa.to_string(),
        RData::CNAME(name) => name.to_string(),
        RData::NS(name) => name.to_string(),
        RData::PTR(name) => name.to_string(),
        RData::MX(mx) => mx_to_string(mx),
        RData::TXT(txt) => txt_to_string(txt),
        RData::SOA(soa) => soa_to_string(soa),
        _ => return None,
    };

    Some(str)
}

fn mx_to_string(mx: &MX) -> String {
    format!("{} {}", mx.preference(), mx.exchange())
}

/// Multiple character strings are joined without separator
fn txt_to_string(txt: &TXT) -> String {
    txt.iter()
        .map(|x| String::from_utf8_lossy(x))
        .collect::<Vec<_>>()
        .join("")
}

fn soa_to_string(soa: &SOA) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        soa.mname(),
        soa.rname(),
        soa.serial(),
        soa.refresh(),
        soa.retry(),
        soa.expire(),
        soa.minimum()
    )
}
