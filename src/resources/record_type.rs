// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// The record types dnsly knows how to look up and present.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    TXT,
    SOA,
    PTR,
}

impl RecordType {
    /// All supported record types in canonical order; this is what `ALL` expands to.
    pub const ALL: [RecordType; 8] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::SOA,
        RecordType::PTR,
    ];

    #[inline]
    pub fn is_ptr(self) -> bool {
        self == RecordType::PTR
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl From<RecordType> for hickory_resolver::proto::rr::RecordType {
    fn from(rt: RecordType) -> Self {
        use hickory_resolver::proto::rr::RecordType as Hrt;

        match rt {
            RecordType::A => Hrt::A,
            RecordType::AAAA => Hrt::AAAA,
            RecordType::CNAME => Hrt::CNAME,
            RecordType::MX => Hrt::MX,
            RecordType::NS => Hrt::NS,
            RecordType::TXT => Hrt::TXT,
            RecordType::SOA => Hrt::SOA,
            RecordType::PTR => Hrt::PTR,
        }
    }
}

impl FromStr for RecordType {
    type Err = Error;

    /// Parses a record type case-insensitively; surrounding whitespace is ignored.
    fn from_str(str: &str) -> Result<Self> {
        match str.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "SOA" => Ok(RecordType::SOA),
            "PTR" => Ok(RecordType::PTR),
            _ => Err(Error::InvalidRecordType {
                token: str.trim().to_uppercase(),
            }),
        }
    }
}

impl From<RecordType> for &'static str {
    fn from(rt: RecordType) -> &'static str {
        match rt {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Into::<&str>::into(*self))
    }
}
