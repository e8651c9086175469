// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use serde::Serialize;

use super::*;
use crate::{RecordResult, RecordType};

#[derive(Debug, Default)]
pub struct JsonOptions {
    /// Pretty formatting
    pretty: bool,
}

impl JsonOptions {
    pub fn pretty() -> JsonOptions {
        JsonOptions { pretty: true }
    }
}

#[derive(Debug, Default)]
pub struct JsonFormat {
    opts: JsonOptions,
}

impl JsonFormat {
    pub fn new(opts: JsonOptions) -> JsonFormat {
        JsonFormat { opts }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for JsonOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        Ok(JsonOptions {
            pretty: options.contains("pretty"),
        })
    }
}

/// One object per record type, flat with the queried domain
#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    success: bool,
    domain: &'a str,
    record_type: RecordType,
    records: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    count: usize,
}

impl<'a> JsonResult<'a> {
    fn new(domain: &'a str, result: &'a RecordResult) -> JsonResult<'a> {
        JsonResult {
            success: result.success(),
            domain,
            record_type: result.record_type(),
            records: result.records(),
            error: result.error().map(ToString::to_string),
            count: result.count(),
        }
    }
}

impl JsonFormat {
    fn write<W: Write, T: Serialize>(&self, writer: &mut W, data: &T) -> Result<()> {
        if self.opts.pretty {
            serde_json::to_writer_pretty(&mut *writer, data)?;
        } else {
            serde_json::to_writer(&mut *writer, data)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

impl OutputFormat for JsonFormat {
    /// A single record type is written as one object, multiple record types as an array of objects.
    fn output<W: Write>(&self, writer: &mut W, report: &QueryReport) -> Result<()> {
        let results: Vec<_> = report.iter().map(|x| JsonResult::new(report.domain(), x)).collect();
        match results.as_slice() {
            [single] => self.write(writer, single),
            _ => self.write(writer, &results),
        }
    }
}
