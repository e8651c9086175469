// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;

use tabwriter::TabWriter;

use super::styles::{CAPTION_PREFIX, ERROR_PREFIX, OK_PREFIX};
use super::*;
use crate::app::console::Fmt;
use crate::{RecordResult, RecordType};

static SOA_FIELDS: &[&str] = &["MNAME", "RNAME", "SERIAL", "REFRESH", "RETRY", "EXPIRE", "MINIMUM"];

#[derive(Debug, Default)]
pub struct TextOptions {
    /// One line per record instead of tables
    condensed: bool,
    /// Caption before each record type
    captions: bool,
    verbose: bool,
}

impl TextOptions {
    pub fn with_captions(self, captions: bool) -> TextOptions {
        TextOptions { captions, ..self }
    }

    pub fn with_verbose(self, verbose: bool) -> TextOptions {
        TextOptions { verbose, ..self }
    }
}

impl<'a> TryFrom<Vec<&'a str>> for TextOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        Ok(TextOptions {
            condensed: options.contains("condensed"),
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct TextFormat {
    opts: TextOptions,
}

impl TextFormat {
    pub fn new(opts: TextOptions) -> TextFormat {
        TextFormat { opts }
    }
}

impl OutputFormat for TextFormat {
    fn output<W: Write>(&self, writer: &mut W, report: &QueryReport) -> Result<()> {
        if self.opts.condensed {
            return output_condensed(writer, report);
        }

        for result in report.iter() {
            if self.opts.captions {
                writeln!(
                    writer,
                    "\n{}",
                    Fmt::emph(format!("{} {} records", &*CAPTION_PREFIX, result.record_type()))
                )?;
            }
            if result.success() {
                output_result(writer, report.domain(), result)?;
                if self.opts.verbose {
                    writeln!(writer, "\nQuery completed successfully")?;
                }
            } else if let Some(err) = result.error() {
                writeln!(writer, "{} Error: {}", Fmt::error(&*ERROR_PREFIX), err)?;
            }
        }

        Ok(())
    }
}

fn output_result<W: Write>(writer: &mut W, domain: &str, result: &RecordResult) -> Result<()> {
    writeln!(
        writer,
        "\n{} DNS Query Results for {}",
        Fmt::ok(&*OK_PREFIX),
        Fmt::emph(domain)
    )?;
    writeln!(writer, "  Record Type: {}", Fmt::attention(result.record_type()))?;
    writeln!(writer, "  Records Found: {}\n", Fmt::attention(result.count()))?;

    if result.records().is_empty() {
        writeln!(writer, "  (no records)")?;
        return Ok(());
    }

    let mut tw = TabWriter::new(&mut *writer).padding(2);
    match result.record_type() {
        RecordType::MX => {
            write_header(&mut tw, &["Priority", "Mail Server"])?;
            for record in result.records() {
                let (priority, exchange) = record.split_once(' ').unwrap_or(("", record.as_str()));
                writeln!(tw, "  {}\t{}", priority, exchange)?;
            }
        }
        RecordType::SOA => {
            write_header(&mut tw, &["Field", "Value"])?;
            for record in result.records() {
                for (field, value) in SOA_FIELDS.iter().zip(record.split_whitespace()) {
                    writeln!(tw, "  {}\t{}", field, value)?;
                }
            }
        }
        _ => {
            write_header(&mut tw, &["Record"])?;
            for record in result.records() {
                writeln!(tw, "  {}", record)?;
            }
        }
    }
    tw.flush()?;

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, columns: &[&str]) -> Result<()> {
    let underlines: Vec<_> = columns.iter().map(|x| "-".repeat(x.len())).collect();
    writeln!(writer, "  {}", columns.join("\t"))?;
    writeln!(writer, "  {}", underlines.join("\t"))?;

    Ok(())
}

fn output_condensed<W: Write>(writer: &mut W, report: &QueryReport) -> Result<()> {
    let mut tw = TabWriter::new(&mut *writer);
    for result in report.iter() {
        if let Some(err) = result.error() {
            writeln!(tw, "{}\tError: {}", result.record_type(), err)?;
        }
        for record in result.records() {
            writeln!(tw, "{}\t{}", result.record_type(), record)?;
        }
    }
    tw.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;
    use crate::resolver::LookupError;

    fn render(opts: TextOptions, report: &QueryReport) -> String {
        yansi::disable();
        let format = TextFormat::new(opts);
        let mut buf = Vec::new();
        format.output(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn mx_table_has_priority_and_mail_server() {
        crate::utils::tests::logging::init();
        let mut report = QueryReport::new("example.com");
        report.add(RecordResult::resolved(
            RecordType::MX,
            vec!["10 mail.example.com.".to_string(), "20 backup.example.com.".to_string()],
        ));

        let out = render(TextOptions::default(), &report);

        assert_that(&out).contains("DNS Query Results for example.com");
        assert_that(&out).contains("Records Found: 2");
        assert_that(&out).contains("Priority  Mail Server");
        assert_that(&out).contains("10        mail.example.com.");
    }

    #[test]
    fn soa_table_lists_fields() {
        crate::utils::tests::logging::init();
        let mut report = QueryReport::new("example.com");
        report.add(RecordResult::resolved(
            RecordType::SOA,
            vec!["ns.icann.org. noc.dns.icann.org. 2024081424 7200 3600 1209600 3600".to_string()],
        ));

        let out = render(TextOptions::default(), &report);

        assert_that(&out).contains("MNAME    ns.icann.org.");
        assert_that(&out).contains("SERIAL   2024081424");
        assert_that(&out).contains("MINIMUM  3600");
    }

    #[test]
    fn failures_print_error() {
        crate::utils::tests::logging::init();
        let mut report = QueryReport::new("nonexistent-domain-xyz.invalid");
        report.add(RecordResult::failed(RecordType::A, LookupError::NxDomain));

        let out = render(TextOptions::default(), &report);

        assert_that(&out).contains("Error: Domain does not exist");
        assert_that(&out.contains("DNS Query Results")).is_false();
    }

    #[test]
    fn captions_and_verbose() {
        crate::utils::tests::logging::init();
        let mut report = QueryReport::new("example.com");
        report.add(RecordResult::resolved(RecordType::A, vec!["93.184.216.34".to_string()]));
        report.add(RecordResult::resolved(RecordType::TXT, Vec::new()));
        let opts = TextOptions::default().with_captions(true).with_verbose(true);

        let out = render(opts, &report);

        assert_that(&out).contains("A records");
        assert_that(&out).contains("TXT records");
        assert_that(&out).contains("(no records)");
        assert_that(&out).contains("Query completed successfully");
    }

    #[test]
    fn condensed_is_one_line_per_record() {
        crate::utils::tests::logging::init();
        let mut report = QueryReport::new("example.com");
        report.add(RecordResult::resolved(
            RecordType::NS,
            vec!["a.iana-servers.net.".to_string(), "b.iana-servers.net.".to_string()],
        ));
        report.add(RecordResult::failed(RecordType::AAAA, LookupError::Timeout));
        let opts = TextOptions::try_from(vec!["condensed"]).unwrap();

        let out = render(opts, &report);

        assert_that(&out.lines().count()).is_equal_to(3);
        assert_that(&out).contains("NS    a.iana-servers.net.");
        assert_that(&out).contains("AAAA  Error: DNS query timed out");
    }
}
