// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! This file is used by the build script to generate shell completions. Therefore it must only depend on clap.

use std::net::IpAddr;

use clap::{crate_name, value_parser, Arg, ArgAction, Command};

pub static SUPPORTED_RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "NS", "TXT", "SOA", "PTR"];

pub static SUPPORTED_OUTPUT_FORMATS: &[&str] = &["text", "json"];

pub fn create_parser() -> Command {
    Command::new(crate_name!())
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("domain")
                .index(1)
                .required(true)
                .value_name("DOMAIN")
                .help("Domain name to query")
                .long_help(
                    "* DOMAIN may be any valid DNS name, e.g., example.com
* IP ADDR may be any valid IPv4 or IPv6 address, e.g., 8.8.8.8; PTR lookups query its reverse name",
                ),
        )
        .arg(
            Arg::new("record-types")
                .short('t')
                .long("type")
                .value_name("TYPES")
                .default_value("A")
                .help("DNS record type(s) to query (comma-separated or ALL)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(SUPPORTED_OUTPUT_FORMATS.to_vec())
                .help("Sets the output format for result presentation"),
        )
        .arg(
            Arg::new("output-options")
                .long("output-options")
                .value_name("OPTIONS")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .default_value_if("output", "json", Some("pretty"))
                .default_value_if("output", "text", Some("human"))
                .help("Sets output options")
                .long_help(
                    "* Json: 'pretty': Prettifies output
* Text: 'human': Prints records as tables, 'condensed': Prints one line per record",
                ),
        )
        .arg(
            Arg::new("nameserver")
                .short('s')
                .long("nameserver")
                .value_name("IP ADDR")
                .value_parser(value_parser!(IpAddr))
                .help("Sends queries to this nameserver instead of the system nameservers"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode (no banner)"),
        )
        // Also checked before AppConfig exists, in `dnsly.rs`, to disable colors for logging.
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disables colorful output"),
        )
        // Checked during setup in `dnsly.rs`; sets the global AtomicBool `dnsly::app::output::styles::ASCII_MODE`.
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Uses only ASCII compatible characters for output"),
        )
        .arg(
            Arg::new("v")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Enables verbose output; repeat to increase log level"),
        )
        .after_help(format!(
            "Examples:
  dnsly example.com                    # Query A records
  dnsly example.com -t MX              # Query MX records
  dnsly example.com -t A,AAAA,MX       # Query multiple record types
  dnsly example.com -t ALL             # Query all supported record types
  dnsly example.com -o json            # Output as JSON
  dnsly example.com -v                 # Verbose output
  dnsly example.com -q                 # Quiet mode (no banner)

Supported Record Types:
  {}",
            SUPPORTED_RECORD_TYPES.join(", ")
        ))
}
