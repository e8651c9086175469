// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::time::Duration;

use yansi::Paint;

use crate::app::output::styles::{self, ATTENTION_PREFIX, ERROR_PREFIX, INFO_PREFIX};
use crate::app::output::OutputType;
use crate::app::AppConfig;
use crate::{QueryReport, QueryRequest};

static BANNER: &str = r#"
 ██████╗ ███╗   ██╗███████╗██╗  ██╗   ██╗
 ██╔══██╗████╗  ██║██╔════╝██║  ╚██╗ ██╔╝
 ██║  ██║██╔██╗ ██║███████╗██║   ╚████╔╝
 ██║  ██║██║╚██╗██║╚════██║██║    ╚██╔╝
 ██████╔╝██║ ╚████║███████║███████╗██║
 ╚═════╝ ╚═╝  ╚═══╝╚══════╝╚══════╝╚═╝"#;

static ASCII_BANNER: &str = r#"
     _            _
  __| |_ __  ___ | |_   _
 / _` | '_ \/ __|| | | | |
| (_| | | | \__ \| | |_| |
 \__,_|_| |_|___/|_|\__, |
                    |___/"#;

#[derive(Debug, Default)]
pub struct ConsoleOpts {
    quiet: bool,
    verbose: bool,
    ascii: bool,
}

impl From<&AppConfig> for ConsoleOpts {
    fn from(app_config: &AppConfig) -> Self {
        ConsoleOpts {
            // JSON output must stay parseable, so there are no decorations
            quiet: app_config.quiet || app_config.output == OutputType::Json,
            verbose: app_config.verbosity > 0,
            ascii: app_config.ascii,
        }
    }
}

#[derive(Debug)]
pub struct Console {
    opts: ConsoleOpts,
}

impl Console {
    pub fn new(opts: ConsoleOpts) -> Console {
        Console { opts }
    }

    pub fn print_banner(&self) {
        if self.not_quiet() {
            let banner = if self.opts.ascii { ASCII_BANNER } else { BANNER };
            println!("{}", Fmt::banner(banner));
            println!(
                "{}\n",
                Fmt::dim(format!("DNS Insight Made Simple | v{}", env!("CARGO_PKG_VERSION")))
            );
        }
    }

    pub fn print_lookup_estimates<R: fmt::Display>(&self, request: &QueryRequest, resolver: &R) {
        if self.not_quiet() {
            let num_record_types = request.num_record_types();
            let (requests_str, record_types_str) = if num_record_types > 1 {
                (
                    format!("{} requests", num_record_types),
                    format!("{} record types", num_record_types),
                )
            } else {
                ("1 request".to_string(), "1 record type".to_string())
            };

            self.info(format!(
                "Sending {} to {} for {} of {}.",
                requests_str,
                resolver,
                record_types_str,
                request.domain()
            ));
        }
    }

    pub fn print_statistics(&self, report: &QueryReport, total_run_time: Duration) {
        if self.not_quiet() && self.opts.verbose {
            self.info(format!(
                "Received {} successful and {} failed responses within {} ms of total run time.",
                report.num_successes(),
                report.len() - report.num_successes(),
                total_run_time.as_millis()
            ));
        }
    }

    pub fn print_invalid_argument<T: fmt::Display>(&self, error: T, valid_record_types: &[&str]) {
        self.error(format!("{}", error));
        eprintln!("{} {}", Fmt::attention("Valid types:"), valid_record_types.join(", "));
    }

    /// Writes to stderr like [`Console::error`].
    pub fn print_cancelled(&self) {
        eprintln!("{} Operation cancelled by user", Fmt::attention(&*ATTENTION_PREFIX));
    }

    pub fn info<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", &*INFO_PREFIX, str.as_ref());
    }

    pub fn error<T: AsRef<str>>(&self, str: T) {
        eprintln!("{} {}", Fmt::error(&*ERROR_PREFIX), str.as_ref());
    }

    pub fn not_quiet(&self) -> bool {
        !self.opts.quiet
    }
}

pub struct Fmt {}

impl Fmt {
    pub fn emph<T: fmt::Display>(item: T) -> String {
        item.paint(styles::EMPH).to_string()
    }

    pub fn attention<T: fmt::Display>(item: T) -> String {
        item.paint(styles::ATTENTION).to_string()
    }

    pub fn error<T: fmt::Display>(item: T) -> String {
        item.paint(styles::ERROR).to_string()
    }

    pub fn ok<T: fmt::Display>(item: T) -> String {
        item.paint(styles::OK).to_string()
    }

    pub fn dim<T: fmt::Display>(item: T) -> String {
        item.paint(styles::DIM).to_string()
    }

    pub fn banner<T: fmt::Display>(item: T) -> String {
        item.paint(styles::BANNER).to_string()
    }
}
