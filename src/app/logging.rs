// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

pub struct Logging {
    verbosity: u8,
    rust_log: Option<OsString>,
    color: bool,
}

impl Logging {
    pub fn new(verbosity: u8, rust_log: Option<OsString>, color: bool) -> Logging {
        Logging {
            verbosity,
            rust_log,
            color,
        }
    }

    fn log_level(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn start(self) -> Result<()> {
        // Subscribe to all log crate log messages and transform them to a tracing events
        LogTracer::init()?;

        let log_level = Logging::log_level(self.verbosity);
        let filter = if self.rust_log.is_some() {
            // RUST_LOG overrides the verbosity flags
            EnvFilter::from_default_env()
        } else {
            EnvFilter::from(format!("{}={}", env!("CARGO_CRATE_NAME"), log_level))
        };

        // Stdout belongs to the results
        let fmt = fmt::layer()
            .with_ansi(self.color)
            .with_target(self.verbosity > 2)
            .with_writer(io::stderr);

        let registry = tracing_subscriber::registry().with(filter).with(fmt);
        set_global_default(registry)?;

        Ok(())
    }
}
