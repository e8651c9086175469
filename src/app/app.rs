// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::console::{Console, ConsoleOpts};
use crate::app::{output, AppConfig, ExitStatus};
use crate::lookup::lookup;
use crate::resolver::SystemResolver;
use crate::QueryReport;

pub async fn run(app_config: &AppConfig) -> Result<ExitStatus> {
    let console = Console::new(ConsoleOpts::from(app_config));
    console.print_banner();

    let request = match app_config.query_request() {
        Ok(request) => request,
        Err(err) => {
            console.error(err.to_string());
            return Ok(ExitStatus::ConfigParsingFailed);
        }
    };
    info!(
        "Prepared query for {} with {} record types.",
        request.domain(),
        request.num_record_types()
    );

    let resolver = match app_config.nameserver {
        Some(ip) => SystemResolver::with_nameserver(ip),
        None => SystemResolver::from_system_config().context("Failed to create system resolver")?,
    };
    debug!("Created resolver using {}.", resolver);

    console.print_lookup_estimates(&request, &resolver);

    let start_time = Instant::now();
    let report: QueryReport = tokio::select! {
        report = lookup(&resolver, &request) => report,
        _ = tokio::signal::ctrl_c() => {
            info!("Received interrupt; aborting lookups.");
            console.print_cancelled();
            return Ok(ExitStatus::Abort);
        }
    };
    let total_run_time = Instant::now() - start_time;
    info!("Finished lookups.");

    console.print_statistics(&report, total_run_time);

    output::output(&app_config.output_config, &report)?;

    if report.has_success() {
        Ok(ExitStatus::Ok)
    } else {
        Ok(ExitStatus::Failed)
    }
}
