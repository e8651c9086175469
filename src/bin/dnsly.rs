// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::env;

use tracing::{debug, error, info};

use dnsly::app::cli_parser::{create_parser, SUPPORTED_RECORD_TYPES};
use dnsly::app::console::{Console, ConsoleOpts};
use dnsly::app::logging::Logging;
use dnsly::app::output::styles;
use dnsly::app::{self, AppConfig, ExitStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let res = do_main().await;
    std::process::exit(res as i32);
}

async fn do_main() -> ExitStatus {
    let args = create_parser().get_matches();

    let color = !args.get_flag("no-color");
    if !color {
        styles::no_color_mode();
    }
    if args.get_flag("ascii") {
        styles::ascii_mode();
    }

    if let Err(err) = Logging::new(args.get_count("v"), env::var_os("RUST_LOG"), color).start() {
        eprintln!("Failed to set up logging: {:#}", err);
        return ExitStatus::UnrecoverableError;
    }
    info!("Set up logging.");

    let app_config = match AppConfig::try_from(&args) {
        Ok(config) => config,
        Err(err) => {
            let console = Console::new(ConsoleOpts::default());
            return match err.downcast_ref::<dnsly::Error>() {
                Some(dnsly_err) if dnsly_err.is_invalid_argument() => {
                    console.print_invalid_argument(dnsly_err, SUPPORTED_RECORD_TYPES);
                    ExitStatus::ConfigParsingFailed
                }
                _ => {
                    console.error(format!("Failed to parse configuration: {:#}", err));
                    ExitStatus::CliParsingFailed
                }
            };
        }
    };
    debug!("Parsed configuration: {:?}", app_config);

    match app::app::run(&app_config).await {
        Ok(exit_status) => exit_status,
        Err(err) => {
            error!("Unrecoverable error: {:#}", err);
            Console::new(ConsoleOpts::from(&app_config)).error(format!("{:#}", err));
            ExitStatus::UnrecoverableError
        }
    }
}
