// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::app::output::json::JsonOptions;
use crate::app::output::text::TextOptions;
use crate::app::output::{OutputConfig, OutputType};
use crate::query::parse_record_types;
use crate::{QueryRequest, RecordType};

#[derive(Debug)]
pub struct AppConfig {
    pub domain: String,
    pub record_types: Vec<RecordType>,
    pub nameserver: Option<IpAddr>,
    pub quiet: bool,
    pub verbosity: u8,
    pub no_color: bool,
    pub ascii: bool,
    pub output: OutputType,
    pub output_config: OutputConfig,
}

impl AppConfig {
    pub fn query_request(&self) -> crate::Result<QueryRequest> {
        QueryRequest::new(self.domain.as_str(), self.record_types.iter().copied())
    }
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let output = args
            .get_one::<String>("output")
            .map(|x| OutputType::try_from(x.as_str()).context("failed to parse output type"))
            .unwrap()?; // Safe unwrap, because of clap's default value
        let record_types = args
            .get_one::<String>("record-types")
            .map(|x| parse_record_types(x).context("failed to parse record types"))
            .unwrap()?; // Safe unwrap, because of clap's default value
        let verbosity = args.get_count("v");
        let quiet = args.get_flag("quiet");
        let captions = !quiet && record_types.len() > 1;

        let config = AppConfig {
            domain: args
                .get_one::<String>("domain")
                .context("No domain name to lookup specified")?
                .to_string(),
            record_types,
            nameserver: args.get_one::<IpAddr>("nameserver").copied(),
            quiet,
            verbosity,
            no_color: args.get_flag("no-color"),
            ascii: args.get_flag("ascii"),
            output_config: output_config(output, args, captions, verbosity > 0)?,
            output,
        };

        Ok(config)
    }
}

fn output_config(output_type: OutputType, args: &ArgMatches, captions: bool, verbose: bool) -> Result<OutputConfig> {
    let options: Vec<&str> = args
        .get_many::<String>("output-options")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    match output_type {
        OutputType::Json => {
            let options = JsonOptions::try_from(options).context("failed to parse json options")?;
            Ok(OutputConfig::json(options))
        }
        OutputType::Text => {
            let options = TextOptions::try_from(options)
                .context("failed to parse text options")?
                .with_captions(captions)
                .with_verbose(verbose);
            Ok(OutputConfig::text(options))
        }
    }
}
