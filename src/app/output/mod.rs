// Copyright 2026 dnsly developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::convert::TryFrom;
use std::io::{self, Write};

use anyhow::Context;

use crate::{Error, QueryReport, Result};

pub mod json;
pub mod styles;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Json,
    Text,
}

impl TryFrom<&str> for OutputType {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value {
            "json" => Ok(OutputType::Json),
            "text" => Ok(OutputType::Text),
            _ => Err(Error::ParserError {
                what: value.to_string(),
                to: "OutputType",
                why: "invalid output type".to_string(),
            }),
        }
    }
}

pub trait OutputFormat {
    fn output<W: Write>(&self, writer: &mut W, report: &QueryReport) -> Result<()>;
}

#[derive(Debug)]
pub enum OutputConfig {
    Json { format: json::JsonFormat },
    Text { format: text::TextFormat },
}

impl OutputConfig {
    pub fn json(opts: json::JsonOptions) -> Self {
        OutputConfig::Json {
            format: json::JsonFormat::new(opts),
        }
    }

    pub fn text(opts: text::TextOptions) -> Self {
        OutputConfig::Text {
            format: text::TextFormat::new(opts),
        }
    }

    pub fn output_type(&self) -> OutputType {
        match self {
            OutputConfig::Json { .. } => OutputType::Json,
            OutputConfig::Text { .. } => OutputType::Text,
        }
    }
}

#[derive(Debug)]
pub struct Output<'a> {
    config: &'a OutputConfig,
}

impl Output<'_> {
    pub fn new(config: &OutputConfig) -> Output {
        Output { config }
    }
}

impl OutputFormat for Output<'_> {
    fn output<W: Write>(&self, writer: &mut W, report: &QueryReport) -> Result<()> {
        match self.config {
            OutputConfig::Json { format } => format.output(writer, report),
            OutputConfig::Text { format } => format.output(writer, report),
        }
    }
}

/// Writes `report` to stdout
pub fn output(config: &OutputConfig, report: &QueryReport) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let output = Output::new(config);
    output
        .output(&mut handle, report)
        .context("Failed to print results to stdout.")
}
