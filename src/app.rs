// src/app.rs
use std::{fs::File, path::PathBuf};

use log::debug;
use serde::Serialize;

use crate::{cli::Args, error::{AppError, Result}};
use countline_core::{CounterConfig, ErrorContext, LineCount, Strategy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare count
    #[default]
    Plain,
    Json,
}

/// Outcome of one counted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub lines: LineCount,
    pub strategy: Strategy,
}

/// Opens the file named by `args` and counts its lines.
pub fn run(args: &Args) -> Result<Report> {
    let strategy = Strategy::from(args.strategy);
    let config = CounterConfig::default().with_base_chunk_size(args.chunk_size);
    let counter = strategy.counter(&config)?;

    let mut file = File::open(&args.file).map_err(|source| AppError::Open {
        path: args.file.clone(),
        source,
    })?;
    debug!("counting {} with {strategy}", args.file.display());

    let lines = counter
        .count(Some(&mut file))
        .with_context(|| format!("failed to count '{}'", args.file.display()))?;

    Ok(Report { path: args.file.clone(), lines, strategy })
}

/// Renders `report` for stdout, without a trailing newline.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(report.lines.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}
