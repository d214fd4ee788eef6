// src/cli/value_enum.rs
use clap::ValueEnum;
use countline_core::Strategy;

use crate::app::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliStrategy {
    Chunked,
    SmallChunks,
    ScopedThreads,
    Streaming,
    Sequential,
    LineReader,
    BufferedScan,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Chunked => Strategy::Chunked,
            CliStrategy::SmallChunks => Strategy::SmallChunks,
            CliStrategy::ScopedThreads => Strategy::ScopedThreads,
            CliStrategy::Streaming => Strategy::Streaming,
            CliStrategy::Sequential => Strategy::Sequential,
            CliStrategy::LineReader => Strategy::LineReader,
            CliStrategy::BufferedScan => Strategy::BufferedScan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_names_match_core_names() {
        for variant in CliStrategy::value_variants() {
            let name = variant.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(name.as_deref(), Some(Strategy::from(*variant).as_str()));
        }
    }
}
