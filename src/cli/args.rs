// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use countline_core::chunk::DEFAULT_CHUNK_SIZE;

use super::value_enum::{CliOutputFormat, CliStrategy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cl",
    version = crate::VERSION,
    about = crate::ABOUT,
    override_usage = "cl [OPTIONS] <FILE>"
)]
pub struct Args {
    /// File to count
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Counting implementation
    #[arg(long, value_enum, default_value = "chunked")]
    pub strategy: CliStrategy,

    /// First read size in bytes (chunked strategies) or buffer size (buffered ones)
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: CliOutputFormat,
}
