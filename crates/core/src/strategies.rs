// crates/core/src/strategies.rs
//! Alternate counter implementations, kept side by side with the primary
//! [`ChunkedCounter`] for benchmarking.

pub mod buffered_scan;
pub mod line_reader;
pub mod scoped_threads;
pub mod sequential;
pub mod streaming;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use buffered_scan::BufferedScanCounter;
pub use line_reader::LineReaderCounter;
pub use scoped_threads::ScopedThreadCounter;
pub use sequential::SequentialCounter;
pub use streaming::StreamingCounter;

use crate::{
    chunk::ChunkGrowth,
    config::CounterConfig,
    counter::{ChunkedCounter, LineCounter},
};
use countline_shared_kernel::Result;

/// Base size and step of the `small-chunks` variant.
pub const SMALL_CHUNK_SIZE: usize = 1024;
pub const SMALL_CHUNK_STEP: usize = 2;

/// Selects one of the counter implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Growing chunks counted on the rayon pool
    #[default]
    Chunked,
    /// Same as `Chunked`, starting at 1 KiB and doubling the step
    SmallChunks,
    /// Same as `Chunked`, one scoped OS thread per chunk
    ScopedThreads,
    /// `io::copy` into a counting sink
    Streaming,
    /// One reused buffer scanned on the calling thread
    Sequential,
    /// One `read_until` call per line
    LineReader,
    /// `fill_buf`/`consume` over a `BufReader`
    BufferedScan,
}

impl Strategy {
    pub const ALL: [Self; 7] = [
        Self::Chunked,
        Self::SmallChunks,
        Self::ScopedThreads,
        Self::Streaming,
        Self::Sequential,
        Self::LineReader,
        Self::BufferedScan,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chunked => "chunked",
            Self::SmallChunks => "small-chunks",
            Self::ScopedThreads => "scoped-threads",
            Self::Streaming => "streaming",
            Self::Sequential => "sequential",
            Self::LineReader => "line-reader",
            Self::BufferedScan => "buffered-scan",
        }
    }

    /// Builds the counter for this strategy.
    ///
    /// `small-chunks` and `streaming` have fixed settings and ignore `config`
    /// apart from validating it.
    pub fn counter(self, config: &CounterConfig) -> Result<Box<dyn LineCounter>> {
        config.validate()?;
        let counter: Box<dyn LineCounter> = match self {
            Self::Chunked => Box::new(ChunkedCounter::new(config)?),
            Self::SmallChunks => Box::new(ChunkedCounter::with_growth(ChunkGrowth::new(
                SMALL_CHUNK_SIZE,
                SMALL_CHUNK_STEP,
            ))),
            Self::ScopedThreads => Box::new(ScopedThreadCounter::new(config.growth())),
            Self::Streaming => Box::new(StreamingCounter),
            Self::Sequential => Box::new(SequentialCounter::new(config.base_chunk_size)),
            Self::LineReader => Box::new(LineReaderCounter::new(config.base_chunk_size)),
            Self::BufferedScan => Box::new(BufferedScanCounter::new(config.base_chunk_size)),
        };
        Ok(counter)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| format!("Unknown strategy: {s}"))
    }
}
