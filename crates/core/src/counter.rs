// crates/core/src/counter.rs
use std::{
    io::Read,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, trace};

use crate::{
    chunk::{ChunkGrowth, count_delimiters, for_each_chunk, has_fragment, settle},
    config::CounterConfig,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Something that counts `\n`-delimited lines in a byte stream.
pub trait LineCounter: Send + Sync {
    /// Counts the lines of `input`.
    ///
    /// An absent input fails with `InvalidInput` before any read happens. A
    /// read error aborts the whole count with `ReadFailure`.
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount>;
}

/// Counts the lines of `reader` with the default [`ChunkedCounter`].
///
/// # Errors
///
/// Returns `ReadFailure` if the reader fails and `Overflow` if the count does
/// not fit the result type.
pub fn count_lines<R: Read>(mut reader: R) -> Result<LineCount> {
    ChunkedCounter::default().count(Some(&mut reader))
}

/// Primary counter.
///
/// Reads the stream in growing chunks and counts every chunk on the rayon
/// pool while the next one is being read. Workers only touch their own chunk
/// and a per-call atomic total; the scope joins all of them before the
/// trailing fragment of the last chunk is settled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkedCounter {
    growth: ChunkGrowth,
}

impl ChunkedCounter {
    pub fn new(config: &CounterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_growth(config.growth()))
    }

    pub const fn with_growth(growth: ChunkGrowth) -> Self {
        Self { growth }
    }

    pub const fn growth(&self) -> ChunkGrowth {
        self.growth
    }

    fn count_reader(&self, reader: &mut dyn Read) -> Result<LineCount> {
        let total = AtomicU64::new(0);

        let last = rayon::in_place_scope(|scope| {
            let total = &total;
            for_each_chunk(reader, self.growth, move |index, chunk| {
                trace!("chunk #{index}: {} bytes dispatched", chunk.len());
                scope.spawn(move |_| {
                    total.fetch_add(count_delimiters(&chunk), Ordering::Relaxed);
                });
            })
        })?;

        let fragment = last.as_deref().is_some_and(|chunk| has_fragment(chunk));
        let lines = settle(total.into_inner(), fragment)?;
        debug!("chunked: {lines} lines (trailing fragment: {fragment})");
        Ok(lines)
    }
}

impl LineCounter for ChunkedCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        self.count_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;

    struct FailAfter {
        served: bool,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk went away"));
            }
            self.served = true;
            buf.fill(b'\n');
            Ok(buf.len())
        }
    }

    #[test]
    fn counts_across_many_small_chunks() {
        let data = "line\n".repeat(1000);
        let counter = ChunkedCounter::with_growth(ChunkGrowth::new(3, 1));
        let lines = counter.count(Some(&mut Cursor::new(data))).unwrap();
        assert_eq!(lines, 1000usize);
    }

    #[test]
    fn fragment_only_looks_at_last_chunk() {
        // "ab" lands in chunk #1 and "\n" alone in chunk #2.
        let counter = ChunkedCounter::with_growth(ChunkGrowth::new(2, 1));
        let lines = counter.count(Some(&mut Cursor::new(b"ab\n".to_vec()))).unwrap();
        assert_eq!(lines, 1usize);
    }

    #[test]
    fn partial_count_is_discarded_on_error() {
        let err = ChunkedCounter::default()
            .count(Some(&mut FailAfter { served: false }))
            .unwrap_err();
        assert!(matches!(err, CountLinesError::ReadFailure { .. }));
        assert!(err.to_string().contains("disk went away"));
    }

    #[test]
    fn zero_filled_input_has_no_lines() {
        let lines = count_lines(Cursor::new(vec![0u8; 1024])).unwrap();
        assert!(lines.is_zero());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CounterConfig::default().with_base_chunk_size(0);
        assert!(ChunkedCounter::new(&config).is_err());

        let config = CounterConfig::default().with_base_chunk_size(usize::MAX);
        assert!(matches!(
            ChunkedCounter::new(&config),
            Err(CountLinesError::InvalidConfiguration { .. })
        ));
    }
}
