// crates/core/src/chunk.rs
//! Chunk sizing, reading and the trailing-fragment check shared by the
//! chunked counters.

use std::{
    io::{self, ErrorKind, Read},
    sync::Arc,
};

use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Line delimiter. No other line ending is recognised.
pub const DELIMITER: u8 = b'\n';

/// Base chunk size of the primary counter (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Largest base read size a configuration may ask for (1 GiB).
pub const MAX_CHUNK_SIZE: usize = 1 << 30;

/// Largest count a `LineCount` may carry; mirrors the signed range.
pub const MAX_LINES: u64 = isize::MAX as u64;

/// One read's worth of bytes, shared between the worker that counts it and
/// the orchestrator that keeps the last one for the fragment check.
pub type Chunk = Arc<Vec<u8>>;

/// Growth policy for read buffers.
///
/// Chunk `i` (1-based) is allocated with `base * step * i` bytes, so the
/// number of chunks grows with the square root of the input size instead of
/// linearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkGrowth {
    base: usize,
    step: usize,
}

impl ChunkGrowth {
    /// Zero values are clamped to one byte.
    pub fn new(base: usize, step: usize) -> Self {
        Self { base: base.max(1), step: step.max(1) }
    }

    #[inline]
    pub const fn base(self) -> usize {
        self.base
    }

    #[inline]
    pub const fn step(self) -> usize {
        self.step
    }

    /// Size of the buffer for the given 1-based iteration.
    #[must_use]
    pub fn chunk_size(self, iteration: usize) -> usize {
        self.base.saturating_mul(self.step).saturating_mul(iteration.max(1))
    }

    /// Endless sequence of chunk sizes starting at iteration 1.
    pub fn sizes(self) -> impl Iterator<Item = usize> {
        (1..).map(move |iteration| self.chunk_size(iteration))
    }
}

impl Default for ChunkGrowth {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, 1)
    }
}

/// Reads at most `size` bytes into a freshly allocated buffer.
///
/// Returns `Ok(None)` at end of stream. `Interrupted` reads are retried; any
/// other error, including a buffer that cannot be allocated, becomes
/// `ReadFailure`.
pub fn read_chunk<R: Read + ?Sized>(reader: &mut R, size: usize) -> Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|e| {
        CountLinesError::read_failure(io::Error::new(
            ErrorKind::OutOfMemory,
            format!("cannot allocate a {size} byte chunk: {e}"),
        ))
    })?;
    buf.resize(size, 0);
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(read) => {
                buf.truncate(read);
                return Ok(Some(buf));
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(CountLinesError::read_failure(e)),
        }
    }
}

/// Reads `reader` to the end in chunks sized by `growth`, handing every chunk
/// to `dispatch` as soon as it is read.
///
/// Returns the last chunk read, or `None` when the stream was empty. Stops at
/// the first read error without dispatching anything further.
pub fn for_each_chunk<R, F>(reader: &mut R, growth: ChunkGrowth, mut dispatch: F) -> Result<Option<Chunk>>
where
    R: Read + ?Sized,
    F: FnMut(usize, Chunk),
{
    let mut last = None;
    for (index, size) in growth.sizes().enumerate() {
        let Some(buf) = read_chunk(reader, size)? else {
            break;
        };
        let chunk = Arc::new(buf);
        dispatch(index + 1, Arc::clone(&chunk));
        last = Some(chunk);
    }
    Ok(last)
}

/// Number of delimiters in `chunk`.
#[inline]
pub fn count_delimiters(chunk: &[u8]) -> u64 {
    bytecount::count(chunk, DELIMITER) as u64
}

/// Whether `chunk` ends with content after its last delimiter.
///
/// Zero bytes are skipped, so a zero-filled buffer never counts as a fragment.
pub fn has_fragment(chunk: &[u8]) -> bool {
    chunk
        .iter()
        .rev()
        .find(|&&byte| byte != 0)
        .is_some_and(|&byte| byte != DELIMITER)
}

/// Turns a raw delimiter total plus the fragment flag into the final count.
pub fn settle(delimiters: u64, fragment: bool) -> Result<LineCount> {
    let total = delimiters
        .checked_add(u64::from(fragment))
        .ok_or(CountLinesError::Overflow { count: delimiters })?;
    into_line_count(total)
}

/// Converts the unsigned accumulator into a `LineCount`, refusing totals
/// beyond `MAX_LINES`.
pub fn into_line_count(total: u64) -> Result<LineCount> {
    if total > MAX_LINES {
        return Err(CountLinesError::Overflow { count: total });
    }
    usize::try_from(total)
        .map(LineCount::new)
        .map_err(|_| CountLinesError::Overflow { count: total })
}
