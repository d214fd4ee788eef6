// crates/core/src/strategies/scoped_threads.rs
use std::{
    io::Read,
    sync::atomic::{AtomicU64, Ordering},
    thread,
};

use log::debug;

use crate::{
    chunk::{ChunkGrowth, count_delimiters, for_each_chunk, has_fragment, settle},
    counter::LineCounter,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// The chunked algorithm on `std::thread::scope`: one OS thread per chunk
/// instead of a task on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopedThreadCounter {
    growth: ChunkGrowth,
}

impl ScopedThreadCounter {
    pub const fn new(growth: ChunkGrowth) -> Self {
        Self { growth }
    }
}

impl LineCounter for ScopedThreadCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let total = AtomicU64::new(0);

        let last = thread::scope(|scope| {
            let total = &total;
            for_each_chunk(reader, self.growth, |_, chunk| {
                scope.spawn(move || {
                    total.fetch_add(count_delimiters(&chunk), Ordering::Relaxed);
                });
            })
        })?;

        let fragment = last.as_deref().is_some_and(|chunk| has_fragment(chunk));
        let lines = settle(total.into_inner(), fragment)?;
        debug!("scoped-threads: {lines} lines");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn matches_primary_on_many_chunks() {
        let data = "x\n".repeat(500) + "tail";
        let counter = ScopedThreadCounter::new(ChunkGrowth::new(7, 1));
        assert_eq!(counter.count(Some(&mut Cursor::new(data))).unwrap(), 501usize);
    }
}
