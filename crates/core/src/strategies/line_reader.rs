// crates/core/src/strategies/line_reader.rs
use std::io::{BufRead, BufReader, Read};

use crate::{
    chunk::{DELIMITER, into_line_count},
    counter::LineCounter,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Reads one line at a time with `read_until` and counts the calls that
/// returned data.
#[derive(Debug, Clone, Copy)]
pub struct LineReaderCounter {
    capacity: usize,
}

impl LineReaderCounter {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1) }
    }
}

impl Default for LineReaderCounter {
    fn default() -> Self {
        Self::new(crate::chunk::DEFAULT_CHUNK_SIZE)
    }
}

impl LineCounter for LineReaderCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let mut reader = BufReader::with_capacity(self.capacity, reader);
        let mut line_buf = Vec::new();
        let mut lines = 0u64;

        loop {
            line_buf.clear();
            match reader.read_until(DELIMITER, &mut line_buf) {
                Ok(0) => break,
                Ok(_) => lines += 1,
                Err(e) => return Err(CountLinesError::read_failure(e)),
            }
        }

        into_line_count(lines)
    }
}
