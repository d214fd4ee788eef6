// crates/core/src/strategies/sequential.rs
use std::io::{ErrorKind, Read};

use crate::{
    chunk::{DELIMITER, count_delimiters, settle},
    counter::LineCounter,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Single reused buffer, scanned on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct SequentialCounter {
    buffer_size: usize,
}

impl SequentialCounter {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size: buffer_size.max(1) }
    }
}

impl Default for SequentialCounter {
    fn default() -> Self {
        Self::new(crate::chunk::DEFAULT_CHUNK_SIZE)
    }
}

impl LineCounter for SequentialCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let mut buf = vec![0u8; self.buffer_size];
        let mut delimiters = 0;
        let mut fragment = false;

        loop {
            let read = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CountLinesError::read_failure(e)),
            };
            // Only the filled prefix is valid; the tail still holds the previous read.
            let chunk = &buf[..read];
            delimiters += count_delimiters(chunk);
            fragment = chunk.last() != Some(&DELIMITER);
        }

        settle(delimiters, fragment)
    }
}
