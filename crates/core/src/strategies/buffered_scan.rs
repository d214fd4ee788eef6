// crates/core/src/strategies/buffered_scan.rs
use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::{
    chunk::{DELIMITER, count_delimiters, settle},
    counter::LineCounter,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Walks the `BufReader` window with `fill_buf`/`consume`, remembering only
/// the last byte seen.
#[derive(Debug, Clone, Copy)]
pub struct BufferedScanCounter {
    capacity: usize,
}

impl BufferedScanCounter {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1) }
    }
}

impl Default for BufferedScanCounter {
    fn default() -> Self {
        Self::new(crate::chunk::DEFAULT_CHUNK_SIZE)
    }
}

impl LineCounter for BufferedScanCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let mut reader = BufReader::with_capacity(self.capacity, reader);
        let mut delimiters = 0;
        let mut last_byte: Option<u8> = None;

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CountLinesError::read_failure(e)),
            };
            if buf.is_empty() {
                break;
            }

            delimiters += count_delimiters(buf);
            last_byte = buf.last().copied();

            let len = buf.len();
            reader.consume(len);
        }

        settle(delimiters, last_byte.is_some_and(|byte| byte != DELIMITER))
    }
}
