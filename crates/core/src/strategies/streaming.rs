// crates/core/src/strategies/streaming.rs
use std::io::{self, Read, Write};

use crate::{
    chunk::{DELIMITER, count_delimiters, settle},
    counter::LineCounter,
};
use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Pipes the input through `io::copy` into a sink that counts as it goes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingCounter;

/// `io::Write` sink that keeps the delimiter total and whether the bytes seen
/// so far end in a fragment.
#[derive(Debug, Default)]
pub struct CountingSink {
    delimiters: u64,
    fragment: bool,
    written: u64,
}

impl CountingSink {
    pub fn lines(&self) -> Result<LineCount> {
        settle(self.delimiters, self.fragment)
    }

    pub const fn bytes_written(&self) -> u64 {
        self.written
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(&last) = buf.last() {
            self.fragment = last != DELIMITER;
        }
        self.delimiters += count_delimiters(buf);
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LineCounter for StreamingCounter {
    fn count(&self, input: Option<&mut dyn Read>) -> Result<LineCount> {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let mut sink = CountingSink::default();
        io::copy(reader, &mut sink).map_err(CountLinesError::read_failure)?;
        sink.lines()
    }
}
