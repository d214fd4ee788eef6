// crates/core/src/config.rs
use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkGrowth, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use countline_shared_kernel::{CountLinesError, Result};

/// Tuning knobs for the counters.
///
/// `base_chunk_size` is the first read size of the chunked counters and the
/// buffer size of the buffered ones; `growth_step` multiplies the per-iteration
/// growth of the chunked counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub base_chunk_size: usize,
    pub growth_step: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            base_chunk_size: DEFAULT_CHUNK_SIZE,
            growth_step: 1,
        }
    }
}

impl CounterConfig {
    #[must_use]
    pub const fn with_base_chunk_size(mut self, bytes: usize) -> Self {
        self.base_chunk_size = bytes;
        self
    }

    #[must_use]
    pub const fn with_growth_step(mut self, step: usize) -> Self {
        self.growth_step = step;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_chunk_size == 0 {
            return Err(CountLinesError::InvalidConfiguration {
                reason: "base chunk size must be at least 1 byte".to_string(),
            });
        }
        if self.growth_step == 0 {
            return Err(CountLinesError::InvalidConfiguration {
                reason: "growth step must be at least 1".to_string(),
            });
        }
        let first = self.base_chunk_size.checked_mul(self.growth_step);
        if first.is_none_or(|bytes| bytes > MAX_CHUNK_SIZE) {
            return Err(CountLinesError::InvalidConfiguration {
                reason: format!(
                    "first chunk of {} x {} bytes exceeds the {MAX_CHUNK_SIZE} byte limit",
                    self.base_chunk_size, self.growth_step
                ),
            });
        }
        Ok(())
    }

    pub fn growth(&self) -> ChunkGrowth {
        ChunkGrowth::new(self.base_chunk_size, self.growth_step)
    }
}
