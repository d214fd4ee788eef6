// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod chunk;
pub mod config;
pub mod counter;
pub mod error;
pub mod strategies;

pub use config::CounterConfig;
pub use counter::{ChunkedCounter, LineCounter, count_lines};
pub use error::{CountLinesError, ErrorContext, Result};
pub use strategies::Strategy;

pub use countline_shared_kernel::LineCount;
