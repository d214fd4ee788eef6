//! Re-export error types from the shared kernel crate.

pub use countline_shared_kernel::{CountLinesError, ErrorContext, Result};
