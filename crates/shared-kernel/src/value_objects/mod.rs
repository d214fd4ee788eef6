// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_size;

pub use counts::LineCount;
pub use file_size::FileSize;
