// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// First line of the help text.
pub const ABOUT: &str = "cl - Count the number of lines in a file.";
