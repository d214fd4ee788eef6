// crates/spec/src/lib.rs
//! Specification tests for line counters.
//!
//! Every counter implementation, primary or alternate, runs through
//! [`run_spec_suite`] from its own test suite.

use std::io::{self, Cursor, Read};

use countline_shared_kernel::{CountLinesError, LineCount, Result};

/// Size of the long lines in the last two cases; twice the 64 KiB base chunk
/// so a single line spans several reads.
pub const LONG_LINE_SIZE: usize = 64 * 1024 * 2;

/// Inputs longer than this are cropped in failure messages.
const PREVIEW_THRESHOLD: usize = 1024;

/// One row of the specification table.
#[derive(Debug, Clone)]
pub struct SpecCase {
    /// Reason shown on failure.
    pub reason: &'static str,
    pub input: String,
    pub expect: usize,
}

impl SpecCase {
    fn new(reason: &'static str, input: impl Into<String>, expect: usize) -> Self {
        Self { reason, input: input.into(), expect }
    }
}

/// The specification table.
pub fn spec_cases() -> Vec<SpecCase> {
    vec![
        SpecCase::new("'<EOF>' --> empty input should be zero", "", 0),
        SpecCase::new("'Hello<EOF>' --> single line without line break should be one", "Hello", 1),
        SpecCase::new("'Hello\\n<EOF>' --> single line with line break should be one", "Hello\n", 1),
        SpecCase::new("'\\n<EOF>' --> single line break should be one", "\n", 1),
        SpecCase::new("'\\n\\n<EOF>' --> two line breaks should be two", "\n\n", 2),
        SpecCase::new(
            "'\\nHello<EOF>' --> one line break and one line without line break should be two",
            "\nHello",
            2,
        ),
        SpecCase::new(
            "'\\nHello\\n<EOF>' --> one line break and one line with line break should be two",
            "\nHello\n",
            2,
        ),
        SpecCase::new(
            "'\\n\\nHello<EOF>' --> two line breaks and one line without line break should be three",
            "\n\nHello",
            3,
        ),
        SpecCase::new(
            "'\\n\\nHello\\n<EOF>' --> two line breaks and one line with line break should be three",
            "\n\nHello\n",
            3,
        ),
        SpecCase::new(
            "'<large line>\\n<EOF>' --> long line with a line break should be one",
            dummy_lines(LONG_LINE_SIZE, 1),
            1,
        ),
        SpecCase::new(
            "'<large line>\\n<large line>\\n<EOF>' --> two long lines should be two",
            dummy_lines(LONG_LINE_SIZE, 2),
            2,
        ),
    ]
}

/// `num_lines` lines of `size_line` bytes each: `'a'` repeated, closed by `\n`.
pub fn dummy_lines(size_line: usize, num_lines: usize) -> String {
    let line = one_line(size_line);
    line.repeat(num_lines)
}

fn one_line(size_line: usize) -> String {
    if size_line == 0 {
        return String::new();
    }
    let mut line = "a".repeat(size_line - 1);
    line.push('\n');
    line
}

/// Reader whose every `read` fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingReader {
    message: String,
}

impl FailingReader {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other(self.message.clone()))
    }
}

fn preview(input: &str) -> String {
    if input.len() <= PREVIEW_THRESHOLD {
        return format!("{input:?}");
    }
    format!("{:?} ... {:?}", &input[..64], &input[input.len() - 64..])
}

/// Runs the specification table against `count`.
///
/// # Panics
///
/// Panics with the case reason on the first mismatch or error.
pub fn run_golden_cases<F>(name: &str, count: F)
where
    F: Fn(Option<&mut dyn Read>) -> Result<LineCount>,
{
    for (index, case) in spec_cases().iter().enumerate() {
        let mut reader = Cursor::new(case.input.as_bytes());
        let context = format!(
            "{name} test #{index}: {} (input: {}, len: {})",
            case.reason,
            preview(&case.input),
            case.input.len()
        );

        match count(Some(&mut reader)) {
            Ok(actual) => assert_eq!(actual.value(), case.expect, "{context}"),
            Err(e) => panic!("{context}: golden case should not return error: {e}"),
        }
    }
}

/// Runs the full suite: the specification table, a missing reader, a reader
/// that fails on its first read, and zero-filled input.
///
/// # Panics
///
/// Panics on the first violated expectation.
pub fn run_spec_suite<F>(name: &str, count: F)
where
    F: Fn(Option<&mut dyn Read>) -> Result<LineCount>,
{
    run_golden_cases(name, &count);

    let err = count(None).expect_err("missing reader should fail");
    assert!(
        matches!(err.root(), CountLinesError::InvalidInput),
        "{name}: missing reader should fail with InvalidInput, got {err}"
    );

    let err = count(Some(&mut FailingReader::new("forced error")))
        .expect_err("failing reader should fail");
    assert!(
        matches!(err.root(), CountLinesError::ReadFailure { .. }),
        "{name}: failing reader should fail with ReadFailure, got {err}"
    );
    assert!(
        err.to_string().contains("forced error"),
        "{name}: the error should carry the reason, got {err}"
    );

    let zero_padded = vec![0u8; 1024];
    if let Err(e) = count(Some(&mut Cursor::new(zero_padded))) {
        panic!("{name}: zero-filled input should not fail: {e}");
    }
}
