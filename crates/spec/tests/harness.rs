// crates/spec/tests/harness.rs
use std::io::Read;

use countline_shared_kernel::{CountLinesError, LineCount, Result};
use countline_spec::{FailingReader, LONG_LINE_SIZE, dummy_lines, run_spec_suite, spec_cases};

/// Straightforward reference: read everything, count, fix up the tail.
fn reference(input: Option<&mut dyn Read>) -> Result<LineCount> {
    let reader = input.ok_or(CountLinesError::InvalidInput)?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(CountLinesError::read_failure)?;
    let newlines = bytecount::count(&buf, b'\n');
    let fragment = buf.iter().rev().find(|&&b| b != 0).is_some_and(|&b| b != b'\n');
    Ok(LineCount::new(newlines + usize::from(fragment)))
}

#[test]
fn dummy_lines_shape() {
    for num_lines in [1usize, 2] {
        let result = dummy_lines(LONG_LINE_SIZE, num_lines);

        assert_eq!(result.len(), 65_536 * 2 * num_lines, "byte length mismatch for {num_lines} lines");
        assert_eq!(result.matches('\n').count(), num_lines);
        assert!(result.starts_with('a'), "the first character should be 'a'");
        assert!(result.ends_with('\n'), "the last character should be a line break");
    }
}

#[test]
fn dummy_lines_small_sizes() {
    assert_eq!(dummy_lines(0, 3), "");
    assert_eq!(dummy_lines(1, 2), "\n\n");
    assert_eq!(dummy_lines(2, 1), "a\n");
    let line = dummy_lines(100, 1);
    assert_eq!(line.len(), 100);
    assert!(line[..99].bytes().all(|b| b == b'a'));
}

#[test]
fn table_matches_reference() {
    for case in spec_cases() {
        let actual = reference(Some(&mut case.input.as_bytes())).unwrap();
        assert_eq!(actual.value(), case.expect, "{}", case.reason);
    }
}

#[test]
fn suite_accepts_reference() {
    run_spec_suite("reference", reference);
}

#[test]
#[should_panic(expected = "test #1")]
fn suite_rejects_wrong_counter() {
    run_spec_suite("newlines-only", |input| {
        let reader = input.ok_or(CountLinesError::InvalidInput)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(LineCount::new(bytecount::count(&buf, b'\n')))
    });
}

#[test]
fn failing_reader_fails_every_time() {
    let mut reader = FailingReader::new("boom");
    let mut buf = [0u8; 4];
    assert_eq!(reader.read(&mut buf).unwrap_err().to_string(), "boom");
    assert!(reader.read(&mut buf).is_err());
}
