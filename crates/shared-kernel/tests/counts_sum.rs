// crates/shared-kernel/tests/counts_sum.rs
use countline_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn linecount_add_assign() {
    let mut lines = LineCount::from(2);
    lines += LineCount::from(4);
    assert_eq!(lines, 6usize);
    assert_eq!(lines + LineCount::new(1), LineCount::from(7));
}

#[test]
fn default_matches_zero() {
    assert_eq!(LineCount::default(), LineCount::ZERO);
    assert!(LineCount::default().is_zero());
    assert_eq!(LineCount::new(3).to_string(), "3");
}
