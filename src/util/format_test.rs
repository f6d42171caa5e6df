use super::*;

#[test]
fn groups_digits_in_threes_from_the_right() {
    assert_eq!(format_number(1_234_567), "1 234 567");
    assert_eq!(format_number(1_000), "1 000");
    assert_eq!(format_number(12_345), "12 345");
}

#[test]
fn short_numbers_are_unchanged() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(7), "7");
    assert_eq!(format_number(999), "999");
}

#[test]
fn exact_group_boundaries() {
    assert_eq!(format_number(123_456), "123 456");
    assert_eq!(format_number(1_000_000), "1 000 000");
}

#[test]
fn negative_sign_stays_attached_to_the_first_group() {
    assert_eq!(format_number(-1_234_567), "-1 234 567");
    assert_eq!(format_number(-999), "-999");
}

#[test]
fn extreme_values_do_not_overflow() {
    assert_eq!(format_number(i64::MIN), "-9 223 372 036 854 775 808");
    assert_eq!(format_number(i64::MAX), "9 223 372 036 854 775 807");
}

#[test]
fn truncate_returns_short_input_unchanged() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn truncate_cuts_and_appends_ellipsis() {
    assert_eq!(truncate("hello world", 5), "hello...");
}

#[test]
fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("клинические рекомендации", 11), "клинические...");
}

#[test]
fn truncate_to_zero_keeps_only_the_marker() {
    assert_eq!(truncate("abc", 0), "...");
}
