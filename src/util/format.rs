//! Number and text display formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Separator between digit groups.
const GROUP_SEPARATOR: char = ' ';

/// Marker appended to truncated text.
const ELLIPSIS: &str = "...";

/// Group the decimal digits of `value` in threes from the right.
///
/// The sign stays attached to the first group: `-1234567` becomes
/// `"-1 234 567"`.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out
}

/// Truncate `text` to at most `max_chars` characters, appending an
/// ellipsis marker when something was cut.
///
/// Counts `char`s rather than bytes so Cyrillic text is never split
/// mid-character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}
