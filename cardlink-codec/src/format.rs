//! Canonical/display conversions and the code shape check.

/// Length of a canonical code.
pub(crate) const CODE_LEN: usize = 10;

/// Number of leading letter positions in a code.
pub(crate) const LETTER_COUNT: usize = 5;

/// Inserts the display hyphen: `ABCDE12345` becomes `ABCDE-12345`.
///
/// Existing hyphens are stripped first, so the operation is idempotent.
/// Input that is not ten characters long after stripping is returned
/// unchanged rather than rejected; the caller may be formatting text it
/// does not control.
#[must_use]
pub fn format_for_display(code: &str) -> String {
    let canonical = strip_display_formatting(code);
    if canonical.chars().count() != CODE_LEN {
        return code.to_string();
    }
    let mut display = String::with_capacity(canonical.len() + 1);
    for (i, ch) in canonical.chars().enumerate() {
        if i == LETTER_COUNT {
            display.push('-');
        }
        display.push(ch);
    }
    display
}

/// Removes every hyphen, recovering the canonical form of a displayed
/// code. No validation is performed.
#[must_use]
pub fn strip_display_formatting(code: &str) -> String {
    code.chars().filter(|&ch| ch != '-').collect()
}

/// Returns true when `code` has the exact shape of a canonical
/// activation code: ten characters, five uppercase ASCII letters
/// followed by five ASCII digits.
///
/// Shape only — a string can pass this check without ever having been
/// issued. The code format carries no checksum.
#[must_use]
pub fn is_valid_format(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == CODE_LEN
        && bytes[..LETTER_COUNT].iter().all(u8::is_ascii_uppercase)
        && bytes[LETTER_COUNT..].iter().all(u8::is_ascii_digit)
}
