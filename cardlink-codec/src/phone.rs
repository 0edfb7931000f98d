//! Phone number normalization.
//!
//! Raw phone numbers arrive with country prefixes, spaces, parentheses
//! and dashes. The code derivation consumes exactly ten digits, so a raw
//! number is first reduced to its digits and then padded or truncated.

/// Number of digits the code derivation consumes.
pub const PHONE_DIGITS: usize = 10;

/// Removes every character that is not a decimal digit, preserving the
/// order of the digits that remain.
///
/// Never fails; the result may be shorter or longer than ten digits, or
/// empty.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Reduces a raw phone number to exactly ten digit values.
///
/// The input is normalized, left-padded with zeros when fewer than ten
/// digits remain, and truncated to the first ten when more do.
#[must_use]
pub fn to_digits(raw: &str) -> [u8; PHONE_DIGITS] {
    let normalized = normalize(raw);
    let mut digits = [0u8; PHONE_DIGITS];
    let pad = PHONE_DIGITS.saturating_sub(normalized.len());
    for (slot, ch) in digits[pad..].iter_mut().zip(normalized.bytes()) {
        *slot = ch - b'0';
    }
    digits
}
