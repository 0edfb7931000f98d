//! The activation code and its derivation from a phone number.
//!
//! Codes use the format `LLLLLDDDDD`: five uppercase letters followed by
//! five digits. Each position is the corresponding phone digit plus a
//! fixed per-position offset, reduced modulo the size of the target
//! alphabet. The transform is keyless and deterministic; the same phone
//! number always yields the same code.

use crate::format::{self, LETTER_COUNT};
use crate::phone;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-position offsets added to the phone digits before reduction.
///
/// This table is a format constant shared with the issuing backend:
/// changing any entry would orphan every previously issued code. It is
/// embedded in shipped binaries and provides no secrecy.
pub const OFFSETS: [u8; 10] = [10, 52, 63, 89, 12, 36, 63, 78, 63, 75];

/// A canonical activation code, e.g. `TISRR06045`.
///
/// Serializes transparently as its string form, like an id type; note
/// that deserialization does not re-validate shape. Untrusted input goes
/// through [`ActivationCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationCode(String);

impl ActivationCode {
    /// Derives the activation code for a phone number.
    ///
    /// The number is reduced to ten digits (see [`phone::to_digits`]),
    /// then each digit is offset and folded into its target alphabet:
    /// positions 0–4 become letters modulo 26, positions 5–9 stay digits
    /// modulo 10. Total and infallible — short input pads, long input
    /// truncates.
    #[must_use]
    pub fn from_phone(raw: &str) -> Self {
        let digits = phone::to_digits(raw);
        let mut code = String::with_capacity(digits.len());
        for (i, (&digit, &offset)) in digits.iter().zip(OFFSETS.iter()).enumerate() {
            let sum = digit + offset;
            if i < LETTER_COUNT {
                code.push(char::from(b'A' + sum % 26));
            } else {
                code.push(char::from(b'0' + sum % 10));
            }
        }
        Self(code)
    }

    /// Parses a code read back from storage or typed by a user.
    ///
    /// Surrounding whitespace and display hyphens are tolerated. This
    /// checks shape only — it cannot tell a derived code from a
    /// fabricated one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodeFormat`] when the input is not five
    /// uppercase letters followed by five digits.
    pub fn parse(s: &str) -> Result<Self, InvalidCodeFormat> {
        let trimmed = s.trim();
        let canonical = format::strip_display_formatting(trimmed);
        if format::is_valid_format(&canonical) {
            Ok(Self(canonical))
        } else {
            Err(InvalidCodeFormat(trimmed.to_string()))
        }
    }

    /// Returns the canonical ten-character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display form with a hyphen after the fifth
    /// character, e.g. `TISRR-06045`.
    #[must_use]
    pub fn dashed(&self) -> String {
        format::format_for_display(&self.0)
    }
}

impl fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ActivationCode {
    type Err = InvalidCodeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ActivationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input that is not a ten-character letters-then-digits code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid activation code format: {0:?}")]
pub struct InvalidCodeFormat(pub String);
