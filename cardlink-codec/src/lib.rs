//! Activation code derivation and formatting for CardLink.
//!
//! A device is activated against a phone number: the number is reduced
//! to ten digits and deterministically transformed into a ten-character
//! code — five uppercase letters followed by five digits, e.g.
//! `TISRR06045`. The code is stored and transmitted in that canonical
//! form and shown to the user with a hyphen after the fifth character
//! (`TISRR-06045`).
//!
//! # Design Principles
//!
//! - **Pure**: every operation is a total function of its input — no
//!   randomness, no clock, no I/O. Safe to call from any thread.
//! - **Degrade, don't fail**: malformed phone numbers are padded or
//!   truncated and malformed display input passes through unchanged.
//!   Callers that need a hard guarantee run [`is_valid_format`] first.
//! - **Keyless**: the per-position offset table is a format constant
//!   shared with the issuing backend, not a secret. It carries no
//!   cryptographic weight.

mod code;
mod format;
pub mod phone;

pub use code::{ActivationCode, InvalidCodeFormat, OFFSETS};
pub use format::{format_for_display, is_valid_format, strip_display_formatting};
