//! The persisted activation record and the startup status.

use cardlink_codec::{ActivationCode, phone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed activation: the phone number it was issued against, the
/// derived code, and when it happened.
///
/// Written once at activation time and replaced wholesale on
/// re-activation; never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// The normalized digits the code was derived from.
    pub phone_digits: String,
    /// The derived activation code, canonical form.
    pub code: ActivationCode,
    /// When the activation was issued.
    pub activated_at: DateTime<Utc>,
}

impl Activation {
    /// Issues a fresh activation for a raw phone number.
    ///
    /// The number is normalized and the code derived from it; the record
    /// is stamped with the current time. Deterministic apart from the
    /// timestamp.
    #[must_use]
    pub fn issue(raw_phone: &str) -> Self {
        Self {
            phone_digits: phone::normalize(raw_phone),
            code: ActivationCode::from_phone(raw_phone),
            activated_at: Utc::now(),
        }
    }
}

/// What the startup check found in the local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    /// A trustworthy record is on disk; the device may proceed.
    Activated {
        /// The cached activation code.
        code: ActivationCode,
    },
    /// No record, or a cache too damaged to trust.
    NotActivated,
}

impl ActivationStatus {
    /// Returns true when the device holds a usable activation.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated { .. })
    }
}
