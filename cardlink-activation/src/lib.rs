//! Offline activation for CardLink devices.
//!
//! Ties the code derivation in [`cardlink_codec`] to a local, file-backed
//! record of the activation:
//! - [`Activation::issue`] derives a code for a phone number and stamps it
//! - [`ActivationStore`] persists the record in the user's data directory
//! - [`ActivationStore::status`] is the check the app runs at startup
//!   before letting the user past the splash screen
//!
//! # Design Principles
//!
//! - **Offline-first**: issuing and checking an activation touches no
//!   network; the backend learns about activations through its own
//!   channel, not through this crate.
//! - **A damaged cache is never fatal**: an unreadable record or one
//!   holding a malformed code degrades to "not activated", so the user
//!   can always re-activate.

mod error;
mod record;
mod store;

pub use error::{ActivationError, ActivationResult};
pub use record::{Activation, ActivationStatus};
pub use store::ActivationStore;
