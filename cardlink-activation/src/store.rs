//! On-disk persistence for the activation record.
//!
//! A single JSON file in the per-user data directory. Loading is
//! deliberately forgiving: a missing file means "not activated", and a
//! damaged one is treated the same way after a warning, so a corrupt
//! cache can never lock the user out of re-activating.

use crate::error::{ActivationError, ActivationResult};
use crate::record::{Activation, ActivationStatus};
use cardlink_codec::is_valid_format;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the activation record inside the store directory.
const RECORD_FILE: &str = "activation.json";

/// Directory under the platform data dir used by [`ActivationStore::open_default`].
const APP_DIR: &str = "cardlink";

/// Reads and writes the local activation record.
#[derive(Debug, Clone)]
pub struct ActivationStore {
    path: PathBuf,
}

impl ActivationStore {
    /// Creates a store rooted at `dir`; the record lives at
    /// `dir/activation.json`. The directory is created lazily on the
    /// first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(RECORD_FILE),
        }
    }

    /// Creates a store in the platform data directory
    /// (`~/.local/share/cardlink` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ActivationError::NoDataDir`] when the platform reports
    /// no data directory.
    pub fn open_default() -> ActivationResult<Self> {
        let dir = dirs::data_dir().ok_or(ActivationError::NoDataDir)?;
        Ok(Self::new(dir.join(APP_DIR)))
    }

    /// Returns the path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists `activation`, replacing any previous record.
    ///
    /// The record is written to a temporary file next to the target and
    /// renamed over it, so a crash mid-write leaves the old record
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or the
    /// record cannot be written.
    pub fn save(&self, activation: &Activation) -> ActivationResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(activation)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), code = %activation.code, "activation record saved");
        Ok(())
    }

    /// Loads the persisted record, if a trustworthy one exists.
    ///
    /// Returns `Ok(None)` when no record has been written, and also when
    /// the file holds unparseable JSON or a code failing the shape check
    /// — a damaged cache reads as "not activated", not as an error.
    ///
    /// # Errors
    ///
    /// Filesystem failures other than a missing file propagate.
    pub fn load(&self) -> ActivationResult<Option<Activation>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let activation: Activation = match serde_json::from_str(&raw) {
            Ok(activation) => activation,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "discarding unreadable activation record");
                return Ok(None);
            }
        };
        if !is_valid_format(activation.code.as_str()) {
            warn!(path = %self.path.display(), "discarding activation record with malformed code");
            return Ok(None);
        }
        debug!(code = %activation.code, "activation record loaded");
        Ok(Some(activation))
    }

    /// The startup check: maps the stored record onto a status.
    ///
    /// # Errors
    ///
    /// Propagates the same filesystem failures as [`Self::load`].
    pub fn status(&self) -> ActivationResult<ActivationStatus> {
        Ok(match self.load()? {
            Some(activation) => ActivationStatus::Activated {
                code: activation.code,
            },
            None => ActivationStatus::NotActivated,
        })
    }

    /// Removes the record if present. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn clear(&self) -> ActivationResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "activation record cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
