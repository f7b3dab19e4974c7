//! Receive workflow: redeem a code and password for a package
//!
//! A receive session starts locked. Each unlock attempt submits a raw code
//! plus a password; the two ways an attempt can fail are surfaced as
//! distinct outcomes so the caller can tell "no such code" from "wrong
//! password". Failed attempts leave the session locked and resubmission is
//! always permitted.
//!
//! # Example
//!
//! ```rust,ignore
//! use codedrop::app::ReceiveSession;
//!
//! let mut session = ReceiveSession::new(store);
//! match session.unlock("x7k9p2", "Abc123!") {
//!     Ok(package) => {
//!         for file in package.files() {
//!             println!("{} ({})", file.name, file.size_display());
//!         }
//!     }
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::vault::{PackageRecord, PackageStore, ShareCode};

/// Rejections surfaced to the receiver
///
/// The display strings are the user-visible messages. Both outcomes leave
/// the session locked; neither is fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockError {
    /// No stored package matches the submitted code
    #[error("Invalid Code. Please check and try again.")]
    UnknownCode,

    /// The package exists but the password does not match
    #[error("Incorrect Password. Access denied.")]
    WrongPassword,
}

/// State of a receive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveState {
    /// Collecting a code and password.
    Locked,
    /// Holding the resolved package for listing and download.
    Unlocked { package: Arc<PackageRecord> },
}

impl ReceiveState {
    /// Returns true if a package has been unlocked.
    #[inline]
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        matches!(self, ReceiveState::Unlocked { .. })
    }
}

/// A receive session drives code redemption for one receiver
///
/// Unlocking is a plain synchronous call; any delay presented to a user is
/// cosmetic and lives in the presentation layer.
pub struct ReceiveSession {
    store: PackageStore,
    state: ReceiveState,
}

impl ReceiveSession {
    /// Creates a new, locked session over the given store handle.
    #[must_use]
    pub fn new(store: PackageStore) -> Self {
        Self {
            store,
            state: ReceiveState::Locked,
        }
    }

    /// Current state of the session.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ReceiveState {
        &self.state
    }

    /// The unlocked package, if any.
    #[must_use]
    pub fn package(&self) -> Option<&Arc<PackageRecord>> {
        match &self.state {
            ReceiveState::Unlocked { package } => Some(package),
            ReceiveState::Locked => None,
        }
    }

    /// Attempts to unlock a package with a raw code and a password
    ///
    /// The code input is normalized (trimmed, upper-cased) before lookup, so
    /// receivers can type codes in any case. A code that cannot resolve to a
    /// stored package, including a malformed one, is reported as
    /// [`UnlockError::UnknownCode`]; a resolvable code with a non-matching
    /// password as [`UnlockError::WrongPassword`].
    ///
    /// # Errors
    ///
    /// Both rejections leave the session state unchanged; the caller may
    /// retry immediately, there is no rate limiting or lockout.
    #[instrument(skip(self, password), fields(code = %code_input))]
    pub fn unlock(
        &mut self,
        code_input: &str,
        password: &str,
    ) -> Result<Arc<PackageRecord>, UnlockError> {
        let code = match ShareCode::parse(code_input) {
            Ok(code) => code,
            Err(err) => {
                debug!(error = %err, "unlock attempt with malformed code");
                return Err(UnlockError::UnknownCode);
            }
        };

        let Some(package) = self.store.get(&code) else {
            return Err(UnlockError::UnknownCode);
        };

        if !package.verify_password(password) {
            debug!(code = %code, "unlock attempt with wrong password");
            return Err(UnlockError::WrongPassword);
        }

        info!(code = %code, files = package.files().len(), "package unlocked");
        self.state = ReceiveState::Unlocked {
            package: package.clone(),
        };
        Ok(package)
    }

    /// Relocks the session ("unlock another").
    pub fn reset(&mut self) {
        self.state = ReceiveState::Locked;
    }
}
