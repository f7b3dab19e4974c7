//! Share workflow: compose a package, obtain its code
//!
//! A share session collects files and a password, and on submission stores
//! the bundle and hands back the generated share code for display.
//!
//! # How sharing works
//!
//! 1. The sharer adds one or more files to the draft
//! 2. The sharer picks a password satisfying all strength rules
//! 3. `submit` generates a free code and stores the package under it
//! 4. The session holds the code until an explicit reset ("share more files")
//!
//! # Example
//!
//! ```rust,ignore
//! use codedrop::app::ShareSession;
//! use codedrop::vault::{FileEntry, PackageStore};
//!
//! let mut session = ShareSession::new(PackageStore::new());
//! session.add_file(FileEntry::new("photo.jpg", "image/jpeg", data));
//! session.set_password("Abc123!");
//! let code = session.submit()?;
//! println!("Share this code: {}", code);
//! ```

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::vault::password::{self, RuleStatus};
use crate::vault::{FileEntry, PackageRecord, PackageStore, ShareCode};

/// Attempts at finding a free share code before giving up.
///
/// With a 32^6 code space a collision is already vanishingly rare; retrying
/// a bounded number of times keeps submission infallible in practice without
/// ever overwriting an existing package.
const MAX_CODE_ATTEMPTS: usize = 16;

/// Errors that can occur when submitting a share draft
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    /// The draft has no files
    #[error("no files selected")]
    NoFiles,

    /// The password does not satisfy all strength rules
    #[error("password does not satisfy all strength rules")]
    WeakPassword,

    /// The session already issued a code; reset it to share more
    #[error("package already issued, reset the session to share more")]
    AlreadyIssued,

    /// No free code was found within the retry budget
    #[error("no free share code found")]
    CodeSpaceExhausted,
}

/// State of a share session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareState {
    /// Collecting files and a password.
    Composing,
    /// Package stored; holding the generated code for display.
    Issued { code: ShareCode },
}

impl ShareState {
    /// Returns true if a code has been issued.
    #[inline]
    #[must_use]
    pub fn is_issued(&self) -> bool {
        matches!(self, ShareState::Issued { .. })
    }
}

/// A share session drives one package from draft to issued code
///
/// The session owns the draft (files and password) while composing. On
/// submission the draft is consumed into an immutable record in the store,
/// and only the issued code remains observable.
pub struct ShareSession {
    store: PackageStore,
    files: Vec<FileEntry>,
    password: String,
    state: ShareState,
}

impl ShareSession {
    /// Creates a new session over the given store handle.
    #[must_use]
    pub fn new(store: PackageStore) -> Self {
        Self {
            store,
            files: Vec::new(),
            password: String::new(),
            state: ShareState::Composing,
        }
    }

    /// Current state of the session.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ShareState {
        &self.state
    }

    /// Files currently in the draft, in the order they were added.
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Adds a file to the draft.
    pub fn add_file(&mut self, file: FileEntry) {
        self.files.push(file);
    }

    /// Adds multiple files to the draft in a single operation.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileEntry>) {
        self.files.extend(files);
    }

    /// Removes a draft file by index
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn remove_file(&mut self, index: usize) -> Option<FileEntry> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Sets the draft password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Evaluates the strength rules against the draft password
    ///
    /// Used for live per-rule feedback while the sharer types.
    #[must_use]
    pub fn rules(&self) -> [RuleStatus; 4] {
        password::evaluate(&self.password)
    }

    /// Returns true if the draft is submittable: at least one file and a
    /// password satisfying every rule.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty() && password::is_valid(&self.password)
    }

    /// Submits the draft: stores the package and issues its share code
    ///
    /// The transition is atomic from the caller's point of view; the record
    /// is retrievable as soon as the code is returned.
    ///
    /// # Errors
    ///
    /// Rejects drafts with no files or a weak password, and sessions that
    /// already issued a code. All failures leave the draft untouched.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<ShareCode, ShareError> {
        if self.state.is_issued() {
            return Err(ShareError::AlreadyIssued);
        }
        if self.files.is_empty() {
            return Err(ShareError::NoFiles);
        }
        if !password::is_valid(&self.password) {
            return Err(ShareError::WeakPassword);
        }

        let code = next_free_code(&self.store, ShareCode::generate)?;
        let files = std::mem::take(&mut self.files);
        let password = std::mem::take(&mut self.password);
        self.store
            .insert(PackageRecord::new(code.clone(), files, &password));

        info!(code = %code, "package issued");
        self.state = ShareState::Issued { code: code.clone() };
        Ok(code)
    }

    /// The issued code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&ShareCode> {
        match &self.state {
            ShareState::Issued { code } => Some(code),
            ShareState::Composing => None,
        }
    }

    /// Returns to an empty composing state ("share more files")
    ///
    /// The only transition out of the issued state. Clears any leftover
    /// draft content.
    pub fn reset(&mut self) {
        self.files.clear();
        self.password.clear();
        self.state = ShareState::Composing;
    }
}

/// Generates codes until one is free in the store
///
/// The store itself never rejects an insert, so collision avoidance happens
/// here, before the record is created.
fn next_free_code(
    store: &PackageStore,
    mut generate: impl FnMut() -> ShareCode,
) -> Result<ShareCode, ShareError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate();
        if !store.contains(&code) {
            return Ok(code);
        }
        debug!(code = %code, "share code collision, retrying");
    }
    warn!(attempts = MAX_CODE_ATTEMPTS, "exhausted share code attempts");
    Err(ShareError::CodeSpaceExhausted)
}
