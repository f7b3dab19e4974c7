//! codedrop - share files behind a short code and a password
//!
//! A small in-process core for the "share a file behind a password and a
//! short code" workflow: a sharer bundles files under a password and gets a
//! 6-character code back; a receiver redeems that code plus the password to
//! unlock the same files. All state lives in memory for the lifetime of the
//! hosting process.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`vault`]: Share codes, package records, password rules, and the
//!   in-memory package store
//! - [`app`]: The share and receive workflow state machines
//!
//! The presentation layer (screens, form widgets, file pickers) is a
//! consumer of this crate, not part of it. Both workflows operate on a
//! [`PackageStore`] handle constructed by the host, so tests, request
//! handlers, or a UI shell can each own their store's lifecycle.
//!
//! # Example
//!
//! ```rust
//! use codedrop::app::{ReceiveSession, ShareSession};
//! use codedrop::vault::{FileEntry, PackageStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PackageStore::new();
//!
//! // Sharing side: bundle files behind a password, get a code
//! let mut share = ShareSession::new(store.clone());
//! share.add_file(FileEntry::new("notes.txt", "text/plain", &b"hello"[..]));
//! share.set_password("Abc123!");
//! let code = share.submit()?;
//!
//! // Receiving side: redeem the code plus the password
//! let mut receive = ReceiveSession::new(store);
//! let package = receive.unlock(code.as_str(), "Abc123!")?;
//! assert_eq!(package.files().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod vault;

pub use app::{ReceiveSession, ShareSession};
pub use vault::{PackageStore, ShareCode};
