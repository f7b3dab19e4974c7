//! Vault module: codes, records, passwords, and the package store
//!
//! This module provides everything the workflows build on:
//!
//! - **Code**: share code generation and parsing
//! - **Package**: immutable file bundle records
//! - **Password**: strength rules and salted digest storage
//! - **Store**: the in-memory code-to-package table
//!
//! # Example
//!
//! ```rust,ignore
//! use codedrop::vault::{FileEntry, PackageRecord, PackageStore, ShareCode};
//!
//! let store = PackageStore::new();
//! let code = ShareCode::generate();
//! let files = vec![FileEntry::new("notes.txt", "text/plain", &b"hello"[..])];
//! store.insert(PackageRecord::new(code.clone(), files, "Abc123!"));
//!
//! let record = store.get(&code).expect("just stored");
//! ```

pub mod code;
pub mod package;
pub mod password;
pub mod store;

pub use code::{CodeError, ShareCode};
pub use package::{FileEntry, PackageRecord};
pub use password::{PasswordDigest, Rule, RuleStatus};
pub use store::PackageStore;
