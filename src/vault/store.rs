//! In-memory package store
//!
//! The store is the only stateful backend in the system: an associative
//! table from share code to package record. It is an explicit object
//! constructed by the host and passed by handle into both workflows, with
//! its lifecycle owned by whatever hosts them.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::code::ShareCode;
use super::package::PackageRecord;

/// Shared handle to the in-memory package table
///
/// Cloning is cheap; every clone addresses the same underlying table.
/// Records are held behind `Arc` so lookups hand out shared references to
/// immutable data. There is no eviction and no capacity bound; records live
/// as long as the store does.
#[derive(Clone, Default)]
pub struct PackageStore {
    inner: Arc<RwLock<HashMap<ShareCode, Arc<PackageRecord>>>>,
}

impl PackageStore {
    /// Creates a new, empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its share code
    ///
    /// Replaces any record already stored under the same code. Never fails.
    pub fn insert(&self, record: PackageRecord) {
        let code = record.code().clone();
        info!(code = %code, files = record.files().len(), "package stored");
        self.inner.write().insert(code, Arc::new(record));
    }

    /// Looks up a record by exact share code
    ///
    /// Returns `None` when no record is stored under the code; never fails.
    /// Input normalization (trimming, upper-casing) happens at
    /// [`ShareCode::parse`], not here.
    #[must_use]
    pub fn get(&self, code: &ShareCode) -> Option<Arc<PackageRecord>> {
        let record = self.inner.read().get(code).cloned();
        if record.is_none() {
            debug!(code = %code, "no package under code");
        }
        record
    }

    /// Returns true if a record is stored under the code.
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &ShareCode) -> bool {
        self.inner.read().contains_key(code)
    }

    /// Number of stored packages.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if no packages are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::package::FileEntry;
    use std::thread;

    fn record(code: &str, password: &str) -> PackageRecord {
        PackageRecord::new(
            ShareCode::parse(code).unwrap(),
            vec![FileEntry::new("notes.txt", "text/plain", &b"hello"[..])],
            password,
        )
    }

    // ===== Round-Trip Tests =====

    #[test]
    fn test_insert_then_get() {
        let store = PackageStore::new();
        let saved = record("X7K9P2", "Abc123!");
        store.insert(saved.clone());

        let loaded = store.get(&ShareCode::parse("X7K9P2").unwrap()).unwrap();
        assert_eq!(*loaded, saved);
    }

    #[test]
    fn test_get_absent_returns_none() {
        let store = PackageStore::new();
        assert!(store.get(&ShareCode::parse("ZZZZZZ").unwrap()).is_none());
    }

    #[test]
    fn test_insert_overwrites_same_code() {
        let store = PackageStore::new();
        store.insert(record("ABC234", "First1!"));
        store.insert(record("ABC234", "Second1!"));

        assert_eq!(store.len(), 1);
        let loaded = store.get(&ShareCode::parse("ABC234").unwrap()).unwrap();
        assert!(loaded.verify_password("Second1!"));
        assert!(!loaded.verify_password("First1!"));
    }

    // ===== Handle Tests =====

    #[test]
    fn test_cloned_handles_share_state() {
        let store = PackageStore::new();
        let handle = store.clone();

        handle.insert(record("ABC234", "Abc123!"));
        assert!(store.contains(&ShareCode::parse("ABC234").unwrap()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_len_and_is_empty() {
        let store = PackageStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.insert(record("ABC234", "Abc123!"));
        store.insert(record("DEF567", "Abc123!"));
        assert!(!store.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = PackageStore::new();
        let codes = ["AAAAAA", "BBBBBB", "CCCCCC", "DDDDDD", "EEEEEE", "FFFFFF"];

        let handles: Vec<_> = codes
            .iter()
            .map(|code| {
                let store = store.clone();
                let code = code.to_string();
                thread::spawn(move || store.insert(record(&code, "Abc123!")))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), codes.len());
        for code in codes {
            assert!(store.contains(&ShareCode::parse(code).unwrap()));
        }
    }
}
