//! Package records: the bundles of files a sharer locks behind a code
//! and a password.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use bytes::Bytes;

use super::code::ShareCode;
use super::password::PasswordDigest;

/// One file inside a shared package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The file name.
    pub name: Arc<str>,
    /// Declared MIME type; empty when the source had none to declare.
    pub content_type: Arc<str>,
    /// Immutable byte content.
    pub content: Bytes,
}

impl FileEntry {
    /// Creates a new FileEntry.
    #[inline]
    #[must_use]
    pub fn new(
        name: impl AsRef<str>,
        content_type: impl AsRef<str>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            content_type: Arc::from(content_type.as_ref()),
            content: content.into(),
        }
    }

    /// Returns the size of the file in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns the size formatted for display, e.g. "1.50 MB".
    #[must_use]
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.content.len() as f64 / 1024.0 / 1024.0)
    }
}

/// A stored bundle of files addressed by a share code
///
/// Records are created once, when a share session submits, and never mutated
/// afterwards. The password survives only as a salted digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    code: ShareCode,
    files: Vec<FileEntry>,
    password: PasswordDigest,
    created_at: SystemTime,
}

impl PackageRecord {
    /// Creates a new record, digesting the password and stamping the
    /// creation time.
    #[must_use]
    pub fn new(code: ShareCode, files: Vec<FileEntry>, password: &str) -> Self {
        Self {
            code,
            files,
            password: PasswordDigest::derive(password),
            created_at: SystemTime::now(),
        }
    }

    /// The share code this record is stored under.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &ShareCode {
        &self.code
    }

    /// The files in this package, in the order the sharer added them.
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// When this record was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Age of this record. Informational only; records never expire.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed().unwrap_or_default()
    }

    /// Returns true if `candidate` matches the password this package was
    /// locked with.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }

    /// Total size of all files in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(FileEntry::size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, bytes: &'static [u8]) -> FileEntry {
        FileEntry::new(name, "application/octet-stream", bytes)
    }

    // ===== FileEntry Tests =====

    #[test]
    fn test_file_entry_new() {
        let file = FileEntry::new("photo.jpg", "image/jpeg", &b"jpegdata"[..]);
        assert_eq!(file.name.as_ref(), "photo.jpg");
        assert_eq!(file.content_type.as_ref(), "image/jpeg");
        assert_eq!(file.size(), 8);
    }

    #[test]
    fn test_file_entry_empty_content_type() {
        let file = FileEntry::new("blob", "", &b"x"[..]);
        assert_eq!(file.content_type.as_ref(), "");
    }

    #[test]
    fn test_file_entry_size_display() {
        let file = FileEntry::new("big.bin", "", vec![0u8; 1024 * 1024]);
        assert_eq!(file.size_display(), "1.00 MB");

        let small = FileEntry::new("small.txt", "text/plain", &b"hi"[..]);
        assert_eq!(small.size_display(), "0.00 MB");
    }

    #[test]
    fn test_file_entry_clone_shares_content() {
        let file = entry("a.bin", b"content");
        let cloned = file.clone();
        assert_eq!(file, cloned);
        assert!(Arc::ptr_eq(&file.name, &cloned.name));
    }

    // ===== PackageRecord Tests =====

    #[test]
    fn test_record_preserves_file_order() {
        let code = ShareCode::parse("X7K9P2").unwrap();
        let record = PackageRecord::new(
            code.clone(),
            vec![entry("first", b"1"), entry("second", b"2"), entry("third", b"3")],
            "Abc123!",
        );

        assert_eq!(record.code(), &code);
        let names: Vec<&str> = record.files().iter().map(|f| f.name.as_ref()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_record_password_check() {
        let record = PackageRecord::new(
            ShareCode::parse("ABC234").unwrap(),
            vec![entry("f", b"x")],
            "Secret1!",
        );

        assert!(record.verify_password("Secret1!"));
        assert!(!record.verify_password("wrong"));
        assert!(!record.verify_password("secret1!"));
    }

    #[test]
    fn test_record_total_size() {
        let record = PackageRecord::new(
            ShareCode::parse("ABC234").unwrap(),
            vec![entry("a", b"12345"), entry("b", b"123")],
            "Abc123!",
        );
        assert_eq!(record.total_size(), 8);
    }

    #[test]
    fn test_record_age_starts_near_zero() {
        let record = PackageRecord::new(
            ShareCode::parse("ABC234").unwrap(),
            vec![entry("f", b"x")],
            "Abc123!",
        );
        assert!(record.age() < Duration::from_secs(1));
    }
}
