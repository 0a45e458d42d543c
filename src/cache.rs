use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::clean::CleanedTable;
use crate::error::Result;

/// Identity of one uploaded file: the SHA-256 of its raw bytes, hex-encoded.
/// Re-uploading identical content yields the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        FileId(hex::encode(Sha256::digest(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session-scoped memo of cleaned tables keyed by upload identity, so
/// repeated views of the same upload do not re-parse. Owned by the session
/// context; there is no process-wide state.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<FileId, Arc<CleanedTable>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &FileId) -> Option<Arc<CleanedTable>> {
        self.entries.get(id).map(Arc::clone)
    }

    /// Return the cached table for these bytes, running `parse` only on
    /// first sight of the content. A failed parse caches nothing, so a
    /// corrected re-upload of different bytes parses fresh.
    pub fn load_or_clean<F>(&mut self, bytes: &[u8], parse: F) -> Result<Arc<CleanedTable>>
    where
        F: FnOnce(&[u8]) -> Result<CleanedTable>,
    {
        let id = FileId::of_bytes(bytes);
        if let Some(hit) = self.entries.get(&id) {
            debug!(file = %id.as_str(), "cache hit");
            return Ok(Arc::clone(hit));
        }

        let table = Arc::new(parse(bytes)?);
        info!(file = %id.as_str(), rows = table.len(), "cached cleaned table");
        self.entries.insert(id, Arc::clone(&table));
        Ok(table)
    }

    /// Drop one entry; returns whether it was present.
    pub fn invalidate(&mut self, id: &FileId) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::CustomerRecord;
    use crate::error::{Error, FormatError};

    fn parse_counting(counter: &mut usize) -> impl FnOnce(&[u8]) -> Result<CleanedTable> + '_ {
        move |bytes| {
            *counter += 1;
            Ok(CleanedTable::from_records(vec![CustomerRecord {
                name: String::from_utf8_lossy(bytes).into_owned(),
                sales: None,
                sales_with_tax: None,
            }]))
        }
    }

    #[test]
    fn identical_bytes_hash_to_the_same_id() {
        assert_eq!(FileId::of_bytes(b"abc"), FileId::of_bytes(b"abc"));
        assert_ne!(FileId::of_bytes(b"abc"), FileId::of_bytes(b"abd"));
        // sha256 of empty input, a fixed point worth pinning
        assert_eq!(
            FileId::of_bytes(b"").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn second_load_of_same_content_does_not_reparse() {
        let mut cache = SessionCache::new();
        let mut calls = 0usize;

        let first = cache.load_or_clean(b"upload", parse_counting(&mut calls)).unwrap();
        assert_eq!(calls, 1);
        let second = cache.load_or_clean(b"upload", parse_counting(&mut calls)).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn different_content_parses_fresh() {
        let mut cache = SessionCache::new();
        let mut calls = 0usize;
        cache.load_or_clean(b"one", parse_counting(&mut calls)).unwrap();
        cache.load_or_clean(b"two", parse_counting(&mut calls)).unwrap();
        assert_eq!(calls, 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidation_forces_a_reparse() {
        let mut cache = SessionCache::new();
        let mut calls = 0usize;
        cache.load_or_clean(b"upload", parse_counting(&mut calls)).unwrap();
        assert!(cache.invalidate(&FileId::of_bytes(b"upload")));
        cache.load_or_clean(b"upload", parse_counting(&mut calls)).unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn failed_parses_are_not_cached() {
        let mut cache = SessionCache::new();
        let failing = |_: &[u8]| -> Result<CleanedTable> {
            Err(Error::Format(FormatError {
                missing: vec!["Sales".into()],
                unexpected: vec![],
            }))
        };
        assert!(cache.load_or_clean(b"bad", failing).is_err());
        assert!(cache.is_empty());
    }
}
