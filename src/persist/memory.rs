use std::collections::HashMap;

use super::{BlobError, BlobStore};

/// In-memory blob store. The primary test double: it counts successful
/// writes and can be switched to fail them, so persistence semantics are
/// observable without touching disk.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
  entries: HashMap<String, String>,
  fail_writes: bool,
  writes: usize,
}

impl MemoryBlobStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make every subsequent `set` fail.
  pub fn fail_writes(&mut self, fail: bool) {
    self.fail_writes = fail;
  }

  /// Number of successful writes so far.
  pub fn write_count(&self) -> usize {
    self.writes
  }

  /// Seed a raw value, bypassing the failure switch and the write counter.
  /// Used to stage pre-existing (including corrupt) blobs.
  pub fn seed(&mut self, key: &str, value: &str) {
    self.entries.insert(key.to_string(), value.to_string());
  }
}

impl BlobStore for MemoryBlobStore {
  fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), BlobError> {
    if self.fail_writes {
      return Err(BlobError::Unavailable("write failure injected".to_string()));
    }
    self.entries.insert(key.to_string(), value.to_string());
    self.writes += 1;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_missing_key() {
    let store = MemoryBlobStore::new();
    assert!(store.get("absent").unwrap().is_none());
  }

  #[test]
  fn test_set_then_get() {
    let mut store = MemoryBlobStore::new();
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(store.write_count(), 2);
  }

  #[test]
  fn test_fail_writes() {
    let mut store = MemoryBlobStore::new();
    store.set("k", "v").unwrap();
    store.fail_writes(true);
    assert!(store.set("k", "other").is_err());
    // The stored value and the counter are untouched by the failed write.
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.write_count(), 1);
  }
}
