//! Persistence port for the taxonomy snapshot.
//!
//! The store writes string blobs under fixed keys through the `BlobStore`
//! trait, so tests substitute an in-memory fake and assert on save calls.
//! Backends:
//! - `MemoryBlobStore`: test fake with a write-failure switch
//! - `FileBlobStore`: one file per key under a data directory
//! - `SqliteBlobStore`: key/value table in a SQLite database

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

/// Blob key holding the serialized taxonomy.
pub const TAXONOMY_KEY: &str = "curriculum.taxonomy";

/// Blob key holding the serialized current selection.
pub const SELECTION_KEY: &str = "curriculum.selection";

/// Key/value blob storage. Writes replace the whole value; reads of unknown
/// keys return `None`. Concurrent writers are last-write-wins by
/// construction, with no merge or conflict detection.
pub trait BlobStore {
  fn get(&self, key: &str) -> Result<Option<String>, BlobError>;
  fn set(&mut self, key: &str, value: &str) -> Result<(), BlobError>;
}

/// Blob store failure.
#[derive(Debug)]
pub enum BlobError {
  Io(std::io::Error),
  Db(rusqlite::Error),
  Encode(serde_json::Error),
  Unavailable(String),
}

impl std::fmt::Display for BlobError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      BlobError::Io(e) => write!(f, "I/O error: {}", e),
      BlobError::Db(e) => write!(f, "database error: {}", e),
      BlobError::Encode(e) => write!(f, "encode error: {}", e),
      BlobError::Unavailable(msg) => write!(f, "blob store unavailable: {}", msg),
    }
  }
}

impl std::error::Error for BlobError {}

impl From<std::io::Error> for BlobError {
  fn from(e: std::io::Error) -> Self {
    BlobError::Io(e)
  }
}

impl From<rusqlite::Error> for BlobError {
  fn from(e: rusqlite::Error) -> Self {
    BlobError::Db(e)
  }
}
