//! Test utilities for store setup.
//!
//! Provides a store over a real SQLite blob backend in a temporary
//! directory, reusing the authoritative load path instead of duplicating
//! initialization in test code.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::persist::{BlobError, SqliteBlobStore};
use crate::store::TaxonomyStore;

/// Test environment with a taxonomy store backed by a SQLite database in a
/// temporary directory, cleaned up automatically when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Path to the backing database, for reopening in reload tests
    pub db_path: PathBuf,
    /// Store loaded through `TaxonomyStore::load`, so it starts from the
    /// built-in defaults exactly as production does on first run
    pub store: TaxonomyStore<SqliteBlobStore>,
}

impl TestEnv {
    pub fn new() -> Result<Self, BlobError> {
        let temp = TempDir::new()?;
        let db_path = temp.path().join("curriculum.db");
        let blob = SqliteBlobStore::open(&db_path)?;
        let store = TaxonomyStore::load(blob);
        Ok(Self {
            temp,
            db_path,
            store,
        })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
