//! Project path functions - single source of truth for all file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows running isolated instances side by side, e.g. for manual
//! testing against a scratch taxonomy:
//! ```bash
//! DATA_DIR=data/scratch cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database holding the taxonomy and selection blobs
pub fn taxonomy_db_path() -> String {
    format!("{}/curriculum.db", data_dir())
}

/// Directory used by the file-per-key blob backend
pub fn blob_dir() -> String {
    format!("{}/blobs", data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: We can't easily test env var override because OnceLock
    // initializes once. These tests verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_taxonomy_db_path_format() {
        let path = taxonomy_db_path();
        assert!(path.ends_with("/curriculum.db"));
    }

    #[test]
    fn test_blob_dir_format() {
        let path = blob_dir();
        assert!(path.ends_with("/blobs"));
    }
}
