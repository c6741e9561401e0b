use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BlobError, BlobStore};

/// Blob store keeping one file per key under a data directory.
///
/// Keys become `<dir>/<key>.json`; the directory is created on first write.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BlobError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
