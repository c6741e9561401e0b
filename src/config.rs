//! Application configuration.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    storage: Option<StorageConfig>,
}

#[derive(Debug, Deserialize)]
struct StorageConfig {
    path: Option<String>,
}

/// Load the taxonomy database path with priority: config.toml > .env > default
pub fn load_storage_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(storage) = config.storage {
                if let Some(path) = storage.path {
                    tracing::info!("Using taxonomy database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env CURRICULUM_DB
    if let Ok(path) = std::env::var("CURRICULUM_DB") {
        tracing::info!("Using taxonomy database from CURRICULUM_DB env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from(paths::taxonomy_db_path());
    tracing::info!("Using default taxonomy database path: {}", default.display());
    default
}
