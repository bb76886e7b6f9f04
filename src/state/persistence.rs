// Catalog persistence module
// Handles saving and loading the film snapshot to/from disk

use super::catalog::{Film, FilmCatalog, FilmId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error types for persistence operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// File I/O error
    IoError(String),
    /// JSON serialization/deserialization error
    JsonError(String),
    /// Invalid data format
    InvalidData(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::IoError(msg) => write!(f, "IO Error: {}", msg),
            PersistenceError::JsonError(msg) => write!(f, "JSON Error: {}", msg),
            PersistenceError::InvalidData(msg) => write!(f, "Invalid Data: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Serializable snapshot of the whole catalog
///
/// `next_id` travels with the films so ids stay unique across restarts
/// and deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogSnapshot {
    /// Version of the snapshot format (for future migration support)
    version: u32,
    /// Next id the catalog will assign
    next_id: FilmId,
    /// The full ordered film list
    films: Vec<Film>,
}

/// Film snapshot persistence operations
pub struct FilmStore;

impl FilmStore {
    /// Save the catalog to a JSON snapshot file
    ///
    /// The snapshot is written to a temp file next to the target and
    /// renamed into place, so a crash mid-write never leaves a
    /// truncated snapshot behind. Missing parent directories are
    /// created.
    pub fn save_to_file<P: AsRef<Path>>(
        catalog: &FilmCatalog,
        path: P,
    ) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let snapshot = CatalogSnapshot {
            version: 1,
            next_id: catalog.next_id(),
            films: catalog.films().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| PersistenceError::JsonError(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PersistenceError::IoError(e.to_string()))?;
            }
        }

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| PersistenceError::IoError(e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| PersistenceError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load a catalog from a JSON snapshot file
    ///
    /// A nonexistent file yields an empty catalog, not an error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FilmCatalog, PersistenceError> {
        if !path.as_ref().exists() {
            return Ok(FilmCatalog::new());
        }

        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| PersistenceError::IoError(e.to_string()))?;

        let snapshot: CatalogSnapshot =
            serde_json::from_str(&json).map_err(|e| PersistenceError::JsonError(e.to_string()))?;

        // Validate version (for future migration support)
        if snapshot.version != 1 {
            return Err(PersistenceError::InvalidData(format!(
                "Unsupported snapshot version: {}",
                snapshot.version
            )));
        }

        Ok(FilmCatalog::from_parts(snapshot.films, snapshot.next_id))
    }

    /// Get the default path for the snapshot file
    /// Returns a path in the user's home directory or current directory
    pub fn default_path() -> std::path::PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push(".film-catalog");
            path.push("top250.json");
            path
        } else {
            std::path::PathBuf::from("top250.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::NewFilm;
    use tempfile::TempDir;

    fn sample_film(title: &str, position: u32) -> NewFilm {
        NewFilm {
            title: Some(title.to_string()),
            year: Some(1999),
            rating: Some(8.5),
            budget: Some(63_000_000.0),
            gross: Some(463_517_383.0),
            poster: Some("matrix.jpg".to_string()),
            position: Some(position),
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut catalog = FilmCatalog::new();
        catalog.create(sample_film("The Matrix", 1)).unwrap();

        let snapshot = CatalogSnapshot {
            version: 1,
            next_id: catalog.next_id(),
            films: catalog.films().to_vec(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: CatalogSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.version, 1);
        assert_eq!(deserialized.next_id, 2);
        assert_eq!(deserialized.films.len(), 1);
        assert_eq!(deserialized.films[0].title, "The Matrix");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("top250.json");

        let mut catalog = FilmCatalog::new();
        catalog.create(sample_film("The Matrix", 1)).unwrap();
        catalog.create(sample_film("Alien", 2)).unwrap();

        FilmStore::save_to_file(&catalog, &path).unwrap();
        let loaded = FilmStore::load_from_file(&path).unwrap();

        assert_eq!(loaded.films(), catalog.films());
        assert_eq!(loaded.next_id(), catalog.next_id());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("top250.json");

        let catalog = FilmCatalog::new();
        FilmStore::save_to_file(&catalog, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        // Should yield an empty catalog for a non-existent file
        let catalog = FilmStore::load_from_file(&path).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.next_id(), 1);
    }

    #[test]
    fn test_load_rejects_corrupt_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = FilmStore::load_from_file(&path);
        assert!(matches!(result, Err(PersistenceError::JsonError(_))));
    }

    #[test]
    fn test_load_rejects_unsupported_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("future.json");
        std::fs::write(&path, r#"{"version": 2, "next_id": 1, "films": []}"#).unwrap();

        let result = FilmStore::load_from_file(&path);
        assert!(matches!(result, Err(PersistenceError::InvalidData(_))));
    }
}
