// Application state management
// Holds the film catalog and mirrors it to the snapshot file

use super::catalog::FilmCatalog;
use super::persistence::{FilmStore, PersistenceError};
use std::path::PathBuf;
use tracing::error;

/// Main application state
///
/// Owns the catalog and the snapshot path. The transport layer wraps
/// this in `Arc<RwLock<_>>` and holds the write lock across a mutation
/// and the following `persist`, so the two never interleave between
/// requests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory film catalog
    pub catalog: FilmCatalog,
    /// Where the snapshot is written on every mutation
    data_path: PathBuf,
}

impl AppState {
    /// Create state with an empty catalog backed by the given snapshot path
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            catalog: FilmCatalog::new(),
            data_path,
        }
    }

    /// Path of the backing snapshot file
    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }

    /// Load the catalog from the snapshot file
    ///
    /// Replaces the current catalog. Returns the number of films
    /// loaded; a missing file counts as an empty catalog.
    pub fn load(&mut self) -> Result<usize, PersistenceError> {
        self.catalog = FilmStore::load_from_file(&self.data_path)?;
        Ok(self.catalog.len())
    }

    /// Write the full snapshot, best-effort
    ///
    /// A failed write is logged and otherwise ignored: the in-memory
    /// state is kept and the caller still sees its mutation succeed.
    pub fn persist(&self) {
        if let Err(e) = FilmStore::save_to_file(&self.catalog, &self.data_path) {
            error!(path = %self.data_path.display(), "Failed to persist film snapshot: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::NewFilm;
    use tempfile::TempDir;

    fn sample_film(title: &str) -> NewFilm {
        NewFilm {
            title: Some(title.to_string()),
            year: Some(1972),
            rating: Some(9.2),
            budget: Some(6_000_000.0),
            gross: Some(250_000_000.0),
            poster: Some("godfather.jpg".to_string()),
            position: None,
        }
    }

    #[test]
    fn test_mutation_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("top250.json");

        let mut state = AppState::new(path.clone());
        state.catalog.create(sample_film("The Godfather")).unwrap();
        state.persist();

        let mut reloaded = AppState::new(path);
        let count = reloaded.load().unwrap();
        assert_eq!(count, 1);
        assert_eq!(reloaded.catalog.films()[0].title, "The Godfather");
        assert_eq!(reloaded.catalog.next_id(), 2);
    }

    #[test]
    fn test_load_missing_snapshot_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new(dir.path().join("absent.json"));
        assert_eq!(state.load().unwrap(), 0);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_state() {
        let dir = TempDir::new().unwrap();
        // A directory at the snapshot path makes every write fail
        let path = dir.path().join("blocked");
        std::fs::create_dir(&path).unwrap();

        let mut state = AppState::new(path);
        state.catalog.create(sample_film("Kept")).unwrap();
        state.persist();
        assert_eq!(state.catalog.len(), 1);
    }
}
