// State management module
// Handles application state, the film catalog, and persistence

pub mod app_state;
pub mod catalog;
pub mod persistence;

pub use app_state::AppState;
pub use catalog::{Film, FilmCatalog, FilmId, FilmPatch, NewFilm};
pub use persistence::{FilmStore, PersistenceError};
