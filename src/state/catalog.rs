// Film catalog core
// Owns the ranked film list and the position renumbering rules

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Unique identifier for a film
pub type FilmId = u64;

/// A single entry in the catalog
///
/// `position` is the film's 1-based rank. Positions stay contiguous
/// across create/update/delete as long as callers let the catalog pick
/// them; a caller-supplied position is trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Unique identifier, assigned at creation and never reused
    pub id: FilmId,
    /// Film title
    pub title: String,
    /// Release year
    pub year: i32,
    /// Aggregate rating
    pub rating: f64,
    /// Production budget
    pub budget: f64,
    /// Gross earnings
    pub gross: f64,
    /// Poster URL or path
    pub poster: String,
    /// 1-based rank in the list
    pub position: u32,
}

/// Input for creating a film
///
/// Every field is optional so that presence can be checked explicitly:
/// a budget or gross of exactly 0 is present, only an absent field is
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFilm {
    /// Film title (required, non-empty)
    pub title: Option<String>,
    /// Release year (required, >= 1888)
    pub year: Option<i32>,
    /// Aggregate rating (required)
    pub rating: Option<f64>,
    /// Production budget (required, >= 0)
    pub budget: Option<f64>,
    /// Gross earnings (required, >= 0)
    pub gross: Option<f64>,
    /// Poster URL or path (required, non-empty)
    pub poster: Option<String>,
    /// Desired rank; omitted means "append at the end"
    pub position: Option<u32>,
}

/// Partial update for a film; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilmPatch {
    /// New title
    pub title: Option<String>,
    /// New release year
    pub year: Option<i32>,
    /// New rating
    pub rating: Option<f64>,
    /// New budget
    pub budget: Option<f64>,
    /// New gross
    pub gross: Option<f64>,
    /// New poster
    pub poster: Option<String>,
    /// New rank; colliding values push other films down
    pub position: Option<u32>,
}

/// Earliest valid release year (first film on record)
pub const MIN_YEAR: i32 = 1888;

/// The film catalog
///
/// Films are stored in insertion order; `list` sorts a copy by rank.
/// `next_id` is a monotonic counter so ids are never reused, even
/// after deletions. Both are persisted together in the snapshot.
#[derive(Debug, Clone)]
pub struct FilmCatalog {
    films: Vec<Film>,
    next_id: FilmId,
}

impl Default for FilmCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            films: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a catalog from persisted parts
    ///
    /// Clamps `next_id` to at least max stored id + 1 so a hand-edited
    /// snapshot cannot cause id reuse.
    pub fn from_parts(films: Vec<Film>, next_id: FilmId) -> Self {
        let max_id = films.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            films,
            next_id: next_id.max(max_id + 1),
        }
    }

    /// Films in storage order, as persisted
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Next id the catalog will assign
    pub fn next_id(&self) -> FilmId {
        self.next_id
    }

    /// Number of films in the catalog
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// True if the catalog holds no films
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// All films sorted ascending by rank
    ///
    /// Returns a sorted copy; the stored order is not disturbed.
    pub fn list(&self) -> Vec<Film> {
        let mut films = self.films.clone();
        films.sort_by_key(|f| f.position);
        films
    }

    /// Look up a film by id
    pub fn get(&self, id: FilmId) -> Result<&Film, AppError> {
        self.films
            .iter()
            .find(|f| f.id == id)
            .ok_or(AppError::FilmNotFound)
    }

    /// Add a film to the catalog
    ///
    /// Validates presence and ranges, assigns the next id, and places
    /// the film at its requested rank. A rank that collides with an
    /// existing film shifts every film at or below that rank down by
    /// one, opening a slot. An omitted rank appends at the end.
    pub fn create(&mut self, new: NewFilm) -> Result<Film, AppError> {
        let title = new
            .title
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingFields)?;
        let poster = new
            .poster
            .filter(|p| !p.is_empty())
            .ok_or(AppError::MissingFields)?;
        let year = new.year.ok_or(AppError::MissingFields)?;
        let rating = new.rating.ok_or(AppError::MissingFields)?;
        let budget = new.budget.ok_or(AppError::MissingFields)?;
        let gross = new.gross.ok_or(AppError::MissingFields)?;

        if year < MIN_YEAR {
            return Err(AppError::InvalidYear);
        }
        if budget < 0.0 || gross < 0.0 {
            return Err(AppError::NegativeValue);
        }

        let position = match new.position {
            Some(position) => {
                if self.films.iter().any(|f| f.position == position) {
                    for film in &mut self.films {
                        if film.position >= position {
                            film.position += 1;
                        }
                    }
                }
                position
            }
            None => self.films.len() as u32 + 1,
        };

        let film = Film {
            id: self.next_id,
            title,
            year,
            rating,
            budget,
            gross,
            poster,
            position,
        };
        self.next_id += 1;
        self.films.push(film.clone());
        Ok(film)
    }

    /// Apply a partial update to a film
    ///
    /// Fields present in the patch replace the stored values. A patched
    /// rank that collides with a different film shifts every other film
    /// at or below that rank down by one; the film itself is never
    /// shifted. The film's slot in storage order is unchanged.
    pub fn update(&mut self, id: FilmId, patch: FilmPatch) -> Result<Film, AppError> {
        let index = self
            .films
            .iter()
            .position(|f| f.id == id)
            .ok_or(AppError::FilmNotFound)?;

        if let Some(position) = patch.position {
            let collides = self
                .films
                .iter()
                .any(|f| f.id != id && f.position == position);
            if collides {
                for film in &mut self.films {
                    if film.id != id && film.position >= position {
                        film.position += 1;
                    }
                }
            }
        }

        let film = &mut self.films[index];
        if let Some(title) = patch.title {
            film.title = title;
        }
        if let Some(year) = patch.year {
            film.year = year;
        }
        if let Some(rating) = patch.rating {
            film.rating = rating;
        }
        if let Some(budget) = patch.budget {
            film.budget = budget;
        }
        if let Some(gross) = patch.gross {
            film.gross = gross;
        }
        if let Some(poster) = patch.poster {
            film.poster = poster;
        }
        if let Some(position) = patch.position {
            film.position = position;
        }

        Ok(film.clone())
    }

    /// Remove a film by id
    ///
    /// Every remaining film ranked below the removed one moves up by
    /// one, keeping the ranking contiguous.
    pub fn delete(&mut self, id: FilmId) -> Result<Film, AppError> {
        let index = self
            .films
            .iter()
            .position(|f| f.id == id)
            .ok_or(AppError::FilmNotFound)?;

        let removed = self.films.remove(index);
        for film in &mut self.films {
            if film.position > removed.position {
                film.position -= 1;
            }
        }
        Ok(removed)
    }
}
