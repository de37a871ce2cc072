//! Core domain types for the award catalog.
//!
//! This module defines the records held by the catalog and the in-memory
//! store (`AwardIndex`) that owns them.
//! - Type aliases for domain clarity (MovieId, Year)
//! - `Movie` is the stored record, `NewMovie` and `MoviePatch` are the
//!   write-side shapes
//! - HashMap for primary lookups, BTreeMap/BTreeSet for ordered secondary indices

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie record, assigned by the store (starts at 1)
pub type MovieId = u32;

/// Award ceremony year
pub type Year = i32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// A single award nomination as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub year: Year,
    pub title: String,
    pub studios: String,
    /// Producer credit, several names joined by ", " or " and "
    pub producers: String,
    pub winner: bool,
}

/// A nomination that has not been assigned an id yet.
///
/// Used both for CSV rows and for create / full-replace requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub year: Year,
    pub title: String,
    pub studios: String,
    pub producers: String,
    #[serde(default)]
    pub winner: bool,
}

impl NewMovie {
    fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            year: self.year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: self.winner,
        }
    }
}

/// Partial update: every `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviePatch {
    pub year: Option<Year>,
    pub title: Option<String>,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: Option<bool>,
}

impl MoviePatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.title.is_none()
            && self.studios.is_none()
            && self.producers.is_none()
            && self.winner.is_none()
    }

    fn apply_to(self, movie: &mut Movie) {
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(studios) = self.studios {
            movie.studios = studios;
        }
        if let Some(producers) = self.producers {
            movie.producers = producers;
        }
        if let Some(winner) = self.winner {
            movie.winner = winner;
        }
    }
}

// =============================================================================
// AwardIndex - The In-Memory Record Store
// =============================================================================

/// Holds every nomination plus the indices used by the filtered scans.
///
/// The primary map is keyed by id; `year_index` and `winners` are kept in
/// sync on every mutation (see `index.rs`).
#[derive(Debug, Clone)]
pub struct AwardIndex {
    pub(crate) movies: HashMap<MovieId, Movie>,

    /// Movie ids grouped by award year
    pub(crate) year_index: BTreeMap<Year, Vec<MovieId>>,
    /// Ids of every record flagged as winner
    pub(crate) winners: BTreeSet<MovieId>,

    pub(crate) next_id: MovieId,
}

impl AwardIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
            year_index: BTreeMap::new(),
            winners: BTreeSet::new(),
            next_id: 1,
        }
    }

    // Getters

    /// Get a movie by id
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Every movie, newest year first, then by title
    pub fn all(&self) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies.values().collect();
        movies.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });
        movies
    }

    /// Movies nominated in `year`, ordered by title
    pub fn by_year(&self, year: Year) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self
            .year_index
            .get(&year)
            .map(|ids| ids.iter().filter_map(|id| self.movies.get(id)).collect())
            .unwrap_or_default();
        movies.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        movies
    }

    /// Winning movies, oldest year first
    pub fn winners(&self) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self
            .winners
            .iter()
            .filter_map(|id| self.movies.get(id))
            .collect();
        movies.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.id.cmp(&b.id)));
        movies
    }

    /// Total number of records
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// Number of records flagged as winner
    pub fn count_winners(&self) -> usize {
        self.winners.len()
    }

    // Mutators

    /// Store a new nomination and return it with its assigned id
    pub fn insert(&mut self, new_movie: NewMovie) -> Movie {
        let id = self.next_id;
        self.next_id += 1;

        let movie = new_movie.into_movie(id);
        self.index_movie(&movie);
        self.movies.insert(id, movie.clone());
        movie
    }

    /// Replace every field of an existing record.
    ///
    /// Returns `None` when no record has this id.
    pub fn replace(&mut self, id: MovieId, new_movie: NewMovie) -> Option<Movie> {
        let previous = self.movies.remove(&id)?;
        self.unindex_movie(&previous);

        let movie = new_movie.into_movie(id);
        self.index_movie(&movie);
        self.movies.insert(id, movie.clone());
        Some(movie)
    }

    /// Apply a partial update to an existing record
    pub fn update(&mut self, id: MovieId, patch: MoviePatch) -> Option<Movie> {
        let mut movie = self.movies.remove(&id)?;
        self.unindex_movie(&movie);

        patch.apply_to(&mut movie);
        self.index_movie(&movie);
        self.movies.insert(id, movie.clone());
        Some(movie)
    }

    /// Delete a record, returning it if it existed
    pub fn remove(&mut self, id: MovieId) -> Option<Movie> {
        let movie = self.movies.remove(&id)?;
        self.unindex_movie(&movie);
        Some(movie)
    }
}

impl Default for AwardIndex {
    fn default() -> Self {
        Self::new()
    }
}
