//! # Movie Catalog
//!
//! The store handle shared by every request. It owns the `AwardIndex`
//! behind a read/write lock and is created once by `main` (or by a test),
//! then passed around through `AppState`.
//!
//! Each operation takes the lock exactly once, so a read always sees one
//! consistent snapshot. The interval computation copies the winning
//! records out under the read lock and runs after the lock is released.

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use awards::{PrizeIntervals, WinningRecord, WinningRecordSource};
use data_loader::{AwardIndex, Movie, MovieId, MoviePatch, NewMovie, Year};

/// Which slice of the catalog a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieFilter {
    /// Every record, newest year first
    #[default]
    All,
    /// Records of one year, by title
    Year(Year),
    /// Winners only, oldest year first
    Winners,
}

#[derive(Debug, Default)]
pub struct MovieCatalog {
    index: RwLock<AwardIndex>,
}

impl MovieCatalog {
    pub fn new(index: AwardIndex) -> Self {
        Self {
            index: RwLock::new(index),
        }
    }

    /// Build the catalog from the seed CSV
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let index = AwardIndex::load_from_file(path)
            .with_context(|| format!("Failed to load award list from {}", path.display()))?;
        info!(
            "Catalog ready: {} movies, {} winners",
            index.count(),
            index.count_winners()
        );
        Ok(Self::new(index))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, AwardIndex>> {
        self.index
            .read()
            .map_err(|e: PoisonError<_>| anyhow!("Catalog lock poisoned: {}", e))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AwardIndex>> {
        self.index
            .write()
            .map_err(|e: PoisonError<_>| anyhow!("Catalog lock poisoned: {}", e))
    }

    pub fn list(&self, filter: MovieFilter) -> Result<Vec<Movie>> {
        let index = self.read()?;
        let movies = match filter {
            MovieFilter::All => index.all(),
            MovieFilter::Year(year) => index.by_year(year),
            MovieFilter::Winners => index.winners(),
        };
        Ok(movies.into_iter().cloned().collect())
    }

    pub fn get(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.read()?.get(id).cloned())
    }

    pub fn create(&self, movie: NewMovie) -> Result<Movie> {
        let movie = self.write()?.insert(movie);
        debug!("Created movie {}", movie.id);
        Ok(movie)
    }

    /// Full replacement; `None` when the id is unknown
    pub fn replace(&self, id: MovieId, movie: NewMovie) -> Result<Option<Movie>> {
        Ok(self.write()?.replace(id, movie))
    }

    /// Partial update; `None` when the id is unknown
    pub fn update(&self, id: MovieId, patch: MoviePatch) -> Result<Option<Movie>> {
        Ok(self.write()?.update(id, patch))
    }

    /// Returns whether a record was removed
    pub fn delete(&self, id: MovieId) -> Result<bool> {
        let removed = self.write()?.remove(id).is_some();
        if removed {
            debug!("Deleted movie {}", id);
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.count())
    }

    pub fn count_winners(&self) -> Result<usize> {
        Ok(self.read()?.count_winners())
    }

    pub fn prize_intervals(&self) -> Result<PrizeIntervals> {
        awards::prize_intervals(self)
    }
}

impl WinningRecordSource for MovieCatalog {
    fn winning_records(&self) -> Result<Vec<WinningRecord>> {
        // Guard drops at the end of this statement
        let records = self.read()?.winning_records()?;
        Ok(records)
    }
}
