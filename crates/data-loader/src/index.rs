//! AwardIndex loading and secondary-index maintenance.
//!
//! - Build an index from the seed CSV (file or in-memory string)
//! - Keep `year_index` and `winners` consistent with the primary map
//! - Validate that the secondary indices agree with the records

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

impl AwardIndex {
    /// Load the catalog from a `;`-delimited CSV file
    ///
    /// This is the main entry point used at startup.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading award list from {}", path.display());

        let movies = parser::parse_movies_file(path)?;
        let index = Self::from_records(movies);
        index.validate()?;

        info!(
            "Loaded {} movies ({} winners)",
            index.count(),
            index.count_winners()
        );
        Ok(index)
    }

    /// Load the catalog from CSV content held in memory
    pub fn load_from_str(content: &str) -> Result<Self> {
        let movies = parser::parse_movies(content, "<inline>")?;
        let index = Self::from_records(movies);
        index.validate()?;
        Ok(index)
    }

    /// Build an index from already-parsed rows, assigning ids in row order
    pub fn from_records(movies: Vec<NewMovie>) -> Self {
        let mut index = AwardIndex::new();
        for movie in movies {
            index.insert(movie);
        }
        debug!("Indexed {} movies", index.count());
        index
    }

    pub(crate) fn index_movie(&mut self, movie: &Movie) {
        self.year_index
            .entry(movie.year)
            .or_insert_with(Vec::new)
            .push(movie.id);

        if movie.winner {
            self.winners.insert(movie.id);
        }
    }

    pub(crate) fn unindex_movie(&mut self, movie: &Movie) {
        if let Some(ids) = self.year_index.get_mut(&movie.year) {
            ids.retain(|&id| id != movie.id);
            if ids.is_empty() {
                self.year_index.remove(&movie.year);
            }
        }
        self.winners.remove(&movie.id);
    }

    /// Check that the secondary indices agree with the stored records
    pub fn validate(&self) -> Result<()> {
        let indexed: usize = self.year_index.values().map(Vec::len).sum();
        if indexed != self.movies.len() {
            return Err(DataLoadError::InvalidValue {
                field: "year_index".to_string(),
                line: 0,
                value: format!("{} entries for {} movies", indexed, self.movies.len()),
            });
        }

        for (year, ids) in &self.year_index {
            for id in ids {
                match self.movies.get(id) {
                    Some(movie) if movie.year == *year => {}
                    _ => {
                        return Err(DataLoadError::InvalidValue {
                            field: "year_index".to_string(),
                            line: 0,
                            value: format!("movie {} under year {}", id, year),
                        });
                    }
                }
            }
        }

        for id in &self.winners {
            if !self.movies.get(id).is_some_and(|movie| movie.winner) {
                return Err(DataLoadError::InvalidValue {
                    field: "winners".to_string(),
                    line: 0,
                    value: format!("movie {}", id),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "year;title;studios;producers;winner
1980;Movie 1;Studio 1;Producer A;yes
1981;Movie 2;Studio 2;Producer B;no
1981;Movie 3;Studio 3;Producer C;yes";

    #[test]
    fn test_load_from_str() {
        let index = AwardIndex::load_from_str(CSV).unwrap();

        assert_eq!(index.count(), 3);
        assert_eq!(index.count_winners(), 2);
        assert_eq!(index.get(1).unwrap().title, "Movie 1");
        assert_eq!(index.by_year(1981).len(), 2);
    }

    #[test]
    fn test_update_moves_year_and_winner_indices() {
        let mut index = AwardIndex::load_from_str(CSV).unwrap();

        let updated = index
            .update(
                2,
                MoviePatch {
                    year: Some(1980),
                    winner: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.year, 1980);
        assert_eq!(index.by_year(1980).len(), 2);
        assert_eq!(index.by_year(1981).len(), 1);
        assert_eq!(index.count_winners(), 3);
        index.validate().unwrap();
    }

    #[test]
    fn test_remove_cleans_indices() {
        let mut index = AwardIndex::load_from_str(CSV).unwrap();

        let removed = index.remove(1).unwrap();
        assert_eq!(removed.title, "Movie 1");
        assert!(index.get(1).is_none());
        assert!(index.by_year(1980).is_empty());
        assert_eq!(index.count_winners(), 1);
        assert!(index.remove(1).is_none());
        index.validate().unwrap();
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut index = AwardIndex::load_from_str(CSV).unwrap();
        index.remove(3);

        let movie = index.insert(NewMovie {
            year: 2000,
            title: "New".to_string(),
            studios: "Studio".to_string(),
            producers: "Producer".to_string(),
            winner: false,
        });
        assert_eq!(movie.id, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AwardIndex::load_from_file(Path::new("missing/movielist.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
