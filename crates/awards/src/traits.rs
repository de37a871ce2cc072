//! Seam between the interval computation and whatever stores the records.

use anyhow::Result;
use data_loader::{AwardIndex, Movie, Year};

/// The two fields of a winning nomination the aggregator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRecord {
    pub producers: String,
    pub year: Year,
}

impl From<&Movie> for WinningRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            producers: movie.producers.clone(),
            year: movie.year,
        }
    }
}

/// Source of winning records for the interval computation.
///
/// ## Contract
/// - Only records flagged as winners are returned, in any order
/// - One call returns one consistent snapshot
/// - Failures are returned as errors, never as an empty list
pub trait WinningRecordSource: Send + Sync {
    fn winning_records(&self) -> Result<Vec<WinningRecord>>;
}

impl WinningRecordSource for AwardIndex {
    fn winning_records(&self) -> Result<Vec<WinningRecord>> {
        Ok(self.winners().into_iter().map(WinningRecord::from).collect())
    }
}

impl WinningRecordSource for [WinningRecord] {
    fn winning_records(&self) -> Result<Vec<WinningRecord>> {
        Ok(self.to_vec())
    }
}
