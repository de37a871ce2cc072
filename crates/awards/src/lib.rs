//! Producer award-interval analysis.
//!
//! This crate provides:
//! - A tokenizer that splits a producer credit into names
//! - The win-interval aggregator (group, pair up, pick extremes)
//! - The `WinningRecordSource` trait the aggregator reads its snapshot from
//!
//! ## Example Usage
//! ```ignore
//! use awards::prize_intervals;
//! use data_loader::AwardIndex;
//!
//! let index = AwardIndex::load_from_file(Path::new("data/movielist.csv"))?;
//! let result = prize_intervals(&index)?;
//!
//! for entry in &result.min {
//!     println!("{} won twice in {} years", entry.producer, entry.interval);
//! }
//! ```

pub mod traits;
pub mod producers;
pub mod intervals;

// Re-export main types
pub use traits::{WinningRecord, WinningRecordSource};
pub use producers::parse_producers;
pub use intervals::{
    PrizeIntervals, ProducerInterval, ProducerWinYears, compute_intervals,
    group_wins_by_producer, prize_intervals, select_extremes,
};
