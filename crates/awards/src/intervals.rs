//! Producer win-interval aggregation.
//!
//! ## Algorithm
//! 1. Group winning records by producer (one credit can name several)
//! 2. Sort each producer's win years ascending
//! 3. Emit one interval per adjacent pair of wins
//! 4. Keep every interval tied at the global minimum and at the global maximum
//!
//! The computation is pure: it reads one snapshot from a
//! [`WinningRecordSource`] and keeps no state between calls.

use crate::producers::parse_producers;
use crate::traits::{WinningRecord, WinningRecordSource};
use anyhow::{Context, Result};
use data_loader::Year;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Gap between two consecutive wins of one producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// `following_win - previous_win`; zero when both wins share a year.
    /// Widened so that any pair of `Year` values subtracts without overflow.
    pub interval: i64,
    pub previous_win: Year,
    pub following_win: Year,
}

/// The shortest and longest intervals, ties included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeIntervals {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl PrizeIntervals {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Win years per producer, each list sorted ascending.
///
/// Producers are kept in lexical order so repeated queries over the same
/// data produce the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerWinYears {
    wins: BTreeMap<String, Vec<Year>>,
}

impl ProducerWinYears {
    /// Win years for one producer (exact, case-sensitive name)
    pub fn years(&self, producer: &str) -> &[Year] {
        self.wins.get(producer).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Year])> {
        self.wins
            .iter()
            .map(|(producer, years)| (producer.as_str(), years.as_slice()))
    }

    pub fn producer_count(&self) -> usize {
        self.wins.len()
    }
}

/// Step A: credit every producer named on a winning record with its year
pub fn group_wins_by_producer<'a, I>(records: I) -> ProducerWinYears
where
    I: IntoIterator<Item = &'a WinningRecord>,
{
    let mut wins: BTreeMap<String, Vec<Year>> = BTreeMap::new();

    for record in records {
        for producer in parse_producers(&record.producers) {
            wins.entry(producer).or_default().push(record.year);
        }
    }

    for years in wins.values_mut() {
        years.sort_unstable();
    }

    ProducerWinYears { wins }
}

/// Step B: one interval per adjacent pair of wins.
///
/// A producer with N wins yields N-1 intervals; fewer than two wins yields none.
pub fn compute_intervals(wins: &ProducerWinYears) -> Vec<ProducerInterval> {
    wins.iter()
        .flat_map(|(producer, years)| {
            years.windows(2).map(move |pair| ProducerInterval {
                producer: producer.to_string(),
                interval: i64::from(pair[1]) - i64::from(pair[0]),
                previous_win: pair[0],
                following_win: pair[1],
            })
        })
        .collect()
}

/// Step C: keep every interval tied at the minimum and at the maximum
pub fn select_extremes(intervals: Vec<ProducerInterval>) -> PrizeIntervals {
    let (Some(min_value), Some(max_value)) = (
        intervals.iter().map(|i| i.interval).min(),
        intervals.iter().map(|i| i.interval).max(),
    ) else {
        return PrizeIntervals::default();
    };

    let min = intervals
        .iter()
        .filter(|i| i.interval == min_value)
        .cloned()
        .collect();
    let max = intervals
        .into_iter()
        .filter(|i| i.interval == max_value)
        .collect();

    PrizeIntervals { min, max }
}

/// Compute the min/max producer intervals over one snapshot of `source`.
///
/// Errors from the source propagate unchanged (with context); they are
/// never turned into an empty result.
#[instrument(skip(source))]
pub fn prize_intervals<S>(source: &S) -> Result<PrizeIntervals>
where
    S: WinningRecordSource + ?Sized,
{
    let records = source
        .winning_records()
        .context("Failed to fetch winning records")?;

    let wins = group_wins_by_producer(&records);
    let intervals = compute_intervals(&wins);
    debug!(
        "{} winning records, {} producers, {} intervals",
        records.len(),
        wins.producer_count(),
        intervals.len()
    );

    Ok(select_extremes(intervals))
}
