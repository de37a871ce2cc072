//! Integration tests for the interval computation.
//!
//! These run the full group -> pair -> extremes flow against an
//! `AwardIndex` loaded from CSV, the same way the server does.

use awards::{ProducerInterval, prize_intervals};
use data_loader::{AwardIndex, MoviePatch, NewMovie};

const HEADER: &str = "year;title;studios;producers;winner";

fn load(rows: &[&str]) -> AwardIndex {
    let csv = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n");
    AwardIndex::load_from_str(&csv).unwrap()
}

fn entry(producer: &str, interval: i64, previous_win: i32, following_win: i32) -> ProducerInterval {
    ProducerInterval {
        producer: producer.to_string(),
        interval,
        previous_win,
        following_win,
    }
}

fn sorted(mut entries: Vec<ProducerInterval>) -> Vec<ProducerInterval> {
    entries.sort_by(|a, b| {
        a.producer
            .cmp(&b.producer)
            .then_with(|| a.previous_win.cmp(&b.previous_win))
    });
    entries
}

#[test]
fn test_no_winners() {
    let index = load(&[
        "1980;Movie A;Studio A;Producer A;",
        "1981;Movie B;Studio B;Producer B;",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert!(result.min.is_empty());
    assert!(result.max.is_empty());
}

#[test]
fn test_no_producer_with_two_wins() {
    let index = load(&[
        "1980;Movie A;Studio A;Producer A;yes",
        "1981;Movie B;Studio B;Producer B;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_fast_and_slow_producers() {
    let index = load(&[
        "1980;Movie A;Studio A;Producer A;yes",
        "1981;Movie B;Studio B;Producer A;yes",
        "1990;Movie C;Studio C;Producer B;yes",
        "2010;Movie D;Studio D;Producer B;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.min, vec![entry("Producer A", 1, 1980, 1981)]);
    assert_eq!(result.max, vec![entry("Producer B", 20, 1990, 2010)]);
}

#[test]
fn test_three_wins_for_one_producer() {
    let index = load(&[
        "2000;Movie C;Studio C;Producer A;yes",
        "1980;Movie A;Studio A;Producer A;yes",
        "1985;Movie B;Studio B;Producer A;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.min, vec![entry("Producer A", 5, 1980, 1985)]);
    assert_eq!(result.max, vec![entry("Producer A", 15, 1985, 2000)]);
}

#[test]
fn test_tie_on_minimum_fills_both_sets() {
    let index = load(&[
        "2000;Movie A;Studio A;A;yes",
        "2001;Movie B;Studio B;A;yes",
        "2010;Movie C;Studio C;B;yes",
        "2011;Movie D;Studio D;B;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    let expected = vec![entry("A", 1, 2000, 2001), entry("B", 1, 2010, 2011)];
    assert_eq!(sorted(result.min), expected);
    assert_eq!(sorted(result.max), expected);
}

#[test]
fn test_losing_nominations_are_ignored() {
    let index = load(&[
        "1980;Movie A;Studio A;Producer A;yes",
        "1982;Movie B;Studio B;Producer A;",
        "1990;Movie C;Studio C;Producer A;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.min, vec![entry("Producer A", 10, 1980, 1990)]);
}

#[test]
fn test_shared_credits_count_for_every_producer() {
    let index = load(&[
        "1980;Movie A;Studio A;Producer A and Producer B;yes",
        "1985;Movie B;Studio B;Producer A;yes",
        "1990;Movie C;Studio C;Producer C, Producer B;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.min, vec![entry("Producer A", 5, 1980, 1985)]);
    assert_eq!(result.max, vec![entry("Producer B", 10, 1980, 1990)]);
}

#[test]
fn test_properties_hold_over_mixed_catalog() {
    let index = load(&[
        "1980;M1;S;Allan Carr;yes",
        "1984;M2;S;Allan Carr, Jerry Weintraub;yes",
        "1986;M3;S;Jerry Weintraub and Allan Carr;yes",
        "1990;M4;S;Steven Perry and Joel Silver;yes",
        "1991;M5;S;Joel Silver;yes",
        "2002;M6;S;Matthew Vaughn;yes",
        "2015;M7;S;Simon Kinberg, Matthew Vaughn and Hutch Parker;yes",
    ]);

    let result = prize_intervals(&index).unwrap();
    assert!(!result.min.is_empty());
    assert!(!result.max.is_empty());

    let min_value = result.min[0].interval;
    let max_value = result.max[0].interval;
    assert!(result.min.iter().all(|e| e.interval == min_value));
    assert!(result.max.iter().all(|e| e.interval == max_value));
    assert!(min_value < max_value);

    for e in result.min.iter().chain(&result.max) {
        assert_eq!(e.interval, i64::from(e.following_win) - i64::from(e.previous_win));
        assert!(e.previous_win < e.following_win);
    }

    assert_eq!(result.min, vec![entry("Joel Silver", 1, 1990, 1991)]);
    assert_eq!(result.max, vec![entry("Matthew Vaughn", 13, 2002, 2015)]);
}

#[test]
fn test_repeated_calls_are_identical() {
    let index = load(&[
        "2000;Movie A;Studio A;A;yes",
        "2001;Movie B;Studio B;A and B;yes",
        "2010;Movie C;Studio C;B;yes",
        "2011;Movie D;Studio D;C, B;yes",
        "2030;Movie E;Studio E;C;yes",
    ]);

    let first = prize_intervals(&index).unwrap();
    let second = prize_intervals(&index).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_follows_store_mutations() {
    let mut index = load(&[
        "1980;Movie A;Studio A;Producer A;yes",
        "1981;Movie B;Studio B;Producer A;",
    ]);
    assert!(prize_intervals(&index).unwrap().is_empty());

    index.update(
        2,
        MoviePatch {
            winner: Some(true),
            ..Default::default()
        },
    );
    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.min, vec![entry("Producer A", 1, 1980, 1981)]);

    index.insert(NewMovie {
        year: 1999,
        title: "Movie C".to_string(),
        studios: "Studio C".to_string(),
        producers: "Producer A".to_string(),
        winner: true,
    });
    let result = prize_intervals(&index).unwrap();
    assert_eq!(result.max, vec![entry("Producer A", 18, 1981, 1999)]);

    index.remove(1);
    index.remove(2);
    assert!(prize_intervals(&index).unwrap().is_empty());
}
