//! Producer-credit tokenizer.
//!
//! A credit string lists one or more producers joined by `,` or ` and `:
//!
//! ```text
//! "Bob Cavallo, Joe Ruffalo and Steve Fargnoli"
//!  -> ["Bob Cavallo", "Joe Ruffalo", "Steve Fargnoli"]
//! ```
//!
//! Commas are split first, then every ` and ` (any case) inside the pieces.
//! Names are trimmed but otherwise kept verbatim, so "Joel Silver" and
//! "joel silver" stay distinct producers.

use regex::Regex;
use std::sync::LazyLock;

static AND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) and ").expect("separator pattern is valid"));

/// Split a producer credit into individual names.
///
/// Blank segments are dropped; repeated names are kept in order of
/// appearance. A credit without separators yields a single name.
pub fn parse_producers(credit: &str) -> Vec<String> {
    credit
        .split(',')
        .flat_map(|segment| AND_SEPARATOR.split(segment))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
