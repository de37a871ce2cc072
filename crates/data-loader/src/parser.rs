//! Parser for the award list CSV.
//!
//! Format: `year;title;studios;producers;winner`
//!
//! - The first non-empty line is a header; column positions are taken from it
//! - Lines and fields are trimmed, blank lines skipped
//! - `winner` is `yes` (any case) for winners, anything else (usually empty)
//!   otherwise

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const DELIMITER: char = ';';

/// Column positions resolved from the header line
#[derive(Debug, Clone, Copy)]
struct Columns {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

impl Columns {
    fn from_header(header: &str, file: &str) -> Result<Self> {
        let names: Vec<String> = header
            .split(DELIMITER)
            .map(|name| name.trim().to_lowercase())
            .collect();

        let position = |column: &str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            year: position("year")?,
            title: position("title")?,
            studios: position("studios")?,
            producers: position("producers")?,
            winner: position("winner")?,
        })
    }
}

/// Read and parse a CSV file from disk
pub fn parse_movies_file(path: &Path) -> Result<Vec<NewMovie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movies(&content, &file)
}

/// Parse CSV content already held in memory.
///
/// `file` is only used to label errors.
pub fn parse_movies(content: &str, file: &str) -> Result<Vec<NewMovie>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, header)) = lines.next() else {
        // No header, no records
        return Ok(Vec::new());
    };
    let columns = Columns::from_header(header, file)?;

    let mut movies = Vec::new();
    for (line_no, line) in lines {
        movies.push(parse_line(line, line_no, columns, file)?);
    }

    Ok(movies)
}

fn parse_line(line: &str, line_no: usize, columns: Columns, file: &str) -> Result<NewMovie> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    let field = |idx: usize, name: &str| {
        fields
            .get(idx)
            .copied()
            .ok_or_else(|| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Missing {}", name),
            })
    };

    let year = field(columns.year, "year")?;
    let title = field(columns.title, "title")?;
    let studios = field(columns.studios, "studios")?;
    let producers = field(columns.producers, "producers")?;
    // A row may omit the trailing winner field entirely
    let winner = fields.get(columns.winner).copied().unwrap_or("");

    if producers.is_empty() {
        return Err(DataLoadError::InvalidValue {
            field: "producers".to_string(),
            line: line_no,
            value: producers.to_string(),
        });
    }

    Ok(NewMovie {
        year: year.parse().map_err(|e| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid year {:?}: {}", year, e),
        })?,
        title: title.to_string(),
        studios: studios.to_string(),
        producers: producers.to_string(),
        winner: parse_winner(winner),
    })
}

/// "yes" in any case marks a winner
///
/// Example: "yes" -> true, "YES" -> true, "" -> false, "no" -> false
fn parse_winner(s: &str) -> bool {
    s.eq_ignore_ascii_case("yes")
}
