//! Player records and the row normalizer
//!
//! A [`Record`] is built once per feed row and never changes afterwards.
//! Rank, score, active and expanded state are tracked by the engine, keyed
//! by [`RecordId`].

use std::collections::HashMap;
use std::fmt;

use super::columns::{
    MetricField, GAMES_COLUMN, MINUTES_COLUMN, NAME_COLUMN, POSITION_COLUMN, SEASONS_COLUMN,
    TEAM_COLUMN,
};

/// One raw feed row: column name to optional cell text
pub type RawRow = HashMap<String, Option<String>>;

/// Name used in identities when a row has no player name
const FALLBACK_NAME: &str = "player";

/// Stable identity of a record for the lifetime of one loaded dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Metric values indexed by [`MetricField`]; `None` marks a missing value
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    values: [Option<f64>; MetricField::COUNT],
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            values: [None; MetricField::COUNT],
        }
    }
}

impl Metrics {
    pub fn get(&self, field: MetricField) -> Option<f64> {
        self.values[field.index()]
    }

    pub fn set(&mut self, field: MetricField, value: Option<f64>) {
        self.values[field.index()] = value;
    }

    /// Builder-style setter
    pub fn with(mut self, field: MetricField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }
}

/// A normalized player record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub team: String,
    /// Raw position tag string as it appears in the feed
    pub position: String,
    pub games_played: f64,
    pub minutes: f64,
    pub minutes_per_game: f64,
    pub metrics: Metrics,
    pub seasons: Vec<String>,
}

impl Record {
    /// Normalize one feed row found at `source_position` (zero-based)
    ///
    /// Never fails: malformed numeric cells degrade to `0`, or to missing
    /// for optional metrics.
    pub fn from_row(row: &RawRow, source_position: usize) -> Self {
        let name = text_cell(row, NAME_COLUMN);
        let games_played = coerce_number(cell(row, GAMES_COLUMN)).unwrap_or(0.0);
        let minutes = coerce_number(cell(row, MINUTES_COLUMN)).unwrap_or(0.0);

        let mut metrics = Metrics::default();
        for field in MetricField::ALL {
            let value = coerce_number(cell(row, field.column()));
            let value = if field.is_optional() {
                value
            } else {
                Some(value.unwrap_or(0.0))
            };
            metrics.set(field, value);
        }

        let id_name = if name.is_empty() { FALLBACK_NAME } else { name.as_str() };

        Self {
            id: RecordId(format!("{}-{}", id_name, source_position)),
            team: text_cell(row, TEAM_COLUMN),
            position: text_cell(row, POSITION_COLUMN),
            minutes_per_game: minutes_per_game(minutes, games_played),
            seasons: parse_seasons(cell(row, SEASONS_COLUMN)),
            name,
            games_played,
            minutes,
            metrics,
        }
    }

    /// Individual position tags (the raw string split on commas and whitespace)
    pub fn position_tags(&self) -> impl Iterator<Item = &str> {
        self.position
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tag| !tag.is_empty())
    }

    pub fn metric(&self, field: MetricField) -> Option<f64> {
        self.metrics.get(field)
    }
}

fn cell<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    row.get(column).and_then(|value| value.as_deref())
}

fn text_cell(row: &RawRow, column: &str) -> String {
    cell(row, column).map(str::trim).unwrap_or_default().to_string()
}

/// Minutes per game rounded to one decimal, zero without games played
pub fn minutes_per_game(minutes: f64, games_played: f64) -> f64 {
    if games_played > 0.0 {
        (minutes / games_played * 10.0).round() / 10.0
    } else {
        0.0
    }
}

/// Parse the leading floating point number of a cell
///
/// Accepts the longest numeric prefix ("12.5%" parses as 12.5). Returns
/// `None` for absent, empty, non-numeric or non-finite input.
pub fn coerce_number(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    let prefix = numeric_prefix(text);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &text[..end]
}

fn parse_seasons(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|season| !season.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
