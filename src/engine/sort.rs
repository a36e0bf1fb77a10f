//! Ordering of the ranked set by a user-selected key and direction

use std::cmp::Ordering;
use std::fmt;

use super::columns::MetricField;
use super::snapshot::RankedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// How values of a sort key compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Rank,
    Numeric,
    Text,
}

/// Column a roster can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Rank,
    Name,
    Team,
    Position,
    Score,
    GamesPlayed,
    MinutesPerGame,
    Metric(MetricField),
}

impl SortKey {
    /// Columns shown in the roster table, in display order
    pub fn columns() -> [Self; 8] {
        [
            Self::Rank,
            Self::Name,
            Self::Team,
            Self::Position,
            Self::Score,
            Self::GamesPlayed,
            Self::MinutesPerGame,
            Self::Metric(MetricField::Adp),
        ]
    }

    pub fn kind(&self) -> SortKind {
        match self {
            Self::Rank => SortKind::Rank,
            Self::Name | Self::Team | Self::Position => SortKind::Text,
            Self::Score | Self::GamesPlayed | Self::MinutesPerGame | Self::Metric(_) => {
                SortKind::Numeric
            }
        }
    }

    /// Direction used when this key is first selected
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Rank => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rank => "Rank",
            Self::Name => "Player",
            Self::Team => "Team",
            Self::Position => "Position",
            Self::Score => "Score",
            Self::GamesPlayed => "Games Played",
            Self::MinutesPerGame => "Minutes (MPG)",
            Self::Metric(field) => field.label(),
        }
    }

    /// Resolve a column name ("displayRank", "name", "GP", "ADP", ...)
    ///
    /// Matching is case-insensitive. Returns `None` for unknown columns.
    pub fn from_column(name: &str) -> Option<Self> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "rank" | "displayrank" => Self::Rank,
            "name" | "player" | "name_full" => Self::Name,
            "team" => Self::Team,
            "pos" | "position" => Self::Position,
            "score" | "currentscore" => Self::Score,
            "gp" | "games" => Self::GamesPlayed,
            "mpg" | "minutes" => Self::MinutesPerGame,
            other => return MetricField::from_column(other).map(Self::Metric),
        };
        Some(key)
    }

    fn numeric_value(&self, row: &RankedRecord) -> Option<f64> {
        match self {
            Self::Score => Some(row.score),
            Self::GamesPlayed => Some(row.record.games_played),
            Self::MinutesPerGame => Some(row.record.minutes_per_game),
            Self::Metric(field) => row.record.metric(*field),
            Self::Rank | Self::Name | Self::Team | Self::Position => None,
        }
    }

    fn text_value<'a>(&self, row: &'a RankedRecord) -> &'a str {
        match self {
            Self::Name => &row.record.name,
            Self::Team => &row.record.team,
            Self::Position => &row.record.position,
            _ => "",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Result of selecting `key` while this config is active
    ///
    /// Re-selecting the current key flips the direction; a new key starts
    /// in its default direction.
    pub fn toggled(&self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, key.default_direction())
        }
    }

    /// Summary text, e.g. "Rank (ASC)"
    pub fn describe(&self) -> String {
        format!("{} ({})", self.key.label(), self.direction.label())
    }
}

/// Return the ranked rows ordered by `config`
///
/// The sort is stable over the input order. Missing numeric values always
/// come last, whichever the direction.
pub fn sort(ranked: &[RankedRecord], config: SortConfig) -> Vec<RankedRecord> {
    let mut rows = ranked.to_vec();
    rows.sort_by(|a, b| compare(a, b, config));
    rows
}

fn compare(a: &RankedRecord, b: &RankedRecord, config: SortConfig) -> Ordering {
    let SortConfig { key, direction } = config;
    match key.kind() {
        SortKind::Rank => direction.apply(a.rank.cmp(&b.rank)),
        SortKind::Numeric => {
            let missing = match direction {
                SortDirection::Ascending => f64::INFINITY,
                SortDirection::Descending => f64::NEG_INFINITY,
            };
            let left = key.numeric_value(a).unwrap_or(missing);
            let right = key.numeric_value(b).unwrap_or(missing);
            direction.apply(left.partial_cmp(&right).unwrap_or(Ordering::Equal))
        }
        SortKind::Text => {
            let left = key.text_value(a).to_lowercase();
            let right = key.text_value(b).to_lowercase();
            direction.apply(left.cmp(&right))
        }
    }
}
