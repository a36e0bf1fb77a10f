//! Ordered output of one recomputation pass and the summaries derived from it

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::record::{Record, RecordId};

/// A visible record with the rank and score of the current pass
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub record: Arc<Record>,
    /// Display rank, dense over the filtered set
    pub rank: usize,
    /// Value of the active basis score, `0` when missing
    pub score: f64,
    pub expanded: bool,
}

impl RankedRecord {
    pub fn id(&self) -> &RecordId {
        &self.record.id
    }

    pub fn tier(&self) -> Option<Tier> {
        Tier::from_rank(self.rank)
    }
}

/// Rank bracket badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top12,
    Top25,
    Top50,
}

impl Tier {
    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => None,
            1..=12 => Some(Self::Top12),
            13..=25 => Some(Self::Top25),
            26..=50 => Some(Self::Top50),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Top12 => "Top 12",
            Self::Top25 => "Top 25",
            Self::Top50 => "Top 50",
        }
    }
}

/// Visible records in display order
///
/// Rebuilt on every pass. `pass` increases by one each time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    rows: Vec<RankedRecord>,
    pass: u64,
}

impl Snapshot {
    pub(crate) fn new(rows: Vec<RankedRecord>, pass: u64) -> Self {
        Self { rows, pass }
    }

    pub fn rows(&self) -> &[RankedRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn pass(&self) -> u64 {
        self.pass
    }

    pub fn get(&self, index: usize) -> Option<&RankedRecord> {
        self.rows.get(index)
    }

    pub fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == id)
    }

    pub fn find(&self, id: &RecordId) -> Option<&RankedRecord> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub(crate) fn set_expanded(&mut self, id: &RecordId, expanded: bool) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id() == id) {
            row.expanded = expanded;
        }
    }
}

/// Record counts for the summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterCounts {
    pub visible: usize,
    pub active: usize,
    pub removed: usize,
    pub total: usize,
}

impl RosterCounts {
    pub fn summary_line(&self) -> String {
        format!(
            "{} players showing ({} removed, {} active of {}).",
            self.visible, self.removed, self.active, self.total
        )
    }
}

/// One "Label: value" chip describing the active configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryChip {
    pub label: &'static str,
    pub value: String,
}

impl SummaryChip {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for SummaryChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Choices offered by the team and position filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub teams: Vec<String>,
    pub positions: Vec<String>,
}

impl FilterOptions {
    /// Sorted unique teams and position tags across `records`
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Arc<Record>>) -> Self {
        let mut teams = BTreeSet::new();
        let mut positions = BTreeSet::new();
        for record in records {
            if !record.team.is_empty() {
                teams.insert(record.team.clone());
            }
            positions.extend(record.position_tags().map(str::to_string));
        }
        Self {
            teams: teams.into_iter().collect(),
            positions: positions.into_iter().collect(),
        }
    }
}
