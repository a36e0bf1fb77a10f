//! Filter predicates over the full record set

use std::collections::BTreeSet;
use std::sync::Arc;

use super::record::{Record, RecordId};

/// Active filter configuration
///
/// Empty team/position sets mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub search: String,
    pub teams: BTreeSet<String>,
    pub positions: BTreeSet<String>,
    pub min_games: u32,
}

impl FilterConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check predicates 2-5 (search, team, position, games played)
    ///
    /// `needle` is the lower-cased search string, computed once per pass.
    fn matches(&self, record: &Record, needle: &str) -> bool {
        matches_search(record, needle)
            && matches_team(record, &self.teams)
            && matches_position(record, &self.positions)
            && record.games_played >= f64::from(self.min_games)
    }
}

fn matches_search(record: &Record, needle: &str) -> bool {
    needle.is_empty() || record.name.to_lowercase().contains(needle)
}

fn matches_team(record: &Record, teams: &BTreeSet<String>) -> bool {
    teams.is_empty() || teams.contains(&record.team)
}

fn matches_position(record: &Record, positions: &BTreeSet<String>) -> bool {
    positions.is_empty() || record.position_tags().any(|tag| positions.contains(tag))
}

/// Reduce the record set to active records matching every predicate
///
/// Output keeps the original record order.
pub fn filter<F>(records: &[Arc<Record>], is_active: F, config: &FilterConfig) -> Vec<Arc<Record>>
where
    F: Fn(&RecordId) -> bool,
{
    let needle = config.search.to_lowercase();
    records
        .iter()
        .filter(|record| is_active(&record.id) && config.matches(record, &needle))
        .cloned()
        .collect()
}
