//! Ranked roster view engine
//!
//! [`RosterEngine`] owns the loaded record set and every piece of view
//! configuration. Each action changes one piece of state and runs a
//! recomputation pass: filter, prune expansions, rank, sort. The resulting
//! [`Snapshot`] is the only thing views read.

pub mod columns;
pub mod detail;
pub mod expansion;
pub mod filter;
pub mod ranking;
pub mod record;
pub mod removal;
pub mod snapshot;
pub mod sort;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

pub use columns::MetricField;
pub use detail::{detail_groups, DetailGroup, DetailMetric};
pub use expansion::ExpansionSet;
pub use filter::FilterConfig;
pub use ranking::Basis;
pub use record::{RawRow, Record, RecordId};
pub use removal::RemovalStack;
pub use snapshot::{FilterOptions, RankedRecord, RosterCounts, Snapshot, SummaryChip, Tier};
pub use sort::{SortConfig, SortDirection, SortKey};

#[derive(Debug, Clone)]
pub struct RosterEngine {
    records: Vec<Arc<Record>>,
    index: HashMap<RecordId, usize>,
    filters: FilterConfig,
    basis: Basis,
    sort: SortConfig,
    removed: RemovalStack,
    expanded: ExpansionSet,
    snapshot: Snapshot,
}

impl RosterEngine {
    /// Take ownership of a normalized record set and run the first pass
    pub fn new(records: Vec<Record>) -> Self {
        let records: Vec<Arc<Record>> = records.into_iter().map(Arc::new).collect();
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();

        let mut engine = Self {
            records,
            index,
            filters: FilterConfig::default(),
            basis: Basis::default(),
            sort: SortConfig::default(),
            removed: RemovalStack::new(),
            expanded: ExpansionSet::new(),
            snapshot: Snapshot::default(),
        };
        engine.recompute();
        engine
    }

    /// Normalize raw feed rows, in feed order, and build an engine over them
    pub fn from_rows(rows: &[RawRow]) -> Self {
        Self::new(
            rows.iter()
                .enumerate()
                .map(|(position, row)| Record::from_row(row, position))
                .collect(),
        )
    }

    fn recompute(&mut self) {
        let filtered = filter::filter(
            &self.records,
            |id| !self.removed.contains(id),
            &self.filters,
        );

        let visible: HashSet<&RecordId> = filtered.iter().map(|record| &record.id).collect();
        let pruned = self.expanded.prune(&visible);

        let mut ranked = ranking::rank(&filtered, self.basis);
        for row in &mut ranked {
            row.expanded = self.expanded.contains(&row.record.id);
        }
        let rows = sort::sort(&ranked, self.sort);

        let pass = self.snapshot.pass() + 1;
        debug!(
            "ROSTER: pass {} -> {} visible of {} ({} removed, {} expansions pruned)",
            pass,
            rows.len(),
            self.records.len(),
            self.removed.len(),
            pruned
        );
        self.snapshot = Snapshot::new(rows, pass);
    }

    // Actions

    pub fn set_search(&mut self, search: &str) {
        self.filters.search = search.trim().to_string();
        self.recompute();
    }

    pub fn set_teams<I, S>(&mut self, teams: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.teams = non_empty(teams);
        self.recompute();
    }

    pub fn set_positions<I, S>(&mut self, positions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.positions = non_empty(positions);
        self.recompute();
    }

    pub fn set_min_games(&mut self, min_games: u32) {
        self.filters.min_games = min_games;
        self.recompute();
    }

    /// Switch ranking basis; the sort returns to its default
    pub fn set_basis(&mut self, basis: Basis) {
        self.basis = basis;
        self.sort = SortConfig::default();
        self.recompute();
    }

    /// Select a sort key: same key flips direction, a new key takes its
    /// default direction
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
        self.recompute();
    }

    /// Select a sort key by column name; unknown names change nothing
    pub fn sort_by_column(&mut self, column: &str) -> bool {
        match SortKey::from_column(column) {
            Some(key) => {
                self.set_sort_key(key);
                true
            }
            None => {
                debug!("ROSTER: ignoring sort on unknown column {:?}", column);
                false
            }
        }
    }

    /// Mark an active record as removed
    ///
    /// Returns false (and changes nothing) for unknown or already removed ids.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        if !self.index.contains_key(id) {
            debug!("ROSTER: remove of unknown id {}", id);
            return false;
        }
        if !self.removed.push(id.clone()) {
            debug!("ROSTER: {} already removed", id);
            return false;
        }
        self.expanded.remove(id);
        self.recompute();
        true
    }

    /// Reactivate the most recently removed record
    pub fn undo(&mut self) -> Option<RecordId> {
        let Some(id) = self.removed.pop() else {
            debug!("ROSTER: nothing to undo");
            return None;
        };
        self.recompute();
        Some(id)
    }

    /// Flip the detail panel of a visible record
    ///
    /// Returns the new expanded state, or `None` if the record is not
    /// currently visible. Only the snapshot flags change.
    pub fn toggle_expanded(&mut self, id: &RecordId) -> Option<bool> {
        if self.snapshot.position_of(id).is_none() {
            debug!("ROSTER: toggle on hidden id {}", id);
            return None;
        }
        let expanded = self.expanded.toggle(id);
        self.snapshot.set_expanded(id, expanded);
        Some(expanded)
    }

    /// Restore default configuration and reactivate every record
    pub fn reset(&mut self) {
        self.filters = FilterConfig::default();
        self.basis = Basis::default();
        self.sort = SortConfig::default();
        self.removed.clear();
        self.expanded.clear();
        self.recompute();
    }

    // Accessors

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn record(&self, id: &RecordId) -> Option<&Arc<Record>> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn is_active(&self, id: &RecordId) -> bool {
        self.index.contains_key(id) && !self.removed.contains(id)
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn can_undo(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn counts(&self) -> RosterCounts {
        let total = self.records.len();
        let removed = self.removed.len();
        RosterCounts {
            visible: self.snapshot.len(),
            active: total - removed,
            removed,
            total,
        }
    }

    pub fn summary_chips(&self) -> Vec<SummaryChip> {
        let mut chips = vec![
            SummaryChip::new("Basis", self.basis.label()),
            SummaryChip::new("Sort", self.sort.describe()),
        ];
        if !self.filters.search.is_empty() {
            chips.push(SummaryChip::new("Search", format!("\"{}\"", self.filters.search)));
        }
        if !self.filters.teams.is_empty() {
            chips.push(SummaryChip::new("Teams", join(&self.filters.teams)));
        }
        if !self.filters.positions.is_empty() {
            chips.push(SummaryChip::new("Positions", join(&self.filters.positions)));
        }
        if self.filters.min_games > 0 {
            chips.push(SummaryChip::new("GP", format!(">= {}", self.filters.min_games)));
        }
        chips
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }

    /// Highest games played in the record set, rounded up
    pub fn max_games_played(&self) -> u32 {
        self.records
            .iter()
            .map(|record| record.games_played)
            .fold(0.0_f64, f64::max)
            .ceil() as u32
    }
}

fn non_empty<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| !value.trim().is_empty())
        .collect()
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
