use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::DisplayConfig;
use crate::engine::{Basis, RosterEngine, SortConfig, SortDirection};
use crate::feed;
use crate::formatting::{format_header, roster_header, roster_row, roster_width};

const TITLE: &str = "Ironman Rankings";

/// One-shot view configuration for the `table` command
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub search: Option<String>,
    pub teams: Vec<String>,
    pub positions: Vec<String>,
    pub min_games: Option<u32>,
    pub basis: Basis,
    /// Column name accepted by [`crate::engine::SortKey::from_column`]
    pub sort: Option<String>,
    /// Explicit direction; None keeps the column default
    pub direction: Option<SortDirection>,
    pub limit: Option<usize>,
}

/// Apply `options` to a freshly loaded engine, in the same order the TUI would
pub fn apply(engine: &mut RosterEngine, options: &TableOptions) -> Result<()> {
    engine.set_basis(options.basis);
    if let Some(search) = &options.search {
        engine.set_search(search);
    }
    if !options.teams.is_empty() {
        engine.set_teams(options.teams.iter().cloned());
    }
    if !options.positions.is_empty() {
        engine.set_positions(options.positions.iter().cloned());
    }
    if let Some(min_games) = options.min_games {
        engine.set_min_games(min_games);
    }
    if let Some(column) = &options.sort {
        if !engine.sort_by_column(column) {
            bail!("Unknown sort column '{}'", column);
        }
    }
    if let Some(direction) = options.direction {
        let key = engine.sort_config().key;
        engine.set_sort(SortConfig::new(key, direction));
    }
    Ok(())
}

/// Summary, chips and the ranked table as plain text
pub fn render(engine: &RosterEngine, limit: Option<usize>, display: &DisplayConfig) -> String {
    let box_chars = &display.box_chars;
    let mut output = String::new();

    output.push_str(&format_header(TITLE, true, display));
    let _ = writeln!(output, "{}", engine.counts().summary_line());
    let chips: Vec<String> = engine.summary_chips().iter().map(|c| c.to_string()).collect();
    let _ = writeln!(output, "{}", chips.join(&format!(" {} ", box_chars.vertical)));
    output.push('\n');

    let rows = engine.snapshot().rows();
    if rows.is_empty() {
        output.push_str("No players match the current filters.\n");
        return output;
    }

    let _ = writeln!(output, "{}", roster_header(engine.sort_config(), box_chars).trim_end());
    let _ = writeln!(output, "{}", box_chars.horizontal.repeat(roster_width()));
    for row in rows.iter().take(limit.unwrap_or(usize::MAX)) {
        let _ = writeln!(output, "{}", roster_row(row, box_chars).trim_end());
    }
    output
}

pub fn run(feed_path: &Path, options: &TableOptions, display: &DisplayConfig) -> Result<()> {
    let mut engine = feed::load_path(feed_path)
        .with_context(|| format!("Failed to load roster feed {}", feed_path.display()))?;
    apply(&mut engine, options)?;
    print!("{}", render(&engine, options.limit, display));
    Ok(())
}
