use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;
use crate::engine::{DetailGroup, MetricField, RankedRecord, SortConfig, SortDirection, SortKey};
use crate::layout_constants::{
    COLUMN_GAP, DECIMAL_COL_WIDTH, DETAIL_INDENT, DETAIL_METRIC_GAP, GAMES_COL_WIDTH,
    NAME_COL_WIDTH, POSITION_COL_WIDTH, RANK_COL_WIDTH, SCORE_COL_WIDTH, TEAM_COL_WIDTH,
    TIER_COL_WIDTH,
};

/// Glyphs for separators, selection and sort indicators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub selector: String,
    pub sort_asc: String,
    pub sort_desc: String,
    pub ellipsis: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            selector: "►".to_string(),
            sort_asc: "▲".to_string(),
            sort_desc: "▼".to_string(),
            ellipsis: "…".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            selector: ">".to_string(),
            sort_asc: "^".to_string(),
            sort_desc: "v".to_string(),
            ellipsis: "~".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    pub fn sort_indicator(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Ascending => &self.sort_asc,
            SortDirection::Descending => &self.sort_desc,
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// `double_line` selects ═/= instead of ─/-.
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Fixed-point number, `-` when missing
pub fn format_number(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", digits, v),
        None => "-".to_string(),
    }
}

/// Whole counts without decimals, fractional ones with one
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn format_seasons(seasons: &[String]) -> String {
    if seasons.is_empty() {
        "-".to_string()
    } else {
        seasons.join(", ")
    }
}

/// Truncate `text` to `width` display columns, marking the cut with `ellipsis`
pub fn truncate(text: &str, width: usize, ellipsis: &str) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let marker_width = ellipsis.width();
    if width <= marker_width {
        return ellipsis.chars().take(width).collect();
    }

    let budget = width - marker_width;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Truncate then pad `text` to exactly `width` display columns
pub fn fit(text: &str, width: usize, align: Align, ellipsis: &str) -> String {
    let text = truncate(text, width, ellipsis);
    let padding = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{}{}", text, padding),
        Align::Right => format!("{}{}", padding, text),
    }
}

/// One column of the roster table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterColumn {
    pub header: &'static str,
    /// Sort key selected through this column, if any
    pub key: Option<SortKey>,
    pub width: usize,
    pub align: Align,
}

impl RosterColumn {
    const fn new(header: &'static str, key: Option<SortKey>, width: usize, align: Align) -> Self {
        Self {
            header,
            key,
            width,
            align,
        }
    }
}

pub const ROSTER_COLUMNS: [RosterColumn; 9] = [
    RosterColumn::new("Rank", Some(SortKey::Rank), RANK_COL_WIDTH, Align::Right),
    RosterColumn::new("Tier", None, TIER_COL_WIDTH, Align::Left),
    RosterColumn::new("Player", Some(SortKey::Name), NAME_COL_WIDTH, Align::Left),
    RosterColumn::new("Team", Some(SortKey::Team), TEAM_COL_WIDTH, Align::Left),
    RosterColumn::new("Pos", Some(SortKey::Position), POSITION_COL_WIDTH, Align::Left),
    RosterColumn::new("Score", Some(SortKey::Score), SCORE_COL_WIDTH, Align::Right),
    RosterColumn::new("GP", Some(SortKey::GamesPlayed), GAMES_COL_WIDTH, Align::Right),
    RosterColumn::new("MPG", Some(SortKey::MinutesPerGame), DECIMAL_COL_WIDTH, Align::Right),
    RosterColumn::new(
        "ADP",
        Some(SortKey::Metric(MetricField::Adp)),
        DECIMAL_COL_WIDTH,
        Align::Right,
    ),
];

/// Index of the tier column in [`ROSTER_COLUMNS`]
pub const TIER_COLUMN: usize = 1;

/// Total display width of a roster table line
pub fn roster_width() -> usize {
    ROSTER_COLUMNS.iter().map(|c| c.width).sum::<usize>()
        + COLUMN_GAP * (ROSTER_COLUMNS.len() - 1)
}

/// Display column at which cell `index` starts
pub fn column_offset(index: usize) -> usize {
    ROSTER_COLUMNS[..index]
        .iter()
        .map(|c| c.width + COLUMN_GAP)
        .sum()
}

fn join_cells(cells: &[String], box_chars: &BoxChars) -> String {
    ROSTER_COLUMNS
        .iter()
        .zip(cells)
        .map(|(column, cell)| fit(cell, column.width, column.align, &box_chars.ellipsis))
        .collect::<Vec<_>>()
        .join(&" ".repeat(COLUMN_GAP))
}

/// Header line with the active sort marked
pub fn roster_header(sort: SortConfig, box_chars: &BoxChars) -> String {
    let cells: Vec<String> = ROSTER_COLUMNS
        .iter()
        .map(|column| match column.key {
            Some(key) if key == sort.key => {
                format!("{}{}", column.header, box_chars.sort_indicator(sort.direction))
            }
            _ => column.header.to_string(),
        })
        .collect();
    join_cells(&cells, box_chars)
}

/// Cell texts of one roster row, in [`ROSTER_COLUMNS`] order
pub fn roster_cells(row: &RankedRecord) -> Vec<String> {
    let record = &row.record;
    vec![
        row.rank.to_string(),
        row.tier().map(|t| t.label().to_string()).unwrap_or_default(),
        record.name.clone(),
        record.team.clone(),
        record.position.clone(),
        format_number(Some(row.score), 2),
        format_count(record.games_played),
        format_number(Some(record.minutes_per_game), 1),
        format_number(record.metric(MetricField::Adp), 1),
    ]
}

pub fn roster_row(row: &RankedRecord, box_chars: &BoxChars) -> String {
    join_cells(&roster_cells(row), box_chars)
}

/// Lines of one card in the narrow layout
pub fn card_lines(row: &RankedRecord, width: usize, box_chars: &BoxChars) -> Vec<String> {
    let record = &row.record;
    let title = match row.tier() {
        Some(tier) => format!("#{} {} [{}]", row.rank, record.name, tier.label()),
        None => format!("#{} {}", row.rank, record.name),
    };
    let identity = format!(
        "{} {} {}  Score {}",
        display_or_dash(&record.team),
        box_chars.vertical,
        display_or_dash(&record.position),
        format_number(Some(row.score), 2)
    );
    let usage = format!(
        "GP {}  MPG {}  ADP {}",
        format_count(record.games_played),
        format_number(Some(record.minutes_per_game), 1),
        format_number(record.metric(MetricField::Adp), 1)
    );
    [title, identity, usage]
        .iter()
        .map(|line| truncate(line, width, &box_chars.ellipsis))
        .collect()
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

/// Detail panel text: a title line per group followed by its metrics,
/// packed left to right and wrapped at `width`
pub fn detail_lines(groups: &[DetailGroup], width: usize, box_chars: &BoxChars) -> Vec<String> {
    let indent = " ".repeat(DETAIL_INDENT);
    let gap = " ".repeat(DETAIL_METRIC_GAP);
    let mut lines = Vec::new();

    for group in groups {
        lines.push(truncate(&format!("  {}", group.title), width, &box_chars.ellipsis));

        let mut current = String::new();
        for metric in &group.metrics {
            let entry = format!("{} {}", metric.label, metric.value);
            let candidate_width = if current.is_empty() {
                DETAIL_INDENT + entry.width()
            } else {
                current.width() + DETAIL_METRIC_GAP + entry.width()
            };
            if !current.is_empty() && candidate_width > width {
                lines.push(truncate(&current, width, &box_chars.ellipsis));
                current.clear();
            }
            if current.is_empty() {
                current.push_str(&indent);
            } else {
                current.push_str(&gap);
            }
            current.push_str(&entry);
        }
        if !current.is_empty() {
            lines.push(truncate(&current, width, &box_chars.ellipsis));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::detail::DetailMetric;
    use crate::engine::RosterEngine;
    use crate::fixtures::record;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Test Header", false, &display);
        assert_eq!(result, "Test Header\n───────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Test Header", true, &display);
        assert_eq!(result, "Test Header\n===========\n");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(2.456), 2), "2.46");
        assert_eq!(format_number(Some(3.0), 0), "3");
        assert_eq!(format_number(Some(-0.5), 1), "-0.5");
        assert_eq!(format_number(None, 2), "-");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(79.0), "79");
        assert_eq!(format_count(39.5), "39.5");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Nikola Jokic", 20, "…"), "Nikola Jokic");
        assert_eq!(truncate("Nikola Jokic", 6, "…"), "Nikol…");
        assert_eq!(truncate("Nikola Jokic", 6, "~"), "Nikol~");
        assert_eq!(truncate("abc", 0, "…"), "");
        // Wide characters count double
        assert_eq!(truncate("日本語テキスト", 5, "…"), "日本…");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("7", 4, Align::Right, "…"), "   7");
        assert_eq!(fit("BOS", 4, Align::Left, "…"), "BOS ");
        assert_eq!(fit("Shai Gilgeous", 8, Align::Left, "…"), "Shai Gi…");
    }

    #[test]
    fn test_roster_width_matches_header() {
        let header = roster_header(SortConfig::default(), &BoxChars::unicode());
        assert_eq!(header.width(), roster_width());
        assert_eq!(column_offset(0), 0);
        assert_eq!(column_offset(2), RANK_COL_WIDTH + TIER_COL_WIDTH + 2 * COLUMN_GAP);
    }

    #[test]
    fn test_roster_header_marks_sort() {
        let header = roster_header(
            SortConfig::new(SortKey::GamesPlayed, SortDirection::Descending),
            &BoxChars::ascii(),
        );
        assert!(header.contains(" GPv"));
        // Right-aligned and unmarked, so padded to the column width
        assert!(header.starts_with(" Rank Tier"));
    }

    #[test]
    fn test_roster_row() {
        let engine = RosterEngine::new(vec![record("Al Smith", "BOS", "PG,SG", 70.0, 2.5, 1.0)]);
        let row = &engine.snapshot().rows()[0];

        let line = roster_row(row, &BoxChars::unicode());

        assert_eq!(line.width(), roster_width());
        assert!(line.starts_with("    1 Top 12 Al Smith"));
        assert!(line.ends_with(" 2.50   70  30.0     -"));
    }

    #[test]
    fn test_card_lines() {
        let engine = RosterEngine::new(vec![record("Al Smith", "", "C", 70.0, 2.5, 1.0)]);
        let row = &engine.snapshot().rows()[0];

        let lines = card_lines(row, 60, &BoxChars::ascii());

        assert_eq!(
            lines,
            vec!["#1 Al Smith [Top 12]", "- | C  Score 2.50", "GP 70  MPG 30.0  ADP -"]
        );
    }

    #[test]
    fn test_detail_lines_wrap() {
        let groups = vec![DetailGroup {
            title: "Per Game Production",
            metrics: vec![
                DetailMetric { label: "PTS", value: "26.4".to_string() },
                DetailMetric { label: "REB", value: "12.4".to_string() },
                DetailMetric { label: "AST", value: "9.0".to_string() },
            ],
        }];

        let lines = detail_lines(&groups, 23, &BoxChars::unicode());

        assert_eq!(
            lines,
            vec!["  Per Game Production", "    PTS 26.4   REB 12.4", "    AST 9.0"]
        );
    }
}
