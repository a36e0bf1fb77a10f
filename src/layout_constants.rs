//! Shared layout constants used across CLI and TUI components.

/// Width of the display rank column
pub const RANK_COL_WIDTH: usize = 5;

/// Width of the tier badge column ("Top 12")
pub const TIER_COL_WIDTH: usize = 6;

/// Width of the player name column
pub const NAME_COL_WIDTH: usize = 24;

/// Width of team abbreviation column
pub const TEAM_COL_WIDTH: usize = 5;

/// Width of the position tag column ("PG,SG")
pub const POSITION_COL_WIDTH: usize = 7;

/// Width of the score column
pub const SCORE_COL_WIDTH: usize = 7;

/// Width of the games played column
pub const GAMES_COL_WIDTH: usize = 4;

/// Width of minutes-per-game and ADP columns
pub const DECIMAL_COL_WIDTH: usize = 5;

/// Space between table columns
pub const COLUMN_GAP: usize = 1;

/// Indent of detail panel content under its row
pub const DETAIL_INDENT: usize = 4;

/// Gap between packed detail metrics on one line
pub const DETAIL_METRIC_GAP: usize = 3;

/// Rows per card in the card layout (without detail)
pub const CARD_HEIGHT: usize = 4;

/// Lines reserved above the roster body (summary + chips)
pub const SUMMARY_HEIGHT: u16 = 2;

/// Lines reserved below the roster body (separator + status line)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Minimum-games step for the +/- keys
pub const MIN_GAMES_STEP: u32 = 5;
