/// Screen layout for the roster view
///
/// The screen is a fixed stack: summary block, roster body, status bar. The
/// picker modal is a centered overlay on top of everything.
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

use crate::layout_constants::{STATUS_BAR_HEIGHT, SUMMARY_HEIGHT};

/// How roster rows are drawn at the current terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Table,
    Cards,
}

impl LayoutMode {
    /// Table at or above `breakpoint` columns, stacked cards below it
    pub fn from_width(width: u16, breakpoint: u16) -> Self {
        if width >= breakpoint {
            Self::Table
        } else {
            Self::Cards
        }
    }
}

/// Calculated areas for each component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    pub summary: Rect,
    pub content: Rect,
    pub status_bar: Rect,
    pub picker: Option<Rect>,
}

pub fn calculate_areas(terminal_area: Rect, picker_open: bool) -> LayoutAreas {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(terminal_area);

    LayoutAreas {
        summary: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
        picker: picker_open.then(|| centered_rect(40, 60, terminal_area)),
    }
}

/// Number of roster lines visible in the body for a terminal of `height` rows
///
/// Used as the page size for PageUp/PageDown. The table header takes one line.
pub fn body_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(SUMMARY_HEIGHT + STATUS_BAR_HEIGHT + 1)).max(1)
}

/// Calculate a centered rectangle for modal overlays
///
/// Returns a Rect that is centered within the given area with the specified
/// percentage of width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
