//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

use crate::engine::RosterEngine;
use crate::fixtures::create_test_records;

use super::reducers::sync_selection;
use super::runtime::Runtime;
use super::state::{AppState, RosterState};

/// State with the fixture roster loaded and the cursor on the first row
pub fn create_loaded_state() -> AppState {
    let mut state = AppState::default();
    state.roster = RosterState::Ready(Box::new(RosterEngine::new(create_test_records())));
    sync_selection(&mut state);
    state
}

/// Plain key press without modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Poll the runtime until `expected` actions were processed or two seconds pass
///
/// Returns the number of actions processed.
pub async fn wait_for_actions(runtime: &mut Runtime, expected: usize) -> usize {
    let max_wait = tokio::time::Duration::from_secs(2);
    let poll_interval = tokio::time::Duration::from_millis(10);
    let start = tokio::time::Instant::now();

    let mut total = 0;
    while start.elapsed() < max_wait {
        tokio::time::sleep(poll_interval).await;
        total += runtime.process_actions();
        if total >= expected {
            break;
        }
    }
    total
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Check that some line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_loaded_state_selects_first_row() {
        let state = create_loaded_state();

        assert_eq!(state.ui.selected_index, 0);
        assert_eq!(state.selected_row().map(|row| row.rank), Some(1));
        assert_eq!(state.ui.selected_id, state.selected_id());
    }

    #[test]
    fn test_buffer_helpers() {
        let mut buf = Buffer::empty(ratatui::layout::Rect::new(0, 0, 6, 2));
        buf.set_string(0, 1, "roster", ratatui::style::Style::default());

        assert_eq!(buffer_lines(&buf), vec!["      ".to_string(), "roster".to_string()]);
        assert!(buffer_contains(&buf, "ost"));
        assert!(!buffer_contains(&buf, "nba"));
    }
}
