use std::collections::BTreeSet;

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::engine::{RankedRecord, RecordId, RosterEngine};

use super::action::PickerKind;
use super::error::{TuiError, TuiResult};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Loaded roster (or its loading status)
    pub roster: RosterState,

    /// Cursor, search and picker state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

/// Lifecycle of the single feed load
#[derive(Debug, Clone, Default)]
pub enum RosterState {
    #[default]
    Loading,
    Ready(Box<RosterEngine>),
    Failed(String),
}

impl AppState {
    pub fn engine(&self) -> TuiResult<&RosterEngine> {
        match &self.roster {
            RosterState::Ready(engine) => Ok(engine),
            _ => Err(TuiError::EngineNotLoaded),
        }
    }

    pub fn engine_mut(&mut self) -> TuiResult<&mut RosterEngine> {
        match &mut self.roster {
            RosterState::Ready(engine) => Ok(engine),
            _ => Err(TuiError::EngineNotLoaded),
        }
    }

    /// Row under the cursor, if the roster is loaded and not empty
    pub fn selected_row(&self) -> Option<&RankedRecord> {
        self.engine()
            .ok()?
            .snapshot()
            .get(self.ui.selected_index)
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected_row().map(|row| row.id().clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Cursor position within the snapshot rows
    pub selected_index: usize,
    /// Identity under the cursor, followed across recomputations
    pub selected_id: Option<RecordId>,
    pub search: SearchState,
    pub picker: Option<PickerState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Whether keystrokes are routed to the search buffer
    pub active: bool,
    pub buffer: String,
}

/// Open team/position picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub kind: PickerKind,
    pub options: Vec<String>,
    pub selected: BTreeSet<String>,
    pub cursor: usize,
}

impl PickerState {
    pub fn new(kind: PickerKind, options: Vec<String>, selected: BTreeSet<String>) -> Self {
        Self {
            kind,
            options,
            selected,
            cursor: 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.options.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = self.options.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Flip the option under the cursor
    pub fn toggle(&mut self) {
        if let Some(option) = self.options.get(self.cursor) {
            if !self.selected.remove(option) {
                self.selected.insert(option.clone());
            }
        }
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "q quit | / search | t/p teams/positions | b basis | 1-8 sort | d remove | u undo | r reset";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub loaded_at: Option<DateTime<Local>>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_records;

    #[test]
    fn test_set_status_message_overwrites_error_flag() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        assert!(state.status_is_error);

        state.set_status_message("Normal message".to_string());
        assert_eq!(state.status_message, Some("Normal message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_reset_status_message() {
        let mut state = SystemState::default();
        state.set_status_error_message("Error".to_string());

        state.reset_status_message();

        assert_eq!(state.status_message, Some(DEFAULT_STATUS_MESSAGE.to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_engine_requires_loaded_roster() {
        let mut state = AppState::default();
        assert!(matches!(state.engine(), Err(TuiError::EngineNotLoaded)));
        assert!(state.selected_row().is_none());

        state.roster = RosterState::Ready(Box::new(RosterEngine::new(create_test_records())));
        assert!(state.engine().is_ok());
        assert_eq!(state.selected_row().map(|r| r.rank), Some(1));
    }

    #[test]
    fn test_picker_cursor_is_clamped() {
        let mut picker = PickerState::new(
            PickerKind::Teams,
            vec!["BOS".to_string(), "NYK".to_string()],
            BTreeSet::new(),
        );

        picker.move_cursor(-1);
        assert_eq!(picker.cursor, 0);
        picker.move_cursor(5);
        assert_eq!(picker.cursor, 1);
    }

    #[test]
    fn test_picker_toggle() {
        let mut picker = PickerState::new(
            PickerKind::Positions,
            vec!["C".to_string(), "PG".to_string()],
            BTreeSet::from(["PG".to_string()]),
        );

        picker.toggle();
        assert!(picker.selected.contains("C"));
        picker.move_cursor(1);
        picker.toggle();
        assert!(!picker.selected.contains("PG"));
    }
}
