use crate::engine::{Basis, Record, RecordId, SortKey};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async feed loading)
#[derive(Debug, Clone)]
pub enum Action {
    // Data actions
    LoadFeed,
    FeedLoaded(Result<Vec<Record>, String>),

    // Engine actions, applied to the loaded roster
    Roster(RosterAction),

    // Selection
    MoveSelection(isize),
    SelectFirst,
    SelectLast,

    // Search mode
    EnterSearch,
    SearchInput(char),
    SearchBackspace,
    ExitSearch,

    // Team / position picker
    Picker(PickerAction),

    // System actions
    Quit,
    UpdateViewport { width: u16, height: u16 },
}

/// Actions forwarded to the roster engine
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    SetSearch(String),
    SetTeams(Vec<String>),
    SetPositions(Vec<String>),
    SetMinGames(u32),
    SetBasis(Basis),
    SortBy(SortKey),
    Remove(RecordId),
    Undo,
    ToggleExpanded(RecordId),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Teams,
    Positions,
}

impl PickerKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Teams => "Teams",
            Self::Positions => "Positions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Open(PickerKind),
    MoveCursor(isize),
    ToggleOption,
    Apply,
    Cancel,
}
