/// Compose the whole screen from the application state
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::layout::{calculate_areas, LayoutMode};
use super::state::{AppState, RosterState, DEFAULT_STATUS_MESSAGE};
use super::widgets::{
    PickerModal, RenderableWidget, RosterCards, RosterTable, StatusBar, SummaryBar,
};

pub fn render(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config;
    let display = &config.display;
    let areas = calculate_areas(area, state.ui.picker.is_some());

    match &state.roster {
        RosterState::Ready(engine) => {
            SummaryBar::new(engine.counts(), engine.summary_chips())
                .render(areas.summary, buf, display);

            let rows = engine.snapshot().rows();
            let selected = (!rows.is_empty()).then_some(state.ui.selected_index);
            match LayoutMode::from_width(area.width, config.layout.card_breakpoint) {
                LayoutMode::Table => RosterTable::new(rows, engine.sort_config(), selected)
                    .render(areas.content, buf, display),
                LayoutMode::Cards => {
                    RosterCards::new(rows, selected).render(areas.content, buf, display)
                }
            }
        }
        RosterState::Loading => {
            buf.set_stringn(
                areas.content.x,
                areas.content.y,
                "Loading roster...",
                usize::from(areas.content.width),
                Style::default(),
            );
        }
        RosterState::Failed(_) => {
            buf.set_stringn(
                areas.content.x,
                areas.content.y,
                "Failed to load data.",
                usize::from(areas.content.width),
                Style::default().fg(display.error_fg),
            );
        }
    }

    status_bar(state).render(areas.status_bar, buf, display);

    if let (Some(picker), Some(picker_area)) = (&state.ui.picker, areas.picker) {
        PickerModal::new(picker).render(picker_area, buf, display);
    }
}

fn status_bar(state: &AppState) -> StatusBar {
    let system = &state.system;

    let bar = if state.ui.search.active {
        StatusBar::new(format!("/{}_", state.ui.search.buffer))
    } else {
        let message = system
            .status_message
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string());
        StatusBar::new(message).with_error(system.status_is_error)
    };

    match system.loaded_at {
        Some(loaded_at) => {
            bar.with_right(loaded_at.format(&system.config.time_format).to_string())
        }
        None => bar,
    }
}
