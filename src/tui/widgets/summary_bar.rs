/// SummaryBar widget - roster counts and the active configuration chips
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::engine::{RosterCounts, SummaryChip};
use crate::tui::widgets::RenderableWidget;

const CHIP_GAP: u16 = 2;

#[derive(Debug, Clone)]
pub struct SummaryBar {
    pub counts: RosterCounts,
    pub chips: Vec<SummaryChip>,
}

impl SummaryBar {
    pub fn new(counts: RosterCounts, chips: Vec<SummaryChip>) -> Self {
        Self { counts, chips }
    }
}

impl RenderableWidget for SummaryBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_stringn(
            area.x,
            area.y,
            self.counts.summary_line(),
            usize::from(area.width),
            Style::default().add_modifier(Modifier::BOLD),
        );

        if area.height < 2 {
            return;
        }

        // Chips that do not fit are dropped whole
        let y = area.y + 1;
        let mut x = area.x;
        for chip in &self.chips {
            let label = format!("{}:", chip.label);
            let width = (label.width() + 1 + chip.value.width()) as u16;
            if x + width > area.right() {
                break;
            }
            buf.set_string(x, y, &label, Style::default().fg(config.header_fg));
            buf.set_string(
                x + label.width() as u16 + 1,
                y,
                &chip.value,
                Style::default(),
            );
            x += width + CHIP_GAP;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
