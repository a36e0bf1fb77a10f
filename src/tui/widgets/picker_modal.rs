/// PickerModal widget - multi-select list for the team and position filters
///
/// Features:
/// - Clear background behind the modal
/// - Border titled with the picker kind
/// - Checkbox per option, selector on the cursor row
/// - Key hint footer
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::config::DisplayConfig;
use crate::tui::state::PickerState;
use crate::tui::widgets::RenderableWidget;

const FOOTER: &str = "Space toggle  Enter apply  Esc cancel";

pub struct PickerModal<'a> {
    pub picker: &'a PickerState,
}

impl<'a> PickerModal<'a> {
    pub fn new(picker: &'a PickerState) -> Self {
        Self { picker }
    }
}

impl RenderableWidget for PickerModal<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        Clear.render(area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.selection_fg))
            .title(format!(" {} ", self.picker.kind.title()))
            .render(area, buf);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width - 2,
            area.height - 2,
        );
        let width = usize::from(inner.width);

        // Last inner line is the footer
        let list_height = usize::from(inner.height.saturating_sub(1));
        buf.set_stringn(
            inner.x,
            inner.bottom() - 1,
            FOOTER,
            width,
            Style::default().add_modifier(Modifier::DIM),
        );

        if self.picker.options.is_empty() {
            buf.set_stringn(inner.x, inner.y, " (no options)", width, Style::default());
            return;
        }

        let offset = (self.picker.cursor + 1).saturating_sub(list_height);
        let visible = self
            .picker
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(list_height);

        for (y, (i, option)) in (inner.y..).zip(visible) {
            let checked = if self.picker.selected.contains(option) {
                "[x]"
            } else {
                "[ ]"
            };
            let (selector, style) = if i == self.picker.cursor {
                (
                    config.box_chars.selector.as_str(),
                    Style::default()
                        .fg(config.selection_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default())
            };
            let line = format!("{} {} {}", selector, checked, option);
            buf.set_stringn(inner.x, y, line, width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::action::PickerKind;
    use crate::tui::widgets::testing::*;
    use std::collections::BTreeSet;

    fn picker(cursor: usize) -> PickerState {
        let mut picker = PickerState::new(
            PickerKind::Positions,
            vec!["C".to_string(), "PF".to_string(), "PG".to_string(), "SG".to_string()],
            BTreeSet::from(["PG".to_string()]),
        );
        picker.cursor = cursor;
        picker
    }

    #[test]
    fn test_renders_border_title_and_options() {
        let state = picker(0);
        let buf = render_widget(&PickerModal::new(&state), 40, 7);

        assert!(buffer_line(&buf, 0).contains(" Positions "));
        assert_buffer_line(&buf, 1, &format!("│► [ ] C{}│", " ".repeat(31)));
        assert!(buffer_line(&buf, 3).starts_with("│  [x] PG"));
        assert!(buffer_line(&buf, 5).starts_with("│Space toggle  Enter apply  Esc cancel"));
        assert_eq!(buf[(1, 1)].fg, test_config().selection_fg);
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let state = picker(3);
        let buf = render_widget(&PickerModal::new(&state), 40, 5);

        // Two list lines: PG, SG
        assert!(buffer_line(&buf, 1).starts_with("│  [x] PG"));
        assert!(buffer_line(&buf, 2).starts_with("│► [ ] SG"));
    }

    #[test]
    fn test_empty_options() {
        let state = PickerState::new(PickerKind::Teams, Vec::new(), BTreeSet::new());
        let buf = render_widget(&PickerModal::new(&state), 30, 5);

        assert!(buffer_line(&buf, 1).starts_with("│ (no options)"));
    }
}
