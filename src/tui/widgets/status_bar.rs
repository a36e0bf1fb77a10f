/// StatusBar widget - status message and load time at the bottom of the screen
///
/// Renders two lines:
/// - a horizontal separator
/// - the status message on the left (error color for errors), then a
///   vertical bar and the right-hand text
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub message: String,
    pub is_error: bool,
    /// Text after the vertical bar, e.g. the load time
    pub right: String,
}

impl StatusBar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_right(mut self, right: impl Into<String>) -> Self {
        self.right = right.into();
        self
    }

    /// Left segment, right segment and the column of the vertical bar
    fn build_status_line(
        &self,
        width: u16,
        error_fg: Color,
        vertical: &str,
    ) -> Vec<(u16, String, Style)> {
        // Layout: " message" [padding] "│ right "
        let right_width = if self.right.is_empty() {
            0
        } else {
            self.right.width() as u16 + 3
        };
        let bar_position = width.saturating_sub(right_width);

        let left_style = if self.is_error {
            Style::default().fg(error_fg)
        } else {
            Style::default()
        };

        let mut segments = vec![(1, self.message.clone(), left_style)];
        if right_width > 0 && bar_position > 0 {
            segments.push((
                bar_position,
                format!("{} {} ", vertical, self.right),
                Style::default(),
            ));
        }
        segments
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let separator = config.box_chars.horizontal.repeat(usize::from(area.width));
        buf.set_string(area.x, area.y, &separator, Style::default());

        let segments =
            self.build_status_line(area.width, config.error_fg, &config.box_chars.vertical);
        let mut limit = area.width;
        for (x, text, style) in segments.into_iter().rev() {
            // Left text stops short of the vertical bar
            let max = usize::from(limit.saturating_sub(x));
            buf.set_stringn(area.x + x, area.y + 1, &text, max, style);
            limit = x.saturating_sub(1);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_basic_rendering() {
        let widget = StatusBar::new("Loaded 8 players").with_right("12:30:00");

        let buf = render_widget(&widget, 40, 2);

        assert_buffer_line(&buf, 0, &"─".repeat(40));
        assert_buffer_line(&buf, 1, &format!(" Loaded 8 players{}│ 12:30:00", " ".repeat(12)));
    }

    #[test]
    fn test_status_bar_error_color() {
        let widget = StatusBar::new("Unable to load").with_error(true);

        let buf = render_widget(&widget, 30, 2);

        assert_buffer_line(&buf, 1, " Unable to load");
        assert_eq!(buf[(1, 1)].fg, test_config().error_fg);
    }

    #[test]
    fn test_long_message_stops_before_bar() {
        let widget = StatusBar::new("x".repeat(50)).with_right("ok");

        let buf = render_widget_with_config(&widget, 20, 2, &test_config_ascii());

        assert_buffer_line(&buf, 1, &format!(" {} | ok", "x".repeat(13)));
    }

    #[test]
    fn test_too_small_renders_nothing() {
        let widget = StatusBar::new("hello");

        let buf = render_widget(&widget, 20, 1);

        assert_buffer_line(&buf, 0, "");
    }
}
