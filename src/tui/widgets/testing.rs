/// Testing utilities for widget rendering
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;

/// DisplayConfig with unicode glyphs and fixed colors
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 200, 0),
        unfocused_selection_fg: None,
        header_fg: Color::Cyan,
        error_fg: Color::Red,
        tier_fg: Color::Green,
        box_chars: BoxChars::unicode(),
    }
}

/// DisplayConfig with ASCII glyphs, for predictable output
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget into a fresh `width` x `height` buffer
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Text of one buffer line, trailing padding included
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, line)].symbol())
        .collect()
}

/// Whole buffer as newline-separated text
pub fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert one line, trimming trailing padding on both sides
pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual.trim_end(),
        expected.trim_end(),
        "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
        line,
        expected,
        actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct Label(&'static str);

    impl RenderableWidget for Label {
        fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
            buf.set_string(area.x, area.y, self.0, Style::default().fg(config.header_fg));
        }
    }

    #[test]
    fn test_render_widget_uses_test_config() {
        let buf = render_widget(&Label("Rank"), 6, 2);

        assert_eq!(buffer_to_string(&buf), "Rank  \n      ");
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
        assert_buffer_line(&buf, 0, "Rank");
    }

    #[test]
    fn test_ascii_config_swaps_glyphs_only() {
        let config = test_config_ascii();

        assert_eq!(config.box_chars.horizontal, "-");
        assert_eq!(config.tier_fg, Color::Green);
    }
}
