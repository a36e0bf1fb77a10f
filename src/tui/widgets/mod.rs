/// Widget-based rendering for the roster screen
///
/// Widgets render themselves directly to a ratatui Buffer and can be tested
/// in isolation against small buffers.

#[cfg(test)]
pub mod testing;

pub mod picker_modal;
pub mod roster_cards;
pub mod roster_table;
pub mod status_bar;
pub mod summary_bar;

pub use picker_modal::PickerModal;
pub use roster_cards::RosterCards;
pub use roster_table::RosterTable;
pub use status_bar::StatusBar;
pub use summary_bar::SummaryBar;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// This trait is object-safe, so different widgets can be stored as trait
/// objects.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Preferred height, or None if the widget adapts to any height
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Preferred width, or None if the widget adapts to any width
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// One roster entry laid out as lines of styled text
///
/// A block is the unit of scrolling: a table row plus its detail panel, or
/// a whole card.
#[derive(Debug, Clone, Default)]
pub struct LineBlock {
    pub lines: Vec<(String, Style)>,
}

impl LineBlock {
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push((text.into(), style));
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// First line to draw so the block at `selected` is fully visible
///
/// Scrolling is stateless: the viewport is anchored on the selected block and
/// only scrolls once that block would fall below the bottom edge.
pub fn scroll_offset(blocks: &[LineBlock], selected: Option<usize>, viewport: usize) -> usize {
    let Some(selected) = selected.filter(|&i| i < blocks.len()) else {
        return 0;
    };
    let top: usize = blocks[..selected].iter().map(LineBlock::height).sum();
    let bottom = top + blocks[selected].height();
    if bottom <= viewport {
        0
    } else if blocks[selected].height() >= viewport {
        top
    } else {
        bottom - viewport
    }
}

/// Draw `blocks` into `area`, skipping the first `offset` lines
pub fn render_blocks(blocks: &[LineBlock], offset: usize, area: Rect, buf: &mut Buffer) {
    let lines = blocks.iter().flat_map(|block| block.lines.iter());
    for (y, (text, style)) in (area.y..area.bottom()).zip(lines.skip(offset)) {
        buf.set_stringn(area.x, y, text, usize::from(area.width), *style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::buffer_line;

    fn block(height: usize) -> LineBlock {
        let mut block = LineBlock::default();
        for i in 0..height {
            block.push(format!("line {}", i), Style::default());
        }
        block
    }

    #[test]
    fn test_scroll_offset_stays_at_top_while_visible() {
        let blocks = vec![block(1), block(1), block(3)];

        assert_eq!(scroll_offset(&blocks, Some(2), 5), 0);
        assert_eq!(scroll_offset(&blocks, None, 1), 0);
    }

    #[test]
    fn test_scroll_offset_reveals_selected_block() {
        let blocks = vec![block(1), block(1), block(3), block(1)];

        assert_eq!(scroll_offset(&blocks, Some(2), 4), 1);
        assert_eq!(scroll_offset(&blocks, Some(3), 4), 2);
    }

    #[test]
    fn test_scroll_offset_tall_block_shows_its_top() {
        let blocks = vec![block(2), block(10)];

        assert_eq!(scroll_offset(&blocks, Some(1), 4), 2);
    }

    #[test]
    fn test_render_blocks_clips_to_area() {
        let blocks = vec![block(2), block(2)];
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));

        render_blocks(&blocks, 1, buf.area, &mut buf);

        assert_eq!(buffer_line(&buf, 0), "line");
        assert_eq!(buffer_line(&buf, 1), "line");
        assert_eq!(buf[(0, 1)].symbol(), "l");
    }
}
