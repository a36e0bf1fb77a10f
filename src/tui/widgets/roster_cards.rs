/// RosterCards widget - the narrow layout
///
/// Each ranked row becomes a small card (title, identity, usage) closed by a
/// separator line. Expanded cards carry their detail panel above the separator.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::engine::{detail_groups, RankedRecord};
use crate::formatting::{card_lines, detail_lines};
use crate::tui::widgets::roster_table::EMPTY_MESSAGE;
use crate::tui::widgets::{render_blocks, scroll_offset, LineBlock, RenderableWidget};

const GUTTER: usize = 2;

pub struct RosterCards<'a> {
    pub rows: &'a [RankedRecord],
    pub selected: Option<usize>,
}

impl<'a> RosterCards<'a> {
    pub fn new(rows: &'a [RankedRecord], selected: Option<usize>) -> Self {
        Self { rows, selected }
    }

    fn card(
        &self,
        index: usize,
        row: &RankedRecord,
        width: usize,
        config: &DisplayConfig,
    ) -> LineBlock {
        let box_chars = &config.box_chars;
        let is_selected = self.selected == Some(index);
        let inner = width.saturating_sub(GUTTER);
        let pad = " ".repeat(GUTTER);

        let mut block = LineBlock::default();
        for (n, line) in card_lines(row, inner, box_chars).into_iter().enumerate() {
            if n == 0 {
                let (gutter, style) = if is_selected {
                    (
                        format!("{} ", box_chars.selector),
                        Style::default()
                            .fg(config.selection_fg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (pad.clone(), Style::default().add_modifier(Modifier::BOLD))
                };
                block.push(format!("{}{}", gutter, line), style);
            } else {
                block.push(format!("{}{}", pad, line), Style::default());
            }
        }

        if row.expanded {
            for group in detail_groups(&row.record) {
                for (n, line) in detail_lines(std::slice::from_ref(&group), inner, box_chars)
                    .into_iter()
                    .enumerate()
                {
                    let style = if n == 0 {
                        Style::default().fg(config.header_fg)
                    } else {
                        Style::default()
                    };
                    block.push(format!("{}{}", pad, line), style);
                }
            }
        }

        block.push(box_chars.horizontal.repeat(width), Style::default());
        block
    }
}

impl RenderableWidget for RosterCards<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                EMPTY_MESSAGE,
                usize::from(area.width),
                Style::default(),
            );
            return;
        }

        let width = usize::from(area.width);
        let blocks: Vec<LineBlock> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.card(i, row, width, config))
            .collect();
        let offset = scroll_offset(&blocks, self.selected, usize::from(area.height));
        render_blocks(&blocks, offset, area, buf);
    }
}
