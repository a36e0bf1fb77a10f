/// RosterTable widget - the wide layout
///
/// One line per ranked row, under a header marking the active sort. Expanded
/// rows are followed by their detail panel. The body scrolls to keep the
/// selected row (and its panel) in view.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::engine::{detail_groups, RankedRecord, SortConfig};
use crate::formatting::{column_offset, detail_lines, roster_header, roster_row, TIER_COLUMN};
use crate::layout_constants::TIER_COL_WIDTH;
use crate::tui::widgets::{render_blocks, scroll_offset, LineBlock, RenderableWidget};

/// Width of the selector gutter in front of every line
const GUTTER: usize = 2;

pub const EMPTY_MESSAGE: &str = "No players match the current filters.";

pub struct RosterTable<'a> {
    pub rows: &'a [RankedRecord],
    pub sort: SortConfig,
    pub selected: Option<usize>,
}

impl<'a> RosterTable<'a> {
    pub fn new(rows: &'a [RankedRecord], sort: SortConfig, selected: Option<usize>) -> Self {
        Self {
            rows,
            sort,
            selected,
        }
    }

    fn blocks(&self, width: usize, config: &DisplayConfig) -> Vec<LineBlock> {
        let box_chars = &config.box_chars;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = self.selected == Some(i);
                let (gutter, style) = if is_selected {
                    (
                        format!("{} ", box_chars.selector),
                        Style::default()
                            .fg(config.selection_fg)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ".repeat(GUTTER), Style::default())
                };

                let mut block = LineBlock::default();
                block.push(format!("{}{}", gutter, roster_row(row, box_chars)), style);

                if row.expanded {
                    let panel_style = if is_selected {
                        Style::default().fg(config.unfocused_selection_fg())
                    } else {
                        Style::default()
                    };
                    for group in detail_groups(&row.record) {
                        let lines =
                            detail_lines(std::slice::from_ref(&group), width, box_chars);
                        for (n, line) in lines.into_iter().enumerate() {
                            let line_style = if n == 0 {
                                Style::default().fg(config.header_fg)
                            } else {
                                panel_style
                            };
                            block.push(line, line_style);
                        }
                    }
                }
                block
            })
            .collect()
    }

    /// Paint tier badges on unselected rows that are on screen
    fn paint_tiers(
        &self,
        blocks: &[LineBlock],
        offset: usize,
        body: Rect,
        buf: &mut Buffer,
        config: &DisplayConfig,
    ) {
        let x = body.x + (GUTTER + column_offset(TIER_COLUMN)) as u16;
        if x >= body.right() {
            return;
        }
        let width = (TIER_COL_WIDTH as u16).min(body.right() - x);

        let mut line = 0usize;
        for (i, block) in blocks.iter().enumerate() {
            let row_line = line;
            line += block.height();
            if row_line < offset || self.selected == Some(i) || self.rows[i].tier().is_none() {
                continue;
            }
            let y = body.y as usize + row_line - offset;
            if y >= body.bottom() as usize {
                break;
            }
            buf.set_style(
                Rect::new(x, y as u16, width, 1),
                Style::default().fg(config.tier_fg),
            );
        }
    }
}

impl RenderableWidget for RosterTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = format!(
            "{}{}",
            " ".repeat(GUTTER),
            roster_header(self.sort, &config.box_chars)
        );
        buf.set_stringn(
            area.x,
            area.y,
            header,
            usize::from(area.width),
            Style::default()
                .fg(config.header_fg)
                .add_modifier(Modifier::BOLD),
        );

        let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        if body.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            buf.set_stringn(
                body.x + GUTTER as u16,
                body.y,
                EMPTY_MESSAGE,
                usize::from(body.width).saturating_sub(GUTTER),
                Style::default(),
            );
            return;
        }

        let blocks = self.blocks(usize::from(area.width), config);
        let offset = scroll_offset(&blocks, self.selected, usize::from(body.height));
        render_blocks(&blocks, offset, body, buf);
        self.paint_tiers(&blocks, offset, body, buf, config);
    }
}
