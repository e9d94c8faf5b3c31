//! Promise table with its paginator footer

use ptracker_app::state::HomeState;
use ptracker_core::PageButton;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use crate::theme::{palette, styles};

use super::labels::{CategoryLabels, StatusLabel};
use super::placeholder::Placeholder;
use super::text::truncate;

pub const HEADERS: [&str; 4] = ["Promise", "Categories", "Citations", "Status"];

pub struct PromiseTable<'a> {
    home: &'a HomeState,
    focused: bool,
}

impl<'a> PromiseTable<'a> {
    pub fn new(home: &'a HomeState) -> Self {
        Self {
            home,
            focused: true,
        }
    }

    /// Dim the selection while a popup sits on top
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let text_width = area.width.saturating_sub(52) as usize;
        let header = Row::new(HEADERS.map(|h| Cell::from(h).style(styles::text_bright_bold())))
            .style(Style::default().bg(palette::POPUP_BG));

        let rows = self
            .home
            .visible_promises()
            .iter()
            .enumerate()
            .map(|(i, promise)| {
                let row = Row::new(vec![
                    Cell::from(truncate(&promise.text, text_width.max(8))),
                    Cell::from(Line::from(CategoryLabels::new(&promise.categories).spans())),
                    Cell::from(promise.citation_count.to_string()),
                    Cell::from(Line::from(StatusLabel::new(promise.status).span())),
                ]);
                if i == self.home.selected_row {
                    row.style(if self.focused {
                        Style::default()
                            .bg(palette::ACCENT_DIM)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().bg(palette::BORDER_DIM)
                    })
                } else {
                    row.style(styles::text_primary())
                }
            });

        Table::new(
            rows,
            [
                Constraint::Min(10),
                Constraint::Length(26),
                Constraint::Length(9),
                Constraint::Length(13),
            ],
        )
        .header(header)
        .column_spacing(1)
        .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let len = self.home.promises.items().len();
        let paginator = &self.home.paginator;

        let showing = match paginator.showing_range(len) {
            Some((start, end)) => format!("Showing {start}-{end} promises of {len}"),
            None => "Showing 0 promises".to_string(),
        };
        let mut spans = vec![Span::styled(showing, styles::text_secondary())];

        if paginator.is_needed(len) {
            spans.push(Span::raw("   "));
            spans.extend(page_controls(
                paginator.current_page(),
                &paginator.buttons(len),
                paginator.has_prev(),
                paginator.has_next(len),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// `‹ Prev  1 2 3 … 9  Next ›` with the current page highlighted
pub fn page_controls(
    current: usize,
    buttons: &[PageButton],
    has_prev: bool,
    has_next: bool,
) -> Vec<Span<'static>> {
    let enabled = |on: bool| {
        if on {
            styles::accent()
        } else {
            styles::text_muted()
        }
    };

    let mut spans = vec![Span::styled("‹ Prev ", enabled(has_prev))];
    for button in buttons {
        spans.push(Span::raw(" "));
        spans.push(match button {
            PageButton::Page(n) if *n == current => {
                Span::styled(format!(" {n} "), styles::focused_selected())
            }
            PageButton::Page(n) => Span::styled(format!(" {n} "), styles::text_primary()),
            PageButton::Ellipsis => Span::styled(" … ", styles::text_muted()),
        });
    }
    spans.push(Span::styled("  Next ›", enabled(has_next)));
    spans
}

impl Widget for PromiseTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Promises ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width == 0 {
            return;
        }

        if let Some(placeholder) = Placeholder::for_loadable(&self.home.promises) {
            placeholder.render(inner, buf);
            return;
        }

        let [rows_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        self.render_rows(rows_area, buf);
        self.render_footer(footer_area, buf);
    }
}
