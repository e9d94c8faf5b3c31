//! Politicians page: every candidate on record

use ptracker_app::state::PoliticiansState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table, Widget},
};

use crate::theme::{palette, styles};

use super::placeholder::Placeholder;
use super::text::truncate;

pub const HEADERS: [&str; 4] = ["Name", "Description", "Number of Promises", "View Promises"];

pub struct PoliticiansPage<'a> {
    state: &'a PoliticiansState,
}

impl<'a> PoliticiansPage<'a> {
    pub fn new(state: &'a PoliticiansState) -> Self {
        Self { state }
    }
}

impl Widget for PoliticiansPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Politicians Page ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(placeholder) = Placeholder::for_loadable(&self.state.candidates) {
            placeholder.render(inner, buf);
            return;
        }
        let candidates = self.state.candidates.items();
        if candidates.is_empty() {
            Placeholder::text("No candidates found").render(inner, buf);
            return;
        }

        let description_width = inner.width.saturating_sub(60).max(10) as usize;
        let header = Row::new(HEADERS.map(|h| Cell::from(h).style(styles::text_bright_bold())))
            .style(Style::default().bg(palette::POPUP_BG));
        let rows = candidates.iter().enumerate().map(|(i, candidate)| {
            let selected = i == self.state.selected;
            let row = Row::new(vec![
                Cell::from(candidate.name.as_str()),
                Cell::from(truncate(&candidate.description, description_width)),
                Cell::from(candidate.promise_count.to_string()),
                Cell::from(Span::styled(
                    "View ›",
                    if selected {
                        styles::focused_selected()
                    } else {
                        styles::accent()
                    },
                )),
            ]);
            if selected {
                row.style(
                    Style::default()
                        .bg(palette::ACCENT_DIM)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row.style(styles::text_primary())
            }
        });

        Table::new(
            rows,
            [
                Constraint::Length(22),
                Constraint::Min(10),
                Constraint::Length(19),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .column_spacing(1)
        .render(inner, buf);
    }
}
