//! Candidate scorecard: completion gauge, status counts, promises to watch

use ptracker_app::state::CardState;
use ptracker_app::{Loadable, Scorecard};
use ptracker_core::{CitationCarousel, PromiseStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::citation_carousel::CitationCarouselView;
use super::labels::StatusLabel;
use super::placeholder::Placeholder;
use super::text::truncate;

pub const TOP_PROMISES_TITLE: &str = "Top Promises to Watch";
pub const RELATED_ARTICLES_TITLE: &str = "Related Articles";

pub struct PromiseCard<'a> {
    card: &'a CardState,
    date_format: &'a str,
}

impl<'a> PromiseCard<'a> {
    pub fn new(card: &'a CardState, date_format: &'a str) -> Self {
        Self { card, date_format }
    }

    fn render_summary(&self, scorecard: &Scorecard, area: Rect, buf: &mut Buffer) {
        let [title_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                scorecard.candidate.name.as_str(),
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ·  ", styles::text_muted()),
            Span::styled(scorecard.completed_label(), styles::text_primary()),
        ]))
        .render(title_area, buf);

        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(palette::STATUS_DELIVERED_BORDER)
                    .bg(palette::BORDER_DIM),
            )
            .percent(scorecard.progress_percentage.into())
            .label(format!("{}%", scorecard.progress_percentage))
            .render(gauge_area, buf);
    }

    fn render_counts(&self, scorecard: &Scorecard, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for (status, cell) in PromiseStatus::ALL.into_iter().zip(cells.iter()) {
            let block = styles::glass_block(false)
                .border_style(styles::status_border(status))
                .title(Span::styled(
                    format!(" {} ", status.label()),
                    styles::status_text(status),
                ));
            let inner = block.inner(*cell);
            block.render(*cell, buf);
            Paragraph::new(Span::styled(
                scorecard.counts.get(status).to_string(),
                styles::status_text(status).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }

    fn render_top_promises(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Span::styled(
            format!(" {TOP_PROMISES_TITLE} "),
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let top = self.card.top_promises();
        if top.is_empty() {
            Placeholder::text("No promises yet").render(inner, buf);
            return;
        }

        let text_width = (inner.width as usize).saturating_sub(16);
        let lines: Vec<Line> = top
            .iter()
            .enumerate()
            .map(|(i, promise)| {
                let selected = i == self.card.selected;
                let line = Line::from(vec![
                    Span::styled(if selected { "▶ " } else { "  " }, styles::accent()),
                    StatusLabel::new(promise.status).span(),
                    Span::raw(" "),
                    Span::styled(truncate(&promise.text, text_width), styles::text_primary()),
                ]);
                if selected {
                    line.style(Style::default().bg(palette::ACCENT_DIM))
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_related(&self, area: Rect, buf: &mut Buffer) {
        let Some(promise_id) = self.card.selected_promise_id() else {
            return;
        };
        let idle = Loadable::Idle;
        let citations = self.card.citations.get(&promise_id).unwrap_or(&idle);
        let carousel = self
            .card
            .carousels
            .get(&promise_id)
            .copied()
            .unwrap_or_else(CitationCarousel::new);

        let [title_area, carousel_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
        Paragraph::new(Span::styled(RELATED_ARTICLES_TITLE, styles::text_bright_bold()))
            .render(title_area, buf);
        CitationCarouselView::new(citations, carousel)
            .date_format(self.date_format)
            .focused(true)
            .render(carousel_area, buf);
    }
}

impl Widget for PromiseCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Promise Card ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(placeholder) = Placeholder::for_loadable(&self.card.scorecard) {
            placeholder.render(inner, buf);
            return;
        }
        let Some(scorecard) = self.card.scorecard.loaded() else {
            return;
        };

        let [summary_area, counts_area, body_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .areas(inner);
        self.render_summary(scorecard, summary_area, buf);
        self.render_counts(scorecard, counts_area, buf);

        let [top_area, related_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body_area);
        self.render_top_promises(top_area, buf);
        self.render_related(related_area, buf);
    }
}
