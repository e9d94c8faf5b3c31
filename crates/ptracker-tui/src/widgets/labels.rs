//! Status and category tags

use ptracker_core::PromiseStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Colored pill showing a promise's status
#[derive(Debug, Clone, Copy)]
pub struct StatusLabel {
    status: PromiseStatus,
}

impl StatusLabel {
    pub fn new(status: PromiseStatus) -> Self {
        Self { status }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(format!(" {} ", self.status.label()), styles::status_pill(self.status))
    }

    /// Display width including padding
    pub fn width(&self) -> u16 {
        self.status.label().len() as u16 + 2
    }
}

impl Widget for StatusLabel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.span()).render(area, buf);
    }
}

/// Row of category tags
pub struct CategoryLabels<'a> {
    categories: &'a [String],
}

impl<'a> CategoryLabels<'a> {
    pub fn new(categories: &'a [String]) -> Self {
        Self { categories }
    }

    pub fn spans(&self) -> Vec<Span<'a>> {
        let tag = Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::CATEGORY_BG);
        let mut spans = Vec::with_capacity(self.categories.len() * 2);
        for (i, category) in self.categories.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {category} "), tag));
        }
        spans
    }
}

impl Widget for CategoryLabels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.categories.is_empty() {
            Line::from(Span::styled("-", styles::text_muted())).render(area, buf);
        } else {
            Line::from(self.spans()).render(area, buf);
        }
    }
}
