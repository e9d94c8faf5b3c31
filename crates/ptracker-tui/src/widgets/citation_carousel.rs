//! One citation at a time, with its position in the list

use ptracker_app::Loadable;
use ptracker_core::{Citation, CitationCarousel, DISPLAY_DATE_FORMAT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::placeholder::Placeholder;

pub const NO_CITATIONS_TEXT: &str = "No citations yet";

pub struct CitationCarouselView<'a> {
    citations: &'a Loadable<Vec<Citation>>,
    carousel: CitationCarousel,
    date_format: &'a str,
    focused: bool,
}

impl<'a> CitationCarouselView<'a> {
    pub fn new(citations: &'a Loadable<Vec<Citation>>, carousel: CitationCarousel) -> Self {
        Self {
            citations,
            carousel,
            date_format: DISPLAY_DATE_FORMAT,
            focused: false,
        }
    }

    pub fn date_format(mut self, date_format: &'a str) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CitationCarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.citations.items();
        let title = match self.carousel.position_label(items.len()) {
            Some(position) => format!(" Citations ‹ {position} › "),
            None => " Citations ".to_string(),
        };
        let block = styles::glass_block(self.focused).title(Span::styled(title, styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(placeholder) = Placeholder::for_loadable(self.citations) {
            placeholder.render(inner, buf);
            return;
        }
        let Some(citation) = self.carousel.current(items) else {
            Placeholder::text(NO_CITATIONS_TEXT).render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(
                citation.date.format(self.date_format).to_string(),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", citation.extract),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                citation.url.as_str(),
                styles::accent().add_modifier(Modifier::UNDERLINED),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
