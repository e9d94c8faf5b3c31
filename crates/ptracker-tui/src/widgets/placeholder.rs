//! Centered stand-in text for data that is loading, missing or failed

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ptracker_app::Loadable;

use crate::theme::{palette, styles};

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_DATA_TEXT: &str = "No data found";

pub struct Placeholder<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Placeholder<'a> {
    pub fn loading() -> Self {
        Self::text(LOADING_TEXT)
    }

    pub fn text(text: &'a str) -> Self {
        Self {
            lines: vec![Line::from(Span::styled(text, styles::text_secondary()))],
        }
    }

    /// "No data found" with the failure reason underneath
    pub fn failed(error: &'a str) -> Self {
        Self {
            lines: vec![
                Line::from(Span::styled(NO_DATA_TEXT, styles::text_secondary())),
                Line::from(Span::styled(
                    error,
                    Style::default().fg(palette::NOTICE_ERROR),
                )),
            ],
        }
    }

    /// Placeholder for any state other than `Loaded`
    pub fn for_loadable<T>(loadable: &'a Loadable<T>) -> Option<Self> {
        match loadable {
            Loadable::Loaded(_) => None,
            Loadable::Idle | Loadable::Loading => Some(Self::loading()),
            Loadable::Failed(error) => Some(Self::failed(error)),
        }
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let height = (self.lines.len() as u16).min(area.height);
        let y = area.y + (area.height - height) / 2;
        Paragraph::new(self.lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(area.x, y, area.width, height), buf);
    }
}
