//! Blocking notice dialog; any key dismisses it

use ptracker_app::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

use super::modal_overlay;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 70;

pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = styles::notice_color(self.notice.kind);
        let text_width = self.notice.text.width() as u16;
        let width = (text_width + 6).clamp(MIN_WIDTH, MAX_WIDTH);
        let text_rows = text_width.div_ceil(width.saturating_sub(4).max(1)).max(1);
        let dialog = modal_overlay::centered_rect(width, text_rows + 5, area);

        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog);

        let title = format!(" {} ", self.notice.title());
        let block = styles::modal_block(&title)
            .border_style(Style::default().fg(color))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let [text_area, _, hint_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner.inner(Margin::new(1, 0)));

        Paragraph::new(Span::styled(self.notice.text.as_str(), styles::text_primary()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
        Paragraph::new(Line::from(Span::styled(
            "Press any key to continue",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}
