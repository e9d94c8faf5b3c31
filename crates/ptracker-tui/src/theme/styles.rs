//! Semantic style builders for the dashboard.

use ptracker_app::NoticeKind;
use ptracker_core::PromiseStatus;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint in footers
pub fn keybinding() -> Style {
    Style::default().fg(palette::NOTICE_ALERT)
}

/// "Black on accent" - focused+selected rows, buttons, and page numbers
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Promise status ---

/// `(fill, border)` colors for a status
pub fn status_colors(status: PromiseStatus) -> (Color, Color) {
    match status {
        PromiseStatus::Progressing => (
            palette::STATUS_PROGRESSING,
            palette::STATUS_PROGRESSING_BORDER,
        ),
        PromiseStatus::Delivered => (palette::STATUS_DELIVERED, palette::STATUS_DELIVERED_BORDER),
        PromiseStatus::Broken => (palette::STATUS_BROKEN, palette::STATUS_BROKEN_BORDER),
        PromiseStatus::Compromised => (
            palette::STATUS_COMPROMISED,
            palette::STATUS_COMPROMISED_BORDER,
        ),
    }
}

/// Pill style for a status label: dark text on the status fill
pub fn status_pill(status: PromiseStatus) -> Style {
    let (fill, _) = status_colors(status);
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(fill)
        .add_modifier(Modifier::BOLD)
}

/// Foreground-only status style for text on dark backgrounds
pub fn status_text(status: PromiseStatus) -> Style {
    Style::default().fg(status_colors(status).0)
}

pub fn status_border(status: PromiseStatus) -> Style {
    Style::default().fg(status_colors(status).1)
}

pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Alert => palette::NOTICE_ALERT,
        NoticeKind::Error => palette::NOTICE_ERROR,
        NoticeKind::Info => palette::NOTICE_INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_is_contrast_on_accent() {
        let s = focused_selected();
        assert_eq!(s.fg, Some(palette::CONTRAST_FG));
        assert_eq!(s.bg, Some(palette::ACCENT));
        assert!(s.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_colors_follow_tracker_scheme() {
        assert_eq!(
            status_colors(PromiseStatus::Delivered),
            (palette::STATUS_DELIVERED, palette::STATUS_DELIVERED_BORDER)
        );
        assert_eq!(
            status_pill(PromiseStatus::Broken).bg,
            Some(palette::STATUS_BROKEN)
        );
        assert_eq!(
            status_border(PromiseStatus::Broken).fg,
            Some(Color::Rgb(0xDF, 0x04, 0x04))
        );
    }

    #[test]
    fn test_modal_block_uses_popup_background() {
        let block = modal_block("Test");
        let area = ratatui::layout::Rect::new(0, 0, 10, 3);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        ratatui::widgets::Widget::render(block, area, &mut buf);
        assert_eq!(buf[(5, 1)].bg, palette::POPUP_BG);
    }
}
