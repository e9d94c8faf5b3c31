//! Static pages: About Us, Contact Us and the journalist login

use ptracker_app::LoginChoice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::promise_popup::hint_line;

pub const LOGIN_HEADLINE: &str =
    "I'm a journalist and I want to contribute to the promise tracker!";

const ABOUT_TEXT: &[&str] = &[
    "The Promise Tracker follows what politicians said they would do, and what they did.",
    "",
    "Every promise carries a status: Progressing, Delivered, Broken or Compromised.",
    "Statuses are backed by dated actions and by citations to public reporting,",
    "so anyone can check the record for themselves.",
];

const CONTACT_TEXT: &[&str] = &[
    "Spotted a missing promise or an outdated status?",
    "",
    "Journalists can log in from the Login page and add actions and citations directly.",
    "Everyone else can reach the team through the tracker's public repository.",
];

/// Titled page of static paragraphs
pub struct TextPage {
    title: &'static str,
    lines: &'static [&'static str],
}

impl TextPage {
    pub fn about() -> Self {
        Self {
            title: " About Us ",
            lines: ABOUT_TEXT,
        }
    }

    pub fn contact() -> Self {
        Self {
            title: " Contact Us ",
            lines: CONTACT_TEXT,
        }
    }
}

impl Widget for TextPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(self.title, styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(*l, styles::text_primary())))
            .collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner.inner(Margin::new(2, 1)), buf);
    }
}

pub struct LoginPage {
    choice: LoginChoice,
    journalist: bool,
}

impl LoginPage {
    pub fn new(choice: LoginChoice, journalist: bool) -> Self {
        Self { choice, journalist }
    }

    fn button(label: &'static str, highlighted: bool) -> Span<'static> {
        Span::styled(
            format!("  {label}  "),
            if highlighted {
                styles::focused_selected()
            } else {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::ACCENT_DIM)
            },
        )
    }
}

impl Widget for LoginPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Login/Signup ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 5 {
            return;
        }

        let [_, headline_area, _, buttons_area, _, hint_area] = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(LOGIN_HEADLINE, styles::text_bright_bold()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(headline_area, buf);

        let buttons = if self.journalist {
            Line::from(vec![
                Span::styled("Logged in as journalist   ", styles::text_secondary()),
                Self::button("Log Out", true),
            ])
        } else {
            Line::from(vec![
                Self::button("Log In", self.choice == LoginChoice::LogIn),
                Span::raw("    "),
                Self::button("Sign Up", self.choice == LoginChoice::SignUp),
            ])
        };
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(buttons_area, buf);

        Paragraph::new(hint_line(&[("←/→", "choose"), ("Enter", "confirm")]))
            .alignment(Alignment::Center)
            .render(hint_area, buf);
    }
}
