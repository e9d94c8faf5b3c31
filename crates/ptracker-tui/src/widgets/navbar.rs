//! Navbar header: brand, navigation links and journalist badge

use ptracker_app::{Route, NAV_ITEMS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct Navbar {
    route: Route,
    journalist: bool,
}

impl Navbar {
    pub fn new(route: Route, journalist: bool) -> Self {
        Self { route, journalist }
    }
}

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::NAVBAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let active = self.route.nav_index();
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                "Promise Tracker",
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", styles::text_muted()),
        ];

        for (i, (label, _)) in NAV_ITEMS.iter().enumerate() {
            let label = if i == 4 && self.journalist {
                "Log Out"
            } else {
                label
            };
            spans.push(Span::styled((i + 1).to_string(), styles::keybinding()));
            let style = if active == Some(i) {
                styles::accent_bold().add_modifier(Modifier::UNDERLINED)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {label}"), style));
            spans.push(Span::raw("  "));
        }

        let left = Line::from(spans);
        Paragraph::new(left).render(inner, buf);

        if self.journalist {
            let badge = " ✎ Journalist ";
            let width = badge.chars().count() as u16;
            if inner.width > width {
                let badge_area = Rect::new(inner.x + inner.width - width, inner.y, width, 1);
                Paragraph::new(Span::styled(badge, styles::focused_selected()))
                    .render(badge_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_navbar_lists_all_links() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(Navbar::new(Route::default(), false), term.area());

        assert!(term.buffer_contains("Promise Tracker"));
        for label in ["Home", "About Us", "Politicians", "Contact Us", "Login/Signup"] {
            assert!(term.buffer_contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_navbar_shows_journalist_badge_and_logout() {
        let mut term = TestTerminal::with_size(140, 3);
        term.render_widget(Navbar::new(Route::Politicians, true), term.area());

        assert!(term.buffer_contains("Journalist"));
        assert!(term.buffer_contains("Log Out"));
        assert!(!term.buffer_contains("Login/Signup"));
    }
}
