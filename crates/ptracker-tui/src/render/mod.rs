//! Main render/view function (View in TEA pattern)


use ptracker_app::{AppState, Route};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: the state is only read. Overlays are drawn last, the
/// promise popup first and the notice dialog on top of it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    frame.render_widget(widgets::Navbar::new(state.route, state.journalist), areas.navbar);

    let date_format = state.settings.ui.date_format.as_str();
    match state.route {
        Route::Home { .. } => {
            let (profile, table) = layout::split_home(areas.body);
            frame.render_widget(widgets::CandidateProfile::new(&state.home), profile);
            frame.render_widget(
                widgets::PromiseTable::new(&state.home).focused(state.detail.is_none()),
                table,
            );
        }
        Route::Politicians => {
            frame.render_widget(widgets::PoliticiansPage::new(&state.politicians), areas.body);
        }
        Route::PromiseCard { .. } => {
            frame.render_widget(widgets::PromiseCard::new(&state.card, date_format), areas.body);
        }
        Route::Login => {
            frame.render_widget(
                widgets::LoginPage::new(state.login_choice, state.journalist),
                areas.body,
            );
        }
        Route::About => frame.render_widget(widgets::TextPage::about(), areas.body),
        Route::Contact => frame.render_widget(widgets::TextPage::contact(), areas.body),
    }

    frame.render_widget(Paragraph::new(footer_hints(state)), areas.footer);

    if let Some(detail) = &state.detail {
        frame.render_widget(widgets::PromisePopup::new(detail, date_format), area);
    }
    if let Some(notice) = state.active_notice() {
        frame.render_widget(widgets::NoticeDialog::new(notice), area);
    }
}

/// Keybinding hints for the screen on display
fn footer_hints(state: &AppState) -> ratatui::text::Line<'static> {
    let hints: &[(&str, &str)] = match state.route {
        Route::Home { .. } if state.journalist => &[
            ("↑/↓", "select"),
            ("←/→", "page"),
            ("Enter", "view"),
            ("e", "edit"),
            ("c", "scorecard"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Route::Home { .. } => &[
            ("↑/↓", "select"),
            ("←/→", "page"),
            ("Enter", "view"),
            ("c", "scorecard"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Route::Politicians => &[
            ("↑/↓", "select"),
            ("Enter", "view promises"),
            ("c", "scorecard"),
            ("q", "quit"),
        ],
        Route::PromiseCard { .. } => &[
            ("↑/↓", "promise"),
            ("←/→", "articles"),
            ("r", "reload"),
            ("q", "quit"),
        ],
        Route::Login | Route::About | Route::Contact => &[("1-5", "navigate"), ("q", "quit")],
    };
    widgets::hint_line(hints)
}
