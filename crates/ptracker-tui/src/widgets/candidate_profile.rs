//! Candidate profile: name, description and completion gauge

use ptracker_app::state::HomeState;
use ptracker_core::StatusCounts;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::placeholder::Placeholder;

pub const NO_CANDIDATES_TEXT: &str = "No candidates found";

pub struct CandidateProfile<'a> {
    home: &'a HomeState,
}

impl<'a> CandidateProfile<'a> {
    pub fn new(home: &'a HomeState) -> Self {
        Self { home }
    }
}

impl Widget for CandidateProfile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.home.no_candidates {
            Placeholder::text(NO_CANDIDATES_TEXT).render(inner, buf);
            return;
        }
        let candidate = match Placeholder::for_loadable(&self.home.candidate) {
            Some(placeholder) => {
                placeholder.render(inner, buf);
                return;
            }
            None => match self.home.candidate.loaded() {
                Some(candidate) => candidate,
                None => return,
            },
        };

        let [text_area, gauge_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(inner);

        let lines = vec![
            Line::from(Span::styled(
                candidate.name.as_str(),
                Style::default()
                    .fg(palette::TEXT_BRIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                candidate.description.as_str(),
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        // Completion is only known once the promise list has arrived
        let Some(promises) = self.home.promises.loaded() else {
            return;
        };
        let counts = StatusCounts::aggregate(promises);
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
            .split(gauge_area);

        Paragraph::new(Span::styled(
            format!(
                "{} / {} promises completed",
                counts.completed(),
                counts.total()
            ),
            styles::text_primary(),
        ))
        .render(rows[0], buf);

        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(palette::STATUS_DELIVERED_BORDER)
                    .bg(palette::BORDER_DIM),
            )
            .percent(counts.progress_percentage().into())
            .label(format!("{}%", counts.progress_percentage()))
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ptracker_api::test_utils::{test_candidate, test_promise};
    use ptracker_app::Loadable;
    use ptracker_core::PromiseStatus;

    #[test]
    fn test_profile_shows_candidate_and_completion() {
        let mut home = HomeState::new(10);
        home.candidate = Loadable::Loaded(test_candidate(1, "Ada Lovelace"));
        home.promises = Loadable::Loaded(vec![
            test_promise(1, 1, "a", PromiseStatus::Delivered, 0),
            test_promise(2, 1, "b", PromiseStatus::Broken, 0),
        ]);

        let mut term = TestTerminal::with_size(100, 6);
        term.render_widget(CandidateProfile::new(&home), term.area());

        assert!(term.buffer_contains("Ada Lovelace"));
        assert!(term.buffer_contains("1 / 2 promises completed"));
        assert!(term.buffer_contains("50%"));
    }

    #[test]
    fn test_profile_loading() {
        let mut home = HomeState::new(10);
        home.candidate = Loadable::Loading;

        let mut term = TestTerminal::with_size(60, 6);
        term.render_widget(CandidateProfile::new(&home), term.area());
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_profile_without_candidates() {
        let mut home = HomeState::new(10);
        home.no_candidates = true;

        let mut term = TestTerminal::with_size(60, 6);
        term.render_widget(CandidateProfile::new(&home), term.area());
        assert!(term.buffer_contains(NO_CANDIDATES_TEXT));
    }
}
