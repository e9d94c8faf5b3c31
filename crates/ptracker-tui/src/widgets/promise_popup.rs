//! Promise detail popup
//!
//! Renders a [`PromiseDetail`] over the dimmed promise table. The popup
//! border takes the color of the last status the backend confirmed, so a
//! pending or rolled-back selection is visible against it.
//!
//! Layout, top to bottom:
//! - promise text
//! - status (a picker in edit mode) and category tags
//! - "Actions Taken:" on the left, the promise's citation carousel on the right
//! - in edit mode, the add-action and add-citation forms
//! - key hints

use ptracker_app::{DetailFocus, Loadable, PromiseDetail};
use ptracker_core::{Action, PromiseStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

use super::citation_carousel::CitationCarouselView;
use super::labels::{CategoryLabels, StatusLabel};
use super::modal_overlay;
use super::text::truncate;

pub const NO_ACTIONS_TEXT: &str = "No recorded actions";

/// Rows used by both append forms together
const FORMS_HEIGHT: u16 = 7;

pub struct PromisePopup<'a> {
    detail: &'a PromiseDetail,
    date_format: &'a str,
}

impl<'a> PromisePopup<'a> {
    pub fn new(detail: &'a PromiseDetail, date_format: &'a str) -> Self {
        Self {
            detail,
            date_format,
        }
    }

    fn status_line(&self) -> Line<'static> {
        let detail = self.detail;
        let mut spans = vec![Span::styled("Status: ", styles::text_bright_bold())];

        if detail.is_editing() {
            // Picker: every status, the saved one filled, `›` on the cursor
            let focused = detail.focus == DetailFocus::Status;
            spans.push(Span::styled(
                if focused { "◀ " } else { "  " },
                styles::accent(),
            ));
            for status in PromiseStatus::ALL {
                let cursor = focused && status == detail.status_choice;
                spans.push(Span::styled(if cursor { "›" } else { " " }, styles::accent()));
                if status == detail.selected_status {
                    spans.push(StatusLabel::new(status).span());
                } else {
                    spans.push(Span::styled(
                        format!(" {} ", status.label()),
                        styles::status_text(status),
                    ));
                }
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                if focused { "▶" } else { " " },
                styles::accent(),
            ));
        } else {
            spans.push(StatusLabel::new(detail.selected_status).span());
        }

        if detail.status_in_flight {
            spans.push(Span::styled("  saving…", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn action_lines(&self, width: u16) -> (Vec<Line<'a>>, usize) {
        let detail = self.detail;
        let focused = detail.focus == DetailFocus::Actions;
        let mut lines = Vec::new();
        let mut selected_line = 0;

        for (i, action) in detail.actions.items().iter().enumerate() {
            let selected = i == detail.selected_action;
            if selected {
                selected_line = lines.len();
            }
            lines.push(self.action_line(action, selected && focused, width));

            if detail.is_expanded(action.id) {
                lines.extend(self.expanded_citation_lines(action, width));
            }
        }
        (lines, selected_line)
    }

    fn action_line(&self, action: &Action, highlighted: bool, width: u16) -> Line<'a> {
        let marker = if self.detail.is_expanded(action.id) {
            "▾ "
        } else {
            "▸ "
        };
        let date = action.date.format(self.date_format).to_string();
        let budget = (width as usize).saturating_sub(date.chars().count() + 6);
        let line = Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(date, styles::text_secondary()),
            Span::raw("  "),
            Span::styled(truncate(&action.text, budget), styles::text_primary()),
        ]);
        if highlighted {
            line.style(Style::default().bg(palette::ACCENT_DIM))
        } else {
            line
        }
    }

    fn expanded_citation_lines(&self, action: &Action, width: u16) -> Vec<Line<'a>> {
        let indent = "    ";
        let budget = (width as usize).saturating_sub(indent.len() + 2);
        match self.detail.action_citations.get(&action.id) {
            None | Some(Loadable::Idle) | Some(Loadable::Loading) => vec![Line::from(
                Span::styled(format!("{indent}Loading..."), styles::text_muted()),
            )],
            Some(Loadable::Failed(error)) => vec![Line::from(Span::styled(
                format!("{indent}{}", truncate(error, budget)),
                Style::default().fg(palette::NOTICE_ERROR),
            ))],
            Some(Loadable::Loaded(citations)) if citations.is_empty() => {
                vec![Line::from(Span::styled(
                    format!("{indent}No citations"),
                    styles::text_muted(),
                ))]
            }
            Some(Loadable::Loaded(citations)) => citations
                .iter()
                .flat_map(|c| {
                    [
                        Line::from(vec![
                            Span::raw(indent),
                            Span::styled("• ", styles::text_muted()),
                            Span::styled(
                                truncate(&c.url, budget),
                                styles::accent().add_modifier(Modifier::UNDERLINED),
                            ),
                        ]),
                        Line::from(Span::styled(
                            format!("{indent}  {}", truncate(&c.extract, budget)),
                            styles::text_secondary(),
                        )),
                    ]
                })
                .collect(),
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.detail.focus == DetailFocus::Actions;
        let block = styles::glass_block(focused).title(Span::styled(
            " Actions Taken: ",
            styles::text_bright_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let placeholder = match &self.detail.actions {
            Loadable::Idle | Loadable::Loading => Some("Loading...".to_string()),
            Loadable::Failed(error) => Some(format!("No data found ({error})")),
            Loadable::Loaded(actions) if actions.is_empty() => Some(NO_ACTIONS_TEXT.to_string()),
            Loadable::Loaded(_) => None,
        };
        if let Some(text) = placeholder {
            Paragraph::new(Span::styled(text, styles::text_muted()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let (lines, selected_line) = self.action_lines(inner.width);
        // Keep the selected action on screen
        let scroll = (selected_line as u16).saturating_sub(inner.height.saturating_sub(1));
        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }

    fn render_forms(&self, area: Rect, buf: &mut Buffer) {
        let [action_area, citation_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);

        let detail = self.detail;
        let form = &detail.action_form;
        let action_block = styles::glass_block(detail.focus_in_action_form()).title(Span::styled(
            if detail.action_submitting {
                " Add Action (sending…) "
            } else {
                " Add Action "
            },
            styles::accent_bold(),
        ));
        let inner = action_block.inner(action_area);
        action_block.render(action_area, buf);
        Paragraph::new(vec![
            form_field("Text", &form.text, detail.focus == DetailFocus::ActionText),
            form_field("Citation URL", &form.url, detail.focus == DetailFocus::ActionUrl),
            form_field(
                "Citation Extract",
                &form.extract,
                detail.focus == DetailFocus::ActionExtract,
            ),
        ])
        .render(inner, buf);

        let form = &detail.citation_form;
        let in_citation_form = matches!(
            detail.focus,
            DetailFocus::CitationUrl | DetailFocus::CitationExtract
        );
        let citation_block = styles::glass_block(in_citation_form).title(Span::styled(
            if detail.citation_submitting {
                " Add Citation (sending…) "
            } else {
                " Add Citation "
            },
            styles::accent_bold(),
        ));
        let inner = citation_block.inner(citation_area);
        citation_block.render(citation_area, buf);
        Paragraph::new(vec![
            form_field("URL", &form.url, detail.focus == DetailFocus::CitationUrl),
            form_field(
                "Extract",
                &form.extract,
                detail.focus == DetailFocus::CitationExtract,
            ),
        ])
        .render(inner, buf);
    }

    fn hints(&self) -> Line<'static> {
        let pairs: &[(&str, &str)] = if self.detail.is_editing() {
            &[
                ("Tab", "next field"),
                ("←/→", "pick status"),
                ("Enter", "set status / submit"),
                ("Esc", "close"),
            ]
        } else {
            &[
                ("↑/↓", "action"),
                ("Enter", "citations"),
                ("←/→", "carousel"),
                ("Esc", "close"),
            ]
        };
        hint_line(pairs)
    }
}

/// `Label: value▏` with the cursor only on the focused field
fn form_field<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        styles::accent_bold()
    } else {
        styles::text_secondary()
    };
    let mut spans = vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value, styles::text_primary()),
    ];
    if focused {
        spans.push(Span::styled("▏", styles::accent()));
    }
    Line::from(spans)
}

/// Footer line of `key description` pairs
pub fn hint_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (i, (key, description)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", styles::text_muted()));
        }
        spans.push(Span::styled(key.to_string(), styles::keybinding()));
        spans.push(Span::styled(format!(" {description}"), styles::text_muted()));
    }
    Line::from(spans)
}

impl Widget for PromisePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = modal_overlay::centered_rect_percent(85, 90, area);
        modal_overlay::prepare_modal(buf, area, popup);

        let detail = self.detail;
        let title = format!(
            " Promise #{}{} ",
            detail.promise.id,
            if detail.is_editing() { " (editing)" } else { "" }
        );
        let block = styles::modal_block(&title)
            .border_style(styles::status_border(detail.server_status))
            .title_style(styles::text_bright_bold());
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.height < 4 || inner.width < 10 {
            return;
        }

        let forms_height = if detail.is_editing() { FORMS_HEIGHT } else { 0 };
        let [text_area, status_area, categories_area, body_area, forms_area, hints_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(forms_height),
                Constraint::Length(1),
            ])
            .areas(inner);

        Paragraph::new(Span::styled(
            detail.promise.text.as_str(),
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .render(text_area, buf);

        Paragraph::new(self.status_line()).render(status_area, buf);

        let mut category_spans = vec![Span::styled("Categories: ", styles::text_bright_bold())];
        if detail.promise.categories.is_empty() {
            category_spans.push(Span::styled("-", styles::text_muted()));
        } else {
            category_spans.extend(CategoryLabels::new(&detail.promise.categories).spans());
        }
        Paragraph::new(Line::from(category_spans)).render(categories_area, buf);

        let [actions_area, carousel_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body_area);
        self.render_actions(actions_area, buf);
        CitationCarouselView::new(&detail.citations, detail.carousel)
            .date_format(self.date_format)
            .focused(detail.focus == DetailFocus::Actions)
            .render(carousel_area, buf);

        if detail.is_editing() {
            self.render_forms(forms_area, buf);
        }

        Paragraph::new(self.hints()).render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ptracker_api::test_utils::{test_action, test_citation, test_promise};
    use ptracker_core::DISPLAY_DATE_FORMAT;

    fn detail(edit: bool) -> PromiseDetail {
        let mut promise = test_promise(7, 1, "Build 10,000 homes", PromiseStatus::Progressing, 2);
        promise.categories = vec!["Housing".to_string()];
        PromiseDetail::open(1, promise, edit)
    }

    fn render(detail: &PromiseDetail) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 32);
        term.render_widget(PromisePopup::new(detail, DISPLAY_DATE_FORMAT), term.area());
        term
    }

    #[test]
    fn test_view_mode_sections() {
        let mut d = detail(false);
        d.actions_loaded(vec![test_action(1, "Zoning reform passed")]);
        d.citations_loaded(vec![test_citation("https://news.example/a", "Homes approved")]);

        let term = render(&d);
        assert!(term.buffer_contains("Build 10,000 homes"));
        assert!(term.buffer_contains("Status:"));
        assert!(term.buffer_contains("Progressing"));
        assert!(term.buffer_contains("Categories:"));
        assert!(term.buffer_contains("Housing"));
        assert!(term.buffer_contains("Actions Taken:"));
        assert!(term.buffer_contains("Zoning reform passed"));
        assert!(term.buffer_contains("January 15, 2025"));
        assert!(term.buffer_contains("Homes approved"));
        assert!(!term.buffer_contains("Add Action"));
    }

    #[test]
    fn test_no_recorded_actions() {
        let mut d = detail(false);
        d.actions_loaded(Vec::new());
        assert!(render(&d).buffer_contains(NO_ACTIONS_TEXT));
    }

    #[test]
    fn test_loading_before_results() {
        let term = render(&detail(false));
        assert!(term.buffer_contains("Loading..."));
    }

    #[test]
    fn test_edit_mode_shows_picker_and_forms() {
        let mut d = detail(true);
        d.actions_loaded(Vec::new());
        d.citations_loaded(Vec::new());
        d.action_form.text = "Council vote".to_string();

        let term = render(&d);
        assert!(term.buffer_contains("(editing)"));
        for status in PromiseStatus::ALL {
            assert!(term.buffer_contains(status.label()));
        }
        assert!(term.buffer_contains("Add Action"));
        assert!(term.buffer_contains("Add Citation"));
        assert!(term.buffer_contains("Council vote"));
        assert!(term.buffer_contains("Citation URL"));
    }

    #[test]
    fn test_expanded_action_lists_its_citations() {
        let mut d = detail(false);
        d.actions_loaded(vec![test_action(3, "Budget passed")]);
        d.citations_loaded(Vec::new());
        assert!(d.toggle_action_citations(3));

        assert!(render(&d).buffer_contains("Loading..."));

        d.action_citations_loaded(3, vec![test_citation("https://gov.example/b", "Line item")]);
        let term = render(&d);
        assert!(term.buffer_contains("https://gov.example/b"));
        assert!(term.buffer_contains("Line item"));
    }

    #[test]
    fn test_border_follows_server_status() {
        let mut d = detail(true);
        d.actions_loaded(Vec::new());
        d.citations_loaded(Vec::new());
        assert!(d.select_status(PromiseStatus::Broken).is_some());

        let term = render(&d);
        assert!(term.buffer_contains("saving…"));
        let popup = modal_overlay::centered_rect_percent(85, 90, term.area());
        assert_eq!(
            term.buffer()[(popup.x, popup.y + 2)].fg,
            palette::STATUS_PROGRESSING_BORDER
        );
    }

    #[test]
    fn test_picker_cursor_moves_before_saving() {
        let mut d = detail(true);
        d.actions_loaded(Vec::new());
        d.citations_loaded(Vec::new());
        assert!(render(&d).buffer_contains("› Progressing"));

        d.cycle_status_choice(true);
        let term = render(&d);
        let status_row = term.row_of("Status:").expect("status line");
        assert!(term.line_contains(status_row, "› Delivered"));
        assert!(!term.line_contains(status_row, "› Progressing"));
        assert!(!term.buffer_contains("saving…"));
    }

    #[test]
    fn test_hint_line_pairs() {
        let line = hint_line(&[("Esc", "close"), ("Tab", "next")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Esc close  Tab next");
    }
}
