//! Promise detail popup controller
//!
//! [`PromiseDetail`] is the whole state of one open popup: the promise
//! snapshot, the edit mode, the status selection, the evidentiary record
//! (actions, promise citations, per-action citations) and both append forms.
//! It is created when the popup opens and dropped when it closes. Dropping
//! it cancels its [`CancelScope`], which stops every fetch it started.
//!
//! The controller never touches the network. Methods that need a request
//! return what to send; the handler turns that into an `UpdateAction` and
//! feeds the outcome back through the matching `*_loaded` / `*_failed`
//! method.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use url::Url;

use ptracker_api::{NewAction, NewCitation};
use ptracker_core::prelude::*;
use ptracker_core::{
    Action, ActionId, CandidateId, Citation, CitationCarousel, Promise, PromiseStatus,
};

use crate::loadable::Loadable;
use crate::notice::Notice;
use crate::scope::{CancelScope, ScopeGuard, ScopeId};

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all fields";
pub const INVALID_URL_ALERT: &str = "Please enter a valid http(s) URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Viewing,
    Editing,
}

/// Focusable region of the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFocus {
    Actions,
    Status,
    ActionText,
    ActionUrl,
    ActionExtract,
    CitationUrl,
    CitationExtract,
}

impl DetailFocus {
    const EDIT_CYCLE: [DetailFocus; 7] = [
        DetailFocus::Status,
        DetailFocus::ActionText,
        DetailFocus::ActionUrl,
        DetailFocus::ActionExtract,
        DetailFocus::CitationUrl,
        DetailFocus::CitationExtract,
        DetailFocus::Actions,
    ];

    /// Whether this region accepts typed characters
    pub fn is_text_field(&self) -> bool {
        !matches!(self, DetailFocus::Actions | DetailFocus::Status)
    }

    fn cycle_position(&self) -> usize {
        Self::EDIT_CYCLE
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

/// "Add action" form: the action text plus its first citation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionForm {
    pub text: String,
    pub url: String,
    pub extract: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationForm {
    pub url: String,
    pub extract: String,
}

#[derive(Debug)]
pub struct PromiseDetail {
    pub candidate_id: CandidateId,
    pub promise: Promise,
    pub mode: DetailMode,
    pub focus: DetailFocus,

    /// Status under the picker cursor; nothing is sent until it is confirmed
    pub status_choice: PromiseStatus,
    /// Status last sent to (or confirmed by) the backend
    pub selected_status: PromiseStatus,
    /// Last status the backend confirmed
    pub server_status: PromiseStatus,
    pub status_in_flight: bool,

    pub actions: Loadable<Vec<Action>>,
    pub selected_action: usize,
    pub citations: Loadable<Vec<Citation>>,
    pub carousel: CitationCarousel,
    pub action_citations: HashMap<ActionId, Loadable<Vec<Citation>>>,
    pub expanded: HashSet<ActionId>,

    pub action_form: ActionForm,
    pub citation_form: CitationForm,
    pub action_submitting: bool,
    pub citation_submitting: bool,

    pub notice: Option<Notice>,
    scope: CancelScope,
}

impl PromiseDetail {
    /// Open the popup for `promise`. Actions and citations start loading.
    pub fn open(candidate_id: CandidateId, promise: Promise, edit: bool) -> Self {
        let status = promise.status;
        Self {
            candidate_id,
            promise,
            mode: if edit {
                DetailMode::Editing
            } else {
                DetailMode::Viewing
            },
            focus: if edit {
                DetailFocus::Status
            } else {
                DetailFocus::Actions
            },
            status_choice: status,
            selected_status: status,
            server_status: status,
            status_in_flight: false,
            actions: Loadable::Loading,
            selected_action: 0,
            citations: Loadable::Loading,
            carousel: CitationCarousel::new(),
            action_citations: HashMap::new(),
            expanded: HashSet::new(),
            action_form: ActionForm::default(),
            citation_form: CitationForm::default(),
            action_submitting: false,
            citation_submitting: false,
            notice: None,
            scope: CancelScope::new(),
        }
    }

    pub fn scope_id(&self) -> ScopeId {
        self.scope.id()
    }

    pub fn guard(&self) -> ScopeGuard {
        self.scope.guard()
    }

    /// Stop every fetch started by this popup
    pub fn close(&self) {
        self.scope.cancel();
    }

    pub fn is_editing(&self) -> bool {
        self.mode == DetailMode::Editing
    }

    // ─────────────────────────────────────────────────────────
    // Status
    // ─────────────────────────────────────────────────────────

    /// Select a new status. Returns the status to PATCH, if any.
    ///
    /// Ignored outside edit mode, while an earlier PATCH is unanswered,
    /// and when the status does not change.
    pub fn select_status(&mut self, status: PromiseStatus) -> Option<PromiseStatus> {
        if !self.is_editing() {
            debug!("Ignoring status selection outside edit mode");
            return None;
        }
        if self.status_in_flight {
            debug!("Status update already in flight for promise {}", self.promise.id);
            self.notice = Some(Notice::info("Status update already in progress"));
            return None;
        }
        if status == self.selected_status {
            return None;
        }
        self.selected_status = status;
        self.status_choice = status;
        self.status_in_flight = true;
        Some(status)
    }

    /// Move the picker cursor one step without sending anything
    pub fn cycle_status_choice(&mut self, forward: bool) {
        if !self.is_editing() {
            return;
        }
        self.status_choice = if forward {
            self.status_choice.next()
        } else {
            self.status_choice.prev()
        };
    }

    /// Backend accepted the PATCH
    pub fn status_saved(&mut self, promise: &Promise) {
        self.server_status = promise.status;
        self.selected_status = promise.status;
        self.status_choice = promise.status;
        self.promise.status = promise.status;
        self.status_in_flight = false;
    }

    /// Backend rejected the PATCH; revert to what it last confirmed
    pub fn status_save_failed(&mut self, message: &str) {
        warn!(
            "Reverting promise {} status from {} to {}",
            self.promise.id, self.selected_status, self.server_status
        );
        self.selected_status = self.server_status;
        self.status_choice = self.server_status;
        self.status_in_flight = false;
        self.notice = Some(Notice::error(format!("Could not update status: {message}")));
    }

    // ─────────────────────────────────────────────────────────
    // Actions and promise citations
    // ─────────────────────────────────────────────────────────

    pub fn actions_loaded(&mut self, actions: Vec<Action>) {
        self.selected_action = self.selected_action.min(actions.len().saturating_sub(1));
        self.actions = Loadable::Loaded(actions);
    }

    pub fn actions_failed(&mut self, message: String) {
        self.actions = Loadable::Failed(message);
    }

    pub fn citations_loaded(&mut self, citations: Vec<Citation>) {
        self.carousel.clamp(citations.len());
        self.citations = Loadable::Loaded(citations);
    }

    pub fn citations_failed(&mut self, message: String) {
        self.citations = Loadable::Failed(message);
    }

    pub fn select_next_action(&mut self) {
        let len = self.actions.items().len();
        if self.selected_action + 1 < len {
            self.selected_action += 1;
        }
    }

    pub fn select_prev_action(&mut self) {
        self.selected_action = self.selected_action.saturating_sub(1);
    }

    pub fn selected_action_id(&self) -> Option<ActionId> {
        self.actions.items().get(self.selected_action).map(|a| a.id)
    }

    pub fn carousel_next(&mut self) {
        let len = self.citations.items().len();
        self.carousel.next(len);
    }

    pub fn carousel_prev(&mut self) {
        let len = self.citations.items().len();
        self.carousel.prev(len);
    }

    pub fn current_citation(&self) -> Option<&Citation> {
        self.carousel.current(self.citations.items())
    }

    // ─────────────────────────────────────────────────────────
    // Per-action citations
    // ─────────────────────────────────────────────────────────

    /// Flip the expand flag of one action.
    ///
    /// Returns `true` when the caller must fetch the action's citations:
    /// on expand, if nothing is cached yet or the last fetch failed.
    pub fn toggle_action_citations(&mut self, action_id: ActionId) -> bool {
        if self.expanded.remove(&action_id) {
            return false;
        }
        self.expanded.insert(action_id);

        match self.action_citations.get(&action_id) {
            None | Some(Loadable::Failed(_)) | Some(Loadable::Idle) => {
                self.action_citations.insert(action_id, Loadable::Loading);
                true
            }
            Some(_) => false,
        }
    }

    pub fn is_expanded(&self, action_id: ActionId) -> bool {
        self.expanded.contains(&action_id)
    }

    pub fn action_citations_loaded(&mut self, action_id: ActionId, citations: Vec<Citation>) {
        self.action_citations
            .insert(action_id, Loadable::Loaded(citations));
    }

    pub fn action_citations_failed(&mut self, action_id: ActionId, message: String) {
        self.action_citations
            .insert(action_id, Loadable::Failed(message));
    }

    // ─────────────────────────────────────────────────────────
    // Append forms
    // ─────────────────────────────────────────────────────────

    /// Validate the action form and build the POST body.
    ///
    /// On error nothing is sent and the form is left as typed.
    pub fn prepare_action(&mut self, now: NaiveDateTime) -> Result<NewAction> {
        if self.action_submitting {
            return Err(Error::validation("Action is already being submitted"));
        }
        let form = &self.action_form;
        let (text, url, extract) = (form.text.trim(), form.url.trim(), form.extract.trim());
        if text.is_empty() || url.is_empty() || extract.is_empty() {
            return Err(Error::validation(MISSING_FIELDS_ALERT));
        }
        validate_url(url)?;

        let body = NewAction::for_promise(self.promise.id, now, text, url, extract);
        self.action_submitting = true;
        Ok(body)
    }

    pub fn action_created(&mut self, action: Action) {
        self.actions.push(action);
        self.promise.action_count += 1;
        self.action_form = ActionForm::default();
        self.action_submitting = false;
    }

    pub fn action_create_failed(&mut self, message: &str) {
        self.action_submitting = false;
        self.notice = Some(Notice::error(format!("Could not add action: {message}")));
    }

    pub fn prepare_citation(&mut self, now: NaiveDateTime) -> Result<NewCitation> {
        if self.citation_submitting {
            return Err(Error::validation("Citation is already being submitted"));
        }
        let url = self.citation_form.url.trim();
        let extract = self.citation_form.extract.trim();
        if url.is_empty() || extract.is_empty() {
            return Err(Error::validation(MISSING_FIELDS_ALERT));
        }
        validate_url(url)?;

        let body = NewCitation {
            date: now,
            url: url.to_string(),
            extract: extract.to_string(),
        };
        self.citation_submitting = true;
        Ok(body)
    }

    pub fn citation_created(&mut self, citation: Citation) {
        self.citations.push(citation);
        self.promise.citation_count += 1;
        self.citation_form = CitationForm::default();
        self.citation_submitting = false;
    }

    pub fn citation_create_failed(&mut self, message: &str) {
        self.citation_submitting = false;
        self.notice = Some(Notice::error(format!("Could not add citation: {message}")));
    }

    // ─────────────────────────────────────────────────────────
    // Focus and text input
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        if !self.is_editing() {
            return;
        }
        let i = self.focus.cycle_position();
        self.focus = DetailFocus::EDIT_CYCLE[(i + 1) % DetailFocus::EDIT_CYCLE.len()];
    }

    pub fn focus_prev(&mut self) {
        if !self.is_editing() {
            return;
        }
        let len = DetailFocus::EDIT_CYCLE.len();
        let i = self.focus.cycle_position();
        self.focus = DetailFocus::EDIT_CYCLE[(i + len - 1) % len];
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        if !self.is_editing() {
            return None;
        }
        match self.focus {
            DetailFocus::ActionText => Some(&mut self.action_form.text),
            DetailFocus::ActionUrl => Some(&mut self.action_form.url),
            DetailFocus::ActionExtract => Some(&mut self.action_form.extract),
            DetailFocus::CitationUrl => Some(&mut self.citation_form.url),
            DetailFocus::CitationExtract => Some(&mut self.citation_form.extract),
            DetailFocus::Actions | DetailFocus::Status => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            field.pop();
        }
    }

    /// Whether the focused field belongs to the action form (as opposed to
    /// the citation form)
    pub fn focus_in_action_form(&self) -> bool {
        matches!(
            self.focus,
            DetailFocus::ActionText | DetailFocus::ActionUrl | DetailFocus::ActionExtract
        )
    }
}

/// Accept only absolute http(s) URLs with a host
fn validate_url(raw: &str) -> Result<()> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(Error::validation(INVALID_URL_ALERT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptracker_api::test_utils::{test_action, test_citation, test_date, test_promise};

    fn viewing() -> PromiseDetail {
        PromiseDetail::open(1, test_promise(10, 1, "Build a bridge", PromiseStatus::Progressing, 2), false)
    }

    fn editing() -> PromiseDetail {
        PromiseDetail::open(1, test_promise(10, 1, "Build a bridge", PromiseStatus::Progressing, 2), true)
    }

    fn fill_action(detail: &mut PromiseDetail, text: &str, url: &str, extract: &str) {
        detail.action_form = ActionForm {
            text: text.into(),
            url: url.into(),
            extract: extract.into(),
        };
    }

    #[test]
    fn test_open_sets_mode_and_focus() {
        let d = viewing();
        assert_eq!(d.mode, DetailMode::Viewing);
        assert_eq!(d.focus, DetailFocus::Actions);
        assert!(d.actions.is_loading());

        let e = editing();
        assert_eq!(e.mode, DetailMode::Editing);
        assert_eq!(e.focus, DetailFocus::Status);
    }

    #[test]
    fn test_select_status_ignored_when_viewing() {
        let mut d = viewing();
        assert_eq!(d.select_status(PromiseStatus::Delivered), None);
        assert_eq!(d.selected_status, PromiseStatus::Progressing);
    }

    #[test]
    fn test_select_status_returns_patch_and_blocks_second() {
        let mut d = editing();
        assert_eq!(
            d.select_status(PromiseStatus::Delivered),
            Some(PromiseStatus::Delivered)
        );
        assert!(d.status_in_flight);
        assert_eq!(d.select_status(PromiseStatus::Broken), None);
        assert_eq!(d.selected_status, PromiseStatus::Delivered);
    }

    #[test]
    fn test_select_same_status_is_noop() {
        let mut d = editing();
        assert_eq!(d.select_status(PromiseStatus::Progressing), None);
        assert!(!d.status_in_flight);
    }

    #[test]
    fn test_status_choice_wraps_without_sending() {
        let mut d = editing();
        d.cycle_status_choice(false);
        assert_eq!(d.status_choice, PromiseStatus::Compromised);
        d.cycle_status_choice(true);
        d.cycle_status_choice(true);
        assert_eq!(d.status_choice, PromiseStatus::Delivered);
        assert_eq!(d.selected_status, PromiseStatus::Progressing);
        assert!(!d.status_in_flight);

        let mut v = viewing();
        v.cycle_status_choice(true);
        assert_eq!(v.status_choice, PromiseStatus::Progressing);
    }

    #[test]
    fn test_status_failure_rolls_back() {
        let mut d = editing();
        d.select_status(PromiseStatus::Broken);
        d.status_save_failed("Server error 500: boom");

        assert_eq!(d.selected_status, PromiseStatus::Progressing);
        assert_eq!(d.status_choice, PromiseStatus::Progressing);
        assert!(!d.status_in_flight);
        assert!(d.notice.is_some());
    }

    #[test]
    fn test_status_saved_updates_server_status() {
        let mut d = editing();
        d.select_status(PromiseStatus::Delivered);
        let stored = test_promise(10, 1, "Build a bridge", PromiseStatus::Delivered, 2);
        d.status_saved(&stored);

        assert_eq!(d.server_status, PromiseStatus::Delivered);
        assert_eq!(d.promise.status, PromiseStatus::Delivered);
        assert!(!d.status_in_flight);
    }

    #[test]
    fn test_toggle_fetches_once() {
        let mut d = viewing();
        assert!(d.toggle_action_citations(5));
        assert!(d.is_expanded(5));
        d.action_citations_loaded(5, vec![test_citation("https://a.example", "a")]);

        assert!(!d.toggle_action_citations(5));
        assert!(!d.is_expanded(5));
        assert!(!d.toggle_action_citations(5));
        assert!(d.is_expanded(5));
    }

    #[test]
    fn test_toggle_while_loading_does_not_refetch() {
        let mut d = viewing();
        assert!(d.toggle_action_citations(5));
        assert!(!d.toggle_action_citations(5));
        assert!(!d.toggle_action_citations(5));
    }

    #[test]
    fn test_toggle_retries_after_failure() {
        let mut d = viewing();
        assert!(d.toggle_action_citations(5));
        d.action_citations_failed(5, "timeout".into());
        assert!(!d.toggle_action_citations(5));
        assert!(d.toggle_action_citations(5));
    }

    #[test]
    fn test_prepare_action_rejects_empty_url() {
        let mut d = editing();
        fill_action(&mut d, "Passed bill", "  ", "quote");
        let err = d.prepare_action(test_date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS_ALERT);
        assert!(!d.action_submitting);
        assert_eq!(d.action_form.text, "Passed bill");
    }

    #[test]
    fn test_prepare_action_rejects_non_http_url() {
        let mut d = editing();
        fill_action(&mut d, "Passed bill", "ftp://files.example/x", "quote");
        let err = d.prepare_action(test_date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), INVALID_URL_ALERT);

        fill_action(&mut d, "Passed bill", "not a url", "quote");
        assert!(d.prepare_action(test_date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_prepare_action_builds_body() {
        let mut d = editing();
        fill_action(&mut d, " Passed bill ", "https://news.example/a", "It passed");
        let body = d.prepare_action(test_date(2024, 3, 2)).unwrap();

        assert_eq!(body.text, "Passed bill");
        assert_eq!(body.promises, vec![10]);
        assert_eq!(body.citations.len(), 1);
        assert_eq!(body.citations[0].url, "https://news.example/a");
        assert!(d.action_submitting);
        assert!(d.prepare_action(test_date(2024, 3, 2)).is_err());
    }

    #[test]
    fn test_action_created_appends_and_clears() {
        let mut d = editing();
        d.actions_loaded(vec![test_action(1, "First")]);
        fill_action(&mut d, "Second", "https://x.example", "q");
        d.prepare_action(test_date(2024, 1, 1)).unwrap();
        d.action_created(test_action(2, "Second"));

        assert_eq!(d.actions.items().len(), 2);
        assert_eq!(d.action_form, ActionForm::default());
        assert!(!d.action_submitting);
    }

    #[test]
    fn test_action_create_failure_keeps_form() {
        let mut d = editing();
        fill_action(&mut d, "Second", "https://x.example", "q");
        d.prepare_action(test_date(2024, 1, 1)).unwrap();
        d.action_create_failed("Server error 500: down");

        assert_eq!(d.action_form.text, "Second");
        assert!(!d.action_submitting);
        assert!(d.notice.is_some());
    }

    #[test]
    fn test_citation_flow() {
        let mut d = editing();
        d.citations_loaded(vec![]);
        d.citation_form.url = "https://source.example".into();
        assert!(d.prepare_citation(test_date(2024, 1, 1)).is_err());

        d.citation_form.extract = "quoted".into();
        let body = d.prepare_citation(test_date(2024, 1, 1)).unwrap();
        assert_eq!(body.url, "https://source.example");

        d.citation_created(test_citation("https://source.example", "quoted"));
        assert_eq!(d.citations.items().len(), 1);
        assert_eq!(d.citation_form, CitationForm::default());
        assert_eq!(d.promise.citation_count, 3);
    }

    #[test]
    fn test_carousel_wraps_over_citations() {
        let mut d = viewing();
        d.carousel_next();
        assert_eq!(d.carousel.index(), 0);

        d.citations_loaded(vec![
            test_citation("https://a.example", "a"),
            test_citation("https://b.example", "b"),
        ]);
        d.carousel_prev();
        assert_eq!(d.carousel.index(), 1);
        d.carousel_next();
        assert_eq!(d.carousel.index(), 0);
        assert_eq!(d.current_citation().unwrap().extract, "a");
    }

    #[test]
    fn test_focus_cycle_and_typing() {
        let mut d = editing();
        d.focus_next();
        assert_eq!(d.focus, DetailFocus::ActionText);
        d.input_char('h');
        d.input_char('i');
        d.backspace();
        assert_eq!(d.action_form.text, "h");

        d.focus_prev();
        d.focus_prev();
        assert_eq!(d.focus, DetailFocus::Actions);
        d.input_char('x');
        assert_eq!(d.action_form.text, "h");
    }

    #[test]
    fn test_focus_fixed_when_viewing() {
        let mut d = viewing();
        d.focus_next();
        assert_eq!(d.focus, DetailFocus::Actions);
    }

    #[test]
    fn test_action_selection_clamped() {
        let mut d = viewing();
        d.actions_loaded(vec![test_action(1, "a"), test_action(2, "b")]);
        d.select_next_action();
        d.select_next_action();
        assert_eq!(d.selected_action_id(), Some(2));
        d.select_prev_action();
        d.select_prev_action();
        assert_eq!(d.selected_action_id(), Some(1));
    }

    #[test]
    fn test_close_cancels_scope() {
        let d = viewing();
        let guard = d.guard();
        d.close();
        assert!(guard.is_cancelled());
    }
}
