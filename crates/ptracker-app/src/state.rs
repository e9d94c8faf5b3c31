//! Application state (Model in TEA pattern)

use std::collections::HashMap;

use ptracker_core::{
    sort_promises, Candidate, CandidateId, Citation, CitationCarousel, Paginator, Promise,
    PromiseId,
};

use crate::config::Settings;
use crate::detail::PromiseDetail;
use crate::loadable::Loadable;
use crate::notice::Notice;
use crate::route::Route;
use crate::scope::CancelScope;
use crate::scorecard::Scorecard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Candidate dashboard: profile plus the paginated promise table
#[derive(Debug)]
pub struct HomeState {
    pub candidate: Loadable<Candidate>,
    /// Sorted for display; see [`ptracker_core::sort_promises`]
    pub promises: Loadable<Vec<Promise>>,
    pub paginator: Paginator,
    /// Row within the visible page
    pub selected_row: usize,
    /// Set when the backend has no candidates at all
    pub no_candidates: bool,
}

impl HomeState {
    pub fn new(page_size: usize) -> Self {
        Self {
            candidate: Loadable::Idle,
            promises: Loadable::Idle,
            paginator: Paginator::new(page_size),
            selected_row: 0,
            no_candidates: false,
        }
    }

    pub fn visible_promises(&self) -> &[Promise] {
        self.paginator.visible(self.promises.items())
    }

    pub fn selected_promise(&self) -> Option<&Promise> {
        self.visible_promises().get(self.selected_row)
    }

    pub fn candidate_id(&self) -> Option<CandidateId> {
        self.candidate.loaded().map(|c| c.id)
    }

    /// Keep the row cursor on the current page
    pub fn clamp_selection(&mut self) {
        let visible = self.visible_promises().len();
        self.selected_row = self.selected_row.min(visible.saturating_sub(1));
    }

    /// Write a server-confirmed promise into the table copy
    pub fn replace_promise(&mut self, promise: &Promise) -> bool {
        match self
            .promises
            .loaded_mut()
            .and_then(|list| list.iter_mut().find(|p| p.id == promise.id))
        {
            Some(slot) => {
                slot.status = promise.status;
                slot.text.clone_from(&promise.text);
                true
            }
            None => false,
        }
    }

    /// Count a newly created citation against its row and re-sort.
    ///
    /// The row cursor stays on the promise it was on.
    pub fn add_citation(&mut self, promise_id: PromiseId) -> bool {
        let selected = self.selected_promise().map(|p| p.id);
        let Some(list) = self.promises.loaded_mut() else {
            return false;
        };
        let Some(slot) = list.iter_mut().find(|p| p.id == promise_id) else {
            return false;
        };
        slot.citation_count += 1;
        sort_promises(list);

        if let Some(index) = selected.and_then(|id| list.iter().position(|p| p.id == id)) {
            let page_size = self.paginator.page_size();
            self.paginator.go_to(index / page_size + 1, list.len());
            self.selected_row = index % page_size;
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct PoliticiansState {
    pub candidates: Loadable<Vec<Candidate>>,
    pub selected: usize,
}

impl PoliticiansState {
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.candidates.items().get(self.selected)
    }
}

/// Scorecard screen with one citation carousel per highlighted promise
#[derive(Debug, Default)]
pub struct CardState {
    pub scorecard: Loadable<Scorecard>,
    pub citations: HashMap<PromiseId, Loadable<Vec<Citation>>>,
    pub carousels: HashMap<PromiseId, CitationCarousel>,
    pub selected: usize,
}

impl CardState {
    pub fn top_promises(&self) -> &[Promise] {
        self.scorecard
            .loaded()
            .map(|card| card.top_promises.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_promise_id(&self) -> Option<PromiseId> {
        self.top_promises().get(self.selected).map(|p| p.id)
    }

    pub fn citations_for(&self, promise_id: PromiseId) -> &[Citation] {
        self.citations
            .get(&promise_id)
            .map(Loadable::items)
            .unwrap_or_default()
    }

    pub fn carousel_index(&self, promise_id: PromiseId) -> usize {
        self.carousels
            .get(&promise_id)
            .map(CitationCarousel::index)
            .unwrap_or_default()
    }
}

/// Which button is highlighted on the login page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginChoice {
    #[default]
    LogIn,
    SignUp,
}

impl LoginChoice {
    pub fn toggle(self) -> Self {
        match self {
            LoginChoice::LogIn => LoginChoice::SignUp,
            LoginChoice::SignUp => LoginChoice::LogIn,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub route: Route,

    /// Client-only edit permission; not authentication
    pub journalist: bool,

    /// Owns every fetch started for the current screen
    pub screen_scope: CancelScope,

    pub home: HomeState,
    pub politicians: PoliticiansState,
    pub card: CardState,
    pub login_choice: LoginChoice,

    /// Open promise popup, if any
    pub detail: Option<PromiseDetail>,

    /// Screen-level notice
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            journalist: settings.behavior.journalist,
            route: Route::default(),
            screen_scope: CancelScope::new(),
            home: HomeState::new(settings.ui.page_size),
            politicians: PoliticiansState::default(),
            card: CardState::default(),
            login_choice: LoginChoice::default(),
            detail: None,
            notice: None,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Notice the user must dismiss before anything else, popup first
    pub fn active_notice(&self) -> Option<&Notice> {
        self.detail
            .as_ref()
            .and_then(|d| d.notice.as_ref())
            .or(self.notice.as_ref())
    }

    pub fn dismiss_notice(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            if detail.notice.take().is_some() {
                return;
            }
        }
        self.notice = None;
    }

    /// Close the popup and cancel its fetches
    pub fn close_detail(&mut self) -> bool {
        match self.detail.take() {
            Some(detail) => {
                detail.close();
                true
            }
            None => false,
        }
    }

    /// Candidate to show when the home route names none
    pub fn default_candidate(&self) -> Option<CandidateId> {
        self.settings.behavior.default_candidate
    }

    /// Start a fresh screen: cancel the old scope and reset per-screen state
    pub fn enter_route(&mut self, route: Route) {
        self.close_detail();
        self.screen_scope.cancel();
        self.screen_scope = CancelScope::new();
        self.route = route;
        self.notice = None;

        match route {
            Route::Home { .. } => {
                self.home = HomeState::new(self.settings.ui.page_size);
                self.home.candidate = Loadable::Loading;
                self.home.promises = Loadable::Loading;
            }
            Route::Politicians => {
                self.politicians = PoliticiansState {
                    candidates: Loadable::Loading,
                    selected: 0,
                };
            }
            Route::PromiseCard { .. } => {
                self.card = CardState {
                    scorecard: Loadable::Loading,
                    ..Default::default()
                };
            }
            Route::About | Route::Contact | Route::Login => {}
        }
    }
}
