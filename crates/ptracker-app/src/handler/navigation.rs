//! Screen switching and screen-level fetch results

use ptracker_core::prelude::*;
use ptracker_core::{sort_promises, Candidate, Citation, Promise, PromiseId};

use crate::detail::PromiseDetail;
use crate::loadable::Loadable;
use crate::message::Message;
use crate::notice::Notice;
use crate::route::Route;
use crate::scope::ScopeId;
use crate::scorecard::Scorecard;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Whether a result from `scope` still belongs to the current screen
fn is_current_screen(state: &AppState, scope: ScopeId, what: &str) -> bool {
    if state.screen_scope.id() == scope {
        true
    } else {
        debug!("Dropping stale {} result from scope {}", what, scope.as_u64());
        false
    }
}

pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    info!("Navigating to {}", route);
    state.enter_route(route);

    let guard = state.screen_scope.guard();
    let fetch_limit = state.settings.api.fetch_limit;

    match route {
        Route::Home { candidate_id } => UpdateResult::action(UpdateAction::LoadHome {
            candidate_id: candidate_id.or(state.default_candidate()),
            fetch_limit,
            guard,
        }),
        Route::Politicians => UpdateResult::action(UpdateAction::LoadPoliticians { guard }),
        Route::PromiseCard { candidate_id } => {
            UpdateResult::action(UpdateAction::LoadScorecard {
                candidate_id,
                fetch_limit,
                top_promises: state.settings.ui.top_promises,
                guard,
            })
        }
        Route::About | Route::Contact | Route::Login => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────

pub fn handle_login(state: &mut AppState) -> UpdateResult {
    info!("Journalist mode enabled");
    state.journalist = true;
    UpdateResult::message(Message::Navigate(Route::default()))
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    info!("Journalist mode disabled");
    state.journalist = false;
    if state.detail.as_ref().is_some_and(PromiseDetail::is_editing) {
        state.close_detail();
    }
    state.notice = Some(Notice::info("Logged out"));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Home screen
// ─────────────────────────────────────────────────────────

pub fn handle_candidate_loaded(
    state: &mut AppState,
    scope: ScopeId,
    candidate: Candidate,
) -> UpdateResult {
    if is_current_screen(state, scope, "candidate") {
        debug!("Loaded candidate {} ({})", candidate.id, candidate.name);
        state.home.candidate = Loadable::Loaded(candidate);
    }
    UpdateResult::none()
}

pub fn handle_no_candidates(state: &mut AppState, scope: ScopeId) -> UpdateResult {
    if is_current_screen(state, scope, "candidate") {
        info!("Backend returned no candidates");
        state.home.no_candidates = true;
        state.home.candidate = Loadable::Idle;
        state.home.promises = Loadable::Loaded(Vec::new());
    }
    UpdateResult::none()
}

pub fn handle_candidate_load_failed(
    state: &mut AppState,
    scope: ScopeId,
    error: String,
) -> UpdateResult {
    if is_current_screen(state, scope, "candidate") {
        warn!("Failed to load candidate: {}", error);
        state.home.promises = Loadable::Failed(error.clone());
        state.home.candidate = Loadable::Failed(error);
    }
    UpdateResult::none()
}

pub fn handle_promises_loaded(
    state: &mut AppState,
    scope: ScopeId,
    mut promises: Vec<Promise>,
) -> UpdateResult {
    if is_current_screen(state, scope, "promise list") {
        debug!("Loaded {} promises", promises.len());
        sort_promises(&mut promises);
        state.home.promises = Loadable::Loaded(promises);
        state.home.paginator.reset();
        state.home.selected_row = 0;
    }
    UpdateResult::none()
}

pub fn handle_promises_load_failed(
    state: &mut AppState,
    scope: ScopeId,
    error: String,
) -> UpdateResult {
    if is_current_screen(state, scope, "promise list") {
        warn!("Failed to load promises: {}", error);
        state.home.promises = Loadable::Failed(error);
    }
    UpdateResult::none()
}

pub fn handle_select_next_row(state: &mut AppState) -> UpdateResult {
    let home = &mut state.home;
    let len = home.promises.items().len();
    if home.selected_row + 1 < home.visible_promises().len() {
        home.selected_row += 1;
    } else if home.paginator.next(len) {
        home.selected_row = 0;
    }
    UpdateResult::none()
}

pub fn handle_select_prev_row(state: &mut AppState) -> UpdateResult {
    let home = &mut state.home;
    if home.selected_row > 0 {
        home.selected_row -= 1;
    } else if home.paginator.prev() {
        home.selected_row = home.visible_promises().len().saturating_sub(1);
    }
    UpdateResult::none()
}

/// Which page jump to apply
#[derive(Debug, Clone, Copy)]
pub enum PageMove {
    Next,
    Prev,
    First,
    Last,
}

pub fn handle_page_move(state: &mut AppState, page_move: PageMove) -> UpdateResult {
    let home = &mut state.home;
    let len = home.promises.items().len();
    let moved = match page_move {
        PageMove::Next => home.paginator.next(len),
        PageMove::Prev => home.paginator.prev(),
        PageMove::First => home.paginator.first(len),
        PageMove::Last => home.paginator.last(len),
    };
    if moved {
        home.selected_row = 0;
    }
    UpdateResult::none()
}

pub fn handle_open_promise(state: &mut AppState, promise_id: PromiseId, edit: bool) -> UpdateResult {
    let Some(candidate_id) = state.home.candidate_id() else {
        debug!("No candidate loaded, cannot open promise {}", promise_id);
        return UpdateResult::none();
    };
    let Some(promise) = state
        .home
        .promises
        .items()
        .iter()
        .find(|p| p.id == promise_id)
        .cloned()
    else {
        warn!("Promise {} is not in the table", promise_id);
        return UpdateResult::none();
    };

    if edit && !state.journalist {
        debug!("Edit mode requires journalist mode; opening read-only");
    }
    let edit = edit && state.journalist;

    state.close_detail();
    let detail = PromiseDetail::open(candidate_id, promise, edit);
    let action = UpdateAction::LoadDetail {
        candidate_id,
        promise_id,
        guard: detail.guard(),
    };
    debug!(
        "Opened promise {} ({}) in scope {}",
        promise_id,
        if edit { "editing" } else { "viewing" },
        detail.scope_id().as_u64()
    );
    state.detail = Some(detail);
    UpdateResult::action(action)
}

pub fn handle_close_promise(state: &mut AppState) -> UpdateResult {
    if state.close_detail() {
        debug!("Closed promise popup");
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Politicians screen
// ─────────────────────────────────────────────────────────

pub fn handle_politicians_loaded(
    state: &mut AppState,
    scope: ScopeId,
    candidates: Vec<Candidate>,
) -> UpdateResult {
    if is_current_screen(state, scope, "candidate list") {
        debug!("Loaded {} candidates", candidates.len());
        state.politicians.candidates = Loadable::Loaded(candidates);
        state.politicians.selected = 0;
    }
    UpdateResult::none()
}

pub fn handle_politicians_load_failed(
    state: &mut AppState,
    scope: ScopeId,
    error: String,
) -> UpdateResult {
    if is_current_screen(state, scope, "candidate list") {
        warn!("Failed to load candidates: {}", error);
        state.politicians.candidates = Loadable::Failed(error);
    }
    UpdateResult::none()
}

pub fn handle_select_politician(state: &mut AppState, forward: bool) -> UpdateResult {
    let politicians = &mut state.politicians;
    let len = politicians.candidates.items().len();
    if forward {
        if politicians.selected + 1 < len {
            politicians.selected += 1;
        }
    } else {
        politicians.selected = politicians.selected.saturating_sub(1);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Scorecard screen
// ─────────────────────────────────────────────────────────

pub fn handle_scorecard_loaded(
    state: &mut AppState,
    scope: ScopeId,
    scorecard: Scorecard,
) -> UpdateResult {
    if is_current_screen(state, scope, "scorecard") {
        debug!(
            "Scorecard for {}: {}%",
            scorecard.candidate.name, scorecard.progress_percentage
        );
        for promise in &scorecard.top_promises {
            state.card.citations.insert(promise.id, Loadable::Loading);
        }
        state.card.scorecard = Loadable::Loaded(scorecard);
        state.card.selected = 0;
    }
    UpdateResult::none()
}

pub fn handle_scorecard_load_failed(
    state: &mut AppState,
    scope: ScopeId,
    error: String,
) -> UpdateResult {
    if is_current_screen(state, scope, "scorecard") {
        warn!("Failed to load scorecard: {}", error);
        state.card.scorecard = Loadable::Failed(error);
    }
    UpdateResult::none()
}

pub fn handle_card_citations_loaded(
    state: &mut AppState,
    scope: ScopeId,
    promise_id: PromiseId,
    citations: Vec<Citation>,
) -> UpdateResult {
    if is_current_screen(state, scope, "scorecard citation") {
        state
            .card
            .carousels
            .entry(promise_id)
            .or_default()
            .clamp(citations.len());
        state
            .card
            .citations
            .insert(promise_id, Loadable::Loaded(citations));
    }
    UpdateResult::none()
}

pub fn handle_card_citations_failed(
    state: &mut AppState,
    scope: ScopeId,
    promise_id: PromiseId,
    error: String,
) -> UpdateResult {
    if is_current_screen(state, scope, "scorecard citation") {
        warn!("Failed to load citations for promise {}: {}", promise_id, error);
        state
            .card
            .citations
            .insert(promise_id, Loadable::Failed(error));
    }
    UpdateResult::none()
}

pub fn handle_card_select(state: &mut AppState, forward: bool) -> UpdateResult {
    let len = state.card.top_promises().len();
    let card = &mut state.card;
    if forward {
        if card.selected + 1 < len {
            card.selected += 1;
        }
    } else {
        card.selected = card.selected.saturating_sub(1);
    }
    UpdateResult::none()
}

pub fn handle_card_carousel(state: &mut AppState, forward: bool) -> UpdateResult {
    let Some(promise_id) = state.card.selected_promise_id() else {
        return UpdateResult::none();
    };
    let len = state.card.citations_for(promise_id).len();
    let carousel = state.card.carousels.entry(promise_id).or_default();
    if forward {
        carousel.next(len);
    } else {
        carousel.prev(len);
    }
    UpdateResult::none()
}
