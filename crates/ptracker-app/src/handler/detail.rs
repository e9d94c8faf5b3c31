//! Promise detail popup handlers

use chrono::Utc;

use ptracker_core::prelude::*;
use ptracker_core::{Action, ActionId, Citation, Promise, PromiseId, PromiseStatus};

use crate::detail::PromiseDetail;
use crate::message::Message;
use crate::notice::Notice;
use crate::scope::ScopeId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// The open popup, if `scope` is still its scope
fn detail_in_scope<'a>(
    state: &'a mut AppState,
    scope: ScopeId,
    what: &str,
) -> Option<&'a mut PromiseDetail> {
    match state.detail.as_mut() {
        Some(detail) if detail.scope_id() == scope => Some(detail),
        _ => {
            debug!("Dropping stale {} result from scope {}", what, scope.as_u64());
            None
        }
    }
}

// ─────────────────────────────────────────────────────────
// Initial fetches
// ─────────────────────────────────────────────────────────

pub fn handle_actions_loaded(state: &mut AppState, scope: ScopeId, actions: Vec<Action>) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "action list") {
        detail.actions_loaded(actions);
    }
    UpdateResult::none()
}

pub fn handle_actions_failed(state: &mut AppState, scope: ScopeId, error: String) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "action list") {
        warn!("Failed to load actions for promise {}: {}", detail.promise.id, error);
        detail.actions_failed(error);
    }
    UpdateResult::none()
}

pub fn handle_citations_loaded(
    state: &mut AppState,
    scope: ScopeId,
    citations: Vec<Citation>,
) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "citation list") {
        detail.citations_loaded(citations);
    }
    UpdateResult::none()
}

pub fn handle_citations_failed(state: &mut AppState, scope: ScopeId, error: String) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "citation list") {
        warn!("Failed to load citations for promise {}: {}", detail.promise.id, error);
        detail.citations_failed(error);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────

pub fn handle_select_status(state: &mut AppState, status: PromiseStatus) -> UpdateResult {
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };
    match detail.select_status(status) {
        Some(status) => {
            info!("Updating promise {} status to {}", detail.promise.id, status);
            UpdateResult::action(UpdateAction::PatchStatus {
                candidate_id: detail.candidate_id,
                promise_id: detail.promise.id,
                status,
                scope: detail.scope_id(),
            })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_confirm_status(state: &mut AppState) -> UpdateResult {
    match state.detail.as_ref() {
        Some(detail) if detail.is_editing() => {
            UpdateResult::message(Message::SelectStatus(detail.status_choice))
        }
        _ => UpdateResult::none(),
    }
}

/// The table copy is updated whether or not the popup is still open.
///
/// A popup reopened on the same promise while the PATCH was in flight copied
/// the old status from the table, so it takes the confirmed status too unless
/// it has a PATCH of its own outstanding.
pub fn handle_status_saved(state: &mut AppState, scope: ScopeId, promise: Promise) -> UpdateResult {
    info!("Promise {} status saved as {}", promise.id, promise.status);
    if state.home.replace_promise(&promise) {
        debug!("Propagated status of promise {} to the table", promise.id);
    }
    match state.detail.as_mut() {
        Some(detail) if detail.scope_id() == scope => detail.status_saved(&promise),
        Some(detail) if detail.promise.id == promise.id && !detail.status_in_flight => {
            debug!(
                "Refreshing reopened popup for promise {} from scope {}",
                promise.id,
                scope.as_u64()
            );
            detail.status_saved(&promise);
        }
        _ => debug!("Dropping stale status update result from scope {}", scope.as_u64()),
    }
    UpdateResult::none()
}

pub fn handle_status_save_failed(
    state: &mut AppState,
    scope: ScopeId,
    promise_id: PromiseId,
    error: String,
) -> UpdateResult {
    error!("Failed to update status of promise {}: {}", promise_id, error);
    match detail_in_scope(state, scope, "status update") {
        Some(detail) => detail.status_save_failed(&error),
        None => {
            state.notice = Some(Notice::error(format!("Could not update status: {error}")));
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Action citations, selection, carousel
// ─────────────────────────────────────────────────────────

pub fn handle_toggle_action_citations(state: &mut AppState, action_id: ActionId) -> UpdateResult {
    let Some(detail) = state.detail.as_mut() else {
        return UpdateResult::none();
    };
    if detail.toggle_action_citations(action_id) {
        debug!("Fetching citations for action {}", action_id);
        UpdateResult::action(UpdateAction::LoadActionCitations {
            candidate_id: detail.candidate_id,
            action_id,
            guard: detail.guard(),
        })
    } else {
        UpdateResult::none()
    }
}

pub fn handle_action_citations_loaded(
    state: &mut AppState,
    scope: ScopeId,
    action_id: ActionId,
    citations: Vec<Citation>,
) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "action citation") {
        detail.action_citations_loaded(action_id, citations);
    }
    UpdateResult::none()
}

pub fn handle_action_citations_failed(
    state: &mut AppState,
    scope: ScopeId,
    action_id: ActionId,
    error: String,
) -> UpdateResult {
    if let Some(detail) = detail_in_scope(state, scope, "action citation") {
        warn!("Failed to load citations for action {}: {}", action_id, error);
        detail.action_citations_failed(action_id, error);
    }
    UpdateResult::none()
}

pub fn with_detail(state: &mut AppState, f: impl FnOnce(&mut PromiseDetail)) -> UpdateResult {
    if let Some(detail) = state.detail.as_mut() {
        f(detail);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Append forms
// ─────────────────────────────────────────────────────────

pub fn handle_submit_form(state: &AppState) -> UpdateResult {
    match state.detail.as_ref() {
        Some(detail) if detail.is_editing() && detail.focus.is_text_field() => {
            if detail.focus_in_action_form() {
                UpdateResult::message(Message::SubmitAction)
            } else {
                UpdateResult::message(Message::SubmitCitation)
            }
        }
        _ => UpdateResult::none(),
    }
}

pub fn handle_submit_action(state: &mut AppState) -> UpdateResult {
    let Some(detail) = state.detail.as_mut().filter(|d| d.is_editing()) else {
        return UpdateResult::none();
    };
    match detail.prepare_action(Utc::now().naive_utc()) {
        Ok(body) => {
            info!("Adding action to promise {}", detail.promise.id);
            UpdateResult::action(UpdateAction::CreateAction {
                candidate_id: detail.candidate_id,
                body,
                scope: detail.scope_id(),
            })
        }
        Err(e) => {
            info!("Rejected action form: {}", e);
            detail.notice = Some(Notice::alert(e.to_string()));
            UpdateResult::none()
        }
    }
}

pub fn handle_action_created(state: &mut AppState, scope: ScopeId, action: Action) -> UpdateResult {
    info!("Created action {}", action.id);
    if let Some(detail) = detail_in_scope(state, scope, "action creation") {
        detail.action_created(action);
    }
    UpdateResult::none()
}

pub fn handle_action_create_failed(state: &mut AppState, scope: ScopeId, error: String) -> UpdateResult {
    error!("Failed to create action: {}", error);
    match detail_in_scope(state, scope, "action creation") {
        Some(detail) => detail.action_create_failed(&error),
        None => state.notice = Some(Notice::error(format!("Could not add action: {error}"))),
    }
    UpdateResult::none()
}

pub fn handle_submit_citation(state: &mut AppState) -> UpdateResult {
    let Some(detail) = state.detail.as_mut().filter(|d| d.is_editing()) else {
        return UpdateResult::none();
    };
    match detail.prepare_citation(Utc::now().naive_utc()) {
        Ok(body) => {
            info!("Adding citation to promise {}", detail.promise.id);
            UpdateResult::action(UpdateAction::CreateCitation {
                candidate_id: detail.candidate_id,
                promise_id: detail.promise.id,
                body,
                scope: detail.scope_id(),
            })
        }
        Err(e) => {
            info!("Rejected citation form: {}", e);
            detail.notice = Some(Notice::alert(e.to_string()));
            UpdateResult::none()
        }
    }
}

/// The table row gains the citation even if the popup has since closed
pub fn handle_citation_created(
    state: &mut AppState,
    scope: ScopeId,
    promise_id: PromiseId,
    citation: Citation,
) -> UpdateResult {
    info!("Created citation for promise {}: {}", promise_id, citation.url);
    if state.home.add_citation(promise_id) {
        debug!("Bumped citation count of promise {} in the table", promise_id);
    }
    if let Some(detail) = detail_in_scope(state, scope, "citation creation") {
        detail.citation_created(citation);
    }
    UpdateResult::none()
}

pub fn handle_citation_create_failed(
    state: &mut AppState,
    scope: ScopeId,
    error: String,
) -> UpdateResult {
    error!("Failed to create citation: {}", error);
    match detail_in_scope(state, scope, "citation creation") {
        Some(detail) => detail.citation_create_failed(&error),
        None => state.notice = Some(Notice::error(format!("Could not add citation: {error}"))),
    }
    UpdateResult::none()
}
