//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::loadable::Loadable;
use crate::message::Message;
use crate::notice::NoticeKind;
use crate::route::Route;
use crate::state::{AppPhase, AppState};
use ptracker_api::test_utils::{test_action, test_candidate, test_citation, test_promise};
use ptracker_core::{Promise, PromiseStatus};

/// Home screen for candidate 1 with `n` promises, all loaded
fn home_state(n: u64) -> AppState {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(Route::Home { candidate_id: Some(1) }));
    assert!(matches!(result.action, Some(UpdateAction::LoadHome { .. })));

    let scope = state.screen_scope.id();
    update(
        &mut state,
        Message::CandidateLoaded {
            scope,
            candidate: test_candidate(1, "Ada"),
        },
    );
    let promises: Vec<Promise> = (1..=n)
        .map(|i| test_promise(i, 1, &format!("Promise {i}"), PromiseStatus::Progressing, 0))
        .collect();
    update(&mut state, Message::PromisesLoaded { scope, promises });
    state
}

/// Popup for promise 1 open in the given mode
fn detail_state(edit: bool) -> AppState {
    let mut state = home_state(3);
    state.journalist = edit;
    let result = update(
        &mut state,
        Message::OpenPromise {
            promise_id: 1,
            edit,
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::LoadDetail { promise_id: 1, .. })
    ));
    state
}

fn detail_scope(state: &AppState) -> crate::scope::ScopeId {
    state.detail.as_ref().unwrap().scope_id()
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_quits_even_with_popup_open() {
    let state = detail_state(true);
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_digit_keys_navigate() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::Navigate(Route::Politicians))
    ));
    assert!(handle_key(&state, InputKey::Char('9')).is_none());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_home_uses_default_candidate() {
    let mut state = AppState::new();
    state.settings.behavior.default_candidate = Some(42);

    let result = update(&mut state, Message::Navigate(Route::default()));
    assert!(matches!(
        result.action,
        Some(UpdateAction::LoadHome {
            candidate_id: Some(42),
            fetch_limit: 100,
            ..
        })
    ));
    assert!(state.home.candidate.is_loading());
}

#[test]
fn test_navigate_static_page_has_no_action() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(Route::About));
    assert!(result.action.is_none());
    assert_eq!(state.route, Route::About);
}

#[test]
fn test_stale_screen_result_dropped() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::Politicians));
    let old_scope = state.screen_scope.id();
    update(&mut state, Message::Navigate(Route::Politicians));

    update(
        &mut state,
        Message::PoliticiansLoaded {
            scope: old_scope,
            candidates: vec![test_candidate(1, "Stale")],
        },
    );
    assert!(state.politicians.candidates.is_loading());
}

#[test]
fn test_no_candidates() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::default()));
    let scope = state.screen_scope.id();
    update(&mut state, Message::NoCandidates { scope });

    assert!(state.home.no_candidates);
    assert!(state.home.promises.items().is_empty());
}

#[test]
fn test_candidate_failure_marks_both_failed() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::default()));
    let scope = state.screen_scope.id();
    update(
        &mut state,
        Message::CandidateLoadFailed {
            scope,
            error: "connection refused".into(),
        },
    );
    assert!(state.home.candidate.is_failed());
    assert!(state.home.promises.is_failed());
}

#[test]
fn test_login_enables_journalist_and_goes_home() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::Login));

    let result = update(&mut state, Message::Login);
    assert!(state.journalist);
    assert!(matches!(
        result.message,
        Some(Message::Navigate(Route::Home { candidate_id: None }))
    ));

    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Logout)
    ));
    update(&mut state, Message::Logout);
    assert!(!state.journalist);
}

// ─────────────────────────────────────────────────────────
// Promise table
// ─────────────────────────────────────────────────────────

#[test]
fn test_promises_sorted_on_load() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::Home { candidate_id: Some(1) }));
    let scope = state.screen_scope.id();
    let promises = vec![
        test_promise(1, 1, "Long promise text", PromiseStatus::Progressing, 1),
        test_promise(2, 1, "Short", PromiseStatus::Progressing, 1),
        test_promise(3, 1, "Most cited", PromiseStatus::Delivered, 9),
    ];
    update(&mut state, Message::PromisesLoaded { scope, promises });

    let ids: Vec<_> = state.home.promises.items().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_row_selection_crosses_pages() {
    let mut state = home_state(12);
    for _ in 0..10 {
        update(&mut state, Message::SelectNextRow);
    }
    assert_eq!(state.home.paginator.current_page(), 2);
    assert_eq!(state.home.selected_row, 0);

    update(&mut state, Message::SelectPrevRow);
    assert_eq!(state.home.paginator.current_page(), 1);
    assert_eq!(state.home.selected_row, 9);
}

#[test]
fn test_page_moves_out_of_range_are_noops() {
    let mut state = home_state(25);
    update(&mut state, Message::PrevPage);
    assert_eq!(state.home.paginator.current_page(), 1);

    update(&mut state, Message::LastPage);
    assert_eq!(state.home.paginator.current_page(), 3);
    update(&mut state, Message::NextPage);
    assert_eq!(state.home.paginator.current_page(), 3);

    update(&mut state, Message::FirstPage);
    assert_eq!(state.home.paginator.current_page(), 1);
}

#[test]
fn test_edit_key_requires_journalist() {
    let mut state = home_state(3);
    assert!(handle_key(&state, InputKey::Char('e')).is_none());

    state.journalist = true;
    assert!(matches!(
        handle_key(&state, InputKey::Char('e')),
        Some(Message::OpenPromise { edit: true, .. })
    ));
}

#[test]
fn test_open_promise_edit_downgraded_without_journalist() {
    let mut state = home_state(3);
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 2,
            edit: true,
        },
    );
    let detail = state.detail.as_ref().unwrap();
    assert!(!detail.is_editing());
    assert_eq!(detail.promise.id, 2);
}

// ─────────────────────────────────────────────────────────
// Detail popup
// ─────────────────────────────────────────────────────────

#[test]
fn test_select_status_emits_patch() {
    let mut state = detail_state(true);
    let result = update(&mut state, Message::SelectStatus(PromiseStatus::Delivered));

    assert!(matches!(
        result.action,
        Some(UpdateAction::PatchStatus {
            candidate_id: 1,
            promise_id: 1,
            status: PromiseStatus::Delivered,
            ..
        })
    ));
}

#[test]
fn test_select_status_ignored_when_viewing() {
    let mut state = detail_state(false);
    let result = update(&mut state, Message::SelectStatus(PromiseStatus::Delivered));
    assert!(result.action.is_none());
}

#[test]
fn test_status_saved_propagates_to_table() {
    let mut state = detail_state(true);
    let scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Broken));
    update(
        &mut state,
        Message::StatusSaved {
            scope,
            promise: test_promise(1, 1, "Promise 1", PromiseStatus::Broken, 0),
        },
    );

    let row = state.home.promises.items().iter().find(|p| p.id == 1).unwrap();
    assert_eq!(row.status, PromiseStatus::Broken);
    assert_eq!(state.detail.as_ref().unwrap().server_status, PromiseStatus::Broken);
}

#[test]
fn test_status_saved_after_close_still_updates_table() {
    let mut state = detail_state(true);
    let scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Delivered));
    update(&mut state, Message::ClosePromise);

    update(
        &mut state,
        Message::StatusSaved {
            scope,
            promise: test_promise(1, 1, "Promise 1", PromiseStatus::Delivered, 0),
        },
    );
    let row = state.home.promises.items().iter().find(|p| p.id == 1).unwrap();
    assert_eq!(row.status, PromiseStatus::Delivered);
}

#[test]
fn test_status_failure_reverts_selection() {
    let mut state = detail_state(true);
    let scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Broken));
    update(
        &mut state,
        Message::StatusSaveFailed {
            scope,
            promise_id: 1,
            error: "Server error 500: boom".into(),
        },
    );

    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.selected_status, PromiseStatus::Progressing);
    assert_eq!(state.active_notice().unwrap().kind, NoticeKind::Error);
    let row = state.home.promises.items().iter().find(|p| p.id == 1).unwrap();
    assert_eq!(row.status, PromiseStatus::Progressing);
}

/// Run a message and every follow-up it produces, collecting the actions
fn drive(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    match handle_key(state, key) {
        Some(msg) => drive(state, msg),
        None => Vec::new(),
    }
}

#[test]
fn test_cycle_status_only_moves_the_picker() {
    let mut state = detail_state(true);
    let result = update(&mut state, Message::CycleStatus { forward: true });
    assert!(result.message.is_none());
    assert!(result.action.is_none());

    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.status_choice, PromiseStatus::Delivered);
    assert_eq!(detail.selected_status, PromiseStatus::Progressing);
    assert!(!detail.status_in_flight);
}

#[test]
fn test_status_picker_sends_one_patch_on_confirm() {
    let mut state = detail_state(true);

    let mut actions = press(&mut state, InputKey::Right);
    actions.extend(press(&mut state, InputKey::Right));
    actions.extend(press(&mut state, InputKey::Right));
    actions.extend(press(&mut state, InputKey::Left));
    assert!(actions.is_empty());
    assert_eq!(
        state.detail.as_ref().unwrap().status_choice,
        PromiseStatus::Broken
    );

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(actions.len(), 1);
    assert!(matches!(
        actions[0],
        UpdateAction::PatchStatus {
            promise_id: 1,
            status: PromiseStatus::Broken,
            ..
        }
    ));
    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.selected_status, PromiseStatus::Broken);
    assert!(detail.status_in_flight);
    assert!(state.active_notice().is_none());
}

#[test]
fn test_confirm_status_ignored_when_viewing() {
    let mut state = detail_state(false);
    assert!(drive(&mut state, Message::ConfirmStatus).is_empty());
}

#[test]
fn test_late_status_saved_refreshes_reopened_popup() {
    let mut state = detail_state(true);
    let old_scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Delivered));
    update(&mut state, Message::ClosePromise);
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 1,
            edit: true,
        },
    );
    assert_ne!(detail_scope(&state), old_scope);

    update(
        &mut state,
        Message::StatusSaved {
            scope: old_scope,
            promise: test_promise(1, 1, "Promise 1", PromiseStatus::Delivered, 0),
        },
    );

    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.selected_status, PromiseStatus::Delivered);
    assert_eq!(detail.server_status, PromiseStatus::Delivered);
    assert_eq!(detail.status_choice, PromiseStatus::Delivered);
}

#[test]
fn test_late_status_saved_leaves_pending_reopened_popup_alone() {
    let mut state = detail_state(true);
    let old_scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Delivered));
    update(&mut state, Message::ClosePromise);
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 1,
            edit: true,
        },
    );
    update(&mut state, Message::SelectStatus(PromiseStatus::Compromised));

    update(
        &mut state,
        Message::StatusSaved {
            scope: old_scope,
            promise: test_promise(1, 1, "Promise 1", PromiseStatus::Delivered, 0),
        },
    );

    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.selected_status, PromiseStatus::Compromised);
    assert!(detail.status_in_flight);
}

#[test]
fn test_late_status_saved_ignores_popup_on_other_promise() {
    let mut state = detail_state(true);
    let old_scope = detail_scope(&state);
    update(&mut state, Message::SelectStatus(PromiseStatus::Broken));
    update(&mut state, Message::ClosePromise);
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 2,
            edit: true,
        },
    );

    update(
        &mut state,
        Message::StatusSaved {
            scope: old_scope,
            promise: test_promise(1, 1, "Promise 1", PromiseStatus::Broken, 0),
        },
    );

    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.promise.id, 2);
    assert_eq!(detail.server_status, PromiseStatus::Progressing);
}

#[test]
fn test_toggle_action_citations_fetches_once() {
    let mut state = detail_state(false);
    let scope = detail_scope(&state);
    update(
        &mut state,
        Message::DetailActionsLoaded {
            scope,
            actions: vec![test_action(7, "Bill introduced")],
        },
    );

    let first = update(&mut state, Message::ToggleActionCitations(7));
    assert!(matches!(
        first.action,
        Some(UpdateAction::LoadActionCitations { action_id: 7, .. })
    ));
    update(
        &mut state,
        Message::ActionCitationsLoaded {
            scope,
            action_id: 7,
            citations: vec![test_citation("https://a.example", "a")],
        },
    );

    let second = update(&mut state, Message::ToggleActionCitations(7));
    let third = update(&mut state, Message::ToggleActionCitations(7));
    assert!(second.action.is_none());
    assert!(third.action.is_none());
    assert!(state.detail.as_ref().unwrap().is_expanded(7));
}

#[test]
fn test_stale_detail_result_dropped_after_reopen() {
    let mut state = detail_state(false);
    let old_scope = detail_scope(&state);
    update(&mut state, Message::ClosePromise);
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 1,
            edit: false,
        },
    );

    update(
        &mut state,
        Message::DetailActionsLoaded {
            scope: old_scope,
            actions: vec![test_action(1, "stale")],
        },
    );
    assert!(state.detail.as_ref().unwrap().actions.is_loading());
}

#[test]
fn test_submit_action_with_empty_url_alerts_without_request() {
    let mut state = detail_state(true);
    {
        let detail = state.detail.as_mut().unwrap();
        detail.action_form.text = "Passed bill".into();
        detail.action_form.extract = "quote".into();
    }
    let result = update(&mut state, Message::SubmitAction);

    assert!(result.action.is_none());
    assert_eq!(state.active_notice().unwrap().kind, NoticeKind::Alert);

    // Any key dismisses the alert
    assert!(matches!(
        handle_key(&state, InputKey::Char('x')),
        Some(Message::DismissNotice)
    ));
    update(&mut state, Message::DismissNotice);
    assert!(state.active_notice().is_none());
    assert_eq!(state.detail.as_ref().unwrap().action_form.text, "Passed bill");
}

#[test]
fn test_submit_action_emits_create() {
    let mut state = detail_state(true);
    {
        let detail = state.detail.as_mut().unwrap();
        detail.action_form.text = "Passed bill".into();
        detail.action_form.url = "https://news.example/bill".into();
        detail.action_form.extract = "quote".into();
    }
    let result = update(&mut state, Message::SubmitAction);
    match result.action {
        Some(UpdateAction::CreateAction { body, .. }) => {
            assert_eq!(body.promises, vec![1]);
            assert_eq!(body.citations[0].url, "https://news.example/bill");
        }
        other => panic!("expected CreateAction, got {other:?}"),
    }
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut state = detail_state(true);
    update(&mut state, Message::FocusNext);
    for c in "Hi".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).unwrap();
        update(&mut state, msg);
    }
    assert_eq!(state.detail.as_ref().unwrap().action_form.text, "Hi");

    // 'q' is text while a field has focus
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::FormInput('q'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::SubmitForm)
    ));
}

#[test]
fn test_submit_form_routes_by_focus() {
    let mut state = detail_state(true);
    state.detail.as_mut().unwrap().focus = crate::detail::DetailFocus::CitationUrl;
    let result = update(&mut state, Message::SubmitForm);
    assert!(matches!(result.message, Some(Message::SubmitCitation)));
}

#[test]
fn test_citation_created_appends() {
    let mut state = detail_state(true);
    let scope = detail_scope(&state);
    update(
        &mut state,
        Message::DetailCitationsLoaded {
            scope,
            citations: vec![],
        },
    );
    update(
        &mut state,
        Message::CitationCreated {
            scope,
            promise_id: 1,
            citation: test_citation("https://src.example", "quoted"),
        },
    );
    assert_eq!(state.detail.as_ref().unwrap().citations.items().len(), 1);
    let row = state.home.promises.items().iter().find(|p| p.id == 1).unwrap();
    assert_eq!(row.citation_count, 1);
}

#[test]
fn test_citation_created_resorts_table_after_close() {
    let mut state = home_state(3);
    state.journalist = true;
    // Promise 3 sorts last; open it from its row
    update(&mut state, Message::SelectNextRow);
    update(&mut state, Message::SelectNextRow);
    assert_eq!(state.home.selected_promise().map(|p| p.id), Some(3));
    update(
        &mut state,
        Message::OpenPromise {
            promise_id: 3,
            edit: true,
        },
    );
    let scope = detail_scope(&state);
    update(&mut state, Message::ClosePromise);

    update(
        &mut state,
        Message::CitationCreated {
            scope,
            promise_id: 3,
            citation: test_citation("https://src.example", "quoted"),
        },
    );

    let first = &state.home.promises.items()[0];
    assert_eq!((first.id, first.citation_count), (3, 1));
    assert_eq!(state.home.selected_promise().map(|p| p.id), Some(3));
}

#[test]
fn test_escape_closes_popup() {
    let mut state = detail_state(false);
    let guard = state.detail.as_ref().unwrap().guard();
    let msg = handle_key(&state, InputKey::Esc).unwrap();
    update(&mut state, msg);

    assert!(state.detail.is_none());
    assert!(guard.is_cancelled());
}

// ─────────────────────────────────────────────────────────
// Scorecard
// ─────────────────────────────────────────────────────────

#[test]
fn test_scorecard_citations_and_carousel() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Route::PromiseCard { candidate_id: 1 }));
    let scope = state.screen_scope.id();

    let promises = vec![test_promise(5, 1, "Five", PromiseStatus::Delivered, 2)];
    let card = crate::scorecard::Scorecard::build(test_candidate(1, "Ada"), &promises, 4);
    update(
        &mut state,
        Message::ScorecardLoaded {
            scope,
            scorecard: Box::new(card),
        },
    );
    assert_eq!(state.card.citations.get(&5), Some(&Loadable::Loading));

    update(
        &mut state,
        Message::CardCitationsLoaded {
            scope,
            promise_id: 5,
            citations: vec![
                test_citation("https://a.example", "a"),
                test_citation("https://b.example", "b"),
            ],
        },
    );
    update(&mut state, Message::CardCarouselPrev);
    assert_eq!(state.card.carousel_index(5), 1);
    update(&mut state, Message::CardCarouselNext);
    assert_eq!(state.card.carousel_index(5), 0);
}
