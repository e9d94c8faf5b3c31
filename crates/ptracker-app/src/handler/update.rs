//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::navigation::PageMove;
use super::{detail, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::DismissNotice => {
            state.dismiss_notice();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::Login => navigation::handle_login(state),
        Message::Logout => navigation::handle_logout(state),
        Message::ToggleLoginChoice => {
            state.login_choice = state.login_choice.toggle();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Home screen
        // ─────────────────────────────────────────────────────────
        Message::CandidateLoaded { scope, candidate } => {
            navigation::handle_candidate_loaded(state, scope, candidate)
        }
        Message::NoCandidates { scope } => navigation::handle_no_candidates(state, scope),
        Message::CandidateLoadFailed { scope, error } => {
            navigation::handle_candidate_load_failed(state, scope, error)
        }
        Message::PromisesLoaded { scope, promises } => {
            navigation::handle_promises_loaded(state, scope, promises)
        }
        Message::PromisesLoadFailed { scope, error } => {
            navigation::handle_promises_load_failed(state, scope, error)
        }
        Message::SelectNextRow => navigation::handle_select_next_row(state),
        Message::SelectPrevRow => navigation::handle_select_prev_row(state),
        Message::NextPage => navigation::handle_page_move(state, PageMove::Next),
        Message::PrevPage => navigation::handle_page_move(state, PageMove::Prev),
        Message::FirstPage => navigation::handle_page_move(state, PageMove::First),
        Message::LastPage => navigation::handle_page_move(state, PageMove::Last),
        Message::OpenPromise { promise_id, edit } => {
            navigation::handle_open_promise(state, promise_id, edit)
        }
        Message::ClosePromise => navigation::handle_close_promise(state),

        // ─────────────────────────────────────────────────────────
        // Politicians screen
        // ─────────────────────────────────────────────────────────
        Message::PoliticiansLoaded { scope, candidates } => {
            navigation::handle_politicians_loaded(state, scope, candidates)
        }
        Message::PoliticiansLoadFailed { scope, error } => {
            navigation::handle_politicians_load_failed(state, scope, error)
        }
        Message::SelectNextPolitician => navigation::handle_select_politician(state, true),
        Message::SelectPrevPolitician => navigation::handle_select_politician(state, false),

        // ─────────────────────────────────────────────────────────
        // Scorecard screen
        // ─────────────────────────────────────────────────────────
        Message::ScorecardLoaded { scope, scorecard } => {
            navigation::handle_scorecard_loaded(state, scope, *scorecard)
        }
        Message::ScorecardLoadFailed { scope, error } => {
            navigation::handle_scorecard_load_failed(state, scope, error)
        }
        Message::CardCitationsLoaded {
            scope,
            promise_id,
            citations,
        } => navigation::handle_card_citations_loaded(state, scope, promise_id, citations),
        Message::CardCitationsFailed {
            scope,
            promise_id,
            error,
        } => navigation::handle_card_citations_failed(state, scope, promise_id, error),
        Message::CardSelectNext => navigation::handle_card_select(state, true),
        Message::CardSelectPrev => navigation::handle_card_select(state, false),
        Message::CardCarouselNext => navigation::handle_card_carousel(state, true),
        Message::CardCarouselPrev => navigation::handle_card_carousel(state, false),

        // ─────────────────────────────────────────────────────────
        // Promise detail popup
        // ─────────────────────────────────────────────────────────
        Message::DetailActionsLoaded { scope, actions } => {
            detail::handle_actions_loaded(state, scope, actions)
        }
        Message::DetailActionsFailed { scope, error } => {
            detail::handle_actions_failed(state, scope, error)
        }
        Message::DetailCitationsLoaded { scope, citations } => {
            detail::handle_citations_loaded(state, scope, citations)
        }
        Message::DetailCitationsFailed { scope, error } => {
            detail::handle_citations_failed(state, scope, error)
        }

        Message::SelectStatus(status) => detail::handle_select_status(state, status),
        Message::CycleStatus { forward } => {
            detail::with_detail(state, |d| d.cycle_status_choice(forward))
        }
        Message::ConfirmStatus => detail::handle_confirm_status(state),
        Message::StatusSaved { scope, promise } => {
            detail::handle_status_saved(state, scope, promise)
        }
        Message::StatusSaveFailed {
            scope,
            promise_id,
            error,
        } => detail::handle_status_save_failed(state, scope, promise_id, error),

        Message::ToggleActionCitations(action_id) => {
            detail::handle_toggle_action_citations(state, action_id)
        }
        Message::ActionCitationsLoaded {
            scope,
            action_id,
            citations,
        } => detail::handle_action_citations_loaded(state, scope, action_id, citations),
        Message::ActionCitationsFailed {
            scope,
            action_id,
            error,
        } => detail::handle_action_citations_failed(state, scope, action_id, error),
        Message::SelectNextAction => detail::with_detail(state, |d| d.select_next_action()),
        Message::SelectPrevAction => detail::with_detail(state, |d| d.select_prev_action()),
        Message::CarouselNext => detail::with_detail(state, |d| d.carousel_next()),
        Message::CarouselPrev => detail::with_detail(state, |d| d.carousel_prev()),

        Message::SubmitForm => detail::handle_submit_form(state),
        Message::SubmitAction => detail::handle_submit_action(state),
        Message::ActionCreated { scope, action } => {
            detail::handle_action_created(state, scope, action)
        }
        Message::ActionCreateFailed { scope, error } => {
            detail::handle_action_create_failed(state, scope, error)
        }
        Message::SubmitCitation => detail::handle_submit_citation(state),
        Message::CitationCreated {
            scope,
            promise_id,
            citation,
        } => detail::handle_citation_created(state, scope, promise_id, citation),
        Message::CitationCreateFailed { scope, error } => {
            detail::handle_citation_create_failed(state, scope, error)
        }

        Message::FormInput(c) => detail::with_detail(state, |d| d.input_char(c)),
        Message::FormBackspace => detail::with_detail(state, |d| d.backspace()),
        Message::FocusNext => detail::with_detail(state, |d| d.focus_next()),
        Message::FocusPrev => detail::with_detail(state, |d| d.focus_prev()),
    }
}
