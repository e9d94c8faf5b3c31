//! Message types for the application (TEA pattern)
//!
//! Results of background fetches carry the [`ScopeId`] they were started
//! under. `update()` drops any result whose scope is no longer current.

use ptracker_core::{Action, ActionId, Candidate, Citation, Promise, PromiseId, PromiseStatus};

use crate::input_key::InputKey;
use crate::route::Route;
use crate::scope::ScopeId;
use crate::scorecard::Scorecard;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick for periodic updates
    Tick,
    /// Quit immediately
    Quit,
    /// Quit requested from the keyboard
    RequestQuit,
    /// Dismiss the current alert or notice
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch screens; also used to reload the current one
    Navigate(Route),
    /// Turn journalist mode on and go home
    Login,
    Logout,
    ToggleLoginChoice,

    // ─────────────────────────────────────────────────────────
    // Home screen
    // ─────────────────────────────────────────────────────────
    CandidateLoaded {
        scope: ScopeId,
        candidate: Candidate,
    },
    /// Backend has no candidates to show
    NoCandidates { scope: ScopeId },
    CandidateLoadFailed { scope: ScopeId, error: String },
    PromisesLoaded {
        scope: ScopeId,
        promises: Vec<Promise>,
    },
    PromisesLoadFailed { scope: ScopeId, error: String },

    SelectNextRow,
    SelectPrevRow,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Open the detail popup; `edit` requests journalist edit mode
    OpenPromise { promise_id: PromiseId, edit: bool },
    ClosePromise,

    // ─────────────────────────────────────────────────────────
    // Politicians screen
    // ─────────────────────────────────────────────────────────
    PoliticiansLoaded {
        scope: ScopeId,
        candidates: Vec<Candidate>,
    },
    PoliticiansLoadFailed { scope: ScopeId, error: String },
    SelectNextPolitician,
    SelectPrevPolitician,

    // ─────────────────────────────────────────────────────────
    // Scorecard screen
    // ─────────────────────────────────────────────────────────
    ScorecardLoaded {
        scope: ScopeId,
        scorecard: Box<Scorecard>,
    },
    ScorecardLoadFailed { scope: ScopeId, error: String },
    CardCitationsLoaded {
        scope: ScopeId,
        promise_id: PromiseId,
        citations: Vec<Citation>,
    },
    CardCitationsFailed {
        scope: ScopeId,
        promise_id: PromiseId,
        error: String,
    },
    CardSelectNext,
    CardSelectPrev,
    CardCarouselNext,
    CardCarouselPrev,

    // ─────────────────────────────────────────────────────────
    // Promise detail popup
    // ─────────────────────────────────────────────────────────
    DetailActionsLoaded {
        scope: ScopeId,
        actions: Vec<Action>,
    },
    DetailActionsFailed { scope: ScopeId, error: String },
    DetailCitationsLoaded {
        scope: ScopeId,
        citations: Vec<Citation>,
    },
    DetailCitationsFailed { scope: ScopeId, error: String },

    SelectStatus(PromiseStatus),
    /// Move the status picker cursor forward or back
    CycleStatus { forward: bool },
    /// Send the status under the picker cursor
    ConfirmStatus,
    StatusSaved { scope: ScopeId, promise: Promise },
    StatusSaveFailed {
        scope: ScopeId,
        promise_id: PromiseId,
        error: String,
    },

    ToggleActionCitations(ActionId),
    ActionCitationsLoaded {
        scope: ScopeId,
        action_id: ActionId,
        citations: Vec<Citation>,
    },
    ActionCitationsFailed {
        scope: ScopeId,
        action_id: ActionId,
        error: String,
    },
    SelectNextAction,
    SelectPrevAction,
    CarouselNext,
    CarouselPrev,

    /// Enter on a form field; submits whichever form holds focus
    SubmitForm,
    SubmitAction,
    ActionCreated { scope: ScopeId, action: Action },
    ActionCreateFailed { scope: ScopeId, error: String },
    SubmitCitation,
    CitationCreated {
        scope: ScopeId,
        promise_id: PromiseId,
        citation: Citation,
    },
    CitationCreateFailed { scope: ScopeId, error: String },

    FormInput(char),
    FormBackspace,
    FocusNext,
    FocusPrev,
}
