//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen and for the popup
//! - `navigation`: Screen switching and screen-level fetch results
//! - `detail`: Promise detail popup handlers

pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use ptracker_api::{NewAction, NewCitation};
use ptracker_core::{ActionId, CandidateId, PromiseId, PromiseStatus};

use crate::message::Message;
use crate::scope::{ScopeGuard, ScopeId};

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Fetches carry a [`ScopeGuard`] and are abandoned when their scope is
/// cancelled. Writes carry only the [`ScopeId`] of the popup that issued
/// them; they always run to completion so the table can learn the result.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Resolve the candidate (or the first one on record) and all its promises
    LoadHome {
        candidate_id: Option<CandidateId>,
        fetch_limit: u32,
        guard: ScopeGuard,
    },

    /// Fetch the candidate list for the politicians table
    LoadPoliticians { guard: ScopeGuard },

    /// Build the scorecard, then fetch citations for its top promises
    LoadScorecard {
        candidate_id: CandidateId,
        fetch_limit: u32,
        top_promises: usize,
        guard: ScopeGuard,
    },

    /// Fetch actions and citations for the open popup
    LoadDetail {
        candidate_id: CandidateId,
        promise_id: PromiseId,
        guard: ScopeGuard,
    },

    /// Fetch citations for one action in the popup
    LoadActionCitations {
        candidate_id: CandidateId,
        action_id: ActionId,
        guard: ScopeGuard,
    },

    /// PATCH a promise status
    PatchStatus {
        candidate_id: CandidateId,
        promise_id: PromiseId,
        status: PromiseStatus,
        scope: ScopeId,
    },

    /// POST a new action with its first citation
    CreateAction {
        candidate_id: CandidateId,
        body: NewAction,
        scope: ScopeId,
    },

    /// POST a new citation on a promise
    CreateCitation {
        candidate_id: CandidateId,
        promise_id: PromiseId,
        body: NewCitation,
        scope: ScopeId,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

impl From<Option<UpdateAction>> for UpdateResult {
    fn from(action: Option<UpdateAction>) -> Self {
        Self {
            message: None,
            action,
        }
    }
}
