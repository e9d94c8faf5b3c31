//! Popup tasks: evidentiary record fetches and the three write paths

use tokio::sync::mpsc;

use ptracker_api::{NewAction, NewCitation, PromiseApi};
use ptracker_core::prelude::*;
use ptracker_core::{ActionId, CandidateId, PromiseId, PromiseStatus};

use crate::message::Message;
use crate::scope::{ScopeGuard, ScopeId};

/// Actions and promise citations, requested together
pub(super) async fn load_detail<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    promise_id: PromiseId,
    mut guard: ScopeGuard,
    msg_tx: mpsc::Sender<Message>,
) {
    let scope = guard.id();
    let both = async {
        tokio::join!(
            api.list_promise_actions(candidate_id, promise_id),
            api.list_promise_citations(candidate_id, promise_id)
        )
    };
    let Some((actions, citations)) = guard.run(both).await else {
        debug!("Detail load for promise {} cancelled", promise_id);
        return;
    };

    let actions_msg = match actions {
        Ok(actions) => Message::DetailActionsLoaded { scope, actions },
        Err(e) => Message::DetailActionsFailed {
            scope,
            error: e.to_string(),
        },
    };
    let citations_msg = match citations {
        Ok(citations) => Message::DetailCitationsLoaded { scope, citations },
        Err(e) => Message::DetailCitationsFailed {
            scope,
            error: e.to_string(),
        },
    };
    if msg_tx.send(actions_msg).await.is_ok() {
        let _ = msg_tx.send(citations_msg).await;
    }
}

pub(super) async fn load_action_citations<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    action_id: ActionId,
    mut guard: ScopeGuard,
    msg_tx: mpsc::Sender<Message>,
) {
    let scope = guard.id();
    let msg = match guard
        .run(api.list_action_citations(candidate_id, action_id))
        .await
    {
        None => {
            debug!("Citation load for action {} cancelled", action_id);
            return;
        }
        Some(Ok(citations)) => Message::ActionCitationsLoaded {
            scope,
            action_id,
            citations,
        },
        Some(Err(e)) => Message::ActionCitationsFailed {
            scope,
            action_id,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}

pub(super) async fn patch_status<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    promise_id: PromiseId,
    status: PromiseStatus,
    scope: ScopeId,
    msg_tx: mpsc::Sender<Message>,
) {
    let msg = match api
        .update_promise_status(candidate_id, promise_id, status)
        .await
    {
        Ok(promise) => Message::StatusSaved { scope, promise },
        Err(e) => Message::StatusSaveFailed {
            scope,
            promise_id,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}

pub(super) async fn create_action<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    body: NewAction,
    scope: ScopeId,
    msg_tx: mpsc::Sender<Message>,
) {
    let msg = match api.create_action(candidate_id, body).await {
        Ok(action) => Message::ActionCreated { scope, action },
        Err(e) => Message::ActionCreateFailed {
            scope,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}

pub(super) async fn create_citation<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    promise_id: PromiseId,
    body: NewCitation,
    scope: ScopeId,
    msg_tx: mpsc::Sender<Message>,
) {
    let msg = match api.create_citation(candidate_id, promise_id, body).await {
        Ok(citation) => Message::CitationCreated {
            scope,
            promise_id,
            citation,
        },
        Err(e) => Message::CitationCreateFailed {
            scope,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}
