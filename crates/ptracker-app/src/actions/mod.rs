//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes one tokio task that talks to the backend through
//! [`PromiseApi`] and reports back with [`Message`]s. Fetches race their
//! request against their [`ScopeGuard`](crate::scope::ScopeGuard); writes
//! always complete.

use tokio::sync::mpsc;

use ptracker_api::PromiseApi;

use crate::handler::UpdateAction;
use crate::message::Message;

pub(crate) mod detail;
pub(crate) mod fetch;

pub use fetch::fetch_scorecard;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: &A)
where
    A: PromiseApi + Clone + Send + Sync + 'static,
{
    let api = api.clone();
    match action {
        UpdateAction::LoadHome {
            candidate_id,
            fetch_limit,
            guard,
        } => {
            tokio::spawn(fetch::load_home(api, candidate_id, fetch_limit, guard, msg_tx));
        }

        UpdateAction::LoadPoliticians { guard } => {
            tokio::spawn(fetch::load_politicians(api, guard, msg_tx));
        }

        UpdateAction::LoadScorecard {
            candidate_id,
            fetch_limit,
            top_promises,
            guard,
        } => {
            tokio::spawn(fetch::load_scorecard(
                api,
                candidate_id,
                fetch_limit,
                top_promises,
                guard,
                msg_tx,
            ));
        }

        UpdateAction::LoadDetail {
            candidate_id,
            promise_id,
            guard,
        } => {
            tokio::spawn(detail::load_detail(api, candidate_id, promise_id, guard, msg_tx));
        }

        UpdateAction::LoadActionCitations {
            candidate_id,
            action_id,
            guard,
        } => {
            tokio::spawn(detail::load_action_citations(
                api,
                candidate_id,
                action_id,
                guard,
                msg_tx,
            ));
        }

        UpdateAction::PatchStatus {
            candidate_id,
            promise_id,
            status,
            scope,
        } => {
            tokio::spawn(detail::patch_status(
                api,
                candidate_id,
                promise_id,
                status,
                scope,
                msg_tx,
            ));
        }

        UpdateAction::CreateAction {
            candidate_id,
            body,
            scope,
        } => {
            tokio::spawn(detail::create_action(api, candidate_id, body, scope, msg_tx));
        }

        UpdateAction::CreateCitation {
            candidate_id,
            promise_id,
            body,
            scope,
        } => {
            tokio::spawn(detail::create_citation(
                api,
                candidate_id,
                promise_id,
                body,
                scope,
                msg_tx,
            ));
        }
    }
}
