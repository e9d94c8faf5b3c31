//! Screen-level fetches: candidate dashboard, politicians list, scorecard

use futures_util::future::join_all;
use tokio::sync::mpsc;

use ptracker_api::{fetch_all_promises, first_candidate, ListQuery, PromiseApi};
use ptracker_core::prelude::*;
use ptracker_core::{Candidate, CandidateId};

use crate::message::Message;
use crate::scope::ScopeGuard;
use crate::scorecard::Scorecard;

async fn resolve_candidate<A: PromiseApi>(
    api: &A,
    candidate_id: Option<CandidateId>,
) -> Result<Option<Candidate>> {
    match candidate_id {
        Some(id) => api.get_candidate(id).await.map(Some),
        None => first_candidate(api).await,
    }
}

/// Candidate first, then all of its promises
pub(super) async fn load_home<A: PromiseApi>(
    api: A,
    candidate_id: Option<CandidateId>,
    fetch_limit: u32,
    mut guard: ScopeGuard,
    msg_tx: mpsc::Sender<Message>,
) {
    let scope = guard.id();

    let Some(resolved) = guard.run(resolve_candidate(&api, candidate_id)).await else {
        debug!("Home load cancelled (scope {})", scope.as_u64());
        return;
    };
    let candidate = match resolved {
        Ok(Some(candidate)) => candidate,
        Ok(None) => {
            let _ = msg_tx.send(Message::NoCandidates { scope }).await;
            return;
        }
        Err(e) => {
            let _ = msg_tx
                .send(Message::CandidateLoadFailed {
                    scope,
                    error: e.to_string(),
                })
                .await;
            return;
        }
    };

    let candidate_id = candidate.id;
    if msg_tx
        .send(Message::CandidateLoaded { scope, candidate })
        .await
        .is_err()
    {
        return;
    }

    let msg = match guard
        .run(fetch_all_promises(&api, candidate_id, fetch_limit))
        .await
    {
        None => {
            debug!("Promise load cancelled (scope {})", scope.as_u64());
            return;
        }
        Some(Ok(promises)) => Message::PromisesLoaded { scope, promises },
        Some(Err(e)) => Message::PromisesLoadFailed {
            scope,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}

pub(super) async fn load_politicians<A: PromiseApi>(
    api: A,
    mut guard: ScopeGuard,
    msg_tx: mpsc::Sender<Message>,
) {
    let scope = guard.id();
    let msg = match guard.run(api.list_candidates(ListQuery::default())).await {
        None => {
            debug!("Politicians load cancelled (scope {})", scope.as_u64());
            return;
        }
        Some(Ok(page)) => Message::PoliticiansLoaded {
            scope,
            candidates: page.into_data(),
        },
        Some(Err(e)) => Message::PoliticiansLoadFailed {
            scope,
            error: e.to_string(),
        },
    };
    let _ = msg_tx.send(msg).await;
}

/// Everything the scorecard screen shows
pub async fn fetch_scorecard<A: PromiseApi>(
    api: &A,
    candidate_id: CandidateId,
    fetch_limit: u32,
    top_promises: usize,
) -> Result<Scorecard> {
    let candidate = api.get_candidate(candidate_id).await?;
    let promises = fetch_all_promises(api, candidate_id, fetch_limit).await?;
    Ok(Scorecard::build(candidate, &promises, top_promises))
}

/// Scorecard first, then citations for each highlighted promise
pub(super) async fn load_scorecard<A: PromiseApi>(
    api: A,
    candidate_id: CandidateId,
    fetch_limit: u32,
    top_promises: usize,
    mut guard: ScopeGuard,
    msg_tx: mpsc::Sender<Message>,
) {
    let scope = guard.id();

    let card = match guard
        .run(fetch_scorecard(&api, candidate_id, fetch_limit, top_promises))
        .await
    {
        None => {
            debug!("Scorecard load cancelled (scope {})", scope.as_u64());
            return;
        }
        Some(Ok(card)) => card,
        Some(Err(e)) => {
            let _ = msg_tx
                .send(Message::ScorecardLoadFailed {
                    scope,
                    error: e.to_string(),
                })
                .await;
            return;
        }
    };

    let promise_ids: Vec<_> = card.top_promises.iter().map(|p| p.id).collect();
    if msg_tx
        .send(Message::ScorecardLoaded {
            scope,
            scorecard: Box::new(card),
        })
        .await
        .is_err()
    {
        return;
    }

    // Citation lists are independent; each one fills its own slot
    let requests = promise_ids.iter().map(|&promise_id| {
        let api = &api;
        async move {
            (
                promise_id,
                api.list_promise_citations(candidate_id, promise_id).await,
            )
        }
    });
    let Some(results) = guard.run(join_all(requests)).await else {
        debug!("Scorecard citations cancelled (scope {})", scope.as_u64());
        return;
    };

    for (promise_id, result) in results {
        let msg = match result {
            Ok(citations) => Message::CardCitationsLoaded {
                scope,
                promise_id,
                citations,
            },
            Err(e) => Message::CardCitationsFailed {
                scope,
                promise_id,
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            return;
        }
    }
}
