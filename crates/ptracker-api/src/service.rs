//! Backend service trait
//!
//! The dashboard talks to the backend only through [`PromiseApi`], so the
//! application layer can be driven by an in-memory fake in tests.

use ptracker_core::prelude::*;
use ptracker_core::{
    Action, ActionId, Candidate, CandidateId, Citation, Promise, PromiseId, PromiseStatus,
};

use crate::endpoint::ListQuery;
use crate::wire::{NewAction, NewCitation, Paged};

/// Operations the dashboard performs against the tracker backend.
#[trait_variant::make(PromiseApi: Send)]
pub trait LocalPromiseApi {
    /// `GET /candidates?after=&limit=`
    async fn list_candidates(&self, query: ListQuery) -> Result<Paged<Candidate>>;

    /// `GET /candidates/{id}`
    async fn get_candidate(&self, candidate_id: CandidateId) -> Result<Candidate>;

    /// `GET /candidates/{id}/promises?after=&limit=`
    async fn list_promises(
        &self,
        candidate_id: CandidateId,
        query: ListQuery,
    ) -> Result<Paged<Promise>>;

    /// `PATCH /candidates/{id}/promises/{promiseId}`; returns the stored promise
    async fn update_promise_status(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        status: PromiseStatus,
    ) -> Result<Promise>;

    /// `GET /candidates/{id}/promises/{promiseId}/actions`
    async fn list_promise_actions(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> Result<Vec<Action>>;

    /// `POST /candidates/{id}/actions/`
    async fn create_action(&self, candidate_id: CandidateId, action: NewAction) -> Result<Action>;

    /// `GET /candidates/{id}/promises/{promiseId}/citations`
    async fn list_promise_citations(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> Result<Vec<Citation>>;

    /// `POST /candidates/{id}/promises/{promiseId}/citations`
    async fn create_citation(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        citation: NewCitation,
    ) -> Result<Citation>;

    /// `GET /candidates/{id}/actions/{actionId}/citations/`
    async fn list_action_citations(
        &self,
        candidate_id: CandidateId,
        action_id: ActionId,
    ) -> Result<Vec<Citation>>;
}

/// Fetch every promise of a candidate, one page of `limit` at a time.
///
/// Stops once `count` promises are held or the server returns an empty page.
pub async fn fetch_all_promises<A>(
    api: &A,
    candidate_id: CandidateId,
    limit: u32,
) -> Result<Vec<Promise>>
where
    A: PromiseApi + ?Sized,
{
    let limit = limit.max(1);
    let mut promises: Vec<Promise> = Vec::new();

    loop {
        let query = ListQuery::new(promises.len() as u64, limit);
        let page = api.list_promises(candidate_id, query).await?;
        let total = page.count;
        if page.data.is_empty() {
            break;
        }
        promises.extend(page.data);
        if promises.len() as u64 >= total {
            break;
        }
        trace!(
            "candidate {}: fetched {}/{} promises",
            candidate_id,
            promises.len(),
            total
        );
    }

    debug!(
        "candidate {}: {} promises loaded",
        candidate_id,
        promises.len()
    );
    Ok(promises)
}

/// First candidate known to the backend, if any
pub async fn first_candidate<A>(api: &A) -> Result<Option<Candidate>>
where
    A: PromiseApi + ?Sized,
{
    let page = api.list_candidates(ListQuery::new(0, 1)).await?;
    Ok(page.data.into_iter().next())
}
