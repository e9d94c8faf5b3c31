//! In-memory backend for tests
//!
//! [`FakeApi`] implements [`PromiseApi`] over plain collections, records
//! every call, and can be told to fail or stall specific endpoints.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};

use ptracker_core::prelude::*;
use ptracker_core::{
    Action, ActionId, Candidate, CandidateId, Citation, Promise, PromiseId, PromiseStatus,
};

use crate::endpoint::{Endpoint, ListQuery};
use crate::service::PromiseApi;
use crate::wire::{NewAction, NewCitation, Paged};

#[derive(Debug, Default)]
struct FakeBackend {
    candidates: Vec<Candidate>,
    promises: HashMap<CandidateId, Vec<Promise>>,
    actions: HashMap<PromiseId, Vec<Action>>,
    promise_citations: HashMap<PromiseId, Vec<Citation>>,
    action_citations: HashMap<ActionId, Vec<Citation>>,
    failing: HashSet<&'static str>,
    delays: HashMap<&'static str, Duration>,
    calls: Vec<Endpoint>,
    next_id: u64,
}

/// Cloneable handle to a shared in-memory backend
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeBackend>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.lock().next_id = 1000;
        api
    }

    fn lock(&self) -> MutexGuard<'_, FakeBackend> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn with_candidate(self, candidate: Candidate) -> Self {
        self.lock().candidates.push(candidate);
        self
    }

    pub fn with_promises(self, candidate_id: CandidateId, promises: Vec<Promise>) -> Self {
        self.lock().promises.insert(candidate_id, promises);
        self
    }

    pub fn with_actions(self, promise_id: PromiseId, actions: Vec<Action>) -> Self {
        self.lock().actions.insert(promise_id, actions);
        self
    }

    pub fn with_promise_citations(self, promise_id: PromiseId, citations: Vec<Citation>) -> Self {
        self.lock().promise_citations.insert(promise_id, citations);
        self
    }

    pub fn with_action_citations(self, action_id: ActionId, citations: Vec<Citation>) -> Self {
        self.lock().action_citations.insert(action_id, citations);
        self
    }

    /// Make every call to the named endpoint (see [`Endpoint::name`]) fail
    pub fn fail_on(&self, endpoint: &'static str) {
        self.lock().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.lock().failing.remove(endpoint);
    }

    /// Stall the named endpoint before it answers
    pub fn delay(&self, endpoint: &'static str, delay: Duration) {
        self.lock().delays.insert(endpoint, delay);
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, endpoint: &'static str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|e| e.name() == endpoint)
            .count()
    }

    pub fn promise(&self, candidate_id: CandidateId, promise_id: PromiseId) -> Option<Promise> {
        self.lock()
            .promises
            .get(&candidate_id)
            .and_then(|ps| ps.iter().find(|p| p.id == promise_id).cloned())
    }

    /// Record the call, wait out any configured delay, and apply injected failures
    async fn enter(&self, endpoint: Endpoint) -> Result<()> {
        let delay = {
            let mut backend = self.lock();
            backend.calls.push(endpoint);
            backend.delays.get(endpoint.name()).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.lock().failing.contains(endpoint.name()) {
            return Err(Error::api(500, format!("{} failed", endpoint.name())));
        }
        Ok(())
    }
}

impl PromiseApi for FakeApi {
    async fn list_candidates(&self, query: ListQuery) -> Result<Paged<Candidate>> {
        self.enter(Endpoint::ListCandidates(query)).await?;
        let backend = self.lock();
        Ok(window(&backend.candidates, query))
    }

    async fn get_candidate(&self, candidate_id: CandidateId) -> Result<Candidate> {
        self.enter(Endpoint::GetCandidate(candidate_id)).await?;
        self.lock()
            .candidates
            .iter()
            .find(|c| c.id == candidate_id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("candidate {candidate_id}")))
    }

    async fn list_promises(
        &self,
        candidate_id: CandidateId,
        query: ListQuery,
    ) -> Result<Paged<Promise>> {
        self.enter(Endpoint::ListPromises(candidate_id, query))
            .await?;
        let backend = self.lock();
        let promises = backend
            .promises
            .get(&candidate_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(window(promises, query))
    }

    async fn update_promise_status(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        status: PromiseStatus,
    ) -> Result<Promise> {
        self.enter(Endpoint::UpdatePromise(candidate_id, promise_id))
            .await?;
        let mut backend = self.lock();
        let promise = backend
            .promises
            .get_mut(&candidate_id)
            .and_then(|ps| ps.iter_mut().find(|p| p.id == promise_id))
            .ok_or_else(|| Error::not_found(format!("promise {promise_id}")))?;
        promise.status = status;
        Ok(promise.clone())
    }

    async fn list_promise_actions(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> Result<Vec<Action>> {
        self.enter(Endpoint::ListPromiseActions(candidate_id, promise_id))
            .await?;
        Ok(self
            .lock()
            .actions
            .get(&promise_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_action(&self, candidate_id: CandidateId, action: NewAction) -> Result<Action> {
        self.enter(Endpoint::CreateAction(candidate_id)).await?;
        let mut backend = self.lock();
        backend.next_id += 1;
        let created = Action {
            id: backend.next_id,
            candidate_id: Some(candidate_id),
            date: action.date,
            text: action.text,
            citation_count: action.citations.len() as u64,
            promise_count: action.promises.len() as u64,
        };
        let citations: Vec<Citation> = action
            .citations
            .into_iter()
            .map(|c| Citation {
                id: None,
                date: c.date,
                url: c.url,
                extract: c.extract,
                promise_id: None,
            })
            .collect();
        backend.action_citations.insert(created.id, citations);
        for promise_id in action.promises {
            backend
                .actions
                .entry(promise_id)
                .or_default()
                .push(created.clone());
        }
        Ok(created)
    }

    async fn list_promise_citations(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> Result<Vec<Citation>> {
        self.enter(Endpoint::ListPromiseCitations(candidate_id, promise_id))
            .await?;
        Ok(self
            .lock()
            .promise_citations
            .get(&promise_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_citation(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        citation: NewCitation,
    ) -> Result<Citation> {
        self.enter(Endpoint::CreatePromiseCitation(candidate_id, promise_id))
            .await?;
        let mut backend = self.lock();
        backend.next_id += 1;
        let created = Citation {
            id: Some(backend.next_id),
            date: citation.date,
            url: citation.url,
            extract: citation.extract,
            promise_id: Some(promise_id),
        };
        backend
            .promise_citations
            .entry(promise_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn list_action_citations(
        &self,
        candidate_id: CandidateId,
        action_id: ActionId,
    ) -> Result<Vec<Citation>> {
        self.enter(Endpoint::ListActionCitations(candidate_id, action_id))
            .await?;
        Ok(self
            .lock()
            .action_citations
            .get(&action_id)
            .cloned()
            .unwrap_or_default())
    }
}

fn window<T: Clone>(items: &[T], query: ListQuery) -> Paged<T> {
    let data = items
        .iter()
        .skip(query.after as usize)
        .take(query.limit as usize)
        .cloned()
        .collect();
    Paged {
        data,
        count: items.len() as u64,
    }
}

// ─────────────────────────────────────────────────────────────────
// Record builders
// ─────────────────────────────────────────────────────────────────

/// Midnight on the given day
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn test_candidate(id: CandidateId, name: &str) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        description: format!("{name} is a test candidate"),
        promise_count: 0,
        action_count: 0,
        profile_image_url: None,
    }
}

pub fn test_promise(
    id: PromiseId,
    candidate_id: CandidateId,
    text: &str,
    status: PromiseStatus,
    citation_count: u64,
) -> Promise {
    Promise {
        id,
        candidate_id,
        text: text.to_string(),
        status,
        citation_count,
        action_count: 0,
        categories: Vec::new(),
    }
}

pub fn test_action(id: ActionId, text: &str) -> Action {
    Action {
        id,
        candidate_id: None,
        date: test_date(2025, 1, 15),
        text: text.to_string(),
        citation_count: 0,
        promise_count: 1,
    }
}

pub fn test_citation(url: &str, extract: &str) -> Citation {
    Citation {
        id: None,
        date: test_date(2025, 2, 1),
        url: url.to_string(),
        extract: extract.to_string(),
        promise_id: None,
    }
}
