//! Backend endpoint catalogue
//!
//! Paths are relative to the API prefix (`/api/v1` by default). Trailing
//! slashes match what the backend router registers, so they are kept
//! exactly as listed.

use ptracker_core::{ActionId, CandidateId, PromiseId};

/// Default page size requested from list endpoints
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// `after`/`limit` window for paged list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub after: u64,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            after: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    pub fn new(after: u64, limit: u32) -> Self {
        Self { after, limit }
    }

    /// Query pairs in the order the backend documents them
    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [
            ("after", self.after.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Every backend operation the dashboard performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListCandidates(ListQuery),
    GetCandidate(CandidateId),
    ListPromises(CandidateId, ListQuery),
    UpdatePromise(CandidateId, PromiseId),
    ListPromiseActions(CandidateId, PromiseId),
    CreateAction(CandidateId),
    ListPromiseCitations(CandidateId, PromiseId),
    CreatePromiseCitation(CandidateId, PromiseId),
    ListActionCitations(CandidateId, ActionId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::UpdatePromise(..) => Method::Patch,
            Endpoint::CreateAction(_) | Endpoint::CreatePromiseCitation(..) => Method::Post,
            _ => Method::Get,
        }
    }

    /// Path below the API prefix, without query string
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListCandidates(_) => "/candidates".to_string(),
            Endpoint::GetCandidate(cid) => format!("/candidates/{cid}"),
            Endpoint::ListPromises(cid, _) => format!("/candidates/{cid}/promises"),
            Endpoint::UpdatePromise(cid, pid) => format!("/candidates/{cid}/promises/{pid}"),
            Endpoint::ListPromiseActions(cid, pid) => {
                format!("/candidates/{cid}/promises/{pid}/actions")
            }
            Endpoint::CreateAction(cid) => format!("/candidates/{cid}/actions/"),
            Endpoint::ListPromiseCitations(cid, pid)
            | Endpoint::CreatePromiseCitation(cid, pid) => {
                format!("/candidates/{cid}/promises/{pid}/citations")
            }
            Endpoint::ListActionCitations(cid, aid) => {
                format!("/candidates/{cid}/actions/{aid}/citations/")
            }
        }
    }

    pub fn query(&self) -> Option<ListQuery> {
        match self {
            Endpoint::ListCandidates(q) | Endpoint::ListPromises(_, q) => Some(*q),
            _ => None,
        }
    }

    /// Short label for logs
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListCandidates(_) => "list_candidates",
            Endpoint::GetCandidate(_) => "get_candidate",
            Endpoint::ListPromises(..) => "list_promises",
            Endpoint::UpdatePromise(..) => "update_promise",
            Endpoint::ListPromiseActions(..) => "list_promise_actions",
            Endpoint::CreateAction(_) => "create_action",
            Endpoint::ListPromiseCitations(..) => "list_promise_citations",
            Endpoint::CreatePromiseCitation(..) => "create_promise_citation",
            Endpoint::ListActionCitations(..) => "list_action_citations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_paths() {
        assert_eq!(
            Endpoint::ListCandidates(ListQuery::default()).path(),
            "/candidates"
        );
        assert_eq!(Endpoint::GetCandidate(7).path(), "/candidates/7");
    }

    #[test]
    fn test_promise_paths() {
        assert_eq!(
            Endpoint::ListPromises(7, ListQuery::default()).path(),
            "/candidates/7/promises"
        );
        assert_eq!(
            Endpoint::UpdatePromise(7, 42).path(),
            "/candidates/7/promises/42"
        );
        assert_eq!(
            Endpoint::ListPromiseActions(7, 42).path(),
            "/candidates/7/promises/42/actions"
        );
    }

    #[test]
    fn test_trailing_slashes_preserved() {
        assert_eq!(Endpoint::CreateAction(7).path(), "/candidates/7/actions/");
        assert_eq!(
            Endpoint::ListActionCitations(7, 3).path(),
            "/candidates/7/actions/3/citations/"
        );
        assert_eq!(
            Endpoint::ListPromiseCitations(7, 42).path(),
            "/candidates/7/promises/42/citations"
        );
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::UpdatePromise(1, 2).method(), Method::Patch);
        assert_eq!(Endpoint::CreateAction(1).method(), Method::Post);
        assert_eq!(Endpoint::CreatePromiseCitation(1, 2).method(), Method::Post);
        assert_eq!(Endpoint::ListPromiseCitations(1, 2).method(), Method::Get);
    }

    #[test]
    fn test_only_list_endpoints_carry_query() {
        let q = ListQuery::new(100, 50);
        assert_eq!(Endpoint::ListPromises(1, q).query(), Some(q));
        assert_eq!(Endpoint::GetCandidate(1).query(), None);
        assert_eq!(
            q.pairs(),
            [("after", "100".to_string()), ("limit", "50".to_string())]
        );
    }
}
