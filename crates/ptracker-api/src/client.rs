//! HTTP client for the tracker backend

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use ptracker_core::{
    Action, ActionId, Candidate, CandidateId, Citation, Promise, PromiseId, PromiseStatus,
};

use crate::endpoint::{Endpoint, ListQuery, Method};
use crate::error::{ApiError, Result};
use crate::service::PromiseApi;
use crate::wire::{ListBody, NewAction, NewCitation, Paged, StatusPatch};

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Path prefix in front of every endpoint
    pub api_prefix: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the tracker backend
///
/// # Example
///
/// ```rust,no_run
/// use ptracker_api::{ApiClient, ApiConfig, ListQuery, PromiseApi};
///
/// # async fn example() -> ptracker_core::Result<()> {
/// let client = ApiClient::new(ApiConfig::default())?;
/// let page = client.list_candidates(ListQuery::default()).await?;
/// println!("{} candidates tracked", page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    root: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let root = Self::root_url(&config)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self { root, client })
    }

    fn root_url(config: &ApiConfig) -> Result<Url> {
        let base = config.base_url.trim_end_matches('/');
        let prefix = config.api_prefix.trim_matches('/');
        let joined = if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        };
        Ok(Url::parse(&joined)?)
    }

    /// Absolute URL of an endpoint, query string included
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.root.as_str().trim_end_matches('/'),
            endpoint.path()
        ))?;
        if let Some(query) = endpoint.query() {
            url.query_pairs_mut()
                .extend_pairs(query.pairs().iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn request(&self, endpoint: &Endpoint) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!("{} {}", endpoint.name(), url);
        Ok(match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Patch => self.client.patch(url),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let response = self.request(&endpoint)?.send().await?;
        self.handle_response(&endpoint, response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(&endpoint)?
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;
        self.handle_response(&endpoint, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(endpoint.path()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("{} failed with {}: {}", endpoint.name(), status, body);
            return Err(ApiError::Server {
                status,
                message: body,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

impl PromiseApi for ApiClient {
    async fn list_candidates(&self, query: ListQuery) -> ptracker_core::Result<Paged<Candidate>> {
        Ok(self.get(Endpoint::ListCandidates(query)).await?)
    }

    async fn get_candidate(&self, candidate_id: CandidateId) -> ptracker_core::Result<Candidate> {
        Ok(self.get(Endpoint::GetCandidate(candidate_id)).await?)
    }

    async fn list_promises(
        &self,
        candidate_id: CandidateId,
        query: ListQuery,
    ) -> ptracker_core::Result<Paged<Promise>> {
        Ok(self.get(Endpoint::ListPromises(candidate_id, query)).await?)
    }

    async fn update_promise_status(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        status: PromiseStatus,
    ) -> ptracker_core::Result<Promise> {
        let body = StatusPatch { status };
        Ok(self
            .send_json(Endpoint::UpdatePromise(candidate_id, promise_id), &body)
            .await?)
    }

    async fn list_promise_actions(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> ptracker_core::Result<Vec<Action>> {
        let body: ListBody<Action> = self
            .get(Endpoint::ListPromiseActions(candidate_id, promise_id))
            .await?;
        Ok(body.into_vec())
    }

    async fn create_action(
        &self,
        candidate_id: CandidateId,
        action: NewAction,
    ) -> ptracker_core::Result<Action> {
        Ok(self
            .send_json(Endpoint::CreateAction(candidate_id), &action)
            .await?)
    }

    async fn list_promise_citations(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
    ) -> ptracker_core::Result<Vec<Citation>> {
        let body: ListBody<Citation> = self
            .get(Endpoint::ListPromiseCitations(candidate_id, promise_id))
            .await?;
        Ok(body.into_vec())
    }

    async fn create_citation(
        &self,
        candidate_id: CandidateId,
        promise_id: PromiseId,
        citation: NewCitation,
    ) -> ptracker_core::Result<Citation> {
        Ok(self
            .send_json(
                Endpoint::CreatePromiseCitation(candidate_id, promise_id),
                &citation,
            )
            .await?)
    }

    async fn list_action_citations(
        &self,
        candidate_id: CandidateId,
        action_id: ActionId,
    ) -> ptracker_core::Result<Vec<Citation>> {
        let body: ListBody<Citation> = self
            .get(Endpoint::ListActionCitations(candidate_id, action_id))
            .await?;
        Ok(body.into_vec())
    }
}
