//! ptracker-api - REST client for the promise tracker backend
//!
//! Provides the [`PromiseApi`] service trait the application layer is
//! written against, its reqwest implementation [`ApiClient`], the endpoint
//! catalogue, and the wire bodies sent to and received from `/api/v1`.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod wire;

pub use client::{ApiClient, ApiConfig};
pub use endpoint::{Endpoint, ListQuery, Method, DEFAULT_LIST_LIMIT};
pub use error::ApiError;
pub use service::{fetch_all_promises, first_candidate, LocalPromiseApi, PromiseApi};
pub use wire::{ActionCitation, ListBody, NewAction, NewCitation, Paged, StatusPatch};
