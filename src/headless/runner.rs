//! Headless mode runner
//!
//! Resolves the candidate named by the route, fetches every promise, and
//! emits the scorecard. Failures are emitted as a fatal error event and
//! returned so the process exits non-zero.

use tracing::{error, info};

use ptracker_api::{first_candidate, PromiseApi};
use ptracker_app::actions::fetch_scorecard;
use ptracker_app::{Route, Settings};
use ptracker_core::prelude::*;
use ptracker_core::CandidateId;

use super::HeadlessEvent;

/// Print the scorecard for the route's candidate as JSON
pub async fn run_headless<A: PromiseApi>(api: &A, route: Route, settings: &Settings) -> Result<()> {
    info!("Promise Tracker starting in HEADLESS mode (route {})", route);

    match build_event(api, route, settings).await {
        Ok(event) => {
            event.emit();
            Ok(())
        }
        Err(e) => {
            error!("Headless run failed: {}", e);
            HeadlessEvent::error(e.to_string(), true).emit();
            Err(e)
        }
    }
}

async fn build_event<A: PromiseApi>(
    api: &A,
    route: Route,
    settings: &Settings,
) -> Result<HeadlessEvent> {
    let candidate_id = resolve_candidate_id(api, route, settings).await?;
    let scorecard = fetch_scorecard(
        api,
        candidate_id,
        settings.api.fetch_limit,
        settings.ui.top_promises,
    )
    .await?;
    Ok(HeadlessEvent::scorecard(scorecard))
}

async fn resolve_candidate_id<A: PromiseApi>(
    api: &A,
    route: Route,
    settings: &Settings,
) -> Result<CandidateId> {
    match route {
        Route::PromiseCard { candidate_id } | Route::Home { candidate_id: Some(candidate_id) } => {
            Ok(candidate_id)
        }
        Route::Home { candidate_id: None } => {
            if let Some(id) = settings.behavior.default_candidate {
                return Ok(id);
            }
            first_candidate(api)
                .await?
                .map(|candidate| candidate.id)
                .ok_or_else(|| Error::not_found("candidate"))
        }
        other => Err(Error::validation(format!(
            "headless mode needs a candidate route such as /promise-card/1, got {}",
            other
        ))),
    }
}
