//! Candidate scorecard: completion summary plus the promises to watch

use serde::Serialize;

use ptracker_core::{Candidate, Promise, StatusCounts};

/// Default number of promises highlighted on the card
pub const DEFAULT_TOP_PROMISES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub candidate: Candidate,
    pub counts: StatusCounts,
    pub total: usize,
    pub progress_percentage: u8,
    pub top_promises: Vec<Promise>,
}

impl Scorecard {
    /// Summarize `promises` in server order; the first `top_n` are highlighted
    pub fn build(candidate: Candidate, promises: &[Promise], top_n: usize) -> Self {
        let counts = StatusCounts::aggregate(promises);
        Self {
            candidate,
            total: counts.total(),
            progress_percentage: counts.progress_percentage(),
            counts,
            top_promises: promises.iter().take(top_n).cloned().collect(),
        }
    }

    /// "3 / 10 promises completed"
    pub fn completed_label(&self) -> String {
        format!("{} / {} promises completed", self.counts.completed(), self.total)
    }
}
