//! Promise status and completion aggregation
//!
//! The backend stores status as a small integer. Every part of the dashboard
//! goes through [`PromiseStatus`] instead of matching on raw codes.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Promise;

/// Lifecycle state of a tracked promise.
///
/// Codes follow the backend's `PromiseStatus` enumeration:
///
/// | code | variant       |
/// |------|---------------|
/// | 0    | `Progressing` |
/// | 1    | `Delivered`   |
/// | 2    | `Broken`      |
/// | 3    | `Compromised` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PromiseStatus {
    #[default]
    Progressing,
    Delivered,
    Broken,
    Compromised,
}

impl PromiseStatus {
    /// All statuses in code order
    pub const ALL: [PromiseStatus; 4] = [
        PromiseStatus::Progressing,
        PromiseStatus::Delivered,
        PromiseStatus::Broken,
        PromiseStatus::Compromised,
    ];

    pub fn code(self) -> u8 {
        match self {
            PromiseStatus::Progressing => 0,
            PromiseStatus::Delivered => 1,
            PromiseStatus::Broken => 2,
            PromiseStatus::Compromised => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromiseStatus::Progressing => "Progressing",
            PromiseStatus::Delivered => "Delivered",
            PromiseStatus::Broken => "Broken",
            PromiseStatus::Compromised => "Compromised",
        }
    }

    /// Next status in code order, wrapping around (status picker)
    pub fn next(self) -> Self {
        Self::ALL[(self.code() as usize + 1) % Self::ALL.len()]
    }

    /// Previous status in code order, wrapping around (status picker)
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.code() as usize + len - 1) % len]
    }
}

impl TryFrom<u8> for PromiseStatus {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PromiseStatus::Progressing),
            1 => Ok(PromiseStatus::Delivered),
            2 => Ok(PromiseStatus::Broken),
            3 => Ok(PromiseStatus::Compromised),
            other => Err(Error::protocol(format!("unknown promise status code {other}"))),
        }
    }
}

impl From<PromiseStatus> for u8 {
    fn from(status: PromiseStatus) -> Self {
        status.code()
    }
}

impl std::fmt::Display for PromiseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Aggregation
// ─────────────────────────────────────────────────────────────────

/// Promise counts partitioned by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub progressing: usize,
    pub delivered: usize,
    pub broken: usize,
    pub compromised: usize,
}

impl StatusCounts {
    /// Partition a promise list by status
    pub fn aggregate(promises: &[Promise]) -> Self {
        Self::from_statuses(promises.iter().map(|p| p.status))
    }

    pub fn from_statuses(statuses: impl IntoIterator<Item = PromiseStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                PromiseStatus::Progressing => counts.progressing += 1,
                PromiseStatus::Delivered => counts.delivered += 1,
                PromiseStatus::Broken => counts.broken += 1,
                PromiseStatus::Compromised => counts.compromised += 1,
            }
        }
        counts
    }

    /// Count for a single status
    pub fn get(&self, status: PromiseStatus) -> usize {
        match status {
            PromiseStatus::Progressing => self.progressing,
            PromiseStatus::Delivered => self.delivered,
            PromiseStatus::Broken => self.broken,
            PromiseStatus::Compromised => self.compromised,
        }
    }

    /// Promises counted as completed
    pub fn completed(&self) -> usize {
        self.delivered
    }

    pub fn total(&self) -> usize {
        self.progressing + self.delivered + self.broken + self.compromised
    }

    /// Completed share of all promises, rounded half up. Zero when empty.
    pub fn progress_percentage(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let pct = (self.completed() * 200 + total) / (2 * total);
        pct.min(100) as u8
    }
}
