//! Headless mode - JSON scorecard output without the TUI
//!
//! Prints a single JSON document to stdout and exits, so scripts can read
//! a candidate's progress without scraping the terminal UI.
//!
//! # Example Output
//!
//! ```json
//! {"event":"scorecard","candidate":{"id":3,...},"counts":{...},"total":12,"progress_percentage":25,"top_promises":[...],"timestamp":1760700000000}
//! {"event":"error","message":"Not found: candidate 99","fatal":true,"timestamp":1760700000000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use ptracker_app::Scorecard;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Completion summary for one candidate
    Scorecard {
        #[serde(flatten)]
        scorecard: Scorecard,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Milliseconds since the epoch
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn scorecard(scorecard: Scorecard) -> Self {
        Self::Scorecard {
            scorecard,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
