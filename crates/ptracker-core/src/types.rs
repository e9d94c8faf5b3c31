//! Domain types mirrored from the tracker backend
//!
//! All records are owned by the backend. The client only holds transient,
//! re-fetchable copies, so every type here is a plain data carrier.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::status::PromiseStatus;

pub type CandidateId = u64;
pub type PromiseId = u64;
pub type ActionId = u64;
pub type CitationId = u64;

/// Format used when displaying dates, e.g. "January 5, 2025"
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// A politician whose promises are tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Number of tracked promises
    #[serde(rename = "promises", default, deserialize_with = "count_or_list")]
    pub promise_count: u64,
    #[serde(rename = "actions", default, deserialize_with = "count_or_list")]
    pub action_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

/// A tracked campaign commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promise {
    pub id: PromiseId,
    #[serde(default)]
    pub candidate_id: CandidateId,
    pub text: String,
    pub status: PromiseStatus,
    #[serde(rename = "citations", default, deserialize_with = "count_or_list")]
    pub citation_count: u64,
    #[serde(rename = "actions", default, deserialize_with = "count_or_list")]
    pub action_count: u64,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A dated progress update evidencing movement on a promise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<CandidateId>,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub text: String,
    #[serde(rename = "citations", default, deserialize_with = "count_or_list")]
    pub citation_count: u64,
    #[serde(rename = "promises", default, deserialize_with = "count_or_list")]
    pub promise_count: u64,
}

/// A URL plus quoted excerpt substantiating a promise or action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CitationId>,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub url: String,
    pub extract: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promise_id: Option<PromiseId>,
}

// ─────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────

/// Sort promises for the promise table.
///
/// Most-cited first; ties go to the shorter text. The sort is stable, so
/// promises equal on both keys keep their server order.
pub fn sort_promises(promises: &mut [Promise]) {
    promises.sort_by(|a, b| {
        b.citation_count
            .cmp(&a.citation_count)
            .then_with(|| a.text.chars().count().cmp(&b.text.chars().count()))
    });
}

// ─────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (offset is normalized to UTC), naive ISO datetimes with
/// or without fractional seconds, and bare dates.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::protocol(format!("invalid timestamp '{raw}'")))
}

/// Render a timestamp for humans using [`DISPLAY_DATE_FORMAT`]
pub fn display_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Serde adapter for backend timestamps
pub mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Some backend versions send a relation as a count, others as a list of
/// ids. Either way only the count is kept.
fn count_or_list<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountOrList {
        Count(u64),
        List(Vec<serde::de::IgnoredAny>),
    }

    Ok(match CountOrList::deserialize(d)? {
        CountOrList::Count(n) => n,
        CountOrList::List(items) => items.len() as u64,
    })
}
