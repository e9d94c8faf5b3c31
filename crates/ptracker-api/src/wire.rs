//! Request and response bodies exchanged with the backend

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use ptracker_core::types::timestamp;
use ptracker_core::{PromiseId, PromiseStatus};

/// Paged list envelope returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    /// Total number of records on the server, not the length of `data`
    pub count: u64,
}

impl<T> Paged<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Some list endpoints answer with the paged envelope, others with a bare
/// array. Both decode into a plain list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Paged(Paged<T>),
    Bare(Vec<T>),
}

impl<T> ListBody<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListBody::Paged(p) => p.data,
            ListBody::Bare(v) => v,
        }
    }
}

/// `PATCH` body for a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub status: PromiseStatus,
}

/// Citation embedded in a new action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionCitation {
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub extract: String,
    pub url: String,
}

/// `POST` body creating an action linked to promises
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAction {
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub text: String,
    pub citations: Vec<ActionCitation>,
    pub promises: Vec<PromiseId>,
}

impl NewAction {
    /// Action for a single promise with one supporting citation, both dated `date`
    pub fn for_promise(
        promise_id: PromiseId,
        date: NaiveDateTime,
        text: impl Into<String>,
        url: impl Into<String>,
        extract: impl Into<String>,
    ) -> Self {
        Self {
            date,
            text: text.into(),
            citations: vec![ActionCitation {
                date,
                extract: extract.into(),
                url: url.into(),
            }],
            promises: vec![promise_id],
        }
    }
}

/// `POST` body creating a citation on a promise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCitation {
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub url: String,
    pub extract: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ptracker_core::Citation;
    use serde_json::json;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_status_patch_body() {
        let body = serde_json::to_value(StatusPatch {
            status: PromiseStatus::Broken,
        })
        .unwrap();
        assert_eq!(body, json!({"status": 2}));
    }

    #[test]
    fn test_new_action_body() {
        let body = NewAction::for_promise(
            42,
            noon(),
            "Signed the housing bill",
            "https://example.org/bill",
            "The mayor signed...",
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2025-01-15T12:00:00",
                "text": "Signed the housing bill",
                "citations": [{
                    "date": "2025-01-15T12:00:00",
                    "extract": "The mayor signed...",
                    "url": "https://example.org/bill"
                }],
                "promises": [42]
            })
        );
    }

    #[test]
    fn test_list_body_accepts_envelope_and_bare_array() {
        let envelope = r#"{"data": [{"date": "2025-01-01", "url": "https://a.b", "extract": "x"}], "count": 9}"#;
        let bare = r#"[{"date": "2025-01-01", "url": "https://a.b", "extract": "x"}]"#;

        let a: ListBody<Citation> = serde_json::from_str(envelope).unwrap();
        let b: ListBody<Citation> = serde_json::from_str(bare).unwrap();
        assert_eq!(a.into_vec(), b.into_vec());
    }

    #[test]
    fn test_paged_count_is_server_total() {
        let paged: Paged<u32> = serde_json::from_str(r#"{"data": [1, 2], "count": 40}"#).unwrap();
        assert_eq!(paged.count, 40);
        assert_eq!(paged.into_data(), vec![1, 2]);
    }
}
