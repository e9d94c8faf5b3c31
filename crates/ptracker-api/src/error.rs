//! Error types for the backend client

use thiserror::Error;

/// Backend client error
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint could not be joined into a valid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Server returned a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ApiError> for ptracker_core::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) if e.is_decode() => ptracker_core::Error::protocol(e.to_string()),
            ApiError::Http(e) => ptracker_core::Error::http(e.to_string()),
            ApiError::Json(e) => ptracker_core::Error::Json(e),
            ApiError::Url(e) => ptracker_core::Error::config_invalid(format!("bad API URL: {e}")),
            ApiError::Server { status, message } => ptracker_core::Error::api(status, message),
            ApiError::NotFound(resource) => ptracker_core::Error::not_found(resource),
        }
    }
}

/// Result type for backend client operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_api() {
        let err: ptracker_core::Error = ApiError::Server {
            status: 422,
            message: "status: field required".into(),
        }
        .into();
        assert!(matches!(err, ptracker_core::Error::Api { status: 422, .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: ptracker_core::Error = ApiError::NotFound("candidate 4".into()).into();
        assert!(err.to_string().contains("candidate 4"));
    }

    #[test]
    fn test_bad_url_is_fatal_configuration() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: ptracker_core::Error = ApiError::from(parse_err).into();
        assert!(err.is_fatal());
    }
}
