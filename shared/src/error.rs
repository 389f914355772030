use serde::Deserialize;
use thiserror::Error;

/// Every failure of a call to the holiday service.
///
/// Transport, HTTP and decode failures all collapse into this one shape; the
/// message is what the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    /// HTTP status when the service answered at all
    pub status: Option<u16>,
    pub message: String,
}

/// Error body of a non-2xx response. `detail` is a plain string for the
/// service's own errors but a list for request validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl RequestError {
    /// Build the error for a non-2xx response from its raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string))
            .filter(|d| !d.trim().is_empty());

        Self {
            status: Some(status),
            message: detail.unwrap_or_else(|| format!("HTTP {}", status)),
        }
    }

    pub fn network(reason: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Network error: {}", reason),
        }
    }

    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("Failed to parse response: {}", reason),
        }
    }
}

/// Local form validation failures; these never reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields(Vec<&'static str>),
    #[error("Year must be a number")]
    InvalidYear,
    #[error("Select a year or a date")]
    EmptySearch,
}

/// What a dashboard command handler can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl HandlerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, HandlerError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_is_used() {
        let err = RequestError::from_response(400, r#"{"detail": "Ya existe un feriado en la fecha 2025-05-01"}"#);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.to_string(), "Ya existe un feriado en la fecha 2025-05-01");
    }

    #[test]
    fn test_missing_detail_falls_back_to_status() {
        assert_eq!(RequestError::from_response(500, "").message, "HTTP 500");
        assert_eq!(RequestError::from_response(404, "{}").message, "HTTP 404");
        assert_eq!(RequestError::from_response(502, "<html>Bad Gateway</html>").message, "HTTP 502");
    }

    #[test]
    fn test_structured_detail_falls_back_to_status() {
        let body = r#"{"detail": [{"loc": ["query", "anio"], "msg": "field required"}]}"#;
        assert_eq!(RequestError::from_response(422, body).message, "HTTP 422");
    }

    #[test]
    fn test_handler_error_wraps_both_kinds() {
        let validation: HandlerError = ValidationError::MissingFields(vec!["api_key"]).into();
        assert!(validation.is_validation());
        assert_eq!(validation.to_string(), "All fields are required");

        let request: HandlerError = RequestError::network("connection refused").into();
        assert!(!request.is_validation());
        assert_eq!(request.to_string(), "Network error: connection refused");
    }
}
