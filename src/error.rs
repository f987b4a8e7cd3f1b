//! API Errors
//!
//! Every backend call resolves to `ApiResult<T>`. The UI only ever asks
//! "did it fail, and what do we tell the user".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON we expected
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Client-side precondition, nothing was sent
    #[error("{0}")]
    Invalid(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Text shown to the user in notices and placeholders
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a status error from the response body, falling back to the
    /// canonical reason when the body is empty.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Self {
        let body = body.trim();
        let message = if !body.is_empty() {
            body.to_string()
        } else {
            reason.unwrap_or("Request failed").to_string()
        };
        ApiError::Status { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_prefers_body() {
        let err = ApiError::from_status(400, Some("Bad Request"), "Username already exists");
        assert_eq!(err.user_message(), "Username already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_status_message_falls_back_to_reason() {
        let err = ApiError::from_status(404, Some("Not Found"), "  ");
        assert_eq!(err.user_message(), "Not Found");

        let err = ApiError::from_status(599, None, "");
        assert_eq!(err.user_message(), "Request failed");
    }

    #[test]
    fn test_other_variants_use_display() {
        let err = ApiError::Invalid("Please select a file.".to_string());
        assert_eq!(err.user_message(), "Please select a file.");
        assert_eq!(err.status(), None);

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "network error: connection refused");
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: ApiError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
