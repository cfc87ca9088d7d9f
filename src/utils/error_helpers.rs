use crate::api::models::ErrorBody;
use crate::error::{ApiError, DisplayError};
use reqwest::StatusCode;
use std::io;

/// Helper functions for standardizing error conversions across the codebase.
/// Convert reqwest transport errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout_secs: u64) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_secs);
    }

    ApiError::Network {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert JSON deserialization errors to ApiError with endpoint context
pub fn convert_json_error(error: reqwest::Error, endpoint: &str) -> ApiError {
    ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: format!("JSON parse error: {}", error),
    }
}

/// Pick the human-readable message out of a failed response.
///
/// Prefers the `error` field of a `{"error": "..."}` body, then the raw body,
/// then the status' reason phrase.
pub fn extract_server_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && !parsed.error.is_empty()
    {
        return parsed.error;
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Convert IO errors to DisplayError for terminal operations
pub fn convert_io_to_display_error(error: io::Error, operation: &str) -> DisplayError {
    DisplayError::TerminalOutput(format!("{}: {}", operation, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_timeout_error() {
        let api_error = convert_timeout_error("/test", 30);

        match api_error {
            ApiError::Timeout {
                endpoint,
                timeout_secs,
            } => {
                assert_eq!(endpoint, "/test");
                assert_eq!(timeout_secs, 30);
            }
            _ => panic!("Expected Timeout error"),
        }
    }

    #[test]
    fn test_extract_server_message_prefers_error_field() {
        let message = extract_server_message(
            StatusCode::NOT_FOUND,
            r#"{"error":"Staged invoice not found"}"#,
        );
        assert_eq!(message, "Staged invoice not found");
    }

    #[test]
    fn test_extract_server_message_falls_back_to_body() {
        let message = extract_server_message(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(message, "upstream down");

        let message = extract_server_message(StatusCode::BAD_REQUEST, r#"{"error":""}"#);
        assert_eq!(message, r#"{"error":""}"#);
    }

    #[test]
    fn test_extract_server_message_falls_back_to_reason() {
        let message = extract_server_message(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn test_convert_io_to_display_error() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "test");
        let display_error = convert_io_to_display_error(io_error, "write");

        match display_error {
            DisplayError::TerminalOutput(msg) => assert!(msg.contains("write")),
            _ => panic!("Expected TerminalOutput error"),
        }
    }
}
