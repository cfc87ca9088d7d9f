//! Input validation for configuration values and API parameters.

use crate::error::{CliError, ServiceError};

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate an invoice identifier before it is spliced into a request path.
pub fn validate_invoice_id(id: &str) -> crate::Result<()> {
    if id.trim().is_empty() {
        return Err(ServiceError::Validation {
            field: "id".to_string(),
            message: "Invoice ID must not be empty".to_string(),
        }
        .into());
    }

    if id
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
    {
        return Err(ServiceError::Validation {
            field: "id".to_string(),
            message: format!("Invoice ID '{}' contains invalid characters", id),
        }
        .into());
    }

    // Dot segments are resolved by the URL parser and would leave /invoices/
    if matches!(id, "." | "..") {
        return Err(ServiceError::Validation {
            field: "id".to_string(),
            message: format!("Invoice ID '{}' is not a valid identifier", id),
        }
        .into());
    }

    Ok(())
}

/// Parse a strictly positive integer setting.
pub fn parse_positive(field: &str, value: &str) -> crate::Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(crate::error::ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be a positive integer".to_string(),
        }
        .into()),
    }
}
