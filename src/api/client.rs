use crate::api::models::{ActionOutcome, CurrentUser, StagedInvoice, StagedInvoiceList};
use crate::core::review::ReviewDecision;
use crate::error::ApiError;
use crate::utils::error_helpers::*;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("invoice-desk/", env!("CARGO_PKG_VERSION"));
const SESSION_COOKIE: &str = "session_token";

const STATUS_ENDPOINT: &str = "/api/v1/auth/status";
const LOGOUT_ENDPOINT: &str = "/api/v1/auth/logout";
const STAGED_ENDPOINT: &str = "/api/v1/invoices/staged";
const LOGIN_PAGE: &str = "/api/v1/oauth/google/login";

#[derive(Debug, Clone)]
pub struct InvoiceClient {
    client: Client,
    pub base_url: String,
    session_token: Option<String>,
    timeout_secs: u64,
}

impl InvoiceClient {
    // Create base client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_secs))?;

        Ok(InvoiceClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: None,
            timeout_secs,
        })
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    /// Browser page that starts the server's sign-in flow.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, LOGIN_PAGE)
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.session_token {
            request = request.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token));
        }

        request
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
        log::debug!("-> {}", endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs))?;
        log::debug!("<- {} {}", endpoint, response.status());
        Ok(response)
    }

    /// Probe the session. Any non-2xx answer means "not logged in".
    pub async fn auth_status(&self) -> Result<CurrentUser, ApiError> {
        let response = self
            .send(self.build_request(Method::GET, STATUS_ENDPOINT), STATUS_ENDPOINT)
            .await?;
        Self::handle_response(response, STATUS_ENDPOINT).await
    }

    /// End the server-side session. The response body and status are ignored.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .send(self.build_request(Method::POST, LOGOUT_ENDPOINT), LOGOUT_ENDPOINT)
            .await?;
        if !response.status().is_success() {
            log::info!("logout answered {}, treating as logged out", response.status());
        }
        Ok(())
    }

    /// Fetch one window of staged invoices.
    pub async fn list_staged(&self, limit: u32, offset: u32) -> Result<Vec<StagedInvoice>, ApiError> {
        let request = self
            .build_request(Method::GET, STAGED_ENDPOINT)
            .query(&[("limit", limit), ("offset", offset)]);
        let response = self.send(request, STAGED_ENDPOINT).await?;
        let list: StagedInvoiceList = Self::handle_response(response, STAGED_ENDPOINT).await?;
        Ok(list.0)
    }

    pub async fn approve(&self, invoice_id: &str) -> Result<ActionOutcome, ApiError> {
        self.decide(invoice_id, ReviewDecision::Approve).await
    }

    pub async fn reject(&self, invoice_id: &str) -> Result<ActionOutcome, ApiError> {
        self.decide(invoice_id, ReviewDecision::Reject).await
    }

    /// Approve or reject a staged invoice. A 2xx without a JSON body still counts as success.
    pub async fn decide(
        &self,
        invoice_id: &str,
        decision: ReviewDecision,
    ) -> Result<ActionOutcome, ApiError> {
        let endpoint = format!("/api/v1/invoices/{}/{}", invoice_id, decision.path_segment());
        let response = self
            .send(self.build_request(Method::POST, &endpoint), &endpoint)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(response, &endpoint).await);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    pub async fn handle_response<T>(response: Response, endpoint: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| convert_json_error(e, endpoint))
        } else {
            Err(Self::error_from_response(response, endpoint).await)
        }
    }

    async fn error_from_response(response: Response, endpoint: &str) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_server_message(status, &body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message: message,
            },
            _ => ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InvoiceClient::new("http://example.test".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_not_authenticated_without_token() {
        let client =
            InvoiceClient::new("http://example.test".to_string()).expect("client creation failed");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_build_request_without_session() {
        let client =
            InvoiceClient::new("http://example.test".to_string()).expect("client creation failed");
        let built_request = client
            .build_request(Method::GET, STATUS_ENDPOINT)
            .build()
            .expect("Failed to build request");

        assert_eq!(
            built_request.url().as_str(),
            "http://example.test/api/v1/auth/status"
        );
        assert_eq!(built_request.method(), Method::GET);
        assert!(built_request.headers().get(header::COOKIE).is_none());
    }

    #[test]
    fn test_build_request_sends_session_cookie() {
        let client = InvoiceClient::new("http://example.test".to_string())
            .expect("client creation failed")
            .with_session_token("tok_123");
        assert!(client.is_authenticated());

        let built_request = client
            .build_request(Method::POST, "/api/v1/invoices/42/approve")
            .build()
            .expect("Failed to build request");

        assert_eq!(
            built_request
                .headers()
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok()),
            Some("session_token=tok_123")
        );
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client = InvoiceClient::new("http://example.test/".to_string())
            .expect("client creation failed");
        assert_eq!(client.base_url, "http://example.test");
        assert_eq!(
            client.login_url(),
            "http://example.test/api/v1/oauth/google/login"
        );
    }
}
