use std::sync::Arc;

use crate::api::models::{ActionOutcome, CurrentUser, StagedInvoice};
use crate::core::review::{PageCursor, ReviewDecision};
use crate::core::services::traits::InvoiceApi;
use crate::utils::validation::validate_invoice_id;

/// Staged-invoice operations on top of an [`InvoiceApi`].
#[derive(Clone)]
pub struct InvoiceService {
    api: Arc<dyn InvoiceApi>,
}

impl InvoiceService {
    pub fn new(api: Arc<dyn InvoiceApi>) -> Self {
        Self { api }
    }

    pub async fn session(&self) -> crate::Result<CurrentUser> {
        self.api.session_status().await
    }

    /// Fetch one page. No caching: every call goes to the server.
    pub async fn list_page(&self, cursor: PageCursor) -> crate::Result<Vec<StagedInvoice>> {
        log::debug!(
            "listing staged invoices page={} limit={} offset={}",
            cursor.page(),
            cursor.page_size(),
            cursor.offset()
        );
        self.api.list_staged(cursor).await
    }

    pub async fn decide(&self, id: &str, decision: ReviewDecision) -> crate::Result<ActionOutcome> {
        validate_invoice_id(id)?;
        log::info!("{} invoice {}", decision.verb(), id);
        self.api.decide(id, decision).await
    }

    pub async fn approve(&self, id: &str) -> crate::Result<ActionOutcome> {
        self.decide(id, ReviewDecision::Approve).await
    }

    pub async fn reject(&self, id: &str) -> crate::Result<ActionOutcome> {
        self.decide(id, ReviewDecision::Reject).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::error::{ApiError, ServiceError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        decisions: Mutex<Vec<(String, ReviewDecision)>>,
        windows: Mutex<Vec<(u32, u32)>>,
    }

    #[async_trait]
    impl InvoiceApi for RecordingApi {
        async fn session_status(&self) -> crate::Result<CurrentUser> {
            Err(ApiError::Unauthorized {
                status: 401,
                endpoint: "/api/v1/auth/status".to_string(),
                server_message: "Not authenticated".to_string(),
            }
            .into())
        }

        async fn logout(&self) -> crate::Result<()> {
            Ok(())
        }

        async fn list_staged(&self, cursor: PageCursor) -> crate::Result<Vec<StagedInvoice>> {
            self.windows
                .lock()
                .unwrap()
                .push((cursor.page_size(), cursor.offset()));
            Ok(Vec::new())
        }

        async fn decide(&self, id: &str, decision: ReviewDecision) -> crate::Result<ActionOutcome> {
            self.decisions
                .lock()
                .unwrap()
                .push((id.to_string(), decision));
            Ok(ActionOutcome {
                status: decision.past_tense().to_string(),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_approve_and_reject_forward_decision() {
        let api = Arc::new(RecordingApi::default());
        let service = InvoiceService::new(api.clone());

        let outcome = service.approve("42").await.expect("approve");
        assert_eq!(outcome.status, "approved");
        service.reject("43").await.expect("reject");

        let decisions = api.decisions.lock().unwrap().clone();
        assert_eq!(
            decisions,
            vec![
                ("42".to_string(), ReviewDecision::Approve),
                ("43".to_string(), ReviewDecision::Reject),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_id_never_reaches_api() {
        let api = Arc::new(RecordingApi::default());
        let service = InvoiceService::new(api.clone());

        let result = service.approve("42/../../admin").await;
        assert!(matches!(
            result,
            Err(AppError::Service(ServiceError::Validation { .. }))
        ));
        assert!(api.decisions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_page_uses_cursor_window() {
        let api = Arc::new(RecordingApi::default());
        let service = InvoiceService::new(api.clone());

        service
            .list_page(PageCursor::at(3, 10))
            .await
            .expect("list");
        assert_eq!(api.windows.lock().unwrap().clone(), vec![(10, 20)]);
    }

    #[test]
    fn test_session_failure_is_an_error() {
        let service = InvoiceService::new(Arc::new(RecordingApi::default()));
        let result = tokio_test::block_on(service.session());
        assert!(matches!(
            result,
            Err(AppError::Api(ApiError::Unauthorized { .. }))
        ));
    }
}
