use crate::api::client::InvoiceClient;
use crate::api::models::{ActionOutcome, CurrentUser, StagedInvoice};
use crate::core::review::{PageCursor, ReviewDecision};
use async_trait::async_trait;

/// The review service's HTTP surface, as seen by the rest of the crate.
///
/// `InvoiceClient` is the production implementation; the dashboard tests
/// swap in an in-memory one.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    /// Probe the session and return the signed-in user.
    async fn session_status(&self) -> crate::Result<CurrentUser>;

    /// End the session server-side.
    async fn logout(&self) -> crate::Result<()>;

    /// Fetch the window described by `cursor`.
    async fn list_staged(&self, cursor: PageCursor) -> crate::Result<Vec<StagedInvoice>>;

    /// Approve or reject one invoice.
    async fn decide(&self, id: &str, decision: ReviewDecision) -> crate::Result<ActionOutcome>;
}

#[async_trait]
impl InvoiceApi for InvoiceClient {
    async fn session_status(&self) -> crate::Result<CurrentUser> {
        Ok(self.auth_status().await?)
    }

    async fn logout(&self) -> crate::Result<()> {
        Ok(InvoiceClient::logout(self).await?)
    }

    async fn list_staged(&self, cursor: PageCursor) -> crate::Result<Vec<StagedInvoice>> {
        Ok(InvoiceClient::list_staged(self, cursor.page_size(), cursor.offset()).await?)
    }

    async fn decide(&self, id: &str, decision: ReviewDecision) -> crate::Result<ActionOutcome> {
        Ok(InvoiceClient::decide(self, id, decision).await?)
    }
}
