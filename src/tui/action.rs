//! Application actions.
//!
//! Flux-like flow: key press or finished task → `AppAction` → App state →
//! next frame.

use crate::api::models::{ActionOutcome, CurrentUser, StagedInvoice};
use crate::core::review::{PageCursor, ReviewDecision};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Quit,

    // === Session ===
    /// Ask the server whether the session is valid
    ProbeSession,
    SessionValidated(CurrentUser),
    /// Probe failed: not logged in, or the server could not be reached
    SessionRejected(String),
    Logout,
    /// Logout finished; `error` is set when clearing the session failed
    LoggedOut { error: Option<String> },

    // === Invoice list ===
    /// Fetch the page described by the cursor
    LoadPage(PageCursor),
    PageLoaded {
        request_id: u64,
        cursor: PageCursor,
        invoices: Vec<StagedInvoice>,
    },
    PageFailed {
        request_id: u64,
        cursor: PageCursor,
        error: String,
    },

    // === Review ===
    Decide {
        id: String,
        decision: ReviewDecision,
    },
    DecisionSucceeded {
        id: String,
        decision: ReviewDecision,
        outcome: ActionOutcome,
    },
    DecisionFailed {
        id: String,
        decision: ReviewDecision,
        error: String,
    },

    DismissNotification,
}
