//! Application action handling.
//!
//! Processes AppAction events and updates application state accordingly.

use crate::api::models::{ActionOutcome, CurrentUser, StagedInvoice};
use crate::core::review::{PageCursor, ReviewDecision};
use crate::tui::action::AppAction;
use crate::tui::service::{LoadState, SessionView};

use super::App;

impl App {
    pub(super) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::ProbeSession => {
                self.probe_session();
            }
            AppAction::SessionValidated(user) => {
                self.handle_session_validated(user);
            }
            AppAction::SessionRejected(reason) => {
                self.handle_session_rejected(reason);
            }
            AppAction::Logout => {
                self.logout();
            }
            AppAction::LoggedOut { error } => {
                self.handle_logged_out(error);
            }
            AppAction::LoadPage(cursor) => {
                self.load_page(cursor);
            }
            AppAction::PageLoaded {
                request_id,
                cursor,
                invoices,
            } => {
                self.handle_page_loaded(request_id, cursor, invoices);
            }
            AppAction::PageFailed {
                request_id,
                cursor,
                error,
            } => {
                self.handle_page_failed(request_id, cursor, error);
            }
            AppAction::Decide { id, decision } => {
                self.submit_decision(id, decision);
            }
            AppAction::DecisionSucceeded {
                id,
                decision,
                outcome,
            } => {
                self.handle_decision_succeeded(id, decision, outcome);
            }
            AppAction::DecisionFailed {
                id,
                decision,
                error,
            } => {
                self.handle_decision_failed(id, decision, error);
            }
            AppAction::DismissNotification => {
                self.notifications.dismiss();
            }
        }
    }

    // === Session ===

    fn handle_session_validated(&mut self, user: CurrentUser) {
        self.status_bar
            .set_message(format!("Signed in as {}", user.email));
        self.set_session(SessionView::Authenticated { email: user.email });
        let _ = self.action_tx.send(AppAction::LoadPage(self.cursor));
    }

    fn handle_session_rejected(&mut self, reason: String) {
        self.page = LoadState::Idle;
        self.status_bar.set_message("");
        self.set_session(SessionView::Anonymous { reason });
    }

    fn handle_logged_out(&mut self, error: Option<String>) {
        match error {
            Some(e) => self.notifications.error(format!("Logout incomplete: {}", e)),
            None => self.notifications.info("Signed out"),
        }
        self.reset_page();
        self.status_bar.set_message("");
        self.set_session(SessionView::Anonymous {
            reason: "Signed out".to_string(),
        });
    }

    /// Forget everything about the list, including in-flight requests.
    fn reset_page(&mut self) {
        self.current_request_id += 1;
        self.cursor = PageCursor::new(self.cursor.page_size());
        self.page = LoadState::Idle;
        self.fetching = false;
        self.end_of_list = false;
        self.table.reset(0);
    }

    // === Invoice list ===

    fn handle_page_loaded(
        &mut self,
        request_id: u64,
        cursor: PageCursor,
        invoices: Vec<StagedInvoice>,
    ) {
        if request_id != self.current_request_id {
            log::debug!("dropping stale page {} response", cursor.page());
            return;
        }

        let count = invoices.len();
        self.fetching = false;
        self.cursor = cursor;
        self.end_of_list = invoices.is_empty();
        self.table.reset(count);
        self.page = LoadState::Loaded(invoices);
        self.status_bar
            .set_message(format!("Page {}: {} invoice(s)", cursor.page(), count));
    }

    /// The rows of the last successful fetch stay on screen.
    fn handle_page_failed(&mut self, request_id: u64, cursor: PageCursor, error: String) {
        if request_id != self.current_request_id {
            return;
        }

        log::warn!("failed to load page {}: {}", cursor.page(), error);
        self.fetching = false;
        if !self.page.is_loaded() {
            self.page = LoadState::Error(error.clone());
        }
        self.status_bar.set_message("");
        self.notifications
            .error(format!("Could not load invoices: {}", error));
    }

    // === Review ===

    fn handle_decision_succeeded(
        &mut self,
        id: String,
        decision: ReviewDecision,
        outcome: ActionOutcome,
    ) {
        let mut message = format!("Invoice {} {}", id, decision.past_tense());
        if let Some(filename) = outcome.filename.as_deref() {
            message.push_str(&format!(" ({})", filename));
        }
        self.notifications.success(message);

        let remaining = match self.page.data_mut() {
            Some(invoices) => {
                if let Some(index) = invoices.iter().position(|invoice| invoice.id == id) {
                    invoices.remove(index);
                }
                invoices.len()
            }
            None => return,
        };
        self.table.clamp(remaining);

        // Pull the next batch into the emptied page
        if remaining == 0 {
            let _ = self.action_tx.send(AppAction::LoadPage(self.cursor));
        }
    }

    fn handle_decision_failed(&mut self, id: String, decision: ReviewDecision, error: String) {
        log::warn!("{} invoice {} failed: {}", decision.verb(), id, error);
        self.notifications.error(error);
    }
}
