//! Background requests.
//!
//! Each request runs on its own tokio task and reports back through the
//! action channel. Nothing is retried.

use std::sync::Arc;

use crate::AppError;
use crate::core::review::{PageCursor, ReviewDecision};
use crate::core::services::auth_service::AuthService;
use crate::tui::action::AppAction;
use crate::tui::service::{LoadState, SessionView};

use super::App;

impl App {
    pub(super) fn probe_session(&mut self) {
        self.set_session(SessionView::Probing);
        self.status_bar.set_message("Checking session...");

        let service = self.service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match service.session().await {
                Ok(user) => {
                    let _ = tx.send(AppAction::SessionValidated(user));
                }
                Err(e) => {
                    if is_transport(&e) {
                        log::warn!("session probe failed: {}", e);
                    } else {
                        log::info!("session probe rejected: {}", e);
                    }
                    let _ = tx.send(AppAction::SessionRejected(e.display_friendly()));
                }
            }
        });
    }

    pub(super) fn load_page(&mut self, target: PageCursor) {
        if !self.session.is_authenticated() {
            return;
        }

        self.current_request_id += 1;
        let request_id = self.current_request_id;
        self.fetching = true;
        if !self.page.is_loaded() {
            self.page = LoadState::Loading;
        }
        self.status_bar
            .set_message(format!("Loading page {}...", target.page()));

        let service = self.service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match service.list_page(target).await {
                Ok(invoices) => AppAction::PageLoaded {
                    request_id,
                    cursor: target,
                    invoices,
                },
                Err(e) => AppAction::PageFailed {
                    request_id,
                    cursor: target,
                    error: e.display_friendly(),
                },
            };
            let _ = tx.send(action);
        });
    }

    pub(super) fn submit_decision(&mut self, id: String, decision: ReviewDecision) {
        if !self.session.is_authenticated() {
            return;
        }

        self.status_bar
            .set_message(format!("{} invoice {}...", decision.verb(), id));

        let service = self.service.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match service.decide(&id, decision).await {
                Ok(outcome) => AppAction::DecisionSucceeded {
                    id,
                    decision,
                    outcome,
                },
                Err(e) => AppAction::DecisionFailed {
                    id,
                    decision,
                    error: e.display_friendly(),
                },
            };
            let _ = tx.send(action);
        });
    }

    pub(super) fn logout(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }

        self.status_bar.set_message("Signing out...");

        let auth = AuthService::new(Arc::clone(&self.api));
        let source = self.token_source.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let error = auth.logout(&source).await.err().map(|e| e.display_friendly());
            let _ = tx.send(AppAction::LoggedOut { error });
        });
    }
}

fn is_transport(error: &AppError) -> bool {
    matches!(error, AppError::Api(api) if api.is_transport())
}
