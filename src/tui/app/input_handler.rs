//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::core::review::ReviewDecision;
use crate::tui::action::AppAction;
use crate::tui::service::SessionView;

use super::App;

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // 1. Help overlay swallows everything
        if self.handle_overlay_keys(code) {
            return;
        }

        // 2. Keys that work in every view
        if self.handle_global_keys(code, modifiers) {
            return;
        }

        // 3. View-specific keys
        match self.session {
            SessionView::Probing => {}
            SessionView::Anonymous { .. } => self.handle_anonymous_keys(code),
            SessionView::Authenticated { .. } => self.handle_review_keys(code),
        }
    }

    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
            self.show_help = false;
        }
        true
    }

    fn handle_global_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') => {
                let _ = self.action_tx.send(AppAction::Quit);
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                let _ = self.action_tx.send(AppAction::Quit);
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('x') | KeyCode::Esc => {
                let _ = self.action_tx.send(AppAction::DismissNotification);
            }
            _ => return false,
        }
        true
    }

    fn handle_anonymous_keys(&mut self, code: KeyCode) {
        if code == KeyCode::Char('r') {
            let _ = self.action_tx.send(AppAction::ProbeSession);
        }
    }

    fn handle_review_keys(&mut self, code: KeyCode) {
        let len = self.invoices().len();
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.table.select_previous(len),
            KeyCode::Char('a') => self.decide_selected(ReviewDecision::Approve),
            KeyCode::Char('d') => self.decide_selected(ReviewDecision::Reject),
            KeyCode::Char('n') | KeyCode::Right => self.next_page(),
            KeyCode::Char('p') | KeyCode::Left => self.previous_page(),
            KeyCode::Char('r') => {
                let _ = self.action_tx.send(AppAction::LoadPage(self.cursor));
            }
            KeyCode::Char('L') => {
                let _ = self.action_tx.send(AppAction::Logout);
            }
            _ => {}
        }
    }

    fn decide_selected(&mut self, decision: ReviewDecision) {
        match self.selected_invoice() {
            Some(invoice) => {
                let id = invoice.id.clone();
                let _ = self.action_tx.send(AppAction::Decide { id, decision });
            }
            None => self.status_bar.set_message("No invoice selected"),
        }
    }

    /// Disabled only while the last successful page was empty.
    fn next_page(&mut self) {
        if self.end_of_list {
            self.status_bar.set_message("End of list");
            return;
        }
        let _ = self.action_tx.send(AppAction::LoadPage(self.cursor.next()));
    }

    /// No request at all on the first page.
    fn previous_page(&mut self) {
        match self.cursor.previous() {
            Some(previous) => {
                let _ = self.action_tx.send(AppAction::LoadPage(previous));
            }
            None => self.status_bar.set_message("Already on the first page"),
        }
    }
}
