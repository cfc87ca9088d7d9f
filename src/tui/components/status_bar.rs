//! Bottom bar: the keys that work in the current view, plus a short message.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::styles::{KEY_HINT, SEPARATOR, TEXT_DIM, TEXT_SUCCESS, border_style, decision_style};
use crate::core::review::ReviewDecision;
use crate::tui::service::SessionView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
    /// Set for keys that approve or reject.
    pub decision: Option<ReviewDecision>,
}

impl KeyBinding {
    const fn key(key: &'static str, action: &'static str) -> Self {
        Self {
            key,
            action,
            decision: None,
        }
    }

    const fn decide(key: &'static str, decision: ReviewDecision) -> Self {
        Self {
            key,
            action: match decision {
                ReviewDecision::Approve => "Approve",
                ReviewDecision::Reject => "Reject",
            },
            decision: Some(decision),
        }
    }

    fn key_style(&self) -> Style {
        self.decision.map(decision_style).unwrap_or(KEY_HINT)
    }
}

const REVIEW_BINDINGS: &[KeyBinding] = &[
    KeyBinding::key("↑↓", "Select"),
    KeyBinding::decide("a", ReviewDecision::Approve),
    KeyBinding::decide("d", ReviewDecision::Reject),
    KeyBinding::key("n/p", "Page"),
    KeyBinding::key("r", "Refresh"),
    KeyBinding::key("?", "Help"),
    KeyBinding::key("q", "Quit"),
];

const ANONYMOUS_BINDINGS: &[KeyBinding] = &[
    KeyBinding::key("r", "Check again"),
    KeyBinding::key("?", "Help"),
    KeyBinding::key("q", "Quit"),
];

const PROBING_BINDINGS: &[KeyBinding] = &[KeyBinding::key("q", "Quit")];

pub struct StatusBar {
    message: String,
    bindings: &'static [KeyBinding],
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: PROBING_BINDINGS,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_view(&mut self, view: &SessionView) {
        self.bindings = match view {
            SessionView::Probing => PROBING_BINDINGS,
            SessionView::Anonymous { .. } => ANONYMOUS_BINDINGS,
            SessionView::Authenticated { .. } => REVIEW_BINDINGS,
        };
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.bindings.len() * 3 + 2);
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, TEXT_DIM));
            }
            spans.push(Span::styled(format!(" {} ", binding.key), binding.key_style()));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(SEPARATOR, TEXT_DIM));
            spans.push(Span::styled(self.message.clone(), TEXT_SUCCESS));
        }
        spans
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let paragraph = Paragraph::new(Line::from(self.spans())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_bindings_follow_view() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.bindings, PROBING_BINDINGS);

        bar.set_view(&SessionView::Authenticated {
            email: "reviewer@example.com".to_string(),
        });
        assert!(bar.bindings.iter().any(|b| b.action == "Approve"));

        bar.set_view(&SessionView::Anonymous {
            reason: "Not authenticated".to_string(),
        });
        assert!(bar.bindings.iter().all(|b| b.decision.is_none()));
    }

    #[test]
    fn test_decision_keys_are_coloured() {
        let reject = REVIEW_BINDINGS
            .iter()
            .find(|b| b.key == "d")
            .expect("reject binding");
        assert_eq!(reject.action, "Reject");
        assert_eq!(reject.key_style().fg, Some(Color::Red));
    }

    #[test]
    fn test_message_is_appended() {
        let mut bar = StatusBar::new();
        bar.set_message("Signed in as ana@acme.test");
        let last = bar.spans().pop().expect("spans");
        assert_eq!(last.content, "Signed in as ana@acme.test");
    }
}
