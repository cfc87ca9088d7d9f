//! Transient notification line.
//!
//! One notification at a time: a new one replaces the old. Each expires
//! after a fixed delay or when dismissed.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::styles::{TEXT_DIM, TEXT_ERROR, TEXT_SUCCESS, TEXT_WARNING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.show_at(kind, message, Instant::now());
    }

    pub fn show_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the notification once its time is up. Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.ttl);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = match self.current() {
            None => Line::from(""),
            Some(notification) => {
                let (icon, style) = match notification.kind {
                    NotificationKind::Success => ("✔", TEXT_SUCCESS),
                    NotificationKind::Error => ("✘", TEXT_ERROR),
                    NotificationKind::Info => ("•", TEXT_WARNING),
                };
                Line::from(vec![
                    Span::styled(format!(" {} {}", icon, notification.message), style),
                    Span::styled("  (x to dismiss)", TEXT_DIM),
                ])
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
