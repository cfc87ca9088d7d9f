//! Colours and text styles used across the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::core::review::ReviewDecision;
use crate::tui::service::SessionView;

pub const HIGHLIGHT_SYMBOL: &str = "► ";

pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);
pub const TEXT_SUCCESS: Style = Style::new().fg(Color::Green);

/// Key labels in the status bar and help overlay.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Separator between status bar entries.
pub const SEPARATOR: &str = " │ ";

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(Color::Cyan)
    } else {
        TEXT_DIM
    }
}

pub fn title_style() -> Style {
    Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn emphasis() -> Style {
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Column headers of the invoice table.
pub fn header_style() -> Style {
    Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn row_highlight_style() -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Approve keys read green, reject keys red.
pub fn decision_style(decision: ReviewDecision) -> Style {
    let colour = match decision {
        ReviewDecision::Approve => Color::Green,
        ReviewDecision::Reject => Color::Red,
    };
    Style::new().fg(colour).add_modifier(Modifier::BOLD)
}

/// Colour of the session dot in the header.
pub fn session_indicator_style(view: &SessionView) -> Style {
    match view {
        SessionView::Probing => TEXT_WARNING,
        SessionView::Anonymous { .. } => TEXT_DIM,
        SessionView::Authenticated { .. } => TEXT_SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style() {
        assert_eq!(border_style(true).fg, Some(Color::Cyan));
        assert_eq!(border_style(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_decision_colours() {
        assert_eq!(decision_style(ReviewDecision::Approve).fg, Some(Color::Green));
        assert_eq!(decision_style(ReviewDecision::Reject).fg, Some(Color::Red));
    }

    #[test]
    fn test_session_indicator_tracks_view() {
        assert_eq!(session_indicator_style(&SessionView::Probing).fg, Some(Color::Yellow));
        let signed_in = SessionView::Authenticated {
            email: "ana@acme.test".to_string(),
        };
        assert_eq!(session_indicator_style(&signed_in).fg, Some(Color::Green));
    }
}
