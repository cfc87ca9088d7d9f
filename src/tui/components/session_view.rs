//! Anonymous view: shown whenever the session probe fails.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::styles::{TEXT_DIM, TEXT_WARNING, border_style, emphasis};

pub struct SessionPanel;

impl SessionPanel {
    pub fn render(frame: &mut Frame, area: Rect, reason: &str, login_url: &str) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("  You are not signed in.", emphasis())),
            Line::from(Span::styled(format!("  {}", reason), TEXT_DIM)),
            Line::from(""),
            Line::from("  1. Sign in with your browser:"),
            Line::from(Span::styled(format!("     {}", login_url), TEXT_WARNING)),
            Line::from("  2. Store the session token:"),
            Line::from(Span::styled("     invoice-desk auth login", TEXT_WARNING)),
            Line::from(""),
            Line::from(Span::styled(
                "  Press 'r' to check again, 'q' to quit",
                TEXT_DIM,
            )),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Sign in required ")
                .borders(Borders::ALL)
                .border_style(border_style(true)),
        );
        frame.render_widget(paragraph, area);
    }
}
