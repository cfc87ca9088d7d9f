//! Placeholders drawn in place of data that is not loaded yet.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::styles::{TEXT_DIM, TEXT_ERROR, TEXT_WARNING, border_style};
use crate::tui::service::LoadState;

pub const RETRY_HINT: &str = "Press 'r' to retry";

/// Titles and messages for one placeholder panel.
pub struct LoadStateConfig<'a> {
    pub title: &'a str,
    pub idle_message: &'a str,
    pub loading_message: &'a str,
    pub border_style: Style,
}

impl<'a> LoadStateConfig<'a> {
    pub fn new(title: &'a str, focused: bool) -> Self {
        Self {
            title,
            idle_message: "Nothing loaded yet",
            loading_message: "Loading...",
            border_style: border_style(focused),
        }
    }

    pub fn with_idle_message(mut self, message: &'a str) -> Self {
        self.idle_message = message;
        self
    }

    pub fn with_loading_message(mut self, message: &'a str) -> Self {
        self.loading_message = message;
        self
    }
}

/// Body text for `state`, or `None` once data is loaded.
pub fn placeholder_lines<T>(state: &LoadState<T>, config: &LoadStateConfig<'_>) -> Option<Vec<Line<'static>>> {
    let padded = |text: String, style: Style| Line::from(Span::styled(format!("  {}", text), style));

    let body = match state {
        LoadState::Loaded(_) => return None,
        LoadState::Idle => vec![padded(config.idle_message.to_string(), TEXT_DIM)],
        LoadState::Loading => vec![padded(format!("⏳ {}", config.loading_message), TEXT_WARNING)],
        LoadState::Error(message) => vec![
            padded(format!("Error: {}", message), TEXT_ERROR),
            Line::from(""),
            padded(RETRY_HINT.to_string(), TEXT_DIM),
        ],
    };

    let mut lines = vec![Line::from("")];
    lines.extend(body);
    Some(lines)
}

fn render_panel(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(config.title)
            .borders(Borders::ALL)
            .border_style(config.border_style),
    );
    frame.render_widget(paragraph, area);
}

/// Draw the loading panel regardless of any data state.
pub fn render_loading(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>) {
    if let Some(lines) = placeholder_lines::<()>(&LoadState::Loading, config) {
        render_panel(frame, area, config, lines);
    }
}

/// Draw the placeholder for `state`. Returns false when the state is
/// `Loaded` and the caller has to draw the data itself.
pub fn render_non_loaded_state<T>(
    frame: &mut Frame,
    area: Rect,
    state: &LoadState<T>,
    config: &LoadStateConfig<'_>,
) -> bool {
    match placeholder_lines(state, config) {
        Some(lines) => {
            render_panel(frame, area, config, lines);
            true
        }
        None => false,
    }
}
