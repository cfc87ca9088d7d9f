//! Modal key reference, toggled with `?`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::styles::{KEY_HINT, TEXT_DIM, border_style, decision_style, title_style};
use crate::core::review::ReviewDecision;
use crate::tui::service::SessionView;

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("q / Ctrl+C", "Quit"),
    ("x / Esc", "Dismiss notification"),
    ("?", "Toggle help"),
];

const ANONYMOUS_KEYS: &[(&str, &str)] = &[("r", "Check the session again")];

const REVIEW_KEYS: &[(&str, &str)] = &[
    ("↑ / k", "Previous invoice"),
    ("↓ / j", "Next invoice"),
    ("n / →", "Next page"),
    ("p / ←", "Previous page"),
    ("r", "Reload this page"),
    ("L", "Log out"),
];

const KEY_COLUMN: usize = 14;

/// Draw the overlay over `area`, listing the keys that work in `view`.
pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from("")];
    section(&mut lines, "Global", GLOBAL_KEYS);
    lines.push(Line::from(""));

    match view {
        SessionView::Authenticated { .. } => {
            section(&mut lines, "Review", REVIEW_KEYS);
            for (key, action, decision) in [
                ("a", "Approve selected invoice", ReviewDecision::Approve),
                ("d", "Reject selected invoice", ReviewDecision::Reject),
            ] {
                lines.push(key_line(key, action, decision_style(decision)));
            }
        }
        SessionView::Anonymous { .. } => section(&mut lines, "Signed out", ANONYMOUS_KEYS),
        SessionView::Probing => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press ? or Esc to close", TEXT_DIM)));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(border_style(true)),
    );
    frame.render_widget(paragraph, popup);
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[(&'static str, &'static str)]) {
    lines.push(Line::from(Span::styled(format!("  {}", title), title_style())));
    for &(key, action) in keys {
        lines.push(key_line(key, action, KEY_HINT));
    }
}

fn key_line(key: &'static str, action: &'static str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{:<width$}", key, width = KEY_COLUMN), key_style),
        Span::raw(action),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 70, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 28);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 6);
    }

    #[test]
    fn test_key_column_is_padded() {
        let line = key_line("a", "Approve", KEY_HINT);
        assert_eq!(line.spans[1].content.len(), KEY_COLUMN);
    }
}
