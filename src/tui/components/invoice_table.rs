//! Staged-invoice table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use super::state_renderer::{LoadStateConfig, render_non_loaded_state};
use super::styles::{HIGHLIGHT_SYMBOL, TEXT_DIM, border_style, header_style, row_highlight_style};
use crate::api::models::StagedInvoice;
use crate::core::review::PageCursor;
use crate::display::EMPTY_LIST_MESSAGE;
use crate::tui::layout::invoice_table::{
    ID_WIDTH, RECEIVED_WIDTH, SENDER_MIN_WIDTH, SUBJECT_MIN_WIDTH,
};
use crate::tui::service::LoadState;

/// Cell text for each row: ID, sender, subject, received date.
///
/// An empty page yields exactly one informational row.
pub fn row_texts(invoices: &[StagedInvoice]) -> Vec<[String; 4]> {
    if invoices.is_empty() {
        return vec![[
            String::new(),
            EMPTY_LIST_MESSAGE.to_string(),
            String::new(),
            String::new(),
        ]];
    }

    invoices
        .iter()
        .map(|invoice| {
            [
                invoice.id.clone(),
                invoice.sender.clone(),
                invoice.subject.clone(),
                invoice.received_date(),
            ]
        })
        .collect()
}

/// What the table needs to know about the current page.
pub struct PageView<'a> {
    pub page: &'a LoadState<Vec<StagedInvoice>>,
    pub cursor: PageCursor,
    pub fetching: bool,
    pub end_of_list: bool,
}

/// Table of the current page with a row cursor.
#[derive(Debug, Default)]
pub struct InvoiceTable {
    state: TableState,
}

impl InvoiceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Select the first row of a freshly loaded page.
    pub fn reset(&mut self, len: usize) {
        self.state.select(if len == 0 { None } else { Some(0) });
    }

    /// Keep the selection inside `len` rows after a removal.
    pub fn clamp(&mut self, len: usize) {
        match (self.state.selected(), len) {
            (_, 0) => self.state.select(None),
            (Some(i), _) if i >= len => self.state.select(Some(len - 1)),
            (None, _) => self.state.select(Some(0)),
            _ => {}
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: PageView<'_>) {
        let mut title = format!(" Staged invoices │ Page {} ", view.cursor.page());
        if let Some(invoices) = view.page.data() {
            title = format!(
                " Staged invoices │ Page {} ({}) ",
                view.cursor.page(),
                invoices.len()
            );
        }
        if view.end_of_list {
            title.push_str("│ end of list ");
        }
        if view.fetching {
            title.push_str("│ loading... ");
        }

        let config = LoadStateConfig::new(&title, true)
            .with_idle_message("Waiting for the session check")
            .with_loading_message("Loading staged invoices...");
        if render_non_loaded_state(frame, area, view.page, &config) {
            return;
        }

        let invoices = view.page.data().map(Vec::as_slice).unwrap_or_default();
        let rows: Vec<Row> = row_texts(invoices)
            .into_iter()
            .map(|cells| {
                let row = Row::new(cells.into_iter().map(Cell::from));
                if invoices.is_empty() {
                    row.style(TEXT_DIM)
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(["ID", "Sender", "Subject", "Received"]).style(header_style());
        let widths = [
            Constraint::Length(ID_WIDTH),
            Constraint::Min(SENDER_MIN_WIDTH),
            Constraint::Min(SUBJECT_MIN_WIDTH),
            Constraint::Length(RECEIVED_WIDTH),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(title.as_str())
                    .borders(Borders::ALL)
                    .border_style(border_style(true)),
            )
            .row_highlight_style(row_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        if invoices.is_empty() {
            frame.render_widget(table, area);
        } else {
            frame.render_stateful_widget(table, area, &mut self.state);
        }
    }
}
