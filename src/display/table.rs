use crate::api::models::StagedInvoice;
use crate::core::review::PageCursor;
use crate::error::{AppError, DisplayError};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

use crate::utils::text::truncate_text;

/// Shown instead of a table when a page has no invoices.
pub const EMPTY_LIST_MESSAGE: &str = "No invoices pending review.";

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 200;
const DEFAULT_WIDTH: usize = 80;
// ID + received columns plus borders and padding
const FIXED_COLUMNS_WIDTH: usize = 36;

/// Formatter for staged-invoice tables
pub struct TableDisplay {
    max_width: usize,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> usize {
        match terminal::size() {
            Ok((cols, _rows)) => (cols as usize).clamp(MIN_WIDTH, MAX_WIDTH),
            Err(_) => DEFAULT_WIDTH,
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(MIN_WIDTH);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Sender and subject share what is left after the fixed columns.
    fn text_column_widths(&self) -> (usize, usize) {
        let available = self.max_width.saturating_sub(FIXED_COLUMNS_WIDTH).max(20);
        let sender = available * 2 / 5;
        (sender, available - sender)
    }

    fn header_cell(&self, label: &str) -> Cell {
        if self.use_colors {
            Cell::new(label).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(label)
        }
    }

    /// Render one page of staged invoices.
    pub fn render_invoice_list(&self, invoices: &[StagedInvoice]) -> Result<String, AppError> {
        if invoices.is_empty() {
            return Ok(EMPTY_LIST_MESSAGE.to_string());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let width = u16::try_from(self.max_width)
            .map_err(|e| DisplayError::TableFormat(e.to_string()))?;
        table.set_width(width);

        table.set_header(vec![
            self.header_cell("ID"),
            self.header_cell("Sender"),
            self.header_cell("Subject"),
            self.header_cell("Received"),
        ]);

        let (sender_width, subject_width) = self.text_column_widths();
        for invoice in invoices {
            let id = if self.use_colors {
                Cell::new(&invoice.id).fg(Color::Cyan)
            } else {
                Cell::new(&invoice.id)
            };
            let received = if self.use_colors {
                Cell::new(invoice.received_date()).fg(Color::DarkGrey)
            } else {
                Cell::new(invoice.received_date())
            };

            table.add_row(vec![
                id,
                Cell::new(truncate_text(&invoice.sender, sender_width)),
                Cell::new(truncate_text(&invoice.subject, subject_width)),
                received,
            ]);
        }

        Ok(table.to_string())
    }

    /// One-line page summary printed under the table.
    pub fn render_page_footer(&self, cursor: PageCursor, shown: usize) -> String {
        let mut footer = format!("Page {} | {} invoice(s)", cursor.page(), shown);
        if !cursor.is_first() {
            footer.push_str(&format!(" | --page {} for previous", cursor.page() - 1));
        }
        if shown > 0 {
            footer.push_str(&format!(" | --page {} for next", cursor.page() + 1));
        }
        footer
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, sender: &str, subject: &str) -> StagedInvoice {
        StagedInvoice {
            id: id.to_string(),
            sender: sender.to_string(),
            subject: subject.to_string(),
            received_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_empty_list_message() {
        let display = TableDisplay::new().with_colors(false);
        assert_eq!(display.render_invoice_list(&[]).unwrap(), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn test_renders_rows() {
        let display = TableDisplay::new().with_colors(false).with_max_width(120);
        let output = display
            .render_invoice_list(&[
                invoice("42", "billing@acme.test", "Invoice #1001"),
                invoice("43", "ap@globex.test", "March statement"),
            ])
            .unwrap();

        assert!(output.contains("Sender"));
        assert!(output.contains("billing@acme.test"));
        assert!(output.contains("March statement"));
        assert!(output.contains("2023-11-14"));
    }

    #[test]
    fn test_long_subject_is_truncated() {
        let display = TableDisplay::new().with_colors(false).with_max_width(60);
        let subject = "x".repeat(200);
        let output = display
            .render_invoice_list(&[invoice("1", "a@b.test", &subject)])
            .unwrap();
        assert!(!output.contains(&subject));
        assert!(output.contains("..."));
    }

    #[test]
    fn test_page_footer() {
        let display = TableDisplay::new();
        assert_eq!(
            display.render_page_footer(PageCursor::new(25), 25),
            "Page 1 | 25 invoice(s) | --page 2 for next"
        );
        assert_eq!(
            display.render_page_footer(PageCursor::at(3, 25), 0),
            "Page 3 | 0 invoice(s) | --page 2 for previous"
        );
    }
}
