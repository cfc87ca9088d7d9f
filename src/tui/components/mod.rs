//! UI components for the dashboard.

use ratatui::Frame;
use ratatui::layout::Rect;

pub mod help_overlay;
pub mod invoice_table;
pub mod notification;
mod session_view;
pub mod state_renderer;
mod status_bar;
pub mod styles;

pub use invoice_table::InvoiceTable;
pub use notification::NotificationCenter;
pub use session_view::SessionPanel;
pub use status_bar::StatusBar;

/// Common trait for stateful UI components.
pub trait Component {
    /// Draw the component within the given area.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);
}
