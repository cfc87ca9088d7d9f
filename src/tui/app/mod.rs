//! Dashboard state and main loop.
//!
//! - `mod.rs`: App struct, initialization and rendering
//! - `action_handler.rs`: AppAction processing
//! - `data_handler.rs`: background requests on tokio tasks
//! - `input_handler.rs`: keyboard handling

mod action_handler;
mod data_handler;
mod input_handler;


use std::sync::Arc;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;

use super::DashboardOptions;
use crate::api::models::StagedInvoice;
use crate::core::review::PageCursor;
use crate::core::services::invoice_service::InvoiceService;
use crate::core::services::traits::InvoiceApi;
use crate::storage::credentials::TokenSource;
use crate::tui::action::AppAction;
use crate::tui::components::invoice_table::PageView;
use crate::tui::components::state_renderer::{LoadStateConfig, render_loading};
use crate::tui::components::styles::{
    SEPARATOR, TEXT_DIM, border_style, session_indicator_style, title_style,
};
use crate::tui::components::{
    Component, InvoiceTable, NotificationCenter, SessionPanel, StatusBar, help_overlay,
};
use crate::tui::event::{Event, EventHandler};
use crate::tui::layout::TICK_RATE_MS;
use crate::tui::layout::main::{HEADER_HEIGHT, NOTIFICATION_HEIGHT, STATUS_BAR_HEIGHT};
use crate::tui::service::{LoadState, SessionView};

pub struct App {
    pub should_quit: bool,
    /// Raw API handle, needed to build an `AuthService` for logout
    pub(crate) api: Arc<dyn InvoiceApi>,
    pub(crate) service: InvoiceService,
    pub(crate) server: String,
    pub(crate) login_url: String,
    pub(crate) token_source: TokenSource,
    pub(crate) session: SessionView,
    /// Page of the last successful fetch
    pub(crate) cursor: PageCursor,
    pub(crate) page: LoadState<Vec<StagedInvoice>>,
    /// A page request is in flight
    pub(crate) fetching: bool,
    /// The last successful fetch came back empty
    pub(crate) end_of_list: bool,
    pub(crate) table: InvoiceTable,
    pub(crate) notifications: NotificationCenter,
    pub(crate) status_bar: StatusBar,
    pub(crate) show_help: bool,
    /// Id of the newest page request; older responses are dropped
    pub(crate) current_request_id: u64,
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
}

impl App {
    pub fn new(options: DashboardOptions) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            service: InvoiceService::new(Arc::clone(&options.api)),
            api: options.api,
            server: options.server,
            login_url: options.login_url,
            token_source: options.token_source,
            session: SessionView::Probing,
            cursor: PageCursor::new(options.page_size),
            page: LoadState::Idle,
            fetching: false,
            end_of_list: false,
            table: InvoiceTable::new(),
            notifications: NotificationCenter::new(options.notification_ttl),
            status_bar: StatusBar::new(),
            show_help: false,
            current_request_id: 0,
            action_tx,
            action_rx,
        }
    }

    /// Run the main loop until the user quits.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> std::io::Result<()> {
        let event_handler = EventHandler::new(TICK_RATE_MS);
        let _ = self.action_tx.send(AppAction::ProbeSession);

        while !self.should_quit {
            self.process_actions();

            terminal.draw(|frame| self.draw(frame))?;

            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key.code, key.modifiers),
                Event::Resize => {}
                Event::Tick => {}
            }
            self.notifications.expire(Instant::now());
        }

        Ok(())
    }

    /// Process pending actions from the action queue.
    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    /// Wait for the next action (typically a finished request) and handle it.
    #[cfg(test)]
    pub(crate) async fn handle_next_action(&mut self) -> Option<AppAction> {
        let action = self.action_rx.recv().await?;
        self.handle_action(action.clone());
        Some(action)
    }

    pub(crate) fn set_session(&mut self, session: SessionView) {
        self.status_bar.set_view(&session);
        self.session = session;
    }

    /// Invoices on the current page, empty when nothing is loaded.
    pub(crate) fn invoices(&self) -> &[StagedInvoice] {
        self.page.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn selected_invoice(&self) -> Option<&StagedInvoice> {
        self.table.selected().and_then(|i| self.invoices().get(i))
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(NOTIFICATION_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);

        match &self.session {
            SessionView::Probing => {
                let config = LoadStateConfig::new(" Session ", true)
                    .with_loading_message("Checking session...");
                render_loading(frame, chunks[1], &config);
            }
            SessionView::Anonymous { reason } => {
                SessionPanel::render(frame, chunks[1], reason, &self.login_url);
            }
            SessionView::Authenticated { .. } => {
                let view = PageView {
                    page: &self.page,
                    cursor: self.cursor,
                    fetching: self.fetching,
                    end_of_list: self.end_of_list,
                };
                self.table.render(frame, chunks[1], view);
            }
        }

        self.notifications.render(frame, chunks[2]);
        self.status_bar.draw(frame, chunks[3], false);

        if self.show_help {
            help_overlay::render(frame, size, &self.session);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let spans = vec![
            Span::styled(
                format!(" {} ", self.session.indicator()),
                session_indicator_style(&self.session),
            ),
            Span::raw(self.session.label()),
            Span::styled(SEPARATOR, TEXT_DIM),
            Span::styled(self.server.as_str(), TEXT_DIM),
        ];

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" invoice-desk ")
                .title_style(title_style())
                .borders(Borders::ALL)
                .border_style(border_style(false)),
        );
        frame.render_widget(header, area);
    }
}
