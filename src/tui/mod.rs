//! Interactive review dashboard.
//!
//! A single UI loop owns all state. Network calls run as tokio tasks and
//! report back through the [`action::AppAction`] channel, so state only
//! changes between frames.

mod action;
mod app;
mod components;
mod event;
mod layout;
mod service;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;

use crate::core::services::traits::InvoiceApi;
use crate::storage::credentials::TokenSource;

pub use app::App;

/// Everything the dashboard needs from the outside world.
pub struct DashboardOptions {
    pub api: Arc<dyn InvoiceApi>,
    /// Shown in the header.
    pub server: String,
    /// Browser sign-in page, shown in the anonymous view.
    pub login_url: String,
    pub page_size: u32,
    pub notification_ttl: Duration,
    /// Where the session token came from; logout only clears the keyring for stored tokens.
    pub token_source: TokenSource,
}

/// Take over the terminal and run the dashboard until the user quits.
pub async fn run(options: DashboardOptions) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new(options);
    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
