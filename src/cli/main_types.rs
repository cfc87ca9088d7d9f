use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "invoice-desk")]
#[command(about = "Review staged invoices: approve or reject them from the terminal")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Review service base URL (overrides config and INVOICE_DESK_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Session token to use instead of the one stored in the keyring
    #[arg(long, global = true, env = "INVOICE_DESK_SESSION", hide_env_values = true)]
    pub session_token: Option<String>,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session management
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List, approve and reject staged invoices
    Invoices {
        #[command(subcommand)]
        command: InvoiceCommands,
    },
    /// Interactive review dashboard
    Dashboard,
}

impl Commands {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Dashboard)
    }
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Store a session token after checking it with the server
    Login {
        /// Token to store; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// End the session and clear the stored token
    Logout,
    /// Show who the current session belongs to
    Status,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Set a configuration value (url, page-size, notification-secs, timeout-secs)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum InvoiceCommands {
    /// List staged invoices awaiting review
    List {
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: u32,
        /// Invoices per page (defaults to the configured page size)
        #[arg(long)]
        limit: Option<u32>,
        /// Print the raw JSON array
        #[arg(long)]
        json: bool,
    },
    /// Approve a staged invoice
    Approve {
        /// Invoice ID
        id: String,
    },
    /// Reject a staged invoice
    Reject {
        /// Invoice ID
        id: String,
    },
}
