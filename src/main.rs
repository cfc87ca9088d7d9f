use clap::Parser;
use invoice_desk::cli::dispatcher::Dispatcher;
use invoice_desk::cli::main_types::Cli;
use invoice_desk::storage::config::Config;
use invoice_desk::storage::credentials::Credentials;
use invoice_desk::utils::logging::{LogDestination, init_logging};
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| Config::file_in(&PathBuf::from(dir)));

    // The dashboard owns the terminal, so its logs go to a file
    let log_file = Config::log_file_path(config_path.as_deref());
    match (&log_file, cli.command.is_interactive()) {
        (Some(path), true) => init_logging(cli.verbose, LogDestination::File(path)),
        (None, true) => {}
        (_, false) => init_logging(cli.verbose, LogDestination::Stderr),
    }

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose && !cli.command.is_interactive() {
        println!("Verbose mode is enabled");
        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
        if cli.session_token.as_ref().is_some_and(|t| !t.is_empty()) {
            println!("Using session token provided via env or command line");
        }
    }

    let credentials = match Credentials::resolve(cli.session_token.clone()) {
        Ok(creds) => creds,
        Err(err) => {
            log::warn!("could not read stored session: {}", err);
            Credentials::new()
        }
    };

    let dispatcher = Dispatcher::new(config, config_path, credentials, cli.url.clone(), cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} Error: {}", e.severity().emoji(), e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
