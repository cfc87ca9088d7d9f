use std::sync::Arc;

use crate::api::client::InvoiceClient;
use crate::cli::main_types::{AuthCommands, ConfigCommands, InvoiceCommands};
use crate::core::auth::SessionTokenInput;
use crate::core::review::{PageCursor, ReviewDecision};
use crate::core::services::auth_service::AuthService;
use crate::core::services::config_service::ConfigService;
use crate::core::services::invoice_service::InvoiceService;
use crate::display::{ProgressSpinner, TableDisplay};
use crate::error::{AppError, ApiError, DisplayError};
use crate::storage::credentials::{Credentials, TokenSource};
use crate::utils::logging::print_verbose;
use crate::utils::text::mask_secret;

#[derive(Default)]
pub struct AuthHandler;

impl AuthHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: AuthCommands,
        client: InvoiceClient,
        credentials: &Credentials,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            AuthCommands::Login { token } => {
                print_verbose(verbose, "Attempting auth login command using AuthService");

                let input = SessionTokenInput::from_arg_or_prompt(token, &client.login_url())?;
                input.validate()?;

                let base_url = client.base_url.clone();
                let probe = client.with_session_token(input.token.clone());
                let auth_service = AuthService::new(Arc::new(probe));

                match auth_service.login(&input.token).await {
                    Ok(user) => {
                        println!("✅ Successfully logged in as {}", user.email);
                        println!("Connected to: {}", base_url);
                        Ok(())
                    }
                    Err(e) => {
                        println!("❌ Login failed: {}", e.display_friendly());
                        Err(e)
                    }
                }
            }
            AuthCommands::Logout => {
                print_verbose(verbose, "Attempting auth logout command using AuthService");

                if !client.is_authenticated() {
                    Credentials::clear_session()?;
                    println!("✅ No active session; local credentials cleared");
                    return Ok(());
                }

                let auth_service = AuthService::new(Arc::new(client));
                auth_service.logout(credentials.source()).await?;
                println!("✅ Successfully logged out");
                Ok(())
            }
            AuthCommands::Status => {
                print_verbose(verbose, "Attempting auth status command using AuthService");

                println!("Authentication Status:");
                println!("=====================");
                println!("Server: {}", client.base_url);

                let token = match credentials.session_token() {
                    Some(token) => token,
                    None => {
                        println!(
                            "Session: ❌ No session token (use 'invoice-desk auth login' to sign in)"
                        );
                        return Ok(());
                    }
                };

                let source = match credentials.source() {
                    TokenSource::Explicit => "command line / environment",
                    TokenSource::Keyring => "keyring",
                    TokenSource::None => "none",
                };
                println!("Token: {} (from {})", mask_secret(token), source);

                let auth_service = AuthService::new(Arc::new(client));
                match auth_service.status().await {
                    Ok(user) => {
                        println!("Session: ✅ Signed in as {}", user.email);
                        Ok(())
                    }
                    Err(AppError::Api(ApiError::Unauthorized { .. })) => {
                        println!("Session: ❌ Session token invalid or expired");
                        print_verbose(verbose, "Server rejected the stored session token");
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<std::path::PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                println!("Current Configuration:");
                println!("=====================");
                for (key, value, origin) in config_service.effective_settings() {
                    println!("  {:<18} {} ({})", key, value, origin);
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                print_verbose(
                    verbose,
                    &format!(
                        "Attempting config set using ConfigService - key: {}, value: {}",
                        key, value
                    ),
                );

                config_service.set_key(&key, &value)?;
                config_service.save_config(config_path)?;
                println!("✅ Set {} to: {}", key, value);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct InvoiceHandler;

impl InvoiceHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: InvoiceCommands,
        service: &InvoiceService,
        default_page_size: u32,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            InvoiceCommands::List { page, limit, json } => {
                let cursor = PageCursor::at(page, limit.unwrap_or(default_page_size));
                print_verbose(
                    verbose,
                    &format!(
                        "Listing staged invoices - page: {}, limit: {}, offset: {}",
                        cursor.page(),
                        cursor.page_size(),
                        cursor.offset()
                    ),
                );

                let mut spinner = ProgressSpinner::new("Fetching staged invoices...");
                spinner.start();
                let result = service.list_page(cursor).await;
                spinner.stop();
                let invoices = result?;

                if json {
                    let output = serde_json::to_string_pretty(&invoices)
                        .map_err(|e| DisplayError::Serialize(e.to_string()))?;
                    println!("{}", output);
                } else {
                    let display = TableDisplay::new().with_colors(atty::is(atty::Stream::Stdout));
                    println!("{}", display.render_invoice_list(&invoices)?);
                    println!("{}", display.render_page_footer(cursor, invoices.len()));
                }
                Ok(())
            }
            InvoiceCommands::Approve { id } => {
                self.decide(service, &id, ReviewDecision::Approve, verbose)
                    .await
            }
            InvoiceCommands::Reject { id } => {
                self.decide(service, &id, ReviewDecision::Reject, verbose)
                    .await
            }
        }
    }

    async fn decide(
        &self,
        service: &InvoiceService,
        id: &str,
        decision: ReviewDecision,
        verbose: bool,
    ) -> Result<(), AppError> {
        print_verbose(verbose, &format!("{} invoice {}", decision.verb(), id));

        let mut spinner = ProgressSpinner::new(format!("{} invoice {}...", decision.verb(), id));
        spinner.start();
        let result = service.decide(id, decision).await;
        spinner.stop();

        match result {
            Ok(outcome) => {
                println!("✅ Invoice {} {}", id, decision.past_tense());
                if let Some(filename) = &outcome.filename {
                    println!("   File: {}", filename);
                }
                if let Some(path) = &outcome.save_path {
                    println!("   Saved to: {}", path);
                }
                Ok(())
            }
            Err(e) => {
                println!("❌ {} failed: {}", decision.verb(), e.display_friendly());
                Err(e)
            }
        }
    }
}
