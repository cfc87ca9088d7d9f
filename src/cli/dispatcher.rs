use std::path::PathBuf;
use std::sync::Arc;

use crate::api::client::InvoiceClient;
use crate::cli::command_handlers::{AuthHandler, ConfigHandler, InvoiceHandler};
use crate::cli::main_types::{AuthCommands, Commands, ConfigCommands, InvoiceCommands};
use crate::core::services::config_service::ConfigService;
use crate::core::services::invoice_service::InvoiceService;
use crate::error::{AppError, AuthError, CliError};
use crate::storage::config::Config;
use crate::storage::credentials::Credentials;
use crate::tui::{self, DashboardOptions};
use crate::utils::error_helpers::convert_io_to_display_error;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_url;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    credentials: Credentials,
    url_override: Option<String>,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        credentials: Credentials,
        url_override: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            credentials,
            url_override,
            verbose,
        }
    }

    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    /// `--url` first, then config and environment, then the default.
    fn base_url(&self) -> String {
        self.url_override
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.config.resolved_url())
    }

    /// Client for the resolved server, carrying the session token when there is one.
    fn build_client(&self) -> Result<InvoiceClient, AppError> {
        let base_url = self.base_url();
        validate_url(&base_url)?;

        let client = InvoiceClient::with_timeout(base_url, self.config.timeout_secs())?;
        Ok(match self.credentials.session_token() {
            Some(token) => client.with_session_token(token),
            None => client,
        })
    }

    fn invoice_service(&self) -> Result<InvoiceService, AppError> {
        if self.credentials.session_token().is_none() {
            return Err(AuthError::NotLoggedIn.into());
        }
        Ok(InvoiceService::new(Arc::new(self.build_client()?)))
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Auth { command } => self.handle_auth_command(command).await,
            Commands::Config { command } => self.handle_config_command(command),
            Commands::Invoices { command } => self.handle_invoice_command(command).await,
            Commands::Dashboard => self.handle_dashboard_command().await,
        }
    }

    async fn handle_auth_command(&self, command: AuthCommands) -> Result<(), AppError> {
        // Login checks the token it is given, not the stored one
        let client = match command {
            AuthCommands::Login { .. } => {
                let base_url = self.base_url();
                validate_url(&base_url)?;
                InvoiceClient::with_timeout(base_url, self.config.timeout_secs())?
            }
            _ => self.build_client()?,
        };

        AuthHandler::new()
            .handle(command, client, &self.credentials, self.verbose)
            .await
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        let mut config_service = ConfigService::new(self.config.clone());
        ConfigHandler::new().handle(
            command,
            &mut config_service,
            self.config_path.clone(),
            self.verbose,
        )
    }

    async fn handle_invoice_command(&self, command: InvoiceCommands) -> Result<(), AppError> {
        let service = self.invoice_service()?;
        self.log_verbose(&format!("Using server: {}", self.base_url()));

        InvoiceHandler::new()
            .handle(command, &service, self.config.page_size(), self.verbose)
            .await
    }

    async fn handle_dashboard_command(&self) -> Result<(), AppError> {
        if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
            return Err(CliError::NotATerminal {
                command: "dashboard".to_string(),
            }
            .into());
        }

        // Without a token the dashboard opens on the sign-in view
        let client = self.build_client()?;
        let options = DashboardOptions {
            server: client.base_url.clone(),
            login_url: client.login_url(),
            api: Arc::new(client),
            page_size: self.config.page_size(),
            notification_ttl: self.config.notification_ttl(),
            token_source: self.credentials.source().clone(),
        };

        log::info!("starting dashboard against {}", options.server);
        tui::run(options)
            .await
            .map_err(|e| convert_io_to_display_error(e, "dashboard").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn dispatcher(config: Config, url: Option<&str>, token: Option<&str>) -> Dispatcher {
        let credentials = match token {
            Some(t) => Credentials::explicit(t.to_string()),
            None => Credentials::new(),
        };
        Dispatcher::new(
            config,
            None,
            credentials,
            url.map(str::to_string),
            false,
        )
    }

    #[test]
    fn test_url_override_wins_over_config() {
        let config = Config {
            url: Some("http://from-config.test".to_string()),
            ..Default::default()
        };
        let d = dispatcher(config, Some("http://from-flag.test"), None);
        assert_eq!(d.base_url(), "http://from-flag.test");
    }

    #[test]
    fn test_config_url_used_without_override() {
        let config = Config {
            url: Some("http://from-config.test".to_string()),
            ..Default::default()
        };
        let d = dispatcher(config, None, None);
        assert_eq!(d.base_url(), "http://from-config.test");
    }

    #[test]
    fn test_build_client_rejects_bad_url() {
        let d = dispatcher(Config::default(), Some("not a url"), Some("tok"));
        assert!(d.build_client().is_err());
    }

    #[test]
    fn test_build_client_carries_token() {
        let d = dispatcher(Config::default(), Some("http://review.test/"), Some("tok"));
        let client = d.build_client().expect("client");
        assert!(client.is_authenticated());
        assert_eq!(client.base_url, "http://review.test");
    }

    #[test]
    fn test_invoice_commands_need_a_session() {
        let d = dispatcher(Config::default(), Some("http://review.test"), None);
        assert!(matches!(
            d.invoice_service(),
            Err(AppError::Auth(AuthError::NotLoggedIn))
        ));
    }

    #[tokio::test]
    async fn test_config_set_unknown_key_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let d = Dispatcher::new(
            Config::default(),
            Some(Config::file_in(dir.path())),
            Credentials::new(),
            None,
            false,
        );

        let result = d
            .dispatch(Commands::Config {
                command: ConfigCommands::Set {
                    key: "colour".to_string(),
                    value: "blue".to_string(),
                },
            })
            .await;
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));
    }
}
