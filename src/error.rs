use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("AuthError: {0}")]
    Auth(#[from] AuthError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("'{command}' needs an interactive terminal")]
    NotATerminal { command: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Could not reach {endpoint}: {message}")]
    Network { endpoint: String, message: String },
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Authentication failed")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Transport-level failures never reached the application.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Timeout { .. })
    }

    /// Text the server gave us, falling back to the error's own description.
    pub fn server_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Unauthorized { server_message, .. } => server_message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Session token must not be empty")]
    EmptyToken,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Keyring error: {0}")]
    KeyringError(String),
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Unauthorized { .. } => ErrorSeverity::High,
                ApiError::Network { .. } => ErrorSeverity::High,
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Auth(_) => ErrorSeverity::High,
            AppError::Storage(StorageError::ConfigParseError { .. }) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Service(_) => ErrorSeverity::Medium,
        }
    }

    /// Short message suitable for a one-line notification.
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(api_error) => api_error.server_message(),
            AppError::Auth(auth_error) => auth_error.to_string(),
            AppError::Service(ServiceError::Validation { message, .. }) => message.clone(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Auth(_) | AppError::Api(ApiError::Unauthorized { .. }) => {
                Some("'invoice-desk auth login' to store a fresh session token".to_string())
            }
            AppError::Api(ApiError::Network { .. }) => Some(
                "Check the server URL with 'invoice-desk config show' and that the server is running"
                    .to_string(),
            ),
            AppError::Api(ApiError::Timeout { .. }) => Some(
                "The server is slow to respond; raise it with 'invoice-desk config set timeout-secs <n>'"
                    .to_string(),
            ),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove ~/.config/invoice-desk/config.toml".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(format!(
                "Known keys: {}",
                crate::core::services::config_service::CONFIG_KEYS.join(", ")
            )),
            _ => None,
        }
    }
}
