use crate::error::{AppError, AuthError, CliError};
use rpassword::read_password;
use std::io::{self, Write};

/// Session token supplied by the user for `auth login`.
///
/// The token comes from the browser sign-in flow (the `session_token`
/// cookie); it is never echoed while typed.
pub struct SessionTokenInput {
    pub token: String,
}

impl SessionTokenInput {
    /// Use the `--token` argument when given, otherwise prompt with hidden input.
    pub fn from_arg_or_prompt(arg: Option<String>, login_url: &str) -> Result<Self, AppError> {
        match arg {
            Some(token) => Ok(Self {
                token: token.trim().to_string(),
            }),
            None => Self::collect(login_url),
        }
    }

    /// Prompt for the token on the terminal.
    pub fn collect(login_url: &str) -> Result<Self, AppError> {
        println!("Sign in at {} and copy the session_token cookie.", login_url);
        print!("Session token: ");
        io::stdout().flush().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to flush stdout: {}",
                e
            )))
        })?;

        let token = read_password().map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to read session token: {}",
                e
            )))
        })?;

        Ok(Self {
            token: token.trim().to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.token.is_empty() {
            return Err(AuthError::EmptyToken.into());
        }
        if self.token.chars().any(|c| c.is_whitespace() || c == ';') {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Session token must not contain whitespace or ';'".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_is_trimmed() {
        let input = SessionTokenInput::from_arg_or_prompt(
            Some("  abc123 \n".to_string()),
            "http://localhost:8080/api/v1/oauth/google/login",
        )
        .unwrap();
        assert_eq!(input.token, "abc123");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_malformed() {
        let empty = SessionTokenInput {
            token: String::new(),
        };
        assert!(matches!(
            empty.validate(),
            Err(AppError::Auth(AuthError::EmptyToken))
        ));

        let cookie_fragment = SessionTokenInput {
            token: "abc; other=1".to_string(),
        };
        assert!(cookie_fragment.validate().is_err());
    }
}
