use std::sync::Arc;

use crate::AppError;
use crate::api::models::CurrentUser;
use crate::core::services::traits::InvoiceApi;
use crate::error::AuthError;
use crate::storage::credentials::{Credentials, TokenSource};

/// Session lifecycle: probing, storing and ending a session.
pub struct AuthService {
    api: Arc<dyn InvoiceApi>,
}

impl AuthService {
    pub fn new(api: Arc<dyn InvoiceApi>) -> Self {
        Self { api }
    }

    /// Ask the server who the current session belongs to.
    pub async fn status(&self) -> Result<CurrentUser, AppError> {
        self.api.session_status().await
    }

    /// Verify `token` against the server, then keep it in the keyring.
    ///
    /// The API handed to this service must already carry `token`.
    pub async fn login(&self, token: &str) -> Result<CurrentUser, AppError> {
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken.into());
        }

        let user = self.api.session_status().await?;
        Credentials::save_session(token)?;
        log::info!("stored session for {}", user.email);
        Ok(user)
    }

    /// End the session server-side, then forget the stored token.
    ///
    /// The keyring is left alone when the active token was passed explicitly
    /// (`--session-token` or the environment): that session is not the stored one.
    /// A transport failure on the logout call does not stop the local token
    /// from being cleared.
    pub async fn logout(&self, source: &TokenSource) -> Result<(), AppError> {
        if let Err(e) = self.api.logout().await {
            match &e {
                AppError::Api(api) if api.is_transport() => {
                    log::warn!("logout request failed, clearing local session anyway: {}", e);
                }
                _ => return Err(e),
            }
        }

        if *source == TokenSource::Explicit {
            log::debug!("explicit session token; keeping the stored session");
            return Ok(());
        }

        Credentials::clear_session()?;
        Ok(())
    }
}
