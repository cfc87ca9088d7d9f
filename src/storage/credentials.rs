//! Session credential management
//!
//! The review service authenticates with a `session_token` cookie issued by
//! its browser sign-in flow. The token is taken from `INVOICE_DESK_SESSION`
//! (or `--session-token`) when set, and otherwise from the OS keyring.

use super::Result;

#[cfg(not(test))]
use crate::error::StorageError;
#[cfg(not(test))]
use keyring::Entry;

const KEYRING_SERVICE: &str = "invoice-desk";
const KEYRING_USER: &str = "session";

/// Where the active session token came from.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenSource {
    Explicit,
    Keyring,
    None,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    session_token: Option<String>,
    source: TokenSource,
}

impl Credentials {
    pub fn new() -> Self {
        Self {
            session_token: None,
            source: TokenSource::None,
        }
    }

    /// Use a token given on the command line or via the environment.
    pub fn explicit(token: String) -> Self {
        Self {
            session_token: Some(token),
            source: TokenSource::Explicit,
        }
    }

    /// Explicit token first, then the keyring.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        match explicit.filter(|t| !t.is_empty()) {
            Some(token) => Ok(Self::explicit(token)),
            None => Self::load(),
        }
    }

    /// Read the stored token from the keyring.
    pub fn load() -> Result<Self> {
        Ok(match load_stored_session()? {
            Some(token) => Self {
                session_token: Some(token),
                source: TokenSource::Keyring,
            },
            None => Self::new(),
        })
    }

    pub fn save_session(token: &str) -> Result<()> {
        store_session(token)
    }

    pub fn clear_session() -> Result<()> {
        delete_stored_session()
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    pub fn source(&self) -> &TokenSource {
        &self.source
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(test))]
fn keyring_entry() -> Result<Entry> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER).map_err(|e| StorageError::KeyringError(e.to_string()))
}

#[cfg(not(test))]
fn load_stored_session() -> Result<Option<String>> {
    match keyring_entry()?.get_password() {
        Ok(v) => Ok(Some(v)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(StorageError::KeyringError(e.to_string())),
    }
}

#[cfg(not(test))]
fn store_session(token: &str) -> Result<()> {
    keyring_entry()?
        .set_password(token)
        .map_err(|e| StorageError::KeyringError(e.to_string()))
}

#[cfg(not(test))]
fn delete_stored_session() -> Result<()> {
    match keyring_entry()?.delete_credential() {
        Ok(_) => Ok(()),
        // Nothing stored, which is fine for logout
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(StorageError::KeyringError(e.to_string())),
    }
}

// In-memory stand-in for the keyring, one store per test thread.
#[cfg(test)]
thread_local! {
    static MOCK_KEYRING: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(test)]
fn mock_key() -> String {
    format!("{}-{}", KEYRING_SERVICE, KEYRING_USER)
}

#[cfg(test)]
fn load_stored_session() -> Result<Option<String>> {
    Ok(MOCK_KEYRING.with(|store| store.borrow().get(&mock_key()).cloned()))
}

#[cfg(test)]
fn store_session(token: &str) -> Result<()> {
    MOCK_KEYRING.with(|store| {
        store.borrow_mut().insert(mock_key(), token.to_string());
    });
    Ok(())
}

#[cfg(test)]
fn delete_stored_session() -> Result<()> {
    MOCK_KEYRING.with(|store| {
        store.borrow_mut().remove(&mock_key());
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_token() {
        Credentials::save_session("stored").expect("mock save");
        let creds = Credentials::resolve(Some("explicit".to_string())).expect("resolve");
        assert_eq!(creds.session_token(), Some("explicit"));
        assert_eq!(creds.source(), &TokenSource::Explicit);
        Credentials::clear_session().expect("mock clear");
    }

    #[test]
    fn test_resolve_falls_back_to_keyring() {
        Credentials::save_session("stored").expect("mock save");
        let creds = Credentials::resolve(Some(String::new())).expect("resolve");
        assert_eq!(creds.session_token(), Some("stored"));
        assert_eq!(creds.source(), &TokenSource::Keyring);
        Credentials::clear_session().expect("mock clear");
    }

    #[test]
    fn test_clear_session() {
        Credentials::save_session("stored").expect("mock save");
        Credentials::clear_session().expect("mock clear");
        let creds = Credentials::load().expect("load");
        assert!(creds.session_token().is_none());
        assert_eq!(creds.source(), &TokenSource::None);

        // Clearing twice is not an error
        assert!(Credentials::clear_session().is_ok());
    }
}
