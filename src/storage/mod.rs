//! Storage layer for invoice-desk
//!
//! Handles configuration management and the stored session credential.
//! Uses the OS keyring for the session token and TOML for configuration files.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
