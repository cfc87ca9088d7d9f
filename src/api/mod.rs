//! API layer - HTTP client for the invoice review service and its wire models.

pub mod client;
pub mod models;
