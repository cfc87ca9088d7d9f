pub mod auth_service;
pub mod config_service;
pub mod invoice_service;
pub mod traits;
