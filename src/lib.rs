pub use error::AppError;

/// Main architecture layers (dependency flow: CLI/TUI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Review logic and services
pub mod storage; // Configuration and session persistence
pub mod tui; // Interactive dashboard

/// Support modules (used across layers)
pub mod api; // Review service HTTP client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
