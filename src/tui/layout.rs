//! Layout constants for the dashboard.

/// Main layout constants.
pub mod main {
    /// Header panel height in rows.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Notification line height in rows.
    pub const NOTIFICATION_HEIGHT: u16 = 1;

    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

/// Invoice table column widths.
pub mod invoice_table {
    pub const ID_WIDTH: u16 = 10;

    pub const SENDER_MIN_WIDTH: u16 = 28;

    pub const SUBJECT_MIN_WIDTH: u16 = 20;

    /// Fits `YYYY-MM-DD`.
    pub const RECEIVED_WIDTH: u16 = 12;
}

/// Event loop tick in milliseconds.
pub const TICK_RATE_MS: u64 = 250;
