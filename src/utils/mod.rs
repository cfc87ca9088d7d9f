//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion helpers for HTTP and terminal failures
pub mod error_helpers;

/// Subscriber setup and verbose printing
pub mod logging;

/// Text formatting and truncation
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
