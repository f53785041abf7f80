//! Custom error types for ShopLedger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ShopLedger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Negative price, amount or quantity supplied to a ledger operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sale target does not name an existing item (1-based)
    #[error("Invalid item number {index}: inventory has {count} item(s)")]
    InvalidIndex { index: usize, count: usize },

    /// Sale quantity is not positive or exceeds the stock on hand
    #[error("Invalid quantity {requested}: {available} in stock")]
    InvalidQuantity { requested: i64, available: u32 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this error was raised by input validation
    ///
    /// Validation errors leave the ledger untouched and are safe to show to
    /// the user and continue.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::InvalidIndex { .. } | Self::InvalidQuantity { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ShopLedger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
