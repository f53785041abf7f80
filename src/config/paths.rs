//! Path management for ShopLedger
//!
//! All record files live together in one data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (handled by the binary)
//! 2. `SHOPLEDGER_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::LedgerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "SHOPLEDGER_DATA_DIR";

/// Manages all paths used by ShopLedger
#[derive(Debug, Clone)]
pub struct ShopPaths {
    /// Directory holding the record files and settings
    base_dir: PathBuf,
}

impl ShopPaths {
    /// Create a new ShopPaths instance
    ///
    /// Uses `SHOPLEDGER_DATA_DIR` when set, otherwise the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ShopPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the data directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("shopledger.json")
    }

    /// Get the path to inventory.csv
    pub fn inventory_file(&self) -> PathBuf {
        self.base_dir.join("inventory.csv")
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path to sales.csv
    pub fn sales_file(&self) -> PathBuf {
        self.base_dir.join("sales.csv")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
