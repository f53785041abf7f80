//! ShopLedger - inventory, expense and sales books for a small shop
//!
//! An owner stocks items and records expenses, a worker sells items, and a
//! customer browses what is in stock. All three work against one ledger
//! whose state lives in three CSV files that open cleanly in a spreadsheet.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Items, expenses and the money type
//! - `storage`: CSV record store with atomic writes
//! - `services`: The ledger and its capability traits
//! - `display`: Text rendering of ledger views
//! - `cli`: Interactive role sessions
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,no_run
//! use shopledger::config::ShopPaths;
//! use shopledger::models::Money;
//! use shopledger::services::Ledger;
//! use shopledger::storage::RecordStore;
//!
//! # fn main() -> Result<(), shopledger::LedgerError> {
//! let store = RecordStore::new(ShopPaths::new()?)?;
//! let mut ledger = Ledger::open(store)?;
//! ledger.add_item("Milk", Money::from_cents(250), 10)?;
//! let sale = ledger.sell_item(1, 3)?;
//! assert_eq!(sale.to_plain_string(), "7.50");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
