//! Business logic layer for ShopLedger
//!
//! The ledger enforces the stock, expense and sales rules and persists every
//! change; the capability traits scope which of its operations a role sees.

pub mod capabilities;
pub mod ledger;

pub use capabilities::{
    ExpenseReader, ExpenseWriter, InventoryReader, InventoryWriter, SalesReader, SalesRecorder,
};
pub use ledger::Ledger;
