//! Display formatting for terminal output
//!
//! Renders ledger views as the plain numbered lists the role menus print.

pub mod expense;
pub mod inventory;

pub use expense::format_expenses;
pub use inventory::{format_available, format_inventory, format_sale, format_total_sales};
