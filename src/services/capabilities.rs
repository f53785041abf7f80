//! Capability traits over the ledger
//!
//! Each role session is generic over just the capabilities it is allowed to
//! use, so a customer session cannot reach the sell or add operations.

use crate::error::LedgerResult;
use crate::models::{Expense, Item, Money};

use super::ledger::Ledger;

/// Read-only views of the inventory
pub trait InventoryReader {
    fn list_inventory(&self) -> &[Item];
    fn list_available(&self) -> Vec<(usize, &Item)>;
}

/// Adding stock
pub trait InventoryWriter {
    fn add_item(&mut self, name: &str, price: Money, quantity: i64) -> LedgerResult<()>;
}

/// Read-only view of the expense log
pub trait ExpenseReader {
    fn list_expenses(&self) -> (&[Expense], Money);
}

/// Recording expenses
pub trait ExpenseWriter {
    fn add_expense(&mut self, description: &str, amount: Money) -> LedgerResult<()>;
}

/// Read-only view of the running sales total
pub trait SalesReader {
    fn total_sales(&self) -> Money;
}

/// Selling stock
pub trait SalesRecorder {
    fn sell_item(&mut self, index: usize, quantity: i64) -> LedgerResult<Money>;
}

impl InventoryReader for Ledger {
    fn list_inventory(&self) -> &[Item] {
        Ledger::list_inventory(self)
    }

    fn list_available(&self) -> Vec<(usize, &Item)> {
        Ledger::list_available(self)
    }
}

impl InventoryWriter for Ledger {
    fn add_item(&mut self, name: &str, price: Money, quantity: i64) -> LedgerResult<()> {
        Ledger::add_item(self, name, price, quantity)
    }
}

impl ExpenseReader for Ledger {
    fn list_expenses(&self) -> (&[Expense], Money) {
        Ledger::list_expenses(self)
    }
}

impl ExpenseWriter for Ledger {
    fn add_expense(&mut self, description: &str, amount: Money) -> LedgerResult<()> {
        Ledger::add_expense(self, description, amount)
    }
}

impl SalesReader for Ledger {
    fn total_sales(&self) -> Money {
        Ledger::total_sales(self)
    }
}

impl SalesRecorder for Ledger {
    fn sell_item(&mut self, index: usize, quantity: i64) -> LedgerResult<Money> {
        Ledger::sell_item(self, index, quantity)
    }
}
