//! Storage layer for ShopLedger
//!
//! Persists the three record tables as spreadsheet-friendly CSV files with
//! atomic replacement on every save.

pub mod expenses;
pub mod file_io;
pub mod inventory;
pub mod sales;
pub mod table;

pub use file_io::{read_bytes, write_text_atomic};
pub use table::{Loaded, RowError};

use crate::config::paths::ShopPaths;
use crate::error::LedgerError;
use crate::models::{Expense, Item, Money};

/// Rows dropped while hydrating, per table
///
/// Dropped rows are otherwise silent; this is the only place they show up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub skipped_items: usize,
    pub skipped_expenses: usize,
    pub skipped_sales: usize,
}

impl LoadReport {
    /// Total rows dropped across all tables
    pub fn total_skipped(&self) -> usize {
        self.skipped_items + self.skipped_expenses + self.skipped_sales
    }

    pub fn is_clean(&self) -> bool {
        self.total_skipped() == 0
    }
}

/// Everything read from disk at startup
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub expenses: Vec<Expense>,
    pub sales_total: Money,
    pub report: LoadReport,
}

/// Reads and writes the record tables in one data directory
#[derive(Debug, Clone)]
pub struct RecordStore {
    paths: ShopPaths,
}

impl RecordStore {
    /// Create a new RecordStore instance
    pub fn new(paths: ShopPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn load_items(&self) -> Result<Loaded<Vec<Item>>, LedgerError> {
        inventory::read_items(&self.paths.inventory_file())
    }

    pub fn save_items(&self, items: &[Item]) -> Result<(), LedgerError> {
        inventory::write_items(&self.paths.inventory_file(), items)?;
        tracing::debug!(count = items.len(), "Saved inventory");
        Ok(())
    }

    pub fn load_expenses(&self) -> Result<Loaded<Vec<Expense>>, LedgerError> {
        expenses::read_expenses(&self.paths.expenses_file())
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), LedgerError> {
        expenses::write_expenses(&self.paths.expenses_file(), expenses)?;
        tracing::debug!(count = expenses.len(), "Saved expenses");
        Ok(())
    }

    pub fn load_sales_total(&self) -> Result<Loaded<Money>, LedgerError> {
        sales::read_sales_total(&self.paths.sales_file())
    }

    pub fn save_sales_total(&self, total: Money) -> Result<(), LedgerError> {
        sales::write_sales_total(&self.paths.sales_file(), total)?;
        tracing::debug!(total = %total, "Saved sales total");
        Ok(())
    }

    /// Load all three tables
    pub fn load_all(&self) -> Result<Snapshot, LedgerError> {
        let items = self.load_items()?;
        let expenses = self.load_expenses()?;
        let sales_total = self.load_sales_total()?;

        let report = LoadReport {
            skipped_items: items.skipped,
            skipped_expenses: expenses.skipped,
            skipped_sales: sales_total.skipped,
        };

        if !report.is_clean() {
            tracing::warn!(
                items = report.skipped_items,
                expenses = report.skipped_expenses,
                sales = report.skipped_sales,
                "Dropped unreadable rows while loading records"
            );
        }

        Ok(Snapshot {
            items: items.value,
            expenses: expenses.value,
            sales_total: sales_total.value,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = RecordStore::new(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_empty_directory_loads_empty_state() {
        let (_temp_dir, store) = create_test_store();

        let snapshot = store.load_all().unwrap();
        assert!(snapshot.items.is_empty());
        assert!(snapshot.expenses.is_empty());
        assert_eq!(snapshot.sales_total, Money::zero());
        assert!(snapshot.report.is_clean());
    }

    #[test]
    fn test_tables_save_independently() {
        let (temp_dir, store) = create_test_store();

        store
            .save_items(&[Item::new("Milk", Money::from_cents(250), 10)])
            .unwrap();

        assert!(temp_dir.path().join("inventory.csv").exists());
        assert!(!temp_dir.path().join("expenses.csv").exists());
        assert!(!temp_dir.path().join("sales.csv").exists());
    }

    #[test]
    fn test_load_all_reports_skips() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(
            temp_dir.path().join("inventory.csv"),
            "Name,Price,Quantity\n\"Milk\",2.50,10\n\"Bad\",x,1\n",
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("expenses.csv"), "Description,Amount\n\"Rent\",?\n")
            .unwrap();
        std::fs::write(temp_dir.path().join("sales.csv"), "TotalSales\n12.00\n").unwrap();

        let snapshot = store.load_all().unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert!(snapshot.expenses.is_empty());
        assert_eq!(snapshot.sales_total, Money::from_cents(1200));
        assert_eq!(
            snapshot.report,
            LoadReport {
                skipped_items: 1,
                skipped_expenses: 1,
                skipped_sales: 0,
            }
        );
        assert_eq!(snapshot.report.total_skipped(), 2);
    }
}
