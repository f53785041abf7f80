//! The shop ledger
//!
//! Holds the authoritative inventory, expense log and running sales total
//! for the lifetime of the process. Every successful mutation is written to
//! the record store before the call returns.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Item, Money};
use crate::storage::{LoadReport, RecordStore};

/// In-memory books backed by a [`RecordStore`]
pub struct Ledger {
    store: RecordStore,
    items: Vec<Item>,
    expenses: Vec<Expense>,
    sales_total: Money,
    report: LoadReport,
}

impl Ledger {
    /// Hydrate a ledger from everything currently on disk
    pub fn open(store: RecordStore) -> LedgerResult<Self> {
        let snapshot = store.load_all()?;

        tracing::info!(
            items = snapshot.items.len(),
            expenses = snapshot.expenses.len(),
            sales_total = %snapshot.sales_total,
            "Ledger loaded"
        );

        Ok(Self {
            store,
            items: snapshot.items,
            expenses: snapshot.expenses,
            sales_total: snapshot.sales_total,
            report: snapshot.report,
        })
    }

    /// Rows dropped while loading
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Add a new item to the inventory
    ///
    /// Items with the same name are kept as separate entries.
    pub fn add_item(&mut self, name: &str, price: Money, quantity: i64) -> LedgerResult<()> {
        if price.is_negative() {
            return Err(LedgerError::InvalidInput(format!(
                "price cannot be negative: {}",
                price
            )));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            LedgerError::InvalidInput(format!("quantity out of range: {}", quantity))
        })?;

        self.items.push(Item::new(name, price, quantity));
        tracing::info!(name, price = %price, quantity, "Item added");

        self.store.save_items(&self.items)
    }

    /// Record a new expense
    pub fn add_expense(&mut self, description: &str, amount: Money) -> LedgerResult<()> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidInput(format!(
                "amount cannot be negative: {}",
                amount
            )));
        }

        self.expenses.push(Expense::new(description, amount));
        tracing::info!(description, amount = %amount, "Expense added");

        self.store.save_expenses(&self.expenses)
    }

    /// Sell `quantity` units of the item at 1-based `index`
    ///
    /// Returns the sale amount. Both the inventory and the sales total are
    /// written even if the first write fails; the first failure is returned.
    /// A sale whose amount or new total would overflow is rejected before
    /// anything changes.
    pub fn sell_item(&mut self, index: usize, quantity: i64) -> LedgerResult<Money> {
        let count = self.items.len();
        if index == 0 || index > count {
            return Err(LedgerError::InvalidIndex { index, count });
        }

        let item = &mut self.items[index - 1];
        let sold = u32::try_from(quantity)
            .ok()
            .filter(|&q| q > 0 && q <= item.quantity)
            .ok_or(LedgerError::InvalidQuantity {
                requested: quantity,
                available: item.quantity,
            })?;

        let (sale, sales_total) = item
            .price_for(sold)
            .and_then(|sale| Some((sale, self.sales_total.checked_add(sale)?)))
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!(
                    "sale of {} x {} is too large to record",
                    sold, item.unit_price
                ))
            })?;

        item.quantity -= sold;
        self.sales_total = sales_total;

        tracing::info!(
            name = %item.name,
            quantity = sold,
            sale = %sale,
            remaining = item.quantity,
            "Item sold"
        );

        let items_saved = self.store.save_items(&self.items);
        let total_saved = self.store.save_sales_total(self.sales_total);
        items_saved?;
        total_saved?;

        Ok(sale)
    }

    /// Every item, including those out of stock
    pub fn list_inventory(&self) -> &[Item] {
        &self.items
    }

    /// Items with stock on hand, paired with their 1-based inventory position
    pub fn list_available(&self) -> Vec<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_available())
            .map(|(i, item)| (i + 1, item))
            .collect()
    }

    /// All expenses and their sum
    pub fn list_expenses(&self) -> (&[Expense], Money) {
        let total: Money = self.expenses.iter().map(|e| &e.amount).sum();
        (&self.expenses, total)
    }

    /// Running total of all completed sales
    pub fn total_sales(&self) -> Money {
        self.sales_total
    }
}
