//! Owner session: stock, expenses and sales figures

use std::io::{BufRead, Write};

use crate::display::{format_expenses, format_inventory, format_total_sales};
use crate::error::LedgerResult;
use crate::models::Money;
use crate::services::{ExpenseReader, ExpenseWriter, InventoryReader, InventoryWriter, SalesReader};

use super::console::Console;
use super::{parse_choice, recoverable, Step, INVALID_CHOICE};

pub const OWNER_MENU: &str = "\nOwner Menu\n1. Add Item\n2. View Inventory\n3. Add Expense\n4. View Expenses\n5. View Total Sales\n6. Exit\nChoice: ";

const INVALID_ITEM: &str = "Invalid price or quantity.\n";
const INVALID_AMOUNT: &str = "Invalid amount.\n";

/// Run the owner menu loop
pub fn run_owner_session<L, R, W>(
    ledger: &mut L,
    console: &mut Console<R, W>,
    currency_symbol: &str,
) -> LedgerResult<()>
where
    L: InventoryReader + InventoryWriter + ExpenseReader + ExpenseWriter + SalesReader,
    R: BufRead,
    W: Write,
{
    while let Some(answer) = console.prompt(OWNER_MENU)? {
        let step = match parse_choice(&answer) {
            Some(1) => add_item(ledger, console)?,
            Some(2) => {
                console.print(&format_inventory(ledger.list_inventory(), currency_symbol))?;
                Step::Continue
            }
            Some(3) => add_expense(ledger, console)?,
            Some(4) => {
                let (expenses, total) = ledger.list_expenses();
                console.print(&format_expenses(expenses, total, currency_symbol))?;
                Step::Continue
            }
            Some(5) => {
                console.print(&format_total_sales(ledger.total_sales(), currency_symbol))?;
                Step::Continue
            }
            Some(6) => Step::Quit,
            _ => {
                console.print(INVALID_CHOICE)?;
                Step::Continue
            }
        };

        if step == Step::Quit {
            break;
        }
    }
    Ok(())
}

fn add_item<L, R, W>(ledger: &mut L, console: &mut Console<R, W>) -> LedgerResult<Step>
where
    L: InventoryWriter,
    R: BufRead,
    W: Write,
{
    let Some(name) = console.prompt("Enter item name: ")? else {
        return Ok(Step::Quit);
    };
    let Some(price) = console.prompt("Enter price: ")? else {
        return Ok(Step::Quit);
    };
    let Ok(price) = Money::parse(&price) else {
        console.print(INVALID_ITEM)?;
        return Ok(Step::Continue);
    };
    let Some(quantity) = console.prompt("Enter quantity: ")? else {
        return Ok(Step::Quit);
    };
    let Ok(quantity) = quantity.trim().parse::<i64>() else {
        console.print(INVALID_ITEM)?;
        return Ok(Step::Continue);
    };

    match recoverable(ledger.add_item(&name, price, quantity))? {
        Ok(()) => console.print("Item added.\n")?,
        Err(_) => console.print(INVALID_ITEM)?,
    }
    Ok(Step::Continue)
}

fn add_expense<L, R, W>(ledger: &mut L, console: &mut Console<R, W>) -> LedgerResult<Step>
where
    L: ExpenseWriter,
    R: BufRead,
    W: Write,
{
    let Some(description) = console.prompt("Enter expense description: ")? else {
        return Ok(Step::Quit);
    };
    let Some(amount) = console.prompt("Enter amount: ")? else {
        return Ok(Step::Quit);
    };
    let Ok(amount) = Money::parse(&amount) else {
        console.print(INVALID_AMOUNT)?;
        return Ok(Step::Continue);
    };

    match recoverable(ledger.add_expense(&description, amount))? {
        Ok(()) => console.print("Expense added.\n")?,
        Err(_) => console.print(INVALID_AMOUNT)?,
    }
    Ok(Step::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ShopPaths;
    use crate::services::Ledger;
    use crate::storage::RecordStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(temp_dir: &TempDir, input: &str) -> (Ledger, String) {
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ledger = Ledger::open(RecordStore::new(paths).unwrap()).unwrap();
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());

        run_owner_session(&mut ledger, &mut console, "$").unwrap();
        (ledger, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_add_and_view_item() {
        let temp_dir = TempDir::new().unwrap();

        let (ledger, output) = run(&temp_dir, "1\nFresh Milk\n2.50\n10\n2\n6\n");

        assert!(output.contains("Item added."));
        assert!(output.contains("1. Fresh Milk: $2.50, Qty: 10"));
        assert_eq!(ledger.list_inventory().len(), 1);
    }

    #[test]
    fn test_rejects_negative_and_unparsable_item_fields() {
        let temp_dir = TempDir::new().unwrap();

        let (ledger, output) = run(&temp_dir, "1\nMilk\n-2.50\n10\n1\nMilk\nfree\n1\nMilk\n2.50\nten\n6\n");

        assert_eq!(output.matches("Invalid price or quantity.").count(), 3);
        assert!(ledger.list_inventory().is_empty());
    }

    #[test]
    fn test_expenses_and_total() {
        let temp_dir = TempDir::new().unwrap();

        let (_ledger, output) = run(&temp_dir, "3\nRent\n500\n3\nRefund\n-5\n4\n5\n6\n");

        assert!(output.contains("Expense added."));
        assert!(output.contains("Invalid amount."));
        assert!(output.contains("1. Rent: $500.00"));
        assert!(output.contains("Total Expenses: $500.00"));
        assert!(output.contains("Total Sales: $0.00"));
    }

    #[test]
    fn test_invalid_choice_and_exit() {
        let temp_dir = TempDir::new().unwrap();

        let (_ledger, output) = run(&temp_dir, "7\nhello\n6\n2\n");

        assert_eq!(output.matches("Invalid choice.").count(), 2);
        // Nothing after the exit choice is processed
        assert!(!output.contains("No items in inventory."));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let temp_dir = TempDir::new().unwrap();

        let (ledger, output) = run(&temp_dir, "1\nMilk\n");

        assert!(output.ends_with("Enter price: "));
        assert!(ledger.list_inventory().is_empty());
    }
}
