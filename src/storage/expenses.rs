//! Expense table (expenses.csv)
//!
//! ```text
//! Description,Amount
//! "Rent",500.00
//! ```

use std::path::Path;

use csv::StringRecord;

use crate::error::LedgerError;
use crate::models::Expense;

use super::file_io::write_text_atomic;
use super::table::{money_field, quote, read_rows, text_field, Loaded, RowError};

/// Header line of expenses.csv
pub const EXPENSES_HEADER: &str = "Description,Amount";

fn parse_expense(record: &StringRecord) -> Result<Expense, RowError> {
    Ok(Expense::new(
        text_field(record, 0, "description")?,
        money_field(record, 1, "amount")?,
    ))
}

/// Render the whole expense table
pub fn render_expenses(expenses: &[Expense]) -> String {
    let mut out = String::from(EXPENSES_HEADER);
    out.push('\n');

    for expense in expenses {
        out.push_str(&format!(
            "{},{}\n",
            quote(&expense.description),
            expense.amount.to_plain_string()
        ));
    }
    out
}

/// Load expenses, skipping rows with an unusable amount
pub fn read_expenses(path: &Path) -> Result<Loaded<Vec<Expense>>, LedgerError> {
    read_rows(path, parse_expense)
}

/// Replace the expense file with `expenses`
pub fn write_expenses(path: &Path, expenses: &[Expense]) -> Result<(), LedgerError> {
    write_text_atomic(path, &render_expenses(expenses))
}
