//! Expense display formatting

use crate::models::{Expense, Money};

/// Format the expense log followed by its total
pub fn format_expenses(expenses: &[Expense], total: Money, symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::from("\nExpenses:\n");
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {}\n",
            i + 1,
            expense.description,
            expense.amount.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "Total Expenses: {}\n",
        total.format_with_symbol(symbol)
    ));
    output
}
