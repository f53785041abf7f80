//! Inventory display formatting
//!
//! Formats stock lists and sale receipts for terminal output.

use crate::models::{Item, Money};

/// Format the full inventory, numbered from 1
pub fn format_inventory(items: &[Item], symbol: &str) -> String {
    if items.is_empty() {
        return "No items in inventory.\n".to_string();
    }

    let mut output = String::from("\nInventory:\n");
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {}, Qty: {}\n",
            i + 1,
            item.name,
            item.unit_price.format_with_symbol(symbol),
            item.quantity
        ));
    }
    output
}

/// Format the items a customer can buy, keeping their inventory numbers
pub fn format_available(available: &[(usize, &Item)], symbol: &str) -> String {
    if available.is_empty() {
        return "No items available.\n".to_string();
    }

    let mut output = String::from("\nAvailable Items:\n");
    for (position, item) in available {
        output.push_str(&format!(
            "{}. {}: {}\n",
            position,
            item.name,
            item.unit_price.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format a completed sale
pub fn format_sale(name: &str, quantity: i64, sale: Money, symbol: &str) -> String {
    format!(
        "Sold {} of {} for {}\n",
        quantity,
        name,
        sale.format_with_symbol(symbol)
    )
}

/// Format the running sales total
pub fn format_total_sales(total: Money, symbol: &str) -> String {
    format!("Total Sales: {}\n", total.format_with_symbol(symbol))
}
