//! Customer session: browse what is in stock

use std::io::{BufRead, Write};

use crate::display::format_available;
use crate::error::LedgerResult;
use crate::services::InventoryReader;

use super::console::Console;
use super::{parse_choice, INVALID_CHOICE};

pub const CUSTOMER_MENU: &str = "\nCustomer Menu\n1. View Items\n2. Exit\nChoice: ";

/// Run the customer menu loop
pub fn run_customer_session<L, R, W>(
    ledger: &L,
    console: &mut Console<R, W>,
    currency_symbol: &str,
) -> LedgerResult<()>
where
    L: InventoryReader,
    R: BufRead,
    W: Write,
{
    while let Some(answer) = console.prompt(CUSTOMER_MENU)? {
        match parse_choice(&answer) {
            Some(1) => {
                let available = ledger.list_available();
                console.print(&format_available(&available, currency_symbol))?;
            }
            Some(2) => break,
            _ => console.print(INVALID_CHOICE)?,
        }
    }
    Ok(())
}
