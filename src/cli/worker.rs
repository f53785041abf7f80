//! Worker session: sell stock

use std::io::{BufRead, Write};

use crate::display::{format_inventory, format_sale};
use crate::error::LedgerResult;
use crate::services::{InventoryReader, SalesRecorder};

use super::console::Console;
use super::{parse_choice, recoverable, Step, INVALID_CHOICE};

pub const WORKER_MENU: &str = "\nWorker Menu\n1. Sell Item\n2. View Inventory\n3. Exit\nChoice: ";

const INVALID_ITEM_NUMBER: &str = "Invalid item number.\n";
const INVALID_QUANTITY: &str = "Invalid quantity.\n";

/// Run the worker menu loop
pub fn run_worker_session<L, R, W>(
    ledger: &mut L,
    console: &mut Console<R, W>,
    currency_symbol: &str,
) -> LedgerResult<()>
where
    L: InventoryReader + SalesRecorder,
    R: BufRead,
    W: Write,
{
    while let Some(answer) = console.prompt(WORKER_MENU)? {
        let step = match parse_choice(&answer) {
            Some(1) => sell_item(ledger, console, currency_symbol)?,
            Some(2) => {
                console.print(&format_inventory(ledger.list_inventory(), currency_symbol))?;
                Step::Continue
            }
            Some(3) => Step::Quit,
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

fn sell_item<L, R, W>(
    ledger: &mut L,
    console: &mut Console<R, W>,
    currency_symbol: &str,
) -> LedgerResult<Step>
where
    L: InventoryReader + SalesRecorder,
    R: BufRead,
    W: Write,
{
    console.print(&format_inventory(ledger.list_inventory(), currency_symbol))?;

    let Some(index) = console.prompt("Enter item number to sell: ")? else {
        return Ok(Step::Quit);
    };
    let count = ledger.list_inventory().len();
    let Some(index) = index
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|i| (1..=count).contains(i))
    else {
        console.print(INVALID_ITEM_NUMBER)?;
        return Ok(Step::Continue);
    };

    let Some(quantity) = console.prompt("Enter quantity: ")? else {
        return Ok(Step::Quit);
    };
    let Ok(quantity) = quantity.trim().parse::<i64>() else {
        console.print(INVALID_QUANTITY)?;
        return Ok(Step::Continue);
    };

    match recoverable(ledger.sell_item(index, quantity))? {
        Ok(sale) => {
            let name = ledger.list_inventory()[index - 1].name.clone();
            console.print(&format_sale(&name, quantity, sale, currency_symbol))?;
        }
        Err(_) => console.print(INVALID_QUANTITY)?,
    }
    Ok(Step::Continue)
}
