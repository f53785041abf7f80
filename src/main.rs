use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use shopledger::cli::{run_session, select_role, Console, Role};
use shopledger::config::{ShopPaths, Settings};
use shopledger::services::Ledger;
use shopledger::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "shopledger",
    version,
    about = "Inventory, expense and sales ledger for a small shop",
    long_about = "ShopLedger keeps a shop's stock, expenses and sales in three CSV \
                  files. Owners add stock and expenses, workers record sales, and \
                  customers see what is available."
)]
struct Cli {
    /// Directory holding inventory.csv, expenses.csv and sales.csv
    /// (defaults to $SHOPLEDGER_DATA_DIR, then the current directory)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage stock and expenses
    Owner,

    /// Sell items
    Worker,

    /// Browse items in stock
    Customer,

    /// Show data paths and settings
    Config,
}

fn main() -> Result<ExitCode> {
    shopledger::logging::init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ShopPaths::with_base_dir(dir),
        None => ShopPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    let requested = match cli.command {
        Some(Commands::Config) => {
            print_config(&paths, &settings);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Owner) => Some(Role::Owner),
        Some(Commands::Worker) => Some(Role::Worker),
        Some(Commands::Customer) => Some(Role::Customer),
        None => None,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let role = match requested {
        Some(role) => role,
        None => match select_role(&mut console)? {
            Some(role) => role,
            None => {
                console.print("Invalid role.\n")?;
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let store = RecordStore::new(paths)?;
    let mut ledger = Ledger::open(store)?;

    run_session(role, &mut ledger, &mut console, &settings.currency_symbol)?;

    Ok(ExitCode::SUCCESS)
}

fn print_config(paths: &ShopPaths, settings: &Settings) {
    println!("ShopLedger Configuration");
    println!("========================");
    println!();
    println!("Paths:");
    println!("  Data directory: {}", paths.base_dir().display());
    println!("  Settings file:  {}", paths.settings_file().display());
    println!("  Inventory:      {}", paths.inventory_file().display());
    println!("  Expenses:       {}", paths.expenses_file().display());
    println!("  Sales:          {}", paths.sales_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Schema version:  {}", settings.schema_version);
}
