//! Interactive role sessions
//!
//! Each session is a numbered menu loop over the ledger. Sessions only see
//! the ledger through the capability traits their role is allowed.

pub mod console;
pub mod customer;
pub mod owner;
pub mod role;
pub mod worker;

pub use console::Console;
pub use customer::run_customer_session;
pub use owner::run_owner_session;
pub use role::{select_role, Role};
pub use worker::run_worker_session;

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

pub(crate) const INVALID_CHOICE: &str = "Invalid choice.\n";

/// Whether a menu action wants the loop to keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Quit,
}

/// Separate user-facing validation failures from fatal errors
///
/// Validation errors come back in the inner `Err` for the session to report;
/// anything else is returned as the outer error and ends the session.
pub(crate) fn recoverable<T>(result: LedgerResult<T>) -> LedgerResult<Result<T, LedgerError>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(e) if e.is_validation() => {
            tracing::debug!(error = %e, "Rejected input");
            Ok(Err(e))
        }
        Err(e) => Err(e),
    }
}

/// Parse a menu answer
pub(crate) fn parse_choice(answer: &str) -> Option<u32> {
    answer.trim().parse().ok()
}

/// Run the session for `role` until the user exits or input ends
pub fn run_session<R: BufRead, W: Write>(
    role: Role,
    ledger: &mut Ledger,
    console: &mut Console<R, W>,
    currency_symbol: &str,
) -> LedgerResult<()> {
    tracing::info!(%role, "Session started");

    match role {
        Role::Owner => run_owner_session(ledger, console, currency_symbol)?,
        Role::Worker => run_worker_session(ledger, console, currency_symbol)?,
        Role::Customer => run_customer_session(&*ledger, console, currency_symbol)?,
    }

    tracing::info!(%role, "Session ended");
    Ok(())
}
