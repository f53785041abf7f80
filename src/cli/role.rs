//! Role selection
//!
//! The three roles share one ledger but each sees a different menu.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::LedgerResult;

use super::console::Console;

pub const ROLE_MENU: &str = "Shop Ledger\n1. Owner\n2. Worker\n3. Customer\nChoose role: ";

/// Who is using the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manages stock and expenses
    Owner,
    /// Records sales
    Worker,
    /// Browses what is in stock
    Customer,
}

impl Role {
    /// Map a role menu answer to a role
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().parse::<u32>().ok()? {
            1 => Some(Self::Owner),
            2 => Some(Self::Worker),
            3 => Some(Self::Customer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "Owner"),
            Self::Worker => write!(f, "Worker"),
            Self::Customer => write!(f, "Customer"),
        }
    }
}

/// Ask which role to run as
///
/// Returns `None` for anything other than a valid role, including end of input.
pub fn select_role<R: BufRead, W: Write>(console: &mut Console<R, W>) -> LedgerResult<Option<Role>> {
    Ok(console
        .prompt(ROLE_MENU)?
        .as_deref()
        .and_then(Role::from_choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_choice() {
        assert_eq!(Role::from_choice("1"), Some(Role::Owner));
        assert_eq!(Role::from_choice(" 2 "), Some(Role::Worker));
        assert_eq!(Role::from_choice("3"), Some(Role::Customer));
        assert_eq!(Role::from_choice("4"), None);
        assert_eq!(Role::from_choice("owner"), None);
        assert_eq!(Role::from_choice(""), None);
    }

    #[test]
    fn test_select_role_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(select_role(&mut console).unwrap(), None);
    }
}
