//! Expense model

use std::fmt;

use super::money::Money;

/// A recorded business expense
///
/// Expenses form an append-only log: once recorded they are never edited
/// or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// What the money was spent on
    pub description: String,

    /// Amount spent, never negative
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.amount)
    }
}
