//! Core data models for ShopLedger
//!
//! This module contains the data structures that make up the shop's books:
//! stocked items, recorded expenses and the money type they share.

pub mod expense;
pub mod item;
pub mod money;

pub use expense::Expense;
pub use item::Item;
pub use money::{Money, MoneyParseError};
