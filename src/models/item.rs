//! Inventory item model

use std::fmt;

use super::money::Money;

/// A stocked item
///
/// Items have no stable key; they are addressed by their position in the
/// inventory, and several items may share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name
    pub name: String,

    /// Price of a single unit, never negative
    pub unit_price: Money,

    /// Units on hand
    pub quantity: u32,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Whether any units are left to sell
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Price of `quantity` units of this item, `None` if it overflows
    pub fn price_for(&self, quantity: u32) -> Option<Money> {
        self.unit_price.checked_mul(quantity)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} @ {})", self.name, self.quantity, self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        let mut item = Item::new("Milk", Money::from_cents(250), 1);
        assert!(item.is_available());

        item.quantity = 0;
        assert!(!item.is_available());
    }

    #[test]
    fn test_price_for() {
        let item = Item::new("Milk", Money::from_cents(250), 10);
        assert_eq!(item.price_for(3), Some(Money::from_cents(750)));
        assert_eq!(item.price_for(0), Some(Money::zero()));
    }

    #[test]
    fn test_price_for_overflow() {
        let item = Item::new("Gold", Money::from_cents(i64::MAX / 2 + 1), 5);
        assert_eq!(item.price_for(2), None);
    }

    #[test]
    fn test_display() {
        let item = Item::new("Bread", Money::from_cents(199), 4);
        assert_eq!(item.to_string(), "Bread (4 @ $1.99)");
    }
}
