//! Inventory table (inventory.csv)
//!
//! ```text
//! Name,Price,Quantity
//! "Milk",2.50,10
//! ```

use std::path::Path;

use csv::StringRecord;

use crate::error::LedgerError;
use crate::models::Item;

use super::file_io::write_text_atomic;
use super::table::{count_field, money_field, quote, read_rows, text_field, Loaded, RowError};

/// Header line of inventory.csv
pub const INVENTORY_HEADER: &str = "Name,Price,Quantity";

fn parse_item(record: &StringRecord) -> Result<Item, RowError> {
    Ok(Item::new(
        text_field(record, 0, "name")?,
        money_field(record, 1, "price")?,
        count_field(record, 2, "quantity")?,
    ))
}

/// Render the whole inventory table
pub fn render_items(items: &[Item]) -> String {
    let mut out = String::with_capacity(INVENTORY_HEADER.len() + 1 + items.len() * 24);
    out.push_str(INVENTORY_HEADER);
    out.push('\n');

    for item in items {
        out.push_str(&format!(
            "{},{},{}\n",
            quote(&item.name),
            item.unit_price.to_plain_string(),
            item.quantity
        ));
    }
    out
}

/// Load items, skipping rows with unusable price or quantity
pub fn read_items(path: &Path) -> Result<Loaded<Vec<Item>>, LedgerError> {
    read_rows(path, parse_item)
}

/// Replace the inventory file with `items`
pub fn write_items(path: &Path, items: &[Item]) -> Result<(), LedgerError> {
    write_text_atomic(path, &render_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_render_format() {
        let items = vec![
            Item::new("Milk", Money::from_cents(250), 10),
            Item::new("Bread", Money::from_cents(100), 0),
        ];

        assert_eq!(
            render_items(&items),
            "Name,Price,Quantity\n\"Milk\",2.50,10\n\"Bread\",1.00,0\n"
        );
    }

    #[test]
    fn test_save_load_save_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.csv");
        let items = vec![
            Item::new("Milk", Money::from_cents(250), 10),
            Item::new("Milk", Money::from_cents(275), 3),
            Item::new("Eggs, dozen", Money::from_cents(399), 0),
            Item::new("", Money::zero(), 1),
        ];

        write_items(&path, &items).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let loaded = read_items(&path).unwrap();
        assert_eq!(loaded.value, items);
        assert_eq!(loaded.skipped, 0);

        write_items(&path, &loaded.value).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_drops_unusable_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.csv");
        std::fs::write(
            &path,
            "Name,Price,Quantity\r\n\"Soap\",1.5,4\r\n\"Broken\",abc,2\r\n\"Half\",1.00,2.5\r\n\"Tea\",3.20,-1\r\n\"Rice\",5.00,12\r\n",
        )
        .unwrap();

        let loaded = read_items(&path).unwrap();
        assert_eq!(
            loaded.value,
            vec![
                Item::new("Soap", Money::from_cents(150), 4),
                Item::new("Rice", Money::from_cents(500), 12),
            ]
        );
        assert_eq!(loaded.skipped, 3);
    }

    #[test]
    fn test_row_with_invalid_utf8_is_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.csv");
        let mut contents = b"Name,Price,Quantity\n\"Milk\",2.50,10\n\"".to_vec();
        contents.extend_from_slice(&[0xff, 0xfe]);
        contents.extend_from_slice(b"\",1.00,2\n\"Rice\",5.00,12\n");
        std::fs::write(&path, contents).unwrap();

        let loaded = read_items(&path).unwrap();
        assert_eq!(
            loaded.value,
            vec![
                Item::new("Milk", Money::from_cents(250), 10),
                Item::new("Rice", Money::from_cents(500), 12),
            ]
        );
        assert_eq!(loaded.skipped, 1);
    }
}
