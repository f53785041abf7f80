//! Sales total file (sales.csv)
//!
//! ```text
//! TotalSales
//! 7.50
//! ```

use std::path::Path;

use crate::error::LedgerError;
use crate::models::Money;

use super::file_io::{read_bytes, write_text_atomic};
use super::table::Loaded;

/// Header line of sales.csv
pub const SALES_HEADER: &str = "TotalSales";

/// Render the sales file
pub fn render_sales_total(total: Money) -> String {
    format!("{}\n{}\n", SALES_HEADER, total.to_plain_string())
}

/// Load the running sales total
///
/// A missing file, a missing value line, or an unreadable value all read as
/// zero. Only the unreadable case counts as a skipped row.
pub fn read_sales_total(path: &Path) -> Result<Loaded<Money>, LedgerError> {
    let Some(bytes) = read_bytes(path)? else {
        return Ok(Loaded {
            value: Money::zero(),
            skipped: 0,
        });
    };
    // Stray bytes become U+FFFD and fail the amount parse below
    let contents = String::from_utf8_lossy(&bytes);

    let Some(raw) = contents
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty())
    else {
        return Ok(Loaded {
            value: Money::zero(),
            skipped: 0,
        });
    };

    match Money::parse(raw) {
        Ok(total) if !total.is_negative() => Ok(Loaded {
            value: total,
            skipped: 0,
        }),
        _ => {
            tracing::warn!(file = %path.display(), value = raw, "Unreadable sales total, using zero");
            Ok(Loaded {
                value: Money::zero(),
                skipped: 1,
            })
        }
    }
}

/// Replace the sales file with `total`
pub fn write_sales_total(path: &Path, total: Money) -> Result<(), LedgerError> {
    write_text_atomic(path, &render_sales_total(total))
}
