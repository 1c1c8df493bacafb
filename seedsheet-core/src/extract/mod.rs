//! Row extraction for each seed entity
//!
//! Each extractor reads its primary sheet and, when that produces nothing,
//! a fallback sheet or a fixed roster. A sheet that cannot be read is logged
//! and treated as empty; extraction itself never fails.

pub mod customers;
pub mod products;
pub mod suppliers;
pub mod transactions;

pub use customers::extract_customers;
pub use products::extract_products;
pub use suppliers::extract_suppliers;
pub use transactions::extract_transactions;

use crate::coerce::{is_placeholder_name, safe_float, safe_str};
use crate::reader::{SheetSource, Table};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read a sheet, logging instead of failing
pub(crate) fn read_sheet(source: &mut dyn SheetSource, sheet: &str) -> Option<Table> {
    match source.table(sheet) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(sheet, "Error reading {} sheet: {}", sheet, e);
            None
        }
    }
}

/// Warn when a column the extractor depends on is absent
pub(crate) fn require_column(table: &Table, column: &str) -> bool {
    let present = table.has_column(column);
    if !present {
        warn!(
            sheet = %table.name,
            column,
            "Sheet {} has no '{}' column",
            table.name,
            column
        );
    }
    present
}

/// Name of the row in `column`, or `None` for blank and placeholder values
pub(crate) fn row_name(
    row: &crate::reader::Row<'_>,
    column: &str,
    placeholders: &[String],
) -> Option<String> {
    let name = safe_str(row.get(column), "");
    if is_placeholder_name(&name, placeholders) {
        None
    } else {
        Some(name)
    }
}

/// Per-name balances of a ledger sheet in first-seen order.
///
/// Rows sharing a name add their balances together. Without a balance
/// column every balance is zero.
pub(crate) fn ledger_balances(
    table: &Table,
    name_column: &str,
    balance_column: Option<&str>,
    placeholders: &[String],
) -> Vec<(String, f64)> {
    let mut order: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in table.rows() {
        let Some(name) = row_name(&row, name_column, placeholders) else {
            skipped += 1;
            continue;
        };
        let balance = balance_column
            .map(|col| safe_float(row.get(col), 0.0))
            .unwrap_or(0.0);

        match index.get(&name).copied() {
            Some(i) => order[i].1 += balance,
            None => {
                index.insert(name.clone(), order.len());
                order.push((name, balance));
            }
        }
    }

    debug!(sheet = %table.name, skipped, "Skipped rows without a name");
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{CellValue, MemorySource};

    #[test]
    fn test_ledger_accumulates_in_order() {
        let table = Table::from_rows(
            "Piutang M",
            vec![
                vec!["Nama".into(), "Sisa Hutang".into()],
                vec!["Budi".into(), 100.0.into()],
                vec!["Sari".into(), 50.0.into()],
                vec!["Budi".into(), 25.5.into()],
                vec![CellValue::Empty, 999.0.into()],
                vec!["NaN".into(), 1.0.into()],
            ],
        );

        let balances = ledger_balances(&table, "Nama", Some("Sisa Hutang"), &["NaN".to_string()]);
        assert_eq!(
            balances,
            vec![("Budi".to_string(), 125.5), ("Sari".to_string(), 50.0)]
        );
    }

    #[test]
    fn test_ledger_without_balance_column() {
        let table = Table::from_rows(
            "Hutang",
            vec![vec!["Supplier".into()], vec!["Rully".into()], vec!["Rully".into()]],
        );
        let balances = ledger_balances(&table, "Supplier", None, &[]);
        assert_eq!(balances, vec![("Rully".to_string(), 0.0)]);
    }

    #[test]
    fn test_read_sheet_logs_missing() {
        let mut source = MemorySource::new();
        assert!(read_sheet(&mut source, "MAIN").is_none());
    }
}
