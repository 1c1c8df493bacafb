//! Sales transaction extraction

use super::{read_sheet, require_column, row_name};
use crate::coerce::{format_serial, safe_float, safe_int, safe_str};
use crate::config::TransactionConfig;
use crate::reader::{CellValue, SheetSource};
use crate::record::Transaction;
use tracing::info;

/// Marker the seeder reads as "no date, use today"
const MISSING_DATE: &str = "NaT";

/// Extract one transaction per sales row. Rows are not deduplicated.
pub fn extract_transactions(
    source: &mut dyn SheetSource,
    config: &TransactionConfig,
) -> Vec<Transaction> {
    info!("Extracting transactions...");

    let Some(table) = read_sheet(source, &config.sheet) else {
        return Vec::new();
    };
    if !require_column(&table, &config.item_column) {
        return Vec::new();
    }

    let mut transactions = Vec::new();
    for row in table.rows() {
        let Some(item) = row_name(&row, &config.item_column, &[]) else {
            continue;
        };
        let qty = safe_int(row.get(&config.qty_column), 0);
        if qty <= 0 {
            continue;
        }

        let price = safe_float(row.get(&config.price_column), 0.0);
        let nominal = safe_float(row.get(&config.nominal_column), 0.0);
        let status = safe_str(row.get(&config.status_column), "").to_uppercase();

        transactions.push(Transaction {
            date: date_text(row.get(&config.date_column)),
            item,
            qty,
            hpp: safe_float(row.get(&config.cost_column), 0.0),
            price,
            customer: safe_str(row.get(&config.customer_column), ""),
            status: if status.is_empty() {
                config.default_status.clone()
            } else {
                status
            },
            nominal: if nominal > 0.0 {
                nominal
            } else {
                qty as f64 * price
            },
        });
    }

    info!("Found {} transactions", transactions.len());
    transactions
}

fn date_text(cell: &CellValue) -> String {
    match cell {
        CellValue::DateTime(serial) | CellValue::Number(serial) => format_serial(*serial),
        CellValue::Text(_) => safe_str(cell, MISSING_DATE),
        _ => MISSING_DATE.to_string(),
    }
}
