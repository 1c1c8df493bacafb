//! Customer extraction from the receivables sheets

use super::{ledger_balances, read_sheet, require_column, row_name};
use crate::coerce::safe_float;
use crate::config::{CustomerConfig, LedgerSheet, SummarySheet};
use crate::reader::SheetSource;
use crate::record::Customer;
use std::collections::HashSet;
use tracing::info;

/// Extract customers with their outstanding receivable balance
pub fn extract_customers(source: &mut dyn SheetSource, config: &CustomerConfig) -> Vec<Customer> {
    info!("Extracting customers...");

    let mut customers = from_ledger(source, &config.primary);
    if customers.is_empty() {
        customers = from_summary(source, &config.fallback);
    }

    info!("Found {} customers", customers.len());
    customers
}

/// Per-transaction receivables: repeated names accumulate
fn from_ledger(source: &mut dyn SheetSource, layout: &LedgerSheet) -> Vec<Customer> {
    let Some(table) = read_sheet(source, &layout.sheet) else {
        return Vec::new();
    };
    if !require_column(&table, &layout.name_column) {
        return Vec::new();
    }

    ledger_balances(
        &table,
        &layout.name_column,
        Some(&layout.balance_column),
        &layout.placeholders,
    )
    .into_iter()
    .map(|(name, balance)| Customer::new(name, balance))
    .collect()
}

/// Per-customer totals: first row with a positive debt wins
fn from_summary(source: &mut dyn SheetSource, layout: &SummarySheet) -> Vec<Customer> {
    let Some(table) = read_sheet(source, &layout.sheet) else {
        return Vec::new();
    };
    if !require_column(&table, &layout.name_column) {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut customers = Vec::new();

    for row in table.rows() {
        let Some(name) = row_name(&row, &layout.name_column, &layout.placeholders) else {
            continue;
        };
        if seen.contains(&name) {
            continue;
        }

        let debt = safe_float(row.get(&layout.debt_column), 0.0);
        if debt <= 0.0 {
            continue;
        }
        let remaining = safe_float(row.get(&layout.remaining_column), 0.0);

        seen.insert(name.clone());
        customers.push(Customer::new(
            name,
            if remaining > 0.0 { remaining } else { debt },
        ));
    }

    customers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{CellValue, MemorySource};

    fn summary_sheet(rows: Vec<Vec<CellValue>>) -> Vec<Vec<CellValue>> {
        let mut all = vec![vec!["NAMA".into(), "UTANG".into(), "Sisa".into()]];
        all.extend(rows);
        all
    }

    #[test]
    fn test_ledger_sheet() {
        let mut source = MemorySource::new().with_sheet(
            "Piutang M",
            vec![
                vec!["Tanggal".into(), "Nama".into(), "Sisa Hutang".into()],
                vec![CellValue::DateTime(45672.0), "Pak Made".into(), 1_500_000.0.into()],
                vec![CellValue::DateTime(45673.0), "Bu Ketut".into(), "abc".into()],
                vec![CellValue::DateTime(45674.0), "Pak Made".into(), 500_000.0.into()],
                vec![CellValue::Empty, "NaN".into(), 10.0.into()],
                vec![CellValue::Empty, "nan".into(), 10.0.into()],
            ],
        );

        let customers = extract_customers(&mut source, &CustomerConfig::default());

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0], Customer::new("Pak Made", 2_000_000.0));
        // Malformed balance falls back to zero but the customer is kept
        assert_eq!(customers[1], Customer::new("Bu Ketut", 0.0));
        assert_eq!(customers[0].phone, "");
        assert_eq!(customers[0].address, "");
    }

    #[test]
    fn test_missing_value_names_skipped() {
        let mut source = MemorySource::new().with_sheet(
            "Piutang M",
            vec![
                vec!["Nama".into(), "Sisa Hutang".into()],
                vec!["None".into(), 10.0.into()],
                vec!["null".into(), 10.0.into()],
                vec!["Budi".into(), 10.0.into()],
            ],
        );

        let customers = extract_customers(&mut source, &CustomerConfig::default());
        assert_eq!(customers, vec![Customer::new("Budi", 10.0)]);
    }

    #[test]
    fn test_summary_fallback() {
        let mut source = MemorySource::new().with_sheet(
            "PIUTANG",
            summary_sheet(vec![
                vec!["Wayan".into(), 300.0.into(), 120.0.into()],
                vec!["Nyoman".into(), 200.0.into(), 0.0.into()],
                vec!["(blank)".into(), 900.0.into(), 900.0.into()],
                vec!["Kadek".into(), 0.0.into(), 50.0.into()],
                vec!["Wayan".into(), 999.0.into(), 999.0.into()],
            ]),
        );

        let customers = extract_customers(&mut source, &CustomerConfig::default());

        assert_eq!(
            customers,
            vec![Customer::new("Wayan", 120.0), Customer::new("Nyoman", 200.0)]
        );
    }

    #[test]
    fn test_empty_ledger_uses_summary() {
        let mut source = MemorySource::new()
            .with_sheet(
                "Piutang M",
                vec![
                    vec!["Nama".into(), "Sisa Hutang".into()],
                    vec!["nan".into(), 1.0.into()],
                ],
            )
            .with_sheet(
                "PIUTANG",
                summary_sheet(vec![vec!["Wayan".into(), 300.0.into(), CellValue::Empty]]),
            );

        let customers = extract_customers(&mut source, &CustomerConfig::default());
        assert_eq!(customers, vec![Customer::new("Wayan", 300.0)]);
    }

    #[test]
    fn test_ledger_hit_skips_summary() {
        let mut source = MemorySource::new()
            .with_sheet(
                "Piutang M",
                vec![vec!["Nama".into(), "Sisa Hutang".into()], vec!["Budi".into(), 0.0.into()]],
            )
            .with_sheet(
                "PIUTANG",
                summary_sheet(vec![vec!["Wayan".into(), 300.0.into(), 100.0.into()]]),
            );

        let customers = extract_customers(&mut source, &CustomerConfig::default());
        assert_eq!(customers, vec![Customer::new("Budi", 0.0)]);
    }

    #[test]
    fn test_no_receivable_sheets() {
        let mut source = MemorySource::new();
        assert!(extract_customers(&mut source, &CustomerConfig::default()).is_empty());
    }
}
