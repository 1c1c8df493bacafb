//! Supplier extraction from the payables sheet

use super::{ledger_balances, read_sheet};
use crate::config::SupplierConfig;
use crate::reader::SheetSource;
use crate::record::Supplier;
use tracing::{info, warn};

/// Extract suppliers.
///
/// The payables sheet has no stable name column, so unless one is configured
/// a readable sheet yields the known roster and an unreadable one yields the
/// fallback roster.
pub fn extract_suppliers(source: &mut dyn SheetSource, config: &SupplierConfig) -> Vec<Supplier> {
    info!("Extracting suppliers...");

    let suppliers = match read_sheet(source, &config.sheet) {
        Some(table) => {
            let from_sheet: Vec<Supplier> = match config.name_column.as_deref() {
                Some(name_column) if table.has_column(name_column) => ledger_balances(
                    &table,
                    name_column,
                    config.balance_column.as_deref(),
                    &config.placeholders,
                )
                .into_iter()
                .map(|(name, balance)| Supplier::new(name, balance))
                .collect(),
                Some(name_column) => {
                    warn!(
                        sheet = %config.sheet,
                        "Sheet {} has no '{}' column, using the supplier roster",
                        config.sheet,
                        name_column
                    );
                    Vec::new()
                }
                None => Vec::new(),
            };

            if from_sheet.is_empty() {
                roster(&config.roster)
            } else {
                from_sheet
            }
        }
        None => roster(&config.fallback_roster),
    };

    info!("Found {} suppliers", suppliers.len());
    suppliers
}

fn roster(names: &[String]) -> Vec<Supplier> {
    names.iter().map(|name| Supplier::new(name.as_str(), 0.0)).collect()
}
