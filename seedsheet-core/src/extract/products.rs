//! Product extraction from the sales sheet, falling back to warehouse stock

use super::{read_sheet, require_column, row_name};
use crate::coerce::{safe_float, safe_int};
use crate::config::{ProductConfig, ProductSheet};
use crate::reader::SheetSource;
use crate::record::Product;
use std::collections::HashSet;
use tracing::info;

/// Extract unique products with cost and selling price.
///
/// The fallback sheet is read only when the primary one yields nothing.
pub fn extract_products(source: &mut dyn SheetSource, config: &ProductConfig) -> Vec<Product> {
    info!("Extracting products...");

    let mut products = from_sheet(source, &config.primary, config);
    if products.is_empty() {
        products = from_sheet(source, &config.fallback, config);
    }

    info!("Found {} unique products", products.len());
    products
}

fn from_sheet(
    source: &mut dyn SheetSource,
    layout: &ProductSheet,
    config: &ProductConfig,
) -> Vec<Product> {
    let Some(table) = read_sheet(source, &layout.sheet) else {
        return Vec::new();
    };
    if !require_column(&table, &layout.name_column) {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut products = Vec::new();

    for row in table.rows() {
        let Some(name) = row_name(&row, &layout.name_column, &[]) else {
            continue;
        };
        if seen.contains(&name) {
            continue;
        }

        let hpp = safe_float(row.get(&layout.cost_column), 0.0);
        if hpp <= 0.0 {
            continue;
        }
        let price = match &layout.price_column {
            Some(col) => safe_float(row.get(col), 0.0),
            None => hpp * config.markup,
        };
        if price <= 0.0 {
            continue;
        }

        let stock = safe_int(row.get(&layout.stock_column), 0);

        seen.insert(name.clone());
        products.push(Product {
            name,
            stock: if stock > 0 { stock } else { config.default_stock },
            hpp,
            price,
            unit: config.unit.clone(),
            category: config.category.clone(),
        });
    }

    products
}
