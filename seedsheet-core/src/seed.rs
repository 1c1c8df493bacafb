//! Seed document assembly and output

use crate::config::{Limits, SeedConfig};
use crate::error::SeedResult;
use crate::extract;
use crate::reader::SheetSource;
use crate::record::{Customer, Product, Supplier, Transaction};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// The JSON document consumed by the database seeder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    /// Present only when transaction extraction is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,
}

/// Record counts of a seed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub products: usize,
    pub customers: usize,
    pub suppliers: usize,
    pub transactions: Option<usize>,
}

impl SeedData {
    /// Run every extractor against the workbook and apply the size caps
    pub fn build(source: &mut dyn SheetSource, config: &SeedConfig) -> Self {
        let products = extract::extract_products(source, &config.products);
        let customers = extract::extract_customers(source, &config.customers);
        let suppliers = extract::extract_suppliers(source, &config.suppliers);
        let transactions = config
            .transactions
            .enabled
            .then(|| extract::extract_transactions(source, &config.transactions));

        let mut seed = SeedData {
            products,
            customers,
            suppliers,
            transactions,
        };
        seed.truncate(&config.limits);
        seed
    }

    /// Cut each list down to its cap
    pub fn truncate(&mut self, limits: &Limits) {
        cap(&mut self.products, limits.products);
        cap(&mut self.customers, limits.customers);
        cap(&mut self.suppliers, limits.suppliers);
        if let Some(transactions) = &mut self.transactions {
            cap(transactions, limits.transactions);
        }
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            products: self.products.len(),
            customers: self.customers.len(),
            suppliers: self.suppliers.len(),
            transactions: self.transactions.as_ref().map(Vec::len),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> SeedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document, creating parent directories as needed
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> SeedResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;

        info!("Wrote seed data to {}", path.display());
        Ok(())
    }
}

fn cap<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}
