//! Configuration for seed extraction
//!
//! Every field has a default matching the layout of the "Mitra Usaha"
//! inventory workbook, so an empty TOML file reproduces the built-in run.

use crate::error::{SeedError, SeedResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default workbook location, relative to the project root
pub const DEFAULT_INPUT: &str = "tmp/MITRA USAHA SAYAN 2025.xlsx";
/// Default seed file location, relative to the project root
pub const DEFAULT_OUTPUT: &str = "prisma/seed-data-from-excel.json";
/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "excel2seed.toml";

/// Main seed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub limits: Limits,
    pub products: ProductConfig,
    pub customers: CustomerConfig,
    pub suppliers: SupplierConfig,
    pub transactions: TransactionConfig,
}

impl SeedConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SeedResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> SeedResult<Self> {
        let config: SeedConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject settings that would make extraction meaningless
    pub fn validate(&self) -> SeedResult<()> {
        let sheets = [
            ("products.primary.sheet", &self.products.primary.sheet),
            ("products.fallback.sheet", &self.products.fallback.sheet),
            ("customers.primary.sheet", &self.customers.primary.sheet),
            ("customers.fallback.sheet", &self.customers.fallback.sheet),
            ("suppliers.sheet", &self.suppliers.sheet),
            ("transactions.sheet", &self.transactions.sheet),
        ];
        for (key, sheet) in sheets {
            if sheet.trim().is_empty() {
                return Err(invalid(format!("'{}' must not be empty", key)));
            }
        }

        let markup = self.products.markup;
        if !markup.is_finite() || markup <= 0.0 {
            return Err(invalid(format!(
                "'products.markup' must be a positive number, got {}",
                markup
            )));
        }

        if self.suppliers.roster.is_empty() {
            return Err(invalid("'suppliers.roster' must name at least one supplier"));
        }
        if self.suppliers.fallback_roster.is_empty() {
            return Err(invalid(
                "'suppliers.fallback_roster' must name at least one supplier",
            ));
        }

        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            limits: Limits::default(),
            products: ProductConfig::default(),
            customers: CustomerConfig::default(),
            suppliers: SupplierConfig::default(),
            transactions: TransactionConfig::default(),
        }
    }
}

fn invalid(msg: impl Into<String>) -> SeedError {
    SeedError::InvalidConfig(msg.into())
}

/// Output size caps; `None` leaves the list uncapped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub products: Option<usize>,
    pub customers: Option<usize>,
    pub suppliers: Option<usize>,
    pub transactions: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            products: Some(500),
            customers: Some(200),
            suppliers: None,
            transactions: None,
        }
    }
}

/// Product extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub primary: ProductSheet,
    /// Consulted only when the primary sheet yields no products
    pub fallback: ProductSheet,
    /// Stock used when the sheet reports none
    pub default_stock: i64,
    pub unit: String,
    pub category: String,
    /// Price estimate over cost when the sheet has no price column
    pub markup: f64,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            primary: ProductSheet {
                sheet: "MAIN".to_string(),
                name_column: "ITEM".to_string(),
                cost_column: "HPP".to_string(),
                price_column: Some("HJ".to_string()),
                stock_column: "Sisa Stock".to_string(),
            },
            fallback: ProductSheet {
                sheet: "Stok Gudang".to_string(),
                name_column: "ITEM".to_string(),
                cost_column: "HPP".to_string(),
                price_column: None,
                stock_column: "Stok Akhir".to_string(),
            },
            default_stock: 100,
            unit: "m2".to_string(),
            category: "Batu Alam".to_string(),
            markup: 1.2,
        }
    }
}

/// Column layout of a product sheet. A sheet table given in TOML replaces
/// the built-in layout as a whole, so every column must be named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSheet {
    pub sheet: String,
    pub name_column: String,
    /// HPP
    pub cost_column: String,
    /// HJ; without it the price is estimated from cost and markup
    pub price_column: Option<String>,
    pub stock_column: String,
}

/// Customer extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerConfig {
    pub primary: LedgerSheet,
    /// Consulted only when the primary sheet yields no customers
    pub fallback: SummarySheet,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        Self {
            primary: LedgerSheet {
                sheet: "Piutang M".to_string(),
                name_column: "Nama".to_string(),
                balance_column: "Sisa Hutang".to_string(),
                placeholders: vec!["NaN".to_string()],
            },
            fallback: SummarySheet {
                sheet: "PIUTANG".to_string(),
                name_column: "NAMA".to_string(),
                debt_column: "UTANG".to_string(),
                remaining_column: "Sisa".to_string(),
                placeholders: vec!["(blank)".to_string()],
            },
        }
    }
}

/// A sheet with one row per entry; balances of repeated names add up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSheet {
    pub sheet: String,
    pub name_column: String,
    pub balance_column: String,
    /// Name values treated as blank besides "" and "nan"
    #[serde(default)]
    pub placeholders: Vec<String>,
}

/// A sheet with one row per party holding total and remaining debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySheet {
    pub sheet: String,
    pub name_column: String,
    pub debt_column: String,
    pub remaining_column: String,
    #[serde(default)]
    pub placeholders: Vec<String>,
}

/// Supplier extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierConfig {
    pub sheet: String,
    /// When set and present in the sheet, suppliers are read from it
    pub name_column: Option<String>,
    pub balance_column: Option<String>,
    pub placeholders: Vec<String>,
    /// Emitted when the sheet is readable but has no usable name column
    pub roster: Vec<String>,
    /// Emitted when the sheet cannot be read at all
    pub fallback_roster: Vec<String>,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            sheet: "Hutang".to_string(),
            name_column: None,
            balance_column: None,
            placeholders: vec!["NaN".to_string(), "(blank)".to_string()],
            roster: ["Rully", "Junaedi", "Ramdan", "PT Batu Alam"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fallback_roster: vec!["Supplier Default".to_string()],
        }
    }
}

/// Sales transaction extraction settings (off unless enabled)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionConfig {
    pub enabled: bool,
    pub sheet: String,
    pub date_column: String,
    pub item_column: String,
    pub qty_column: String,
    pub cost_column: String,
    pub price_column: String,
    pub customer_column: String,
    pub status_column: String,
    pub nominal_column: String,
    pub default_status: String,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sheet: "MAIN".to_string(),
            date_column: "TANGGAL".to_string(),
            item_column: "ITEM".to_string(),
            qty_column: "QTY".to_string(),
            cost_column: "HPP".to_string(),
            price_column: "HJ".to_string(),
            customer_column: "NAMA".to_string(),
            status_column: "STATUS".to_string(),
            nominal_column: "NOMINAL".to_string(),
            default_status: "LUNAS".to_string(),
        }
    }
}
