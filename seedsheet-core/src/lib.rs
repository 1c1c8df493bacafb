//! seedsheet-core: inventory workbook to database seed conversion
//!
//! Reads a retail/inventory spreadsheet export, pulls products, customers
//! and suppliers out of known sheets with fallbacks for missing or
//! malformed data, and writes the result as a seed JSON document.

pub mod coerce;
pub mod config;
pub mod error;
pub mod extract;
pub mod inspect;
pub mod reader;
pub mod record;
pub mod seed;

use std::path::Path;

pub use config::SeedConfig;
pub use error::{SeedError, SeedResult};
pub use reader::{ExcelSource, MemorySource, SheetSource};
pub use record::{Customer, Product, Supplier, Transaction};
pub use seed::{SeedData, SeedSummary};

/// Read the workbook at `path` and build its seed document
pub fn convert_file<P: AsRef<Path>>(path: P, config: &SeedConfig) -> SeedResult<SeedData> {
    let mut source = ExcelSource::open(path)?;
    Ok(SeedData::build(&mut source, config))
}
