//! Excel/ODS file reader using calamine

use crate::error::{SeedError, SeedResult};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod table;

pub use table::{CellValue, Row, Table};

/// Anything that can hand out sheets as tables by name
pub trait SheetSource {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Read the named sheet as a header-indexed table
    fn table(&mut self, name: &str) -> SeedResult<Table>;
}

/// Workbook on disk, read lazily sheet by sheet
pub struct ExcelSource {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl ExcelSource {
    /// Open a workbook; the format is picked from the file extension
    pub fn open<P: AsRef<Path>>(path: P) -> SeedResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SeedError::NotFound(path.to_path_buf()));
        }

        let sheets = open_workbook_auto(path)
            .map_err(|e| SeedError::Workbook(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for ExcelSource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn table(&mut self, name: &str) -> SeedResult<Table> {
        if !self.sheets.sheet_names().iter().any(|s| s == name) {
            return Err(SeedError::SheetNotFound(name.to_string()));
        }
        let range = self.sheets.worksheet_range(name)?;
        Ok(parse_sheet(name, &range))
    }
}

/// Workbook assembled in memory from ready-made tables
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: Vec<Table>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet from raw rows (first row is the header)
    pub fn with_sheet(mut self, name: &str, rows: Vec<Vec<CellValue>>) -> Self {
        self.tables.push(Table::from_rows(name, rows));
        self
    }
}

impl SheetSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }

    fn table(&mut self, name: &str) -> SeedResult<Table> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| SeedError::SheetNotFound(name.to_string()))
    }
}

/// Rows are laid out from column A, so a used range starting further right
/// is padded with blank leading cells.
fn parse_sheet(name: &str, range: &Range<Data>) -> Table {
    let first_col = range.start().map_or(0, |(_, col)| col as usize);
    let rows = range
        .rows()
        .map(|row| {
            let mut cells = vec![CellValue::Empty; first_col];
            cells.extend(row.iter().map(parse_cell_value));
            cells
        })
        .collect();
    Table::from_rows(name, rows)
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
