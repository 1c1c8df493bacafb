//! Sheet previews for exploring an unfamiliar workbook

use crate::coerce::safe_str;
use crate::reader::SheetSource;
use serde::Serialize;
use tracing::warn;

/// Number of sample rows shown per sheet unless asked otherwise
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct WorkbookPreview {
    pub sheet_names: Vec<String>,
    pub sheets: Vec<SheetPreview>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetPreview {
    pub name: String,
    pub columns: Vec<String>,
    /// Sample data rows rendered as text, blank cells as ""
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    /// Set when the sheet could not be read; the other fields are then empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Preview every sheet in workbook order, optionally limited to `only`
pub fn preview_workbook(
    source: &mut dyn SheetSource,
    sample_rows: usize,
    only: Option<&str>,
) -> WorkbookPreview {
    let sheet_names = source.sheet_names();
    let mut sheets = Vec::new();

    for name in &sheet_names {
        if only.is_some_and(|target| target != name.as_str()) {
            continue;
        }
        sheets.push(preview_sheet(source, name, sample_rows));
    }

    WorkbookPreview {
        sheet_names,
        sheets,
    }
}

fn preview_sheet(source: &mut dyn SheetSource, name: &str, sample_rows: usize) -> SheetPreview {
    match source.table(name) {
        Ok(table) => SheetPreview {
            name: name.to_string(),
            columns: table.headers().to_vec(),
            rows: table
                .rows()
                .take(sample_rows)
                .map(|row| row.cells().iter().map(|c| safe_str(c, "")).collect())
                .collect(),
            total_rows: table.len(),
            error: None,
        },
        Err(e) => {
            warn!(sheet = name, "Error reading sheet {}: {}", name, e);
            SheetPreview {
                name: name.to_string(),
                columns: Vec::new(),
                rows: Vec::new(),
                total_rows: 0,
                error: Some(e.to_string()),
            }
        }
    }
}
