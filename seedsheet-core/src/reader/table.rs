//! Header-indexed sheet data structures

use std::collections::{HashMap, HashSet};

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Excel date serial (1900 date system)
    DateTime(f64),
    Error(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

static EMPTY: CellValue = CellValue::Empty;

/// A worksheet read as a table: the first row holds the column labels,
/// every following row is data.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub name: String,
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from raw rows. The first row becomes the header.
    pub fn from_rows(name: impl Into<String>, mut raw: Vec<Vec<CellValue>>) -> Self {
        let name = name.into();
        if raw.is_empty() {
            return Table {
                name,
                ..Default::default()
            };
        }

        let header_row = raw.remove(0);
        let headers = header_labels(&header_row);
        let width = headers.len();

        let rows = raw
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, CellValue::Empty);
                }
                row
            })
            .collect();

        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Table {
            name,
            headers,
            index,
            rows,
        }
    }

    /// Column labels in sheet order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a column label to its index.
    ///
    /// Exact label match wins; otherwise the first label equal to `name`
    /// ignoring case and surrounding whitespace. The relaxed match means a
    /// sheet headed `Item` satisfies a layout asking for `ITEM`.
    pub fn column(&self, name: &str) -> Option<usize> {
        if let Some(&idx) = self.index.get(name) {
            return Some(idx);
        }
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
    }

    /// Whether a column with this label exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Iterate data rows
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }
}

/// Borrowed view of a data row with label-based access
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// Value of the named column, `Empty` when the column does not exist
    pub fn get(&self, column: &str) -> &'a CellValue {
        self.table
            .column(column)
            .and_then(|idx| self.cells.get(idx))
            .unwrap_or(&EMPTY)
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }
}

/// Turn the header row into unique column labels.
///
/// Blank cells become `Unnamed: {index}`, repeated labels get a `.{n}`
/// suffix.
fn header_labels(row: &[CellValue]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(row.len());

    for (i, cell) in row.iter().enumerate() {
        let base = match cell {
            CellValue::Text(s) if !s.trim().is_empty() => s.trim().to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Boolean(b) => crate::coerce::format_bool(*b).to_string(),
            CellValue::DateTime(serial) => crate::coerce::format_serial(*serial),
            CellValue::Error(e) => e.clone(),
            _ => format!("Unnamed: {}", i),
        };

        let mut label = base.clone();
        if used.contains(&label) {
            let count = repeats.entry(base.clone()).or_insert(0);
            loop {
                *count += 1;
                label = format!("{}.{}", base, count);
                if !used.contains(&label) {
                    break;
                }
            }
        }
        used.insert(label.clone());
        labels.push(label);
    }

    labels
}

/// Render a number the way a header or name cell should read
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_header_and_lookup() {
        let table = Table::from_rows(
            "MAIN",
            vec![
                vec![text("ITEM"), text("HPP"), text("HJ")],
                vec![text("Andesit"), CellValue::Number(1000.0), CellValue::Number(1500.0)],
            ],
        );

        assert_eq!(table.headers(), &["ITEM", "HPP", "HJ"]);
        assert_eq!(table.len(), 1);

        let row = table.rows().next().unwrap();
        assert_eq!(row.get("ITEM"), &text("Andesit"));
        assert_eq!(row.get("HJ"), &CellValue::Number(1500.0));
        assert_eq!(row.get("Missing"), &CellValue::Empty);
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let table = Table::from_rows(
            "PIUTANG",
            vec![vec![text(" Nama "), text("Sisa")], vec![text("Budi"), CellValue::Number(5.0)]],
        );

        assert_eq!(table.column("nama"), Some(0));
        assert_eq!(table.column("SISA"), Some(1));
        assert!(!table.has_column("UTANG"));
    }

    #[test]
    fn test_blank_and_duplicate_headers() {
        let table = Table::from_rows(
            "S",
            vec![vec![
                text("Qty"),
                CellValue::Empty,
                text("Qty"),
                text("Qty"),
                CellValue::Number(2025.0),
            ]],
        );

        assert_eq!(
            table.headers(),
            &["Qty", "Unnamed: 1", "Qty.1", "Qty.2", "2025"]
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Table::from_rows(
            "S",
            vec![vec![text("A"), text("B"), text("C")], vec![text("x")]],
        );

        let row = table.rows().next().unwrap();
        assert_eq!(row.cells().len(), 3);
        assert_eq!(row.get("C"), &CellValue::Empty);
    }

    #[test]
    fn test_empty_sheet() {
        let table = Table::from_rows("Empty", Vec::new());
        assert!(table.headers().is_empty());
        assert_eq!(table.rows().count(), 0);
    }
}
