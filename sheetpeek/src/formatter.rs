//! Output formatters for sheet previews

use anyhow::Result;
use colored::*;
use seedsheet_core::inspect::{SheetPreview, WorkbookPreview};

/// Widest a column gets before its cells are cut short
const MAX_COLUMN_WIDTH: usize = 24;

/// Print previews as aligned text tables
pub fn print_human(preview: &WorkbookPreview) {
    println!("Sheet names: {:?}", preview.sheet_names);

    for sheet in &preview.sheets {
        println!();
        println!("{}", format!("--- Sheet: {} ---", sheet.name).bold());

        if let Some(error) = &sheet.error {
            println!("{}", format!("Error reading sheet {}: {}", sheet.name, error).red());
            continue;
        }

        println!("Columns: {:?}", sheet.columns);
        if sheet.rows.is_empty() {
            println!("{}", "(no data rows)".dimmed());
            continue;
        }

        println!("First {} rows:", sheet.rows.len());
        for line in render_table(sheet) {
            println!("{}", line);
        }
        println!(
            "{}",
            format!("[{} data rows in total]", sheet.total_rows).dimmed()
        );
    }
}

/// Print previews as pretty JSON
pub fn print_json(preview: &WorkbookPreview) -> Result<()> {
    let json = serde_json::to_string_pretty(preview)?;
    println!("{}", json);
    Ok(())
}

/// Lay out the sample rows under their headers, with a leading row index
fn render_table(sheet: &SheetPreview) -> Vec<String> {
    let width = |i: usize| {
        let header = sheet.columns.get(i).map_or(0, |h| h.chars().count());
        let cells = sheet
            .rows
            .iter()
            .filter_map(|r| r.get(i))
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0);
        header.max(cells).min(MAX_COLUMN_WIDTH)
    };
    let widths: Vec<usize> = (0..sheet.columns.len()).map(width).collect();
    let index_width = sheet.rows.len().saturating_sub(1).to_string().len();

    let mut lines = Vec::with_capacity(sheet.rows.len() + 1);

    let header: Vec<String> = sheet
        .columns
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect();
    lines.push(format!("{:>iw$}  {}", "", header.join("  "), iw = index_width));

    for (i, row) in sheet.rows.iter().enumerate() {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(c, w)| pad(row.get(c).map_or("", String::as_str), *w))
            .collect();
        lines.push(format!("{:>iw$}  {}", i, cells.join("  "), iw = index_width));
    }

    lines
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
