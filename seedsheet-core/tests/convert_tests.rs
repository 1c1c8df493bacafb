use rust_xlsxwriter::Workbook;
use seedsheet_core::inspect::preview_workbook;
use seedsheet_core::{ExcelSource, SeedConfig, SeedData, SeedError, SheetSource, convert_file};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

enum Cell<'a> {
    Text(&'a str),
    Num(f64),
    Blank,
}

use Cell::{Blank, Num, Text};

// Helper to write a workbook with the given sheets; first row of each is the header
fn create_xlsx(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s)?;
                    }
                    Num(n) => {
                        worksheet.write_number(r as u32, c as u16, *n)?;
                    }
                    Blank => {}
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn full_workbook(path: &Path) -> anyhow::Result<()> {
    create_xlsx(
        path,
        &[
            (
                "MAIN",
                vec![
                    vec![Text("TANGGAL"), Text("ITEM"), Text("HPP"), Text("HJ"), Text("Sisa Stock")],
                    vec![Num(45672.0), Text("Andesit 20x40"), Num(85000.0), Num(110000.0), Num(40.0)],
                    vec![Num(45672.0), Text("Paras Jogja"), Num(60000.0), Num(75000.0), Blank],
                    vec![Num(45673.0), Text("Andesit 20x40"), Num(90000.0), Num(120000.0), Num(2.0)],
                    vec![Num(45673.0), Text("Semen"), Text("-"), Num(65000.0), Num(3.0)],
                    vec![Blank, Blank, Blank, Blank, Blank],
                    vec![Num(45674.0), Text("Batu Candi"), Num(70000.0), Num(98000.0), Num(12.5)],
                ],
            ),
            (
                "Piutang M",
                vec![
                    vec![Text("Nama"), Text("Sisa Hutang")],
                    vec![Text("Pak Made"), Num(1_500_000.0)],
                    vec![Text("Bu Ketut"), Num(250_000.0)],
                    vec![Text("Pak Made"), Num(500_000.0)],
                ],
            ),
            ("Hutang", vec![vec![Text("Keterangan"), Text("Jumlah")]]),
        ],
    )
}

#[test]
fn test_convert_full_workbook() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("mitra.xlsx");
    full_workbook(&input)?;

    let seed = convert_file(&input, &SeedConfig::default())?;

    let names: Vec<_> = seed.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Andesit 20x40", "Paras Jogja", "Batu Candi"]);
    assert_eq!(seed.products[0].stock, 40);
    assert_eq!(seed.products[0].price, 110000.0);
    assert_eq!(seed.products[1].stock, 100);
    assert_eq!(seed.products[2].stock, 12);

    assert_eq!(seed.customers.len(), 2);
    assert_eq!(seed.customers[0].name, "Pak Made");
    assert_eq!(seed.customers[0].balance, 2_000_000.0);

    let suppliers: Vec<_> = seed.suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(suppliers, vec!["Rully", "Junaedi", "Ramdan", "PT Batu Alam"]);
    assert!(seed.transactions.is_none());

    Ok(())
}

#[test]
fn test_write_seed_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("mitra.xlsx");
    let output = dir.path().join("prisma").join("seed-data-from-excel.json");
    full_workbook(&input)?;

    let seed = convert_file(&input, &SeedConfig::default())?;
    seed.write_to(&output)?;

    let written = std::fs::read_to_string(&output)?;
    assert!(written.ends_with("}\n"));

    let json: Value = serde_json::from_str(&written)?;
    let object = json.as_object().unwrap();
    assert_eq!(
        object.keys().collect::<Vec<_>>().len(),
        3,
        "only products, customers and suppliers by default"
    );
    assert_eq!(json["products"][0]["hpp"], 85000.0);
    assert_eq!(json["products"][0]["unit"], "m2");
    assert_eq!(json["products"][0]["category"], "Batu Alam");
    assert_eq!(json["customers"][1]["phone"], "");
    assert_eq!(json["suppliers"][3]["name"], "PT Batu Alam");

    // Reading the file back gives the same document
    let reparsed: SeedData = serde_json::from_str(&written)?;
    assert_eq!(reparsed, seed);

    Ok(())
}

#[test]
fn test_fallback_sheets() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("gudang.xlsx");
    create_xlsx(
        &input,
        &[
            (
                "Stok Gudang",
                vec![
                    vec![Text("ITEM"), Text("HPP"), Text("Stok Akhir")],
                    vec![Text("Paras"), Num(50000.0), Num(0.0)],
                    vec![Text("Koral"), Num(0.0), Num(5.0)],
                ],
            ),
            (
                "PIUTANG",
                vec![
                    vec![Text("NAMA"), Text("UTANG"), Text("Sisa")],
                    vec![Text("(blank)"), Num(10.0), Num(10.0)],
                    vec![Text("Wayan"), Num(300_000.0), Num(0.0)],
                ],
            ),
        ],
    )?;

    let seed = convert_file(&input, &SeedConfig::default())?;

    assert_eq!(seed.products.len(), 1);
    assert_eq!(seed.products[0].name, "Paras");
    assert_eq!(seed.products[0].stock, 100);
    assert!((seed.products[0].price - 60000.0).abs() < 1e-6);

    assert_eq!(seed.customers.len(), 1);
    assert_eq!(seed.customers[0].balance, 300_000.0);

    assert_eq!(seed.suppliers.len(), 1);
    assert_eq!(seed.suppliers[0].name, "Supplier Default");

    Ok(())
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let result = convert_file(dir.path().join("nope.xlsx"), &SeedConfig::default());
    assert!(matches!(result, Err(SeedError::NotFound(_))));
}

#[test]
fn test_not_a_workbook() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("broken.xlsx");
    std::fs::write(&input, b"definitely not a zip archive")?;

    let result = convert_file(&input, &SeedConfig::default());
    assert!(matches!(result, Err(SeedError::Workbook(_))));
    Ok(())
}

#[test]
fn test_preview_real_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("mitra.xlsx");
    full_workbook(&input)?;

    let mut source = ExcelSource::open(&input)?;
    assert_eq!(source.sheet_names(), vec!["MAIN", "Piutang M", "Hutang"]);

    let preview = preview_workbook(&mut source, 2, None);
    let main = &preview.sheets[0];
    assert_eq!(main.columns[1], "ITEM");
    assert_eq!(main.rows.len(), 2);
    assert_eq!(main.rows[0][1], "Andesit 20x40");
    assert_eq!(main.total_rows, 6);
    assert_eq!(preview.sheets[2].total_rows, 0);

    Ok(())
}
