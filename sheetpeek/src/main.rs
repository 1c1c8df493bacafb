use anyhow::Result;
use clap::{Parser, ValueEnum};
use seedsheet_core::ExcelSource;
use seedsheet_core::config::DEFAULT_INPUT;
use seedsheet_core::inspect::{DEFAULT_SAMPLE_ROWS, preview_workbook};
use std::path::PathBuf;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetpeek")]
#[command(about = "Print sheet names, column headers and sample rows of a workbook")]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    file: PathBuf,

    /// Number of sample rows per sheet
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    rows: usize,

    /// Only show this sheet
    #[arg(short, long, value_name = "SHEET")]
    sheet: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if matches!(cli.format, OutputFormat::Human) {
        println!("Analyzing file: {}", cli.file.display());
    }

    let mut source = match ExcelSource::open(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening file: {}", e);
            std::process::exit(1);
        }
    };

    let preview = preview_workbook(&mut source, cli.rows, cli.sheet.as_deref());

    if let Some(target) = &cli.sheet {
        if preview.sheets.is_empty() {
            anyhow::bail!(
                "Sheet '{}' not found. Available sheets: {:?}",
                target,
                preview.sheet_names
            );
        }
    }

    match cli.format {
        OutputFormat::Human => formatter::print_human(&preview),
        OutputFormat::Json => formatter::print_json(&preview)?,
    }

    Ok(())
}
