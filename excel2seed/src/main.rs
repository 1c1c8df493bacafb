use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use seedsheet_core::config::DEFAULT_CONFIG_FILE;
use seedsheet_core::{ExcelSource, SeedConfig, SeedData, SeedError, SheetSource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excel2seed")]
#[command(about = "Convert an inventory workbook into a seed-data JSON file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file (defaults to the configured input)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output JSON file (defaults to the configured output)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Also extract sales transactions
    #[arg(long)]
    with_transactions: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    config.validate().context("Invalid configuration")?;

    if let Some(file) = cli.file {
        config.input = file;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.with_transactions {
        config.transactions.enabled = true;
    }

    println!("Reading Excel file: {}", config.input.display());

    let mut source = match ExcelSource::open(&config.input) {
        Ok(source) => source,
        Err(SeedError::NotFound(path)) => {
            eprintln!(
                "{}",
                format!("❌ Error: File not found: {}", path.display()).red()
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to open workbook: {}", config.input.display()));
        }
    };
    println!("Available sheets: {:?}", source.sheet_names());

    let seed = SeedData::build(&mut source, &config);

    println!("\nWriting to {}...", config.output.display());
    seed.write_to(&config.output)
        .with_context(|| format!("Failed to write seed file: {}", config.output.display()))?;

    let summary = seed.summary();
    println!("\n{}", "✅ Success!".green().bold());
    println!("   Products: {}", summary.products);
    println!("   Customers: {}", summary.customers);
    println!("   Suppliers: {}", summary.suppliers);
    if let Some(transactions) = summary.transactions {
        println!("   Transactions: {}", transactions);
    }
    println!("\nSeed file created: {}", config.output.display().to_string().cyan());
    println!("\nNext steps:");
    println!("1. Review the generated file");
    println!("2. Update prisma/seed.ts to use this file");
    println!("3. Run: npm run db:seed");

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<SeedConfig> {
    if let Some(config_path) = path {
        return SeedConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    // Try to load default config from current directory if it exists
    let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_config_path.exists() {
        SeedConfig::from_file(&default_config_path).with_context(|| {
            format!(
                "Failed to load config from {}",
                default_config_path.display()
            )
        })
    } else {
        Ok(SeedConfig::default())
    }
}
