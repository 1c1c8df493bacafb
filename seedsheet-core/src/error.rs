//! Error types for workbook reading and seed generation

use std::path::PathBuf;
use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parsing error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl From<calamine::Error> for SeedError {
    fn from(err: calamine::Error) -> Self {
        SeedError::Workbook(err.to_string())
    }
}
