//! CSV Data Loader Module
//! Reads the emission factors dataset into a Polars DataFrame and validates
//! its schema.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{MARGINS, REQUIRED_COLUMNS, WITHOUT_MARGINS, WITH_MARGINS};

#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("dataset not found: {0}")]
    DatasetNotFound(PathBuf),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("dataset is missing required columns: {0}")]
    MissingColumns(String),
}

/// Load the emission factors dataset.
///
/// Every column is read as a string so NAICS codes keep their leading zeros
/// (the code is a categorical key, never a number). The three factor columns
/// are then cast to `Float64`. Any failure is fatal; there is no partial load.
pub fn load_records(path: &str) -> Result<DataFrame, DataLoadError> {
    if !Path::new(path).exists() {
        return Err(DataLoadError::DatasetNotFound(PathBuf::from(path)));
    }

    // infer_schema_length of 0 keeps every column as String
    let raw = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    let names: Vec<String> = raw
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !names.iter().any(|n| n == *c))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns(missing.join(", ")));
    }

    let df = raw
        .lazy()
        .with_columns([
            col(WITH_MARGINS).cast(DataType::Float64),
            col(WITHOUT_MARGINS).cast(DataType::Float64),
            col(MARGINS).cast(DataType::Float64),
        ])
        .collect()?;

    Ok(df)
}
