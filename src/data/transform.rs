//! Sector Transformer Module
//! Derives the two-digit NAICS sector code from the industry code.

use polars::prelude::*;

use super::{NAICS_CODE, SECTOR};

/// Return a new DataFrame with the derived `Sector` column appended.
///
/// The sector is the first two characters of the NAICS code. Codes shorter
/// than two characters yield the whole code, and a null code yields a null
/// sector; both are degenerate-but-valid values, never errors. The input
/// DataFrame is not mutated.
pub fn with_sector(df: &DataFrame) -> Result<DataFrame, PolarsError> {
    let codes = df.column(NAICS_CODE)?.str()?;
    let sectors: Vec<Option<String>> = codes
        .into_iter()
        .map(|code| code.map(sector_of))
        .collect();

    let mut out = df.clone();
    out.with_column(Column::new(SECTOR.into(), sectors))?;
    Ok(out)
}

/// First two characters of a NAICS code, by character rather than byte.
pub fn sector_of(code: &str) -> String {
    code.chars().take(2).collect()
}
