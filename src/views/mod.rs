//! Views module - the five report views
//!
//! Each builder consumes the loaded table (plus the derived sector column
//! where needed) and produces one chart specification. Builders are pure and
//! independent of each other.

mod components;
mod heatmap;
mod scatter;
mod top_industries;
mod treemap;

pub use components::component_breakdown;
pub use heatmap::sector_density;
pub use scatter::distribution;
pub use top_industries::top_industries;
pub use treemap::hierarchy;

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("view input error: {0}")]
    Polars(#[from] PolarsError),
}

/// Materialize a string column as per-row optionals, preserving row order.
pub(crate) fn str_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ViewError> {
    let ca = df.column(name)?.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Materialize a float column as per-row optionals, preserving row order.
pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ViewError> {
    let ca = df.column(name)?.f64()?;
    Ok(ca.into_iter().collect())
}
