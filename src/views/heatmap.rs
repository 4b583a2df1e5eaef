//! Sector Density View
//! 2-D histogram of emission factors by NAICS sector.

use polars::prelude::*;
use tracing::debug;

use super::{f64_values, str_values, ViewError};
use crate::charts::{ChartSpec, Layout, Trace};
use crate::data::{SECTOR, WITHOUT_MARGINS, WITH_MARGINS};

/// Density of emission factors per sector.
///
/// Raw rows are passed through: x = sector code, y = with-margins factor,
/// z = without-margins factor. The charting layer bins them and aggregates z
/// per cell with `histfunc = "avg"` — the mean, not a count or sum; that
/// choice is part of the view's meaning. Cells with no records stay empty.
pub fn sector_density(df: &DataFrame) -> Result<ChartSpec, ViewError> {
    let sectors = str_values(df, SECTOR)?;
    let with_margins = f64_values(df, WITH_MARGINS)?;
    let without_margins = f64_values(df, WITHOUT_MARGINS)?;

    let mut x: Vec<String> = Vec::new();
    let mut y: Vec<f64> = Vec::new();
    let mut z: Vec<f64> = Vec::new();

    for i in 0..df.height() {
        if let (Some(sector), Some(w), Some(wo)) =
            (sectors[i].as_ref(), with_margins[i], without_margins[i])
        {
            x.push(sector.clone());
            y.push(w);
            z.push(wo);
        }
    }

    debug!(rows = x.len(), "Sector density view built");

    let trace = Trace::Histogram2d {
        x,
        y,
        z,
        histfunc: "avg".to_string(),
    };

    Ok(ChartSpec::new(
        trace,
        Layout::with_axes(
            "Density of Emission Factors by Industry Sector",
            "NAICS Sector Code",
            "Total Emissions",
        ),
    ))
}
