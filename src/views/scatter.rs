//! Distribution View
//! One scatter point per industry record, in insertion order.

use polars::prelude::*;
use tracing::debug;

use super::{f64_values, str_values, ViewError};
use crate::charts::{ChartSpec, ColorBar, Layout, Marker, Trace};
use crate::data::{NAICS_CODE, NAICS_TITLE, WITHOUT_MARGINS, WITH_MARGINS};

/// Emission factor distribution across industries.
///
/// x = NAICS code (categorical), y = with-margins factor, marker color =
/// without-margins factor, hover text = industry title. No aggregation; rows
/// with missing fields are dropped, everything else maps one-to-one.
pub fn distribution(df: &DataFrame) -> Result<ChartSpec, ViewError> {
    let codes = str_values(df, NAICS_CODE)?;
    let titles = str_values(df, NAICS_TITLE)?;
    let with_margins = f64_values(df, WITH_MARGINS)?;
    let without_margins = f64_values(df, WITHOUT_MARGINS)?;

    let mut x: Vec<String> = Vec::new();
    let mut y: Vec<f64> = Vec::new();
    let mut color: Vec<f64> = Vec::new();
    let mut hover: Vec<String> = Vec::new();

    for i in 0..df.height() {
        if let (Some(code), Some(title), Some(w), Some(wo)) = (
            codes[i].as_ref(),
            titles[i].as_ref(),
            with_margins[i],
            without_margins[i],
        ) {
            x.push(code.clone());
            y.push(w);
            color.push(wo);
            hover.push(title.clone());
        }
    }

    debug!(points = x.len(), "Distribution view built");

    let trace = Trace::Scatter {
        x,
        y,
        mode: "markers".to_string(),
        marker: Some(Marker {
            color: Some(color),
            colorbar: Some(ColorBar {
                title: "Base Emissions".to_string(),
            }),
        }),
        hover_text: Some(hover),
    };

    Ok(ChartSpec::new(
        trace,
        Layout::with_axes(
            "Distribution of Supply Chain Emission Factors by Industry",
            "NAICS Industry Code",
            "Total Emissions (kg CO2e/$)",
        ),
    ))
}
