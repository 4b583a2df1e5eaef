//! Top-Industries View
//! Bar chart of the 20 industries with the highest mean emission factor.

use polars::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use super::{f64_values, str_values, ViewError};
use crate::charts::{ChartSpec, Layout, Trace};
use crate::data::{NAICS_TITLE, WITH_MARGINS};

const TOP_N: usize = 20;

/// Mean with-margins factor per NAICS title, descending, truncated to 20.
///
/// Groups are accumulated in encounter order and sorted with a stable sort,
/// so equal means keep their encounter order and repeated runs are identical.
pub fn top_industries(df: &DataFrame) -> Result<ChartSpec, ViewError> {
    let titles = str_values(df, NAICS_TITLE)?;
    let with_margins = f64_values(df, WITH_MARGINS)?;

    // (title, sum, count) in first-encounter order
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for i in 0..df.height() {
        if let (Some(title), Some(value)) = (titles[i].as_ref(), with_margins[i]) {
            match index.get(title) {
                Some(&idx) => {
                    groups[idx].1 += value;
                    groups[idx].2 += 1;
                }
                None => {
                    index.insert(title.clone(), groups.len());
                    groups.push((title.clone(), value, 1));
                }
            }
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(title, sum, n)| (title, sum / n as f64))
        .collect();

    // stable: ties keep encounter order
    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    means.truncate(TOP_N);

    debug!(groups = means.len(), "Top-industries view built");

    let (x, y): (Vec<String>, Vec<f64>) = means.into_iter().unzip();

    let trace = Trace::Bar { x, y, name: None };

    Ok(ChartSpec::new(
        trace,
        Layout::with_axes(
            "Top 20 Industries by Average Emission Factors",
            "Industry",
            "Average Emissions (kg CO2e/$)",
        ),
    ))
}
