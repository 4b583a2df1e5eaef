//! Hierarchical View
//! Treemap of emission factors, sector -> industry title.

use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use super::{f64_values, str_values, ViewError};
use crate::charts::{ChartSpec, ColorBar, Layout, Marker, Trace};
use crate::data::{NAICS_TITLE, SECTOR, WITHOUT_MARGINS, WITH_MARGINS};

#[derive(Default)]
struct NodeAgg {
    value: f64,
    color_sum: f64,
    count: usize,
}

impl NodeAgg {
    fn add(&mut self, value: f64, color: f64) {
        self.value += value;
        self.color_sum += color;
        self.count += 1;
    }

    fn mean_color(&self) -> f64 {
        self.color_sum / self.count as f64
    }
}

/// Two-level treemap: sector nodes, then one leaf per (sector, title) path.
///
/// Leaf area = with-margins factor, summed over duplicate titles within a
/// sector; sector area = sum of its leaves (`branchvalues = "total"`). Node
/// color = mean of the without-margins factor over the node's records.
pub fn hierarchy(df: &DataFrame) -> Result<ChartSpec, ViewError> {
    let sectors = str_values(df, SECTOR)?;
    let titles = str_values(df, NAICS_TITLE)?;
    let with_margins = f64_values(df, WITH_MARGINS)?;
    let without_margins = f64_values(df, WITHOUT_MARGINS)?;

    // encounter-order node tables keyed by sector / (sector, title)
    let mut sector_nodes: Vec<(String, NodeAgg)> = Vec::new();
    let mut sector_index: HashMap<String, usize> = HashMap::new();
    let mut leaf_nodes: Vec<((String, String), NodeAgg)> = Vec::new();
    let mut leaf_index: HashMap<(String, String), usize> = HashMap::new();

    for i in 0..df.height() {
        let (Some(sector), Some(title), Some(value), Some(color)) = (
            sectors[i].as_ref(),
            titles[i].as_ref(),
            with_margins[i],
            without_margins[i],
        ) else {
            continue;
        };

        let s_idx = *sector_index.entry(sector.clone()).or_insert_with(|| {
            sector_nodes.push((sector.clone(), NodeAgg::default()));
            sector_nodes.len() - 1
        });
        sector_nodes[s_idx].1.add(value, color);

        let leaf_key = (sector.clone(), title.clone());
        let l_idx = *leaf_index.entry(leaf_key.clone()).or_insert_with(|| {
            leaf_nodes.push((leaf_key, NodeAgg::default()));
            leaf_nodes.len() - 1
        });
        leaf_nodes[l_idx].1.add(value, color);
    }

    debug!(
        sectors = sector_nodes.len(),
        leaves = leaf_nodes.len(),
        "Hierarchical view built"
    );

    let total = sector_nodes.len() + leaf_nodes.len();
    let mut ids = Vec::with_capacity(total);
    let mut labels = Vec::with_capacity(total);
    let mut parents = Vec::with_capacity(total);
    let mut values = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total);

    for (sector, agg) in &sector_nodes {
        ids.push(sector.clone());
        labels.push(sector.clone());
        parents.push(String::new());
        values.push(agg.value);
        colors.push(agg.mean_color());
    }
    for ((sector, title), agg) in &leaf_nodes {
        ids.push(format!("{sector}/{title}"));
        labels.push(title.clone());
        parents.push(sector.clone());
        values.push(agg.value);
        colors.push(agg.mean_color());
    }

    let trace = Trace::Treemap {
        ids,
        labels,
        parents,
        values,
        branchvalues: "total".to_string(),
        marker: Some(Marker {
            color: Some(colors),
            colorbar: Some(ColorBar {
                title: "Base Emissions".to_string(),
            }),
        }),
    };

    Ok(ChartSpec::new(
        trace,
        Layout::titled("Taxonomic Distribution of Emission Factors by Sector and Industry"),
    ))
}
