//! Component Breakdown View
//! Grouped bars splitting the largest emission factors into base and margin.

use polars::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

use super::{f64_values, str_values, ViewError};
use crate::charts::{ChartSpec, Layout, Trace};
use crate::data::{MARGINS, NAICS_TITLE, WITHOUT_MARGINS, WITH_MARGINS};

const TOP_N: usize = 20;

/// Base-versus-margin breakdown for the 20 records with the largest raw
/// with-margins factor.
///
/// Selection is by per-record value, not group mean, so this set of
/// industries can differ from the top-industries view. Ties resolve to row
/// order via stable sort.
pub fn component_breakdown(df: &DataFrame) -> Result<ChartSpec, ViewError> {
    let titles = str_values(df, NAICS_TITLE)?;
    let with_margins = f64_values(df, WITH_MARGINS)?;
    let without_margins = f64_values(df, WITHOUT_MARGINS)?;
    let margins = f64_values(df, MARGINS)?;

    let mut rows: Vec<(String, f64, f64, f64)> = Vec::new();
    for i in 0..df.height() {
        if let (Some(title), Some(w), Some(wo), Some(m)) = (
            titles[i].as_ref(),
            with_margins[i],
            without_margins[i],
            margins[i],
        ) {
            rows.push((title.clone(), w, wo, m));
        }
    }

    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    rows.truncate(TOP_N);

    debug!(records = rows.len(), "Component breakdown view built");

    let x: Vec<String> = rows.iter().map(|r| r.0.clone()).collect();
    let base: Vec<f64> = rows.iter().map(|r| r.2).collect();
    let margin: Vec<f64> = rows.iter().map(|r| r.3).collect();

    let traces = vec![
        Trace::Bar {
            x: x.clone(),
            y: base,
            name: Some(WITHOUT_MARGINS.to_string()),
        },
        Trace::Bar {
            x,
            y: margin,
            name: Some(MARGINS.to_string()),
        },
    ];

    let mut layout = Layout::with_axes(
        "Breakdown of Top 20 Emission Factors (Base vs Margins)",
        "Industry",
        "Emissions (kg CO2e/$)",
    );
    layout.barmode = Some("group".to_string());

    Ok(ChartSpec::with_traces(traces, layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn df_from(rows: &[(&str, f64, f64, f64)]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                NAICS_TITLE.into(),
                rows.iter().map(|r| r.0.to_string()).collect::<Vec<_>>(),
            ),
            Column::new(
                WITH_MARGINS.into(),
                rows.iter().map(|r| r.1).collect::<Vec<_>>(),
            ),
            Column::new(
                WITHOUT_MARGINS.into(),
                rows.iter().map(|r| r.2).collect::<Vec<_>>(),
            ),
            Column::new(MARGINS.into(), rows.iter().map(|r| r.3).collect::<Vec<_>>()),
        ])
        .unwrap()
    }

    #[test]
    fn test_selects_by_raw_value_not_group_mean() {
        // "Split Industry" appears twice with a high mean, but neither row
        // beats the single 0.9 record
        let df = df_from(&[
            ("Split Industry", 0.7, 0.5, 0.2),
            ("Split Industry", 0.8, 0.6, 0.2),
            ("Peak Industry", 0.9, 0.6, 0.3),
        ]);
        let spec = component_breakdown(&df).unwrap();
        match &spec.data[0] {
            Trace::Bar { x, .. } => {
                assert_eq!(x[0], "Peak Industry");
                assert_eq!(x.len(), 3);
            }
            other => panic!("unexpected trace: {other:?}"),
        }
    }

    #[test]
    fn test_two_grouped_traces_base_then_margin() {
        let df = df_from(&[("Rope Manufacturing", 0.62, 0.5, 0.12)]);
        let spec = component_breakdown(&df).unwrap();

        assert_eq!(spec.data.len(), 2);
        assert_eq!(spec.layout.barmode.as_deref(), Some("group"));
        match (&spec.data[0], &spec.data[1]) {
            (
                Trace::Bar {
                    y: base, name: n0, ..
                },
                Trace::Bar {
                    y: margin, name: n1, ..
                },
            ) => {
                assert_eq!(n0.as_deref(), Some(WITHOUT_MARGINS));
                assert_eq!(n1.as_deref(), Some(MARGINS));
                assert_eq!(base, &[0.5]);
                assert_eq!(margin, &[0.12]);
            }
            other => panic!("unexpected traces: {other:?}"),
        }
    }

    #[test]
    fn test_caps_at_20_records() {
        let rows: Vec<(String, f64, f64, f64)> = (0..25)
            .map(|i| (format!("Industry {i}"), 1.0 + i as f64, 0.5, 0.5))
            .collect();
        let borrowed: Vec<(&str, f64, f64, f64)> = rows
            .iter()
            .map(|(t, a, b, c)| (t.as_str(), *a, *b, *c))
            .collect();
        let spec = component_breakdown(&df_from(&borrowed)).unwrap();
        match &spec.data[0] {
            Trace::Bar { x, .. } => {
                assert_eq!(x.len(), 20);
                assert_eq!(x[0], "Industry 24");
            }
            other => panic!("unexpected trace: {other:?}"),
        }
    }
}
