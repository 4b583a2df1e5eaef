//! Chart Specification Module
//! A small, serde-serializable figure model shaped like the plotly JSON
//! schema. The crate only builds these specifications; turning them into
//! pixels or HTML is the host renderer's job.

use serde::Serialize;

/// A complete figure: one or more traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn new(trace: Trace, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }

    pub fn with_traces(traces: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data: traces,
            layout,
        }
    }
}

/// One trace, tagged with its plotly trace type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter {
        x: Vec<String>,
        y: Vec<f64>,
        mode: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
        #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
        hover_text: Option<Vec<String>>,
    },
    /// 2-D density histogram. Binning and per-cell aggregation of `z` happen
    /// in the charting layer according to `histfunc`; cells without records
    /// stay undefined rather than zero.
    Histogram2d {
        x: Vec<String>,
        y: Vec<f64>,
        z: Vec<f64>,
        histfunc: String,
    },
    Bar {
        x: Vec<String>,
        y: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Treemap {
        ids: Vec<String>,
        labels: Vec<String>,
        parents: Vec<String>,
        values: Vec<f64>,
        branchvalues: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
}

/// Marker styling; `color` carries one number per point for continuous scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
}

impl Layout {
    /// Layout with a title only (hierarchical charts have no axes).
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            xaxis: None,
            yaxis: None,
            barmode: None,
        }
    }

    /// Layout with a title and labelled x/y axes.
    pub fn with_axes(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            xaxis: Some(Axis {
                title: x_label.to_string(),
            }),
            yaxis: Some(Axis {
                title: y_label.to_string(),
            }),
            barmode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
}
