//! Report module - assembling and presenting the figures
//!
//! The report is a heading plus five captioned figures. Presentation goes
//! through the [`Renderer`] trait, which mirrors the two primitives the host
//! rendering collaborator exposes: a markdown text block and a chart
//! specification. Emission order is fixed and significant (Figure 1..5).

use polars::prelude::*;
use rayon::prelude::*;
use serde_json::json;
use std::io::Write;
use thiserror::Error;
use tracing::info;

use crate::charts::ChartSpec;
use crate::views::{self, ViewError};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize chart: {0}")]
    Json(#[from] serde_json::Error),
}

/// The host collaborator's rendering primitives.
pub trait Renderer {
    fn emit_text(&mut self, markdown: &str) -> Result<(), ReportError>;
    fn emit_chart(&mut self, chart: &ChartSpec) -> Result<(), ReportError>;
}

/// Writes one JSON object per emission, one per line.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn emit_text(&mut self, markdown: &str) -> Result<(), ReportError> {
        let line = serde_json::to_string(&json!({ "kind": "text", "markdown": markdown }))?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn emit_chart(&mut self, chart: &ChartSpec) -> Result<(), ReportError> {
        let figure = serde_json::to_value(chart)?;
        let line = serde_json::to_string(&json!({ "kind": "chart", "figure": figure }))?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// One figure: its markdown caption block and the chart itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub caption: String,
    pub chart: ChartSpec,
}

/// The assembled report, ready to present.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub heading: String,
    pub figures: Vec<Figure>,
}

impl Report {
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Emit the report: the heading, then per figure its caption followed by
    /// its chart. Six text blocks, five charts, fixed order.
    pub fn present(&self, renderer: &mut dyn Renderer) -> Result<(), ReportError> {
        renderer.emit_text(&self.heading)?;
        for figure in &self.figures {
            renderer.emit_text(&figure.caption)?;
            renderer.emit_chart(&figure.chart)?;
        }
        Ok(())
    }
}

const HEADING: &str = "# Supply Chain Emission Factors Analysis";

const CAPTIONS: [&str; 5] = [
    "## Emission Factors Distribution\n\
     Figure 1 illustrates the distribution of supply chain emission factors across different \
     industries. Each point represents an industry (by NAICS code), with color indicating the \
     base emissions before margins. The vertical position shows the total emission factor \
     including margins.",
    "## Sector Density Analysis\n\
     Figure 2 presents a density heatmap of emission factors by industry sector (first 2 digits \
     of NAICS code). The intensity shows the concentration of industries with particular \
     emission profiles, helping identify sectors that typically have higher supply chain \
     emissions.",
    "## High Emission Industries\n\
     Figure 3 shows the top 20 industries with the highest average emission factors. This \
     analysis helps identify which specific economic activities contribute most to supply chain \
     emissions per dollar of output.",
    "## Hierarchical Sector Distribution\n\
     Figure 4 depicts the hierarchical relationship between industry sectors and specific \
     industries. The size of each rectangle represents the relative magnitude of emissions, \
     while the color indicates the base emission intensity before margins are applied.",
    "## Emission Components Breakdown\n\
     Figure 5 examines the composition of emission factors for the top 20 industries, showing \
     how much comes from direct emissions versus supply chain margins. This decomposition helps \
     identify where emission reductions might be most effective.",
];

type ViewBuilder<'a> = Box<dyn Fn() -> Result<ChartSpec, ViewError> + Send + Sync + 'a>;

/// Build all five figures from the loaded table and its sector-augmented
/// variant.
///
/// The builders are independent, so they run in parallel; results are
/// collected in the fixed figure order, which is all the presenter needs.
pub fn build_report(records: &DataFrame, sectored: &DataFrame) -> Result<Report, ViewError> {
    let builders: Vec<ViewBuilder> = vec![
        Box::new(|| views::distribution(records)),
        Box::new(|| views::sector_density(sectored)),
        Box::new(|| views::top_industries(records)),
        Box::new(|| views::hierarchy(sectored)),
        Box::new(|| views::component_breakdown(records)),
    ];

    let charts: Vec<ChartSpec> = builders
        .par_iter()
        .map(|build| build())
        .collect::<Result<_, _>>()?;

    info!(figures = charts.len(), "All views built");

    let figures = CAPTIONS
        .iter()
        .zip(charts)
        .map(|(caption, chart)| Figure {
            caption: caption.to_string(),
            chart,
        })
        .collect();

    Ok(Report {
        heading: HEADING.to_string(),
        figures,
    })
}
