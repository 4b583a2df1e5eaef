//! Supply chain emission factors report generator.
//!
//! Loads the EPA supply-chain emission factors CSV, derives five analytical
//! views (distribution scatter, sector density heatmap, top-industries bar,
//! sector/industry treemap, component breakdown bar), and presents them as an
//! ordered stream of markdown text and chart specifications.

pub mod charts;
pub mod data;
pub mod report;
pub mod views;

/// Fixed relative path of the input dataset.
pub const DATA_PATH: &str = "data/SupplyChain.csv";
