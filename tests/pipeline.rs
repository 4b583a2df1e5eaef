//! End-to-end pipeline test: CSV file in, rendered JSON-lines report out.

use emission_report::charts::Trace;
use emission_report::data::loader::load_records;
use emission_report::data::transform::with_sector;
use emission_report::data::SECTOR;
use emission_report::report::{build_report, JsonLinesRenderer};
use std::env;
use std::fs;

const CSV: &str = "\
2017 NAICS Code,2017 NAICS Title,Supply Chain Emission Factors without Margins,Margins of Supply Chain Emission Factors,Supply Chain Emission Factors with Margins
111110,Soybean Farming,0.70,0.20,0.90
311111,Dog and Cat Food Manufacturing,0.30,0.15,0.45
314994,Rope Manufacturing,0.50,0.12,0.62
7,Degenerate Code Industry,0.10,0.05,0.15
";

fn write_fixture(name: &str) -> String {
    let path = format!("{}/{}", env::temp_dir().display(), name);
    fs::write(&path, CSV).unwrap();
    path
}

fn render_to_string(path: &str) -> String {
    let records = load_records(path).unwrap();
    let sectored = with_sector(&records).unwrap();
    let report = build_report(&records, &sectored).unwrap();

    let mut renderer = JsonLinesRenderer::new(Vec::new());
    report.present(&mut renderer).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn full_report_has_fixed_interleaved_order() {
    let path = write_fixture("emission_report_pipeline_order.csv");
    let output = render_to_string(&path);
    fs::remove_file(&path).unwrap();

    let kinds: Vec<String> = output
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["kind"].as_str().unwrap().to_string()
        })
        .collect();

    let expected: Vec<&str> = std::iter::once("text")
        .chain(["text", "chart"].into_iter().cycle().take(10))
        .collect();
    assert_eq!(kinds, expected);

    // captions carry the figure numbering in order
    let texts: Vec<String> = output
        .lines()
        .filter_map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            (v["kind"] == "text").then(|| v["markdown"].as_str().unwrap().to_string())
        })
        .collect();
    for (i, caption) in texts[1..].iter().enumerate() {
        assert!(caption.contains(&format!("Figure {}", i + 1)));
    }
}

#[test]
fn pipeline_is_idempotent() {
    let path = write_fixture("emission_report_pipeline_idempotent.csv");
    let first = render_to_string(&path);
    let second = render_to_string(&path);
    fs::remove_file(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sector_codes_derive_from_naics_prefix() {
    let path = write_fixture("emission_report_pipeline_sector.csv");
    let records = load_records(&path).unwrap();
    let sectored = with_sector(&records).unwrap();
    fs::remove_file(&path).unwrap();

    let sectors = sectored.column(SECTOR).unwrap().str().unwrap();
    assert_eq!(sectors.get(0), Some("11"));
    assert_eq!(sectors.get(1), Some("31"));
    // a code shorter than two characters passes through unchanged
    assert_eq!(sectors.get(3), Some("7"));
}

#[test]
fn singleton_group_mean_is_its_value() {
    let path = write_fixture("emission_report_pipeline_mean.csv");
    let records = load_records(&path).unwrap();
    let sectored = with_sector(&records).unwrap();
    let report = build_report(&records, &sectored).unwrap();
    fs::remove_file(&path).unwrap();

    // Figure 3 is the top-industries bar chart
    let chart = &report.figures[2].chart;
    match &chart.data[0] {
        Trace::Bar { x, y, .. } => {
            let idx = x.iter().position(|t| t == "Rope Manufacturing").unwrap();
            assert_eq!(y[idx], 0.62);
        }
        other => panic!("unexpected trace: {other:?}"),
    }
}
