//! Chart, render and export commands.

use crate::{write_output, PlotArgs};
use anyhow::Context;
use log::info;
use wq_core::export::{export_csv, export_file_name};
use wq_core::loader::parse_records;
use wq_core::model;
use wq_core::record::Record;
use wq_render::svg::render_svg;
use wq_render::RenderOptions;

pub(crate) fn load(records_csv: &str) -> anyhow::Result<Vec<Record>> {
    let text = std::fs::read_to_string(records_csv)
        .with_context(|| format!("reading records from {records_csv}"))?;
    parse_records(&text).with_context(|| format!("parsing {records_csv}"))
}

/// Print or write the chart model as pretty JSON.
pub fn run_chart(args: &PlotArgs, output: Option<&str>) -> anyhow::Result<()> {
    let records = load(&args.records_csv)?;
    let chart = model::build(&records, &args.to_config());
    info!("Built '{}' with {} elements", chart.title(), chart.len());
    let mut json = serde_json::to_string_pretty(&chart)?;
    json.push('\n');
    write_output(output, &json)
}

/// Render the chart to an SVG file.
pub fn run_render(
    args: &PlotArgs,
    output: &str,
    show_counts: bool,
    show_median_line: bool,
) -> anyhow::Result<()> {
    let records = load(&args.records_csv)?;
    let chart = model::build(&records, &args.to_config());
    let options = RenderOptions {
        show_counts,
        show_median_line,
        ..RenderOptions::default()
    };
    let svg = render_svg(&chart, &options);
    info!("Rendered '{}' ({} elements)", chart.title(), chart.len());
    write_output(Some(output), &svg)
}

/// Write the rows behind the chart as CSV.
pub fn run_export(args: &PlotArgs, output: Option<&str>) -> anyhow::Result<()> {
    let records = load(&args.records_csv)?;
    let config = args.to_config();
    let csv = export_csv(&records, &config)?;
    let path = output.map_or_else(|| export_file_name(&config), str::to_string);
    write_output(Some(path.as_str()), &csv)
}
