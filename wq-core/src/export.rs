//! CSV download of the rows behind a chart.
//!
//! The export goes through the same [`RecordFilter`] the chart builder uses,
//! so the download can never disagree with what is plotted.

use crate::config::{ChartKind, PlotConfiguration};
use crate::filter::RecordFilter;
use crate::record::Record;

pub const EXPORT_HEADER: [&str; 7] = ["parameter", "site", "year", "average", "min", "max", "count"];

/// Rows selected for `config`, in input order.
pub fn export_rows<'r>(records: &'r [Record], config: &PlotConfiguration) -> Vec<&'r Record> {
    RecordFilter::from_config(config).apply(records)
}

/// Serialize the rows selected for `config` as CSV text with a header row.
pub fn export_csv(records: &[Record], config: &PlotConfiguration) -> anyhow::Result<String> {
    let rows = export_rows(records, config);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for record in &rows {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner()?;
    log::info!("[WQ] export: Wrote {} rows", rows.len());
    Ok(String::from_utf8(bytes)?)
}

/// File name for a slot's download, e.g. `secchi_lake_a_2015-2020.csv`.
pub fn export_file_name(config: &PlotConfiguration) -> String {
    let subject = match config.chart_type {
        ChartKind::Trend => config.resolved_trend_site().unwrap_or("trend").to_string(),
        ChartKind::Comparison => "comparison".to_string(),
    };
    let years = match (config.start_year, config.end_year) {
        (None, None) => String::new(),
        (start, end) => format!(
            "_{}-{}",
            start.map_or_else(|| "start".to_string(), |y| y.to_string()),
            end.map_or_else(|| "end".to_string(), |y| y.to_string())
        ),
    };
    format!("{}_{}{}.csv", slug(&config.parameter), slug(&subject), years)
}

fn slug(text: &str) -> String {
    let slug = text
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>();
    let collapsed = slug
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if collapsed.is_empty() {
        "chart".to_string()
    } else {
        collapsed
    }
}
