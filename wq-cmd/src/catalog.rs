//! Listing what a records file contains.

use crate::plot::load;
use crate::write_output;
use wq_core::catalog;

pub fn run_catalog(records_csv: &str, parameter: Option<&str>) -> anyhow::Result<()> {
    let records = load(records_csv)?;
    let listing = match parameter {
        None => catalog::parameters(&records)
            .into_iter()
            .map(|p| format!("{p}\n"))
            .collect::<String>(),
        Some(parameter) => describe_parameter(&records, parameter),
    };
    write_output(None, &listing)
}

fn describe_parameter(records: &[wq_core::record::Record], parameter: &str) -> String {
    let years = match catalog::year_extent(records, parameter) {
        Some((first, last)) => format!("years: {first}-{last}\n"),
        None => "years: none\n".to_string(),
    };
    let sites = catalog::sites_for(records, parameter);
    let mut out = format!("parameter: {}\n{}sites: {}\n", parameter.trim(), years, sites.len());
    for site in sites {
        out.push_str("  ");
        out.push_str(&site);
        out.push('\n');
    }
    out
}
