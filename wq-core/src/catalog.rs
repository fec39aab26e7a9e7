//! Option lists for the filter controls, derived from the loaded records.

use crate::record::Record;
use std::collections::BTreeSet;

/// Distinct parameter names, sorted.
pub fn parameters(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.parameter.trim())
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct sites with at least one record for `parameter`, sorted.
pub fn sites_for(records: &[Record], parameter: &str) -> Vec<String> {
    let parameter = parameter.trim();
    records
        .iter()
        .filter(|r| r.parameter.trim() == parameter)
        .map(|r| r.site.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// First and last year observed for `parameter`.
pub fn year_extent(records: &[Record], parameter: &str) -> Option<(i32, i32)> {
    let parameter = parameter.trim();
    let years = records
        .iter()
        .filter(|r| r.parameter.trim() == parameter)
        .filter_map(|r| r.year)
        .collect::<BTreeSet<_>>();
    Some((*years.first()?, *years.last()?))
}
