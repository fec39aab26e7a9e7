//! Grouping of filtered records into per-year and per-site summaries.
//!
//! Each record contributes independently to every array whose field it
//! carries as a finite number, so a missing minimum never hides an average.
//! Values are rounded to chart precision as they are collected.

use crate::record::Record;
use crate::rounding::round3;
use crate::stats;
use std::collections::{BTreeMap, HashMap};

/// Everything collected for one year of a trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub averages: Vec<f64>,
    pub minimums: Vec<f64>,
    pub maximums: Vec<f64>,
    pub count: Option<i64>,
}

/// Everything collected for one site of a comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteGroup {
    pub site: String,
    pub averages: Vec<f64>,
    pub count: Option<i64>,
}

impl SiteGroup {
    /// Mean of the site's averages, rounded to chart precision.
    pub fn mean(&self) -> Option<f64> {
        stats::mean(&self.averages).map(round3)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    averages: Vec<f64>,
    minimums: Vec<f64>,
    maximums: Vec<f64>,
    count: Option<f64>,
}

impl Accumulator {
    fn push(mut self, record: &Record) -> Self {
        if let Some(v) = record.finite_average() {
            self.averages.push(round3(v));
        }
        if let Some(v) = record.finite_min() {
            self.minimums.push(round3(v));
        }
        if let Some(v) = record.finite_max() {
            self.maximums.push(round3(v));
        }
        if let Some(c) = record.finite_count() {
            self.count = Some(self.count.unwrap_or(0.0) + c);
        }
        self
    }

    fn rounded_count(&self) -> Option<i64> {
        self.count.map(|c| c.round() as i64)
    }
}

/// Group records by year, ascending. Years with no finite average are dropped.
pub fn group_by_year(records: &[&Record]) -> Vec<YearGroup> {
    let grouped = records
        .iter()
        .filter_map(|r| r.year.map(|year| (year, *r)))
        .fold(BTreeMap::<i32, Accumulator>::new(), |mut acc, (year, record)| {
            let slot = acc.remove(&year).unwrap_or_default();
            acc.insert(year, slot.push(record));
            acc
        });

    grouped
        .into_iter()
        .filter(|(_, acc)| !acc.averages.is_empty())
        .map(|(year, acc)| YearGroup {
            year,
            count: acc.rounded_count(),
            averages: acc.averages,
            minimums: acc.minimums,
            maximums: acc.maximums,
        })
        .collect()
}

/// Group records by site, in the order given by `site_order`.
///
/// Sites that are not in `site_order` are ignored; sites with no finite
/// average are dropped.
pub fn group_by_site(records: &[&Record], site_order: &[String]) -> Vec<SiteGroup> {
    let mut grouped = records
        .iter()
        .fold(HashMap::<&str, Accumulator>::new(), |mut acc, &record| {
            let slot = acc.remove(record.site.as_str()).unwrap_or_default();
            acc.insert(record.site.as_str(), slot.push(record));
            acc
        });

    site_order
        .iter()
        .filter_map(|site| {
            let acc = grouped.remove(site.as_str())?;
            if acc.averages.is_empty() {
                log::debug!("[WQ] aggregate: dropping site {site} with no finite averages");
                return None;
            }
            Some(SiteGroup {
                site: site.clone(),
                count: acc.rounded_count(),
                averages: acc.averages,
            })
        })
        .collect()
}
