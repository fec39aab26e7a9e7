//! Row selection shared by chart building and CSV export.
//!
//! Both paths go through [`RecordFilter`] so a download always contains
//! exactly the rows behind the displayed aggregate.

use crate::config::{ChartKind, PlotConfiguration};
use crate::record::Record;

/// Which sites a filter admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// Comparison charts: any of the selected sites.
    Any(Vec<String>),
    /// Trend charts: the single resolved site.
    Single(String),
    /// No site could be resolved; nothing matches.
    Nothing,
}

impl SiteSelection {
    fn admits(&self, site: &str) -> bool {
        match self {
            SiteSelection::Any(sites) => sites.iter().any(|s| s == site),
            SiteSelection::Single(s) => s == site,
            SiteSelection::Nothing => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    parameter: String,
    sites: SiteSelection,
    start_year: Option<i32>,
    end_year: Option<i32>,
}

impl RecordFilter {
    pub fn new(
        parameter: &str,
        sites: SiteSelection,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Self {
        Self {
            parameter: parameter.trim().to_string(),
            sites,
            start_year,
            end_year,
        }
    }

    /// Build the filter a plot slot uses, resolving the trend site.
    pub fn from_config(config: &PlotConfiguration) -> Self {
        let sites = match config.chart_type {
            ChartKind::Comparison => SiteSelection::Any(config.selected_sites.clone()),
            ChartKind::Trend => match config.resolved_trend_site() {
                Some(site) => SiteSelection::Single(site.to_string()),
                None => SiteSelection::Nothing,
            },
        };
        Self::new(&config.parameter, sites, config.start_year, config.end_year)
    }

    pub fn sites(&self) -> &SiteSelection {
        &self.sites
    }

    pub fn matches(&self, record: &Record) -> bool {
        let Some(year) = record.year else {
            return false;
        };
        record.parameter.trim() == self.parameter
            && self.sites.admits(&record.site)
            && self.start_year.map_or(true, |start| year >= start)
            && self.end_year.map_or(true, |end| year <= end)
    }

    /// Matching records, in input order.
    pub fn apply<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Secchi", "A", 2019).with_average(4.0),
            Record::new(" Secchi ", "A", 2020).with_average(5.0),
            Record::new("Secchi", "B", 2021).with_average(6.0),
            Record::new("Secchi", "a", 2021).with_average(6.5),
            Record::new("Chlorophyll", "A", 2020).with_average(1.0),
            Record {
                year: None,
                ..Record::new("Secchi", "A", 0)
            },
        ]
    }

    #[test]
    fn parameter_compare_is_trimmed() {
        let filter = RecordFilter::new("Secchi ", SiteSelection::Single("A".into()), None, None);
        let years: Vec<_> = filter.apply(&sample()).iter().map(|r| r.year).collect();
        assert_eq!(years, vec![Some(2019), Some(2020)]);
    }

    #[test]
    fn site_compare_is_case_sensitive() {
        let filter = RecordFilter::new(
            "Secchi",
            SiteSelection::Any(vec!["B".into(), "C".into()]),
            None,
            None,
        );
        let rows = sample();
        let matched = filter.apply(&rows);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].site, "B");
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let filter = RecordFilter::new(
            "Secchi",
            SiteSelection::Any(vec!["A".into(), "B".into()]),
            Some(2020),
            Some(2021),
        );
        let years: Vec<_> = filter.apply(&sample()).iter().map(|r| r.year).collect();
        assert_eq!(years, vec![Some(2020), Some(2021)]);
    }

    #[test]
    fn missing_year_never_matches() {
        let filter = RecordFilter::new("Secchi", SiteSelection::Single("A".into()), None, None);
        assert!(filter.apply(&sample()).iter().all(|r| r.year.is_some()));
    }

    #[test]
    fn trend_config_resolves_single_site() {
        let config = PlotConfiguration::new("Secchi", ["A", "B"], ChartKind::Trend);
        let filter = RecordFilter::from_config(&config);
        assert_eq!(filter.sites(), &SiteSelection::Single("B".into()));
    }

    #[test]
    fn empty_trend_selection_matches_nothing() {
        let config = PlotConfiguration::new("Secchi", Vec::<String>::new(), ChartKind::Trend);
        let filter = RecordFilter::from_config(&config);
        assert!(filter.apply(&sample()).is_empty());
    }
}
