//! Plot configuration handed to the engine by the filter UI.

use serde::{Deserialize, Serialize};

/// Which chart family a plot slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Per-year box plots for a single site.
    #[default]
    Trend,
    /// Per-site bars of mean values.
    Comparison,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Trend => "trend",
            ChartKind::Comparison => "comparison",
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trend" => Ok(ChartKind::Trend),
            "comparison" => Ok(ChartKind::Comparison),
            other => Err(format!("unknown chart type '{other}'")),
        }
    }
}

/// Configuration for one plot slot.
///
/// Optional fields that are missing mean "no constraint". The engine never
/// mutates a configuration; navigation helpers return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfiguration {
    pub parameter: String,
    /// Ordered, case-sensitive site names. Deduplicated by the caller.
    pub selected_sites: Vec<String>,
    pub chart_type: ChartKind,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// Which selected site a trend chart shows. Wraps modulo the site count.
    pub trend_site_index: Option<i64>,
}

impl PlotConfiguration {
    pub fn new<I, S>(parameter: impl Into<String>, sites: I, chart_type: ChartKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameter: parameter.into(),
            selected_sites: sites.into_iter().map(Into::into).collect(),
            chart_type,
            start_year: None,
            end_year: None,
            trend_site_index: None,
        }
    }

    pub fn with_years(mut self, start_year: Option<i32>, end_year: Option<i32>) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_trend_site_index(mut self, index: i64) -> Self {
        self.trend_site_index = Some(index);
        self
    }

    /// Index into `selected_sites` for the trend chart.
    ///
    /// Any supplied index is wrapped into range, including negative ones.
    /// Without an index the last selected site is used, since the most
    /// recently added site is the one the user expects to see first.
    pub fn resolved_trend_index(&self) -> Option<usize> {
        let len = self.selected_sites.len();
        if len == 0 {
            return None;
        }
        match self.trend_site_index {
            Some(index) => Some(index.rem_euclid(len as i64) as usize),
            None => Some(len - 1),
        }
    }

    /// The single site a trend chart shows.
    pub fn resolved_trend_site(&self) -> Option<&str> {
        self.resolved_trend_index()
            .map(|i| self.selected_sites[i].as_str())
    }

    /// Step the trend site forward, wrapping past the last site.
    pub fn next_site(&self) -> Self {
        self.step_site(1)
    }

    /// Step the trend site backward, wrapping past the first site.
    pub fn previous_site(&self) -> Self {
        self.step_site(-1)
    }

    fn step_site(&self, delta: i64) -> Self {
        let mut next = self.clone();
        if let Some(current) = self.resolved_trend_index() {
            let len = self.selected_sites.len() as i64;
            next.trend_site_index = Some((current as i64 + delta).rem_euclid(len));
        }
        next
    }
}
