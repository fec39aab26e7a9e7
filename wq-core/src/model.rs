//! Renderer-agnostic chart descriptors.
//!
//! A [`ChartModel`] is the only thing handed from aggregation to rendering.
//! It is rebuilt from scratch on every configuration change.

use crate::aggregate::{self, YearGroup};
use crate::axis::{self, AxisDomain};
use crate::config::{ChartKind, PlotConfiguration};
use crate::error::{ChartError, Result};
use crate::filter::RecordFilter;
use crate::labels::{wrap_label, AxisLabel, LABEL_WRAP_WIDTH};
use crate::record::Record;
use crate::stats::{self, BoxStatistics};
use serde::Serialize;

/// Box color for trend charts.
pub const TREND_COLOR: &str = "#2196F3";

/// Bar colors for comparison charts, assigned by position in the site selection.
pub const COMPARISON_PALETTE: [&str; 6] = [
    "#2196F3", "#FF5722", "#4CAF50", "#9C27B0", "#FFC107", "#607D8B",
];

/// Yearly box plots for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotModel {
    pub title: String,
    pub subtitle: Option<String>,
    /// Year labels, ascending.
    pub labels: Vec<String>,
    pub series: Vec<BoxStatistics>,
    /// Summed observation counts; `None` when no record carried one.
    pub counts: Vec<Option<i64>>,
    pub color: String,
}

/// Per-site mean bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarModel {
    pub title: String,
    pub subtitle: Option<String>,
    /// Site names exactly as selected. Used for lookups, never wrapped.
    pub keys: Vec<String>,
    /// Display labels, wrapped for the axis.
    pub labels: Vec<AxisLabel>,
    pub values: Vec<f64>,
    pub counts: Vec<Option<i64>>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartModel {
    Boxplot(BoxplotModel),
    Bar(BarModel),
}

impl ChartModel {
    /// An empty chart of the kind `config` asks for.
    pub fn empty_for(config: &PlotConfiguration) -> Self {
        let subtitle = year_range_text(config.start_year, config.end_year);
        match config.chart_type {
            ChartKind::Trend => ChartModel::Boxplot(BoxplotModel {
                title: trend_title(&config.parameter, config.resolved_trend_site()),
                subtitle,
                labels: Vec::new(),
                series: Vec::new(),
                counts: Vec::new(),
                color: TREND_COLOR.to_string(),
            }),
            ChartKind::Comparison => ChartModel::Bar(BarModel {
                title: comparison_title(&config.parameter),
                subtitle,
                keys: Vec::new(),
                labels: Vec::new(),
                values: Vec::new(),
                counts: Vec::new(),
                colors: Vec::new(),
            }),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartModel::Boxplot(_) => ChartKind::Trend,
            ChartModel::Bar(_) => ChartKind::Comparison,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartModel::Boxplot(m) => &m.title,
            ChartModel::Bar(m) => &m.title,
        }
    }

    pub fn subtitle(&self) -> Option<&str> {
        match self {
            ChartModel::Boxplot(m) => m.subtitle.as_deref(),
            ChartModel::Bar(m) => m.subtitle.as_deref(),
        }
    }

    /// Number of plotted elements.
    pub fn len(&self) -> usize {
        match self {
            ChartModel::Boxplot(m) => m.series.len(),
            ChartModel::Bar(m) => m.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts(&self) -> &[Option<i64>] {
        match self {
            ChartModel::Boxplot(m) => &m.counts,
            ChartModel::Bar(m) => &m.counts,
        }
    }

    /// Label of element `index` on a single line.
    pub fn label_text(&self, index: usize) -> Option<String> {
        match self {
            ChartModel::Boxplot(m) => m.labels.get(index).cloned(),
            ChartModel::Bar(m) => m.labels.get(index).map(AxisLabel::joined),
        }
    }

    /// Padded value domain for this chart. `None` when empty.
    pub fn axis_domain(&self) -> Option<AxisDomain> {
        axis::plan(self)
    }
}

/// Build the chart for one plot slot. Never fails: any inconsistency in the
/// configuration yields an empty chart of the requested kind.
pub fn build(records: &[Record], config: &PlotConfiguration) -> ChartModel {
    match try_build(records, config) {
        Ok(model) => model,
        Err(e) => {
            log::warn!("[WQ] build: {e}; showing empty chart");
            ChartModel::empty_for(config)
        }
    }
}

/// Build the chart for one plot slot, reporting why a configuration could
/// not be charted.
pub fn try_build(records: &[Record], config: &PlotConfiguration) -> Result<ChartModel> {
    if config.parameter.trim().is_empty() {
        return Err(ChartError::NoParameter);
    }
    if let (Some(start), Some(end)) = (config.start_year, config.end_year) {
        if start > end {
            return Err(ChartError::InvertedYearRange { start, end });
        }
    }
    let model = match config.chart_type {
        ChartKind::Trend => ChartModel::Boxplot(build_trend(records, config)?),
        ChartKind::Comparison => ChartModel::Bar(build_comparison(records, config)),
    };
    log::debug!(
        "[WQ] build: {} chart '{}' with {} elements",
        config.chart_type.as_str(),
        model.title(),
        model.len()
    );
    Ok(model)
}

fn build_trend(records: &[Record], config: &PlotConfiguration) -> Result<BoxplotModel> {
    let site = config
        .resolved_trend_site()
        .ok_or(ChartError::NoSitesSelected)?;
    let matched = RecordFilter::from_config(config).apply(records);
    let (labels, series, counts) = aggregate::group_by_year(&matched)
        .iter()
        .filter_map(|group| trend_box(group).map(|stats| (group, stats)))
        .fold(
            (Vec::new(), Vec::new(), Vec::new()),
            |(mut labels, mut series, mut counts), (group, stats)| {
                labels.push(group.year.to_string());
                series.push(stats);
                counts.push(group.count);
                (labels, series, counts)
            },
        );

    Ok(BoxplotModel {
        title: trend_title(&config.parameter, Some(site)),
        subtitle: year_range_text(config.start_year, config.end_year),
        labels,
        series,
        counts,
        color: TREND_COLOR.to_string(),
    })
}

/// Box statistics of a year's averages, with whiskers taken from the
/// declared extremes. A missing declared extreme falls back to the mean of
/// the averages so the whisker stays finite.
fn trend_box(group: &YearGroup) -> Option<BoxStatistics> {
    let summary = BoxStatistics::from_values(&group.averages)?;
    let fallback = summary.mean.unwrap_or(summary.median);
    let min = stats::min_of(&group.minimums).unwrap_or(fallback);
    let max = stats::max_of(&group.maximums).unwrap_or(fallback);
    Some(summary.with_whiskers(min, max))
}

fn build_comparison(records: &[Record], config: &PlotConfiguration) -> BarModel {
    let matched = RecordFilter::from_config(config).apply(records);
    let groups = aggregate::group_by_site(&matched, &config.selected_sites);

    let mut model = BarModel {
        title: comparison_title(&config.parameter),
        subtitle: year_range_text(config.start_year, config.end_year),
        keys: Vec::with_capacity(groups.len()),
        labels: Vec::with_capacity(groups.len()),
        values: Vec::with_capacity(groups.len()),
        counts: Vec::with_capacity(groups.len()),
        colors: Vec::with_capacity(groups.len()),
    };
    for group in groups {
        let Some(mean) = group.mean() else {
            continue;
        };
        let slot = config
            .selected_sites
            .iter()
            .position(|s| *s == group.site)
            .unwrap_or(model.keys.len());
        model.labels.push(wrap_label(&group.site, LABEL_WRAP_WIDTH));
        model.values.push(mean);
        model.counts.push(group.count);
        model
            .colors
            .push(COMPARISON_PALETTE[slot % COMPARISON_PALETTE.len()].to_string());
        model.keys.push(group.site);
    }
    model
}

fn trend_title(parameter: &str, site: Option<&str>) -> String {
    match site {
        Some(site) => format!("{} at {}", parameter.trim(), site),
        None => parameter.trim().to_string(),
    }
}

fn comparison_title(parameter: &str) -> String {
    format!("{} by site", parameter.trim())
}

/// Human-readable year range, `None` when unconstrained.
pub fn year_range_text(start: Option<i32>, end: Option<i32>) -> Option<String> {
    match (start, end) {
        (Some(s), Some(e)) if s == e => Some(s.to_string()),
        (Some(s), Some(e)) => Some(format!("{s}-{e}")),
        (Some(s), None) => Some(format!("{s} onward")),
        (None, Some(e)) => Some(format!("through {e}")),
        (None, None) => None,
    }
}
