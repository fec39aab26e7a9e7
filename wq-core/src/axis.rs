//! Value-axis planning.
//!
//! Box plots get hard bounds so whiskers never touch the frame. Bars get
//! suggested bounds: the renderer's nice-tick rounding wins over them,
//! since forcing exact bounds on bars produces duplicated tick labels.

use crate::model::ChartModel;
use crate::rounding::round3;
use serde::Serialize;

/// Relative headroom added above suggested bounds before tick rounding.
pub const BAR_GRACE: f64 = 0.10;

/// Padding never drops below this, so near-constant series still get room.
pub const MIN_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisBounds {
    /// The renderer must use `min`/`max` exactly.
    Strict,
    /// The renderer may widen `min`/`max` to enclosing ticks after adding
    /// `grace` of the range as headroom.
    Suggested { grace: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
    pub bounds: AxisBounds,
}

/// Tick positions resolved for a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    /// Final lower bound of the axis.
    pub min: f64,
    /// Final upper bound of the axis.
    pub max: f64,
    pub step: f64,
    pub values: Vec<f64>,
}

/// `max(span * 0.16, |data_max| * 0.02, 0.1)`.
pub fn padding(span: f64, data_max: f64) -> f64 {
    (span * 0.16).max(data_max.abs() * 0.02).max(MIN_PADDING)
}

/// Hard bounds for box plots.
pub fn box_domain(data_min: f64, data_max: f64) -> AxisDomain {
    let span = data_max - data_min;
    let pad = padding(span, data_max);
    let mut min = (data_min - pad).floor();
    let max = (data_max + 2.0 * pad).ceil();
    // Tightly clustered small positive values would otherwise show a
    // misleading negative axis.
    if data_min >= 0.0 && span < 0.5 {
        min = min.max(0.0);
    }
    AxisDomain {
        min,
        max,
        bounds: AxisBounds::Strict,
    }
}

/// Suggested bounds for bar charts, anchored at zero for non-negative data.
pub fn bar_domain(data_min: f64, data_max: f64) -> AxisDomain {
    let span = data_max - data_min;
    let pad = padding(span, data_max);
    let min = if data_min >= 0.0 {
        0.0
    } else {
        (data_min - pad).floor()
    };
    AxisDomain {
        min,
        max: (data_max + pad).max(0.0),
        bounds: AxisBounds::Suggested { grace: BAR_GRACE },
    }
}

/// Plan the value axis for a chart. `None` for an empty chart.
pub fn plan(model: &ChartModel) -> Option<AxisDomain> {
    match model {
        ChartModel::Boxplot(boxes) => {
            let (min, max) = extent(
                boxes
                    .series
                    .iter()
                    .flat_map(|s| [s.min, s.q1, s.median, s.q3, s.max]),
            )?;
            Some(box_domain(min, max))
        }
        ChartModel::Bar(bars) => {
            let (min, max) = extent(bars.values.iter().copied())?;
            Some(bar_domain(min, max))
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

/// A 1, 2 or 5 times a power of ten step giving roughly `target` intervals.
pub fn nice_step(range: f64, target: usize) -> f64 {
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }
    let raw = range / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl AxisDomain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Resolve tick marks for roughly `target` intervals.
    ///
    /// Strict domains keep their bounds and only place ticks inside them.
    /// Suggested domains add their grace and then widen to the enclosing
    /// ticks.
    pub fn ticks(&self, target: usize) -> Ticks {
        match self.bounds {
            AxisBounds::Strict => {
                let step = nice_step(self.span(), target);
                let first = (self.min / step).ceil() as i64;
                let last = (self.max / step).floor() as i64;
                Ticks {
                    min: self.min,
                    max: self.max,
                    step,
                    values: (first..=last).map(|i| round3(i as f64 * step)).collect(),
                }
            }
            AxisBounds::Suggested { grace } => {
                let range = self.span();
                let max = self.max + range * grace;
                let min = if self.min < 0.0 {
                    self.min - range * grace
                } else {
                    self.min
                };
                let step = nice_step(max - min, target);
                let first = (min / step).floor() as i64;
                let last = (max / step).ceil() as i64;
                Ticks {
                    min: round3(first as f64 * step),
                    max: round3(last as f64 * step),
                    step,
                    values: (first..=last).map(|i| round3(i as f64 * step)).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_has_a_floor() {
        assert_eq!(padding(0.0, 0.0), 0.1);
        assert_eq!(padding(10.0, 5.0), 1.6);
        assert_eq!(padding(0.0, 100.0), 2.0);
    }

    #[test]
    fn box_domain_pads_and_rounds_outward() {
        let domain = box_domain(5.0, 7.0);
        // span 2, pad 0.32
        assert_eq!(domain.min, 4.0);
        assert_eq!(domain.max, 8.0);
        assert_eq!(domain.bounds, AxisBounds::Strict);
    }

    #[test]
    fn box_domain_clamps_tight_positive_clusters() {
        let domain = box_domain(0.05, 0.2);
        assert_eq!(domain.min, 0.0);
        assert_eq!(domain.max, 1.0);
    }

    #[test]
    fn box_domain_keeps_negative_data() {
        let domain = box_domain(-0.3, -0.1);
        assert_eq!(domain.min, -1.0);
        assert!(domain.max > -0.1);
    }

    #[test]
    fn constant_series_still_has_room() {
        let domain = box_domain(3.0, 3.0);
        assert!(domain.max > domain.min);
        assert!(domain.min < 3.0 && domain.max > 3.0);
    }

    #[test]
    fn bar_domain_anchors_at_zero() {
        let domain = bar_domain(4.0, 6.0);
        assert_eq!(domain.min, 0.0);
        assert!((domain.max - 6.32).abs() < 1e-9);
        assert_eq!(domain.bounds, AxisBounds::Suggested { grace: BAR_GRACE });
    }

    #[test]
    fn bar_domain_extends_below_zero_for_negative_values() {
        let domain = bar_domain(-2.0, 3.0);
        assert_eq!(domain.min, -3.0);
        assert!(domain.max > 3.0);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(7.0, 5), 2.0);
        assert_eq!(nice_step(1.0, 5), 0.2);
        assert_eq!(nice_step(300.0, 5), 100.0);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn strict_ticks_stay_inside() {
        let ticks = box_domain(5.0, 7.0).ticks(5);
        assert_eq!(ticks.min, 4.0);
        assert_eq!(ticks.max, 8.0);
        assert_eq!(ticks.values, vec![4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn suggested_ticks_widen_to_enclosing_step() {
        let ticks = bar_domain(4.0, 6.0).ticks(5);
        assert_eq!(ticks.min, 0.0);
        assert!(ticks.max >= 6.32);
        assert_eq!(ticks.values.first(), Some(&0.0));
        assert_eq!(ticks.values.last(), Some(&ticks.max));
        let unique: std::collections::BTreeSet<String> =
            ticks.values.iter().map(|v| format!("{v}")).collect();
        assert_eq!(unique.len(), ticks.values.len());
    }
}
